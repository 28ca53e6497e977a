//! tictactoe_match - console match against the computer.

#![warn(missing_docs)]

mod cli;
mod console;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use console::Console;
use tictactoe_match::{DrawStarter, MatchConfig, MatchController, MatchEnd};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    run_match(config)
}

/// Builds the match config from the file (if present) and CLI overrides.
#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<MatchConfig> {
    let mut config = if cli.config.exists() {
        MatchConfig::from_file(&cli.config)?
    } else {
        info!("Config file not found, using defaults");
        MatchConfig::default()
    };

    if let Some(wins) = cli.wins {
        config = config.with_win_threshold(wins);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.keep_on_draw {
        config = config.with_draw_starter(DrawStarter::Keep);
    }

    config.validate()?;
    Ok(config)
}

/// Plays one match on stdin/stdout.
#[instrument(skip(config))]
fn run_match(config: MatchConfig) -> Result<()> {
    let mut controller = MatchController::new(config.clone())?;
    let opponent = controller.opponent_name();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    console.setup(opponent, &config)?;
    let summary = controller.run(&mut console)?;
    match summary.end() {
        MatchEnd::ThresholdReached(role) => info!(%role, "Match decided"),
        MatchEnd::Stopped => info!("Match stopped early"),
    }
    console.goodbye()?;
    Ok(())
}
