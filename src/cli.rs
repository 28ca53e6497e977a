//! Command-line interface for tictactoe_match.

use clap::Parser;

/// Play a best-of-N tic-tac-toe match against the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe_match")]
#[command(about = "Tic-tac-toe match against a heuristic computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML match config (ignored if it does not exist)
    #[arg(short, long, default_value = "match.toml")]
    pub config: std::path::PathBuf,

    /// Round wins needed to take the match
    #[arg(short, long)]
    pub wins: Option<u32>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// After a drawn round, let the side that started it start again
    #[arg(long)]
    pub keep_on_draw: bool,
}
