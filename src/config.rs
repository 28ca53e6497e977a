//! Match configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Round wins needed to take the match unless configured otherwise.
pub const DEFAULT_WIN_THRESHOLD: u32 = 5;

/// Who starts the round after a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawStarter {
    /// The side that did not start the drawn round starts the next one.
    #[default]
    Alternate,
    /// The side that started the drawn round starts again.
    Keep,
}

/// Settings for one match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Round wins that end the match.
    #[serde(default = "default_win_threshold")]
    win_threshold: u32,

    /// Starter policy after a drawn round.
    #[serde(default)]
    draw_starter: DrawStarter,

    /// Seed for the computer's randomness. `None` seeds from the OS.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_win_threshold() -> u32 {
    DEFAULT_WIN_THRESHOLD
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            win_threshold: DEFAULT_WIN_THRESHOLD,
            draw_starter: DrawStarter::default(),
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Creates a configuration with explicit values.
    pub fn new(win_threshold: u32, draw_starter: DrawStarter, seed: Option<u64>) -> Self {
        Self {
            win_threshold,
            draw_starter,
            seed,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(win_threshold = config.win_threshold, "Config loaded successfully");
        Ok(config)
    }

    /// Sets the win threshold.
    pub fn with_win_threshold(mut self, win_threshold: u32) -> Self {
        self.win_threshold = win_threshold;
        self
    }

    /// Sets the draw starter policy.
    pub fn with_draw_starter(mut self, draw_starter: DrawStarter) -> Self {
        self.draw_starter = draw_starter;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the settings describe a playable match.
    ///
    /// # Errors
    ///
    /// Fails when the threshold is zero.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_threshold == 0 {
            return Err(ConfigError::new(
                "win_threshold must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(*config.win_threshold(), 5);
        assert_eq!(*config.draw_starter(), DrawStarter::Alternate);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let err = MatchConfig::default().with_win_threshold(0).validate().unwrap_err();
        assert!(err.message.contains("win_threshold"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: MatchConfig = toml::from_str("draw_starter = \"keep\"").unwrap();
        assert_eq!(*config.win_threshold(), DEFAULT_WIN_THRESHOLD);
        assert_eq!(*config.draw_starter(), DrawStarter::Keep);
        assert_eq!(*config.seed(), None);
    }
}
