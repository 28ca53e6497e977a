//! Engine error types.

use crate::config::ConfigError;
use crate::games::tictactoe::MoveError;
use derive_more::{Display, Error, From};

/// Failure reported by the presentation layer (closed input, broken output).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Presenter error: {} at {}:{}", message, file, line)]
pub struct PresenterError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PresenterError {
    /// Creates a new presenter error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for PresenterError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Contract violations raised by the engine.
///
/// None of these are retried internally. Losses and draws are results, not
/// errors, and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum EngineError {
    /// A placement at an occupied or out-of-range square.
    #[display("Invalid move: {}", _0)]
    InvalidMove(MoveError),

    /// Settings that cannot describe a playable match.
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(ConfigError),

    /// An operation called in a phase that does not allow it.
    #[display("Operation not allowed while {}", _0)]
    #[from(ignore)]
    OutOfPhase(#[error(not(source))] &'static str),

    /// The presentation layer could not deliver a value.
    #[display("{}", _0)]
    Presenter(PresenterError),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// A refused transition, returning the value it was called on unchanged.
///
/// Consuming transitions hand the state back through this type so the
/// caller can report the error and retry from the same point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected<S, E> {
    /// The value the transition was called on.
    pub state: S,
    /// Why it was refused.
    pub error: E,
}

impl<S, E> Rejected<S, E> {
    /// Pairs a state with the error that refused it.
    pub fn new(state: S, error: E) -> Self {
        Self { state, error }
    }

    /// Splits into the unchanged state and the error.
    pub fn into_parts(self) -> (S, E) {
        (self.state, self.error)
    }
}

impl<S, E: std::fmt::Display> std::fmt::Display for Rejected<S, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl<S: std::fmt::Debug, E: std::error::Error + 'static> std::error::Error for Rejected<S, E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<S> From<Rejected<S, EngineError>> for EngineError {
    fn from(rejected: Rejected<S, EngineError>) -> Self {
        rejected.error
    }
}
