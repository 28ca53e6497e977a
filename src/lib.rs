//! Tic-tac-toe match engine.
//!
//! A human plays a heuristic computer opponent over a series of rounds until
//! one side reaches the configured number of round wins.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid, win and draw detection over the 8 fixed lines
//! - **Selector**: the computer's ordered strategy list (center, offense,
//!   defense, random)
//! - **Match state**: a value threaded through transitions; scoring and the
//!   next round's starter are settled when a round ends
//! - **Controller**: drives the state machine against a [`Presenter`], the
//!   only boundary with the outside world
//!
//! # Example
//!
//! ```
//! use tictactoe_match::{MatchConfig, MatchState, Marker, Players, Position, Role};
//!
//! let players = Players::from_human_marker(Marker::X);
//! let state = MatchState::new(MatchConfig::default(), players, Role::Human)?;
//! let state = state.place(Position::Center)?;
//! assert_eq!(state.to_move(), Some(Role::Computer));
//! # Ok::<(), tictactoe_match::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod games;
mod rng;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_WIN_THRESHOLD, DrawStarter, MatchConfig};

// Crate-level exports - Errors
pub use error::{EngineError, EngineResult, PresenterError, Rejected};

// Crate-level exports - Randomness
pub use rng::GameRng;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, COMPUTER_NAMES, Cell, CenterFirst, Defense, EMPTY_GLYPH, HeuristicSelector,
    MatchController, MatchEnd, MatchPhase, MatchState, MatchSummary, Marker, Move, MoveError,
    Offense, Player, Players, Position, Presenter, RandomFallback, Role, Round, RoundOutcome,
    RoundTransition, Score, StartChoice, Strategy, WINNING_LINES, completing_position,
    computer_name, rules,
};
