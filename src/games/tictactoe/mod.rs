//! Tic-tac-toe: board, rules, the computer opponent and the match engine.

mod action;
mod controller;
mod match_state;
mod player;
mod position;
mod presenter;
mod round;
pub mod rules;
mod strategy;
mod types;

pub use action::{Move, MoveError};
pub use controller::{MatchController, MatchEnd, MatchSummary};
pub use match_state::{MatchPhase, MatchState, Score};
pub use player::{COMPUTER_NAMES, Player, Players, Role, StartChoice, computer_name};
pub use position::Position;
pub use presenter::Presenter;
pub use round::{Round, RoundOutcome, RoundTransition};
pub use rules::{WINNING_LINES, completing_position};
pub use strategy::{CenterFirst, Defense, HeuristicSelector, Offense, RandomFallback, Strategy};
pub use types::{BOARD_SIZE, Board, Cell, EMPTY_GLYPH, Marker};
