//! First-class move records for tic-tac-toe.
//!
//! Moves are domain events, not side effects. A round keeps the moves it
//! accepted so front ends and tests can replay how it unfolded.

use super::{Marker, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a marker placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The marker placed.
    pub marker: Marker,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(marker: Marker, position: Position) -> Self {
        Self { marker, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.position.label())
    }
}

/// A placement that the board cannot accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square number is not between 1 and 9.
    #[display("Position {} is out of range (expected 1-9)", _0)]
    OutOfRange(u8),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// Every square is taken, so no move can be chosen.
    #[display("No open squares remain")]
    NoOpenPositions,
}

impl std::error::Error for MoveError {}
