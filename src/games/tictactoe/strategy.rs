//! The computer opponent's move selection.
//!
//! Selection is a fixed, ordered list of strategies. Each one either proposes
//! a square or passes; the first proposal wins. The default order is
//! center first, then completing a line, then blocking one, then a random
//! open square. It looks one move ahead at most: no forks, no search, and the
//! center rule fires even when a win or a forced block is on the board.

use super::action::MoveError;
use super::rules::completing_position;
use super::{Board, Marker, Position};
use crate::GameRng;
use tracing::{debug, instrument};

/// One rule in the selector's priority list.
pub trait Strategy: std::fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Proposes a square for `marker`, or `None` to pass to the next rule.
    fn select(&self, board: &Board, marker: Marker, rng: &mut GameRng) -> Option<Position>;
}

/// Take the center whenever it is open.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterFirst;

impl Strategy for CenterFirst {
    fn name(&self) -> &'static str {
        "center-first"
    }

    fn select(&self, board: &Board, _marker: Marker, _rng: &mut GameRng) -> Option<Position> {
        board.is_open(Position::Center).then_some(Position::Center)
    }
}

/// Complete a line of our own.
#[derive(Debug, Clone, Copy, Default)]
pub struct Offense;

impl Strategy for Offense {
    fn name(&self) -> &'static str {
        "offense"
    }

    fn select(&self, board: &Board, marker: Marker, _rng: &mut GameRng) -> Option<Position> {
        completing_position(board, marker)
    }
}

/// Block a line the opponent is about to complete.
#[derive(Debug, Clone, Copy, Default)]
pub struct Defense;

impl Strategy for Defense {
    fn name(&self) -> &'static str {
        "defense"
    }

    fn select(&self, board: &Board, marker: Marker, _rng: &mut GameRng) -> Option<Position> {
        completing_position(board, marker.opponent())
    }
}

/// Any open square, uniformly at random.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomFallback;

impl Strategy for RandomFallback {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select(&self, board: &Board, _marker: Marker, rng: &mut GameRng) -> Option<Position> {
        rng.choose(&board.open_positions()).copied()
    }
}

/// Ordered list of strategies, evaluated until one proposes a move.
#[derive(Debug)]
pub struct HeuristicSelector {
    strategies: Vec<Box<dyn Strategy>>,
}

impl HeuristicSelector {
    /// Builds a selector from an explicit priority list.
    pub fn new(strategies: Vec<Box<dyn Strategy>>) -> Self {
        Self { strategies }
    }

    /// Names of the strategies, in evaluation order.
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Picks the computer's next square.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoOpenPositions`] when the board is full, and also
    /// when a custom list has no strategy that proposes a move.
    #[instrument(skip(self, board, rng))]
    pub fn choose(
        &self,
        board: &Board,
        marker: Marker,
        rng: &mut GameRng,
    ) -> Result<Position, MoveError> {
        if board.is_full() {
            return Err(MoveError::NoOpenPositions);
        }

        for strategy in &self.strategies {
            if let Some(position) = strategy.select(board, marker, rng) {
                debug!(strategy = strategy.name(), %position, "Computer picked a square");
                return Ok(position);
            }
        }

        Err(MoveError::NoOpenPositions)
    }
}

impl Default for HeuristicSelector {
    fn default() -> Self {
        Self::new(vec![
            Box::new(CenterFirst),
            Box::new(Offense),
            Box::new(Defense),
            Box::new(RandomFallback),
        ])
    }
}
