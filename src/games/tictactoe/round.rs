//! One round: alternating placements from an empty board to a result.

use super::action::{Move, MoveError};
use super::player::{Players, Role};
use super::{Board, Position};
use crate::error::Rejected;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The human completed a line.
    HumanWin,
    /// The computer completed a line.
    ComputerWin,
    /// The board filled with no line.
    Draw,
}

impl RoundOutcome {
    /// The winning side, if any.
    pub fn winner(self) -> Option<Role> {
        match self {
            RoundOutcome::HumanWin => Some(Role::Human),
            RoundOutcome::ComputerWin => Some(Role::Computer),
            RoundOutcome::Draw => None,
        }
    }

    fn won_by(role: Role) -> Self {
        match role {
            Role::Human => RoundOutcome::HumanWin,
            Role::Computer => RoundOutcome::ComputerWin,
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::HumanWin => write!(f, "Human wins"),
            RoundOutcome::ComputerWin => write!(f, "Computer wins"),
            RoundOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// A round in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    board: Board,
    to_move: Role,
    history: Vec<Move>,
}

/// Result of placing a mark - explicit state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundTransition {
    /// The other side moves next.
    InProgress(Round),
    /// The placement ended the round.
    Over {
        /// Final board.
        board: Board,
        /// How it ended.
        outcome: RoundOutcome,
        /// Every move of the round, in order.
        history: Vec<Move>,
    },
}

impl Round {
    /// Starts a round on `board` (emptied first) with `starter` to move.
    #[instrument(skip(board))]
    pub fn start(mut board: Board, starter: Role) -> Self {
        board.reset();
        Self {
            board,
            to_move: starter,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Role {
        self.to_move
    }

    /// Returns the moves made so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current side's marker at `position`, consuming the round.
    ///
    /// The win check runs immediately after the placement, before the board
    /// is tested for fullness, so a move that completes a line on the last
    /// open square is a win and the opponent never gets another turn.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] if the square is taken, together with
    /// the unchanged round.
    #[instrument(skip(self, players), fields(to_move = %self.to_move))]
    pub fn place(
        mut self,
        position: Position,
        players: &Players,
    ) -> Result<RoundTransition, Rejected<Round, MoveError>> {
        let marker = players.marker_of(self.to_move);
        if let Err(error) = self.board.place(position, marker) {
            return Err(Rejected::new(self, error));
        }
        self.history.push(Move::new(marker, position));

        if let Some(winner) = self.board.winning_marker() {
            let outcome = RoundOutcome::won_by(players.role_of(winner));
            debug!(%outcome, moves = self.history.len(), "Round won");
            return Ok(RoundTransition::Over {
                board: self.board,
                outcome,
                history: self.history,
            });
        }

        if self.board.is_full() {
            debug!(moves = self.history.len(), "Round drawn");
            return Ok(RoundTransition::Over {
                board: self.board,
                outcome: RoundOutcome::Draw,
                history: self.history,
            });
        }

        self.to_move = self.to_move.opponent();
        Ok(RoundTransition::InProgress(self))
    }
}
