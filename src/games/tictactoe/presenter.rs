//! Contract between the engine and whatever shows the match to a person.
//!
//! The engine only ever asks for validated values. Re-prompting on bad input
//! is the presenter's job; an `Err` means the presenter could not produce a
//! value at all (for example, input was closed).

use super::match_state::Score;
use super::player::{Players, Role, StartChoice};
use super::round::RoundOutcome;
use super::{Board, Marker, Position};
use crate::error::PresenterError;

/// Synchronous presentation layer driven by the match controller.
pub trait Presenter {
    /// Asks which marker the human plays.
    fn request_marker_choice(&mut self) -> Result<Marker, PresenterError>;

    /// Asks who moves first in the opening round.
    fn request_starting_player(&mut self) -> Result<StartChoice, PresenterError>;

    /// Asks for the human's square. Must return a member of `open`.
    fn request_human_move(&mut self, open: &[Position]) -> Result<Position, PresenterError>;

    /// Asks whether to play another round.
    fn request_continue_match(&mut self) -> Result<bool, PresenterError>;

    /// A round is about to start.
    fn notify_round_start(
        &mut self,
        _round: u32,
        _starter: Role,
        _players: &Players,
    ) -> Result<(), PresenterError> {
        Ok(())
    }

    /// The human is about to be asked for a move on `board`.
    fn notify_board(&mut self, _board: &Board, _players: &Players) -> Result<(), PresenterError> {
        Ok(())
    }

    /// A round ended.
    fn notify_round_result(
        &mut self,
        outcome: RoundOutcome,
        board: &Board,
    ) -> Result<(), PresenterError>;

    /// Running score between rounds.
    fn notify_scores(&mut self, score: Score) -> Result<(), PresenterError>;

    /// The match ended.
    fn notify_match_end(&mut self, score: Score) -> Result<(), PresenterError>;
}
