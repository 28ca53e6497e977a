//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use super::win::winning_marker;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    super::super::Position::ALL
        .iter()
        .all(|&pos| board.cell(pos) != Cell::Empty)
}

/// A full board with no complete line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winning_marker(board).is_none()
}
