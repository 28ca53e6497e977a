//! Win detection and line scanning for tic-tac-toe.

use super::super::{Board, Cell, Marker, Position};
use tracing::instrument;

/// The 8 winning lines: rows, then columns, then diagonals.
///
/// Scans walk this table in order, so "first line found" always means the
/// earliest entry here.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the marker that fills a complete line, if any.
///
/// Stops at the first complete line. In a legal game at most one line can be
/// complete when this runs after every placement.
#[instrument(skip(board))]
pub fn winning_marker(board: &Board) -> Option<Marker> {
    for [a, b, c] in WINNING_LINES {
        let cell = board.cell(a);
        if cell != Cell::Empty && cell == board.cell(b) && cell == board.cell(c) {
            return cell.marker();
        }
    }

    None
}

/// Finds the empty square that would complete a line for `marker`.
///
/// A line qualifies when exactly two of its cells hold `marker` and the third
/// is empty. Lines whose third cell belongs to the other marker are skipped.
#[instrument(skip(board))]
pub fn completing_position(board: &Board, marker: Marker) -> Option<Position> {
    WINNING_LINES.iter().find_map(|line| {
        let mine = line
            .iter()
            .filter(|&&pos| board.cell(pos) == Cell::Occupied(marker))
            .count();
        if mine != 2 {
            return None;
        }
        line.iter().copied().find(|&pos| board.is_open(pos))
    })
}
