//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Number of squares on the board (fixed 3x3).
pub const BOARD_SIZE: usize = 9;

const _: () = assert!(Position::ALL.len() == BOARD_SIZE);

/// Glyph shown for a square nobody has marked.
pub const EMPTY_GLYPH: &str = " ";

/// The symbol a side marks squares with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Marker {
    /// Marker X.
    X,
    /// Marker O.
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a marker.
    Occupied(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }

    /// Text shown for this cell when the board is drawn.
    pub fn glyph(self) -> String {
        match self {
            Cell::Empty => EMPTY_GLYPH.to_string(),
            Cell::Occupied(marker) => marker.to_string(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are private; the only way to change one is [`Board::place`] or
/// [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, position: Position) -> Cell {
        self.cells[position.index()]
    }

    /// Checks if the cell at `position` is empty.
    pub fn is_open(&self, position: Position) -> bool {
        self.cell(position) == Cell::Empty
    }

    /// Marks the cell at `position` with `marker`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] if the cell already holds a marker.
    #[instrument(skip(self))]
    pub fn place(&mut self, position: Position, marker: Marker) -> Result<(), MoveError> {
        if !self.is_open(position) {
            return Err(MoveError::Occupied(position));
        }
        self.cells[position.index()] = Cell::Occupied(marker);
        trace!(%position, %marker, "Cell marked");
        Ok(())
    }

    /// Positions that are still empty, in ascending order.
    pub fn open_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_open(pos))
            .collect()
    }

    /// Positions that hold a marker, in ascending order.
    pub fn occupied_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| !self.is_open(pos))
            .collect()
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// The marker holding a complete line, if any.
    pub fn winning_marker(&self) -> Option<Marker> {
        rules::winning_marker(self)
    }

    /// True when some marker holds a complete line.
    pub fn has_winner(&self) -> bool {
        self.winning_marker().is_some()
    }

    /// Empties every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; BOARD_SIZE];
    }

    /// Formats the board as a text grid.
    pub fn render(&self) -> String {
        let row = |a: Position, b: Position, c: Position| {
            format!(
                "     |     |\n  {}  |  {}  |  {}\n     |     |\n",
                self.cell(a).glyph(),
                self.cell(b).glyph(),
                self.cell(c).glyph()
            )
        };
        let divider = "-----+-----+-----\n";
        let mut out = row(Position::TopLeft, Position::TopCenter, Position::TopRight);
        out.push_str(divider);
        out.push_str(&row(Position::MiddleLeft, Position::Center, Position::MiddleRight));
        out.push_str(divider);
        out.push_str(&row(Position::BottomLeft, Position::BottomCenter, Position::BottomRight));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = Board::new();
        board.place(Position::Center, Marker::X).unwrap();
        assert_eq!(
            board.place(Position::Center, Marker::O),
            Err(MoveError::Occupied(Position::Center))
        );
        assert_eq!(board.cell(Position::Center), Cell::Occupied(Marker::X));
    }

    #[test]
    fn test_open_and_occupied_partition_the_board() {
        let mut board = Board::new();
        for (pos, marker) in [
            (Position::TopLeft, Marker::X),
            (Position::Center, Marker::O),
            (Position::BottomRight, Marker::X),
        ] {
            board.place(pos, marker).unwrap();
        }
        let open = board.open_positions();
        let occupied = board.occupied_positions();
        assert_eq!(open.len() + occupied.len(), BOARD_SIZE);
        assert!(open.iter().all(|p| !occupied.contains(p)));
        assert!(open.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_reset_reopens_everything() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.place(pos, Marker::O).unwrap();
        }
        assert!(board.is_full());
        board.reset();
        assert_eq!(board.open_positions(), Position::ALL.to_vec());
        assert!(!board.has_winner());
    }

    #[test]
    fn test_render_shows_markers_and_blanks() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Marker::X).unwrap();
        let text = board.render();
        assert!(text.starts_with("     |     |\n  X  |     |   \n"));
        assert_eq!(text.matches("-----+-----+-----").count(), 2);
    }
}
