//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The board delegates its
//! win and draw queries here so the line table lives in one place.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, completing_position, winning_marker};
