//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board. Rules are kept apart from the
//! history model so that every snapshot can be evaluated on its own.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, line_indices, winning_line};
