//! Draw detection logic for tic-tac-toe.

use super::win::winning_line;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winning_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        use Player::{O, X};
        let marks = [X, O, X, X, O, O, O, X, X];
        let board = Board::from_squares(marks.map(Square::Occupied));
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X X X / O O X / O X O: full, but X holds the top row.
        use Player::{O, X};
        let marks = [X, X, X, O, O, X, O, X, O];
        let board = Board::from_squares(marks.map(Square::Occupied));
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
