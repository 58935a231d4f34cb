//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// Three positions forming a row, column, or diagonal.
pub type Line = [Position; 3];

/// The 8 winning lines in evaluation order.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line on the board.
///
/// Lines are checked rows first, then columns, then diagonals, so a board
/// with more than one completed line reports the earliest one.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.into_iter().find(|[a, b, c]| {
        let sq = board.get(*a);
        sq != Square::Empty && sq == board.get(*b) && sq == board.get(*c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).player())
}

/// Converts a line to raw board indices.
pub fn line_indices(line: Line) -> [usize; 3] {
    line.map(Position::to_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_of(marks: &str) -> Board {
        let mut board = Board::new();
        for (pos, ch) in Position::ALL.iter().zip(marks.chars()) {
            match ch {
                'X' => board.set(*pos, Square::Occupied(Player::X)),
                'O' => board.set(*pos, Square::Occupied(Player::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board), None);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_of("XXXOO____");
        assert_eq!(winning_line(&board).map(line_indices), Some([0, 1, 2]));
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board = board_of("XO_XO__O_");
        assert_eq!(winning_line(&board).map(line_indices), Some([1, 4, 7]));
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_of("XXO_O_O_X");
        assert_eq!(winning_line(&board).map(line_indices), Some([2, 4, 6]));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_of("XX_OO____");
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_of("XOX______");
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_multiple_lines_reports_first_in_order() {
        // Unreachable in legal play, but must still resolve deterministically.
        let board = board_of("XXXXXXXXX");
        assert_eq!(winning_line(&board).map(line_indices), Some([0, 1, 2]));

        let board = board_of("X__XXXX__");
        assert_eq!(winning_line(&board).map(line_indices), Some([3, 4, 5]));
    }
}
