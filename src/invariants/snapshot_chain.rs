//! Snapshot chain invariant: each board is its predecessor plus one mark.

use super::Invariant;
use crate::{GameState, Square};

/// Invariant: history is a chain of single placements from the empty board.
///
/// - history is non-empty and starts at the empty board with no placement
/// - move `i` has exactly `i` occupied squares
/// - consecutive boards differ in exactly one square, which holds the
///   move's mark at the move's position
pub struct SnapshotChainInvariant;

impl Invariant<GameState> for SnapshotChainInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        let Some(root) = history.first() else {
            return false;
        };
        if !root.is_initial() || root.position().is_some() || root.board().filled() != 0 {
            return false;
        }

        history.windows(2).enumerate().all(|(i, pair)| {
            let (prev, next) = (&pair[0], &pair[1]);
            let (Some(mark), Some(position)) = (next.mark(), next.position()) else {
                return false;
            };
            next.board().filled() == i + 1
                && prev.board().diff(next.board()) == vec![position]
                && next.board().get(position) == Square::Occupied(mark)
        })
    }

    fn description() -> &'static str {
        "Each move adds exactly one mark to its predecessor's board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(SnapshotChainInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let mut game = GameState::new();
        for cell in [4, 0, 8, 2, 6] {
            game.play_at(cell);
        }
        assert!(SnapshotChainInvariant::holds(&game));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut game = GameState::new();
        game.history.clear();
        assert!(!SnapshotChainInvariant::holds(&game));
    }

    #[test]
    fn test_skipped_snapshot_violates() {
        let mut game = GameState::new();
        let two_marks = Move::initial()
            .next(Position::Center, Player::X)
            .next(Position::TopLeft, Player::O);
        game.history.push(two_marks);
        assert!(!SnapshotChainInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = GameState::new();
        game.play_at(4);
        let overwrite = game.history[1].next(Position::Center, Player::O);
        game.history.push(overwrite);
        assert!(!SnapshotChainInvariant::holds(&game));
    }
}
