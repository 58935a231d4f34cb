//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: move `i` (for `i >= 1`) was placed by X when `i` is odd and
/// by O when `i` is even.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(i, mv)| mv.mark() == Some(Player::for_turn(i - 1)))
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = GameState::new();
        for cell in [0, 4, 2, 6, 8] {
            game.play_at(cell);
        }
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.next_player(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = GameState::new();
        game.play_at(0);
        let repeat = game.history[1].next(Position::Center, Player::X);
        game.history.push(repeat);
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
