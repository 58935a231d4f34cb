//! View pointer invariant.

use super::Invariant;
use crate::GameState;

/// Invariant: the view index always names a recorded move.
pub struct ViewInBoundsInvariant;

impl Invariant<GameState> for ViewInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.view_index < game.history.len()
    }

    fn description() -> &'static str {
        "The view index points into history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dangling_view_violates() {
        let mut game = GameState::new();
        assert!(ViewInBoundsInvariant::holds(&game));
        game.view_index = 1;
        assert!(!ViewInBoundsInvariant::holds(&game));
    }
}
