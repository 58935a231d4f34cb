//! Terminal tail invariant: nothing is recorded after a finished board.

use super::Invariant;
use crate::{GameState, GameStatus};

/// Invariant: only the newest move may hold a won or drawn board.
pub struct TerminalTailInvariant;

impl Invariant<GameState> for TerminalTailInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        let last = history.len().saturating_sub(1);
        history
            .iter()
            .take(last)
            .all(|mv| !GameStatus::of(mv.board()).is_terminal())
    }

    fn description() -> &'static str {
        "No move follows a won or drawn board"
    }
}
