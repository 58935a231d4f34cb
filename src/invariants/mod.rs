//! First-class invariants for the time-travel game state.
//!
//! Invariants are logical properties that must hold after every intent.
//! They are testable independently and are checked after each play in
//! debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_turn;
pub mod snapshot_chain;
pub mod terminal_tail;
pub mod view_in_bounds;

pub use alternating_turn::AlternatingTurnInvariant;
pub use snapshot_chain::SnapshotChainInvariant;
pub use terminal_tail::TerminalTailInvariant;
pub use view_in_bounds::ViewInBoundsInvariant;

/// All game-state invariants as a composable set.
pub type HistoryInvariants = (
    SnapshotChainInvariant,
    AlternatingTurnInvariant,
    ViewInBoundsInvariant,
    TerminalTailInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameState::new();
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut game = GameState::new();
        for cell in [0, 4, 8, 2] {
            game.play_at(cell);
        }
        game.jump_to(2).expect("valid index");
        game.play_at(6);
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = GameState::new();
        game.play_at(4);
        // Rewrite the last snapshot with two extra marks and a dangling view.
        let corrupt = game.history[1]
            .next(Position::TopLeft, Player::X)
            .next(Position::TopRight, Player::X);
        game.history[1] = corrupt;
        game.view_index = 5;

        let violations = HistoryInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(violations[0].description.contains("exactly one"));
        assert!(violations[1].description.contains("view"));
        assert_eq!(game.history[1].board().get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameState::new();
        type TwoInvariants = (SnapshotChainInvariant, ViewInBoundsInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
