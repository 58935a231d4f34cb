//! Contract-based validation for play intents.
//!
//! Contracts define correctness through preconditions and postconditions.
//! A failed precondition means the play is ignored; a failed postcondition
//! means the engine itself is broken.

use super::action::IgnoreReason;
use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::{GameState, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: `{P(state, action)}` must hold before applying the action
/// - Postcondition: `{Q(before, after)}` must hold after applying it
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IgnoreReason>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Play Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The viewed board must not be won or drawn.
pub struct BoardIsLive;

impl BoardIsLive {
    /// Checks the viewed board's status.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), IgnoreReason> {
        let status = game.status();
        if status.is_terminal() {
            Err(IgnoreReason::GameOver(status))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the play's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the square on the viewed board.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &GameState) -> Result<(), IgnoreReason> {
        if game.board().is_empty(position) {
            Ok(())
        } else {
            Err(IgnoreReason::SquareOccupied(position))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for play intents.
///
/// Preconditions:
/// - Viewed board is still in progress
/// - Square is empty
///
/// Postconditions:
/// - History kept the viewed prefix, dropped the rest, and grew by one
/// - The view is on the new move
/// - All [`HistoryInvariants`] hold
pub struct PlayContract;

impl Contract<GameState, Position> for PlayContract {
    fn pre(game: &GameState, position: &Position) -> Result<(), IgnoreReason> {
        BoardIsLive::check(game)?;
        SquareIsEmpty::check(*position, game)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = HistoryInvariants::check_all(after).err().unwrap_or_default();

        let kept = before.view_index + 1;
        let branched = after.history.len() == kept + 1
            && after.history[..kept] == before.history[..kept];
        if !branched {
            violations.push(InvariantViolation::new(
                "Play keeps the viewed prefix and appends exactly one move",
            ));
        }
        if after.view_index != after.latest_index() {
            violations.push(InvariantViolation::new("Play moves the view to the new move"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Play postcondition violated");
            Err(violations)
        }
    }
}
