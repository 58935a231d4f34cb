//! Move snapshots and the outcome of play attempts.
//!
//! A [`Move`] is a self-contained record of one placement: the mark, where
//! it went, and the full board after it landed. Snapshots are never edited
//! once built, so any earlier point in a game can be revisited by index.

use super::phases::GameStatus;
use super::{Board, Location, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An immutable board snapshot plus the placement that produced it.
///
/// The initial move of every game has no mark and no position and holds
/// the empty board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    mark: Option<Player>,
    position: Option<Position>,
    board: Board,
}

impl Move {
    /// The root snapshot: an empty board with no placement.
    pub fn initial() -> Self {
        Self {
            mark: None,
            position: None,
            board: Board::new(),
        }
    }

    /// Builds the successor snapshot with `mark` placed at `position`.
    ///
    /// The board is copied; `self` is left untouched. Legality is checked by
    /// the caller.
    #[instrument(skip(self))]
    pub fn next(&self, position: Position, mark: Player) -> Self {
        Self {
            mark: Some(mark),
            position: Some(position),
            board: self.board.with(position, Square::Occupied(mark)),
        }
    }

    /// The mark placed by this move, `None` for the initial move.
    pub fn mark(&self) -> Option<Player> {
        self.mark
    }

    /// Where the mark was placed, `None` for the initial move.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// The 1-indexed `(row, col)` of the placement.
    pub fn location(&self) -> Option<Location> {
        self.position.map(Position::location)
    }

    /// The board after this move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// True for the synthetic game-start snapshot.
    pub fn is_initial(&self) -> bool {
        self.mark.is_none()
    }
}

impl Default for Move {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.mark, self.location()) {
            (Some(mark), Some(location)) => write!(f, "{}@{}", mark, location),
            _ => f.write_str("game start"),
        }
    }
}

/// Why a play request left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The cell index is not on the board.
    #[display("Cell index {} is off the board", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The viewed board is already won or drawn.
    #[display("Game is already over ({:?})", _0)]
    GameOver(GameStatus),
}

/// Result of a play request.
///
/// Illegal plays are not errors: a stale click on an occupied square or a
/// finished board simply does nothing. The reason is reported so callers
/// can surface it if they want to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// A new move was recorded at this history index.
    Placed {
        /// History index of the new move.
        index: usize,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl PlayOutcome {
    /// True if a move was recorded.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayOutcome::Placed { .. })
    }

    /// The ignore reason, if the play was rejected.
    pub fn ignored(&self) -> Option<IgnoreReason> {
        match self {
            PlayOutcome::Placed { .. } => None,
            PlayOutcome::Ignored(reason) => Some(*reason),
        }
    }
}
