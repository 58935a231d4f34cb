//! Serializable render snapshot for presentation layers.

use super::describe::MoveDescription;
use super::phases::GameStatus;
use super::rules::line_indices;
use super::{Board, GameState, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Everything a presenter needs to draw one frame.
///
/// Built from the viewed move, so a presenter never evaluates rules itself.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// The viewed board.
    board: Board,
    /// Status at the viewed board.
    status: GameStatus,
    /// Human-readable status line.
    status_line: String,
    /// Mark to place next, `None` once the viewed board is finished.
    next_player: Option<Player>,
    /// Indices of the completed line to highlight.
    winning_line: Option<[usize; 3]>,
    /// Index of the viewed move.
    view_index: usize,
    /// Index of the newest move.
    latest_index: usize,
    /// Whether `moves` runs newest first.
    reverse_order: bool,
    /// Move listing in display order.
    moves: Vec<MoveDescription>,
}

impl GameView {
    /// Renders the view as pretty-printed JSON.
    #[instrument(skip(self))]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// True if the cell at `index` belongs to the winning line.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.winning_line
            .is_some_and(|line| line.contains(&index))
    }
}

impl From<&GameState> for GameView {
    fn from(game: &GameState) -> Self {
        let status = game.status();
        Self {
            board: *game.board(),
            status,
            status_line: game.status_line(),
            next_player: (!status.is_terminal()).then(|| game.next_player()),
            winning_line: game.winning_line().map(line_indices),
            view_index: game.view_index(),
            latest_index: game.latest_index(),
            reverse_order: game.reverse_order(),
            moves: game.describe_moves().collect(),
        }
    }
}
