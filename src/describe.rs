//! Navigation labels for recorded moves.

use super::action::Move;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One entry in a move listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveDescription {
    /// History index of the move (unaffected by display order).
    pub index: usize,
    /// Text for the navigation control.
    pub label: String,
}

impl MoveDescription {
    /// Builds the label for the move at `index` while `view_index` is viewed.
    pub fn new(index: usize, view_index: usize, mv: &Move) -> Self {
        let label = if index == 0 {
            "Go to game start".to_string()
        } else if index == view_index {
            format!("You are at move #{} -- {}", index, mv)
        } else {
            format!("Go to move #{} -- {}", index, mv)
        };
        Self { index, label }
    }
}

impl std::fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

/// Lazy listing of [`MoveDescription`]s in display order.
///
/// Borrows the history rather than copying it. A clone is an independent
/// cursor; calling [`GameState::describe_moves`](crate::GameState::describe_moves)
/// again starts from the top.
#[derive(Debug, Clone)]
pub struct MoveDescriptions<'a> {
    history: &'a [Move],
    view_index: usize,
    remaining: Range<usize>,
    reversed: bool,
}

impl<'a> MoveDescriptions<'a> {
    pub(crate) fn new(history: &'a [Move], view_index: usize, reversed: bool) -> Self {
        Self {
            history,
            view_index,
            remaining: 0..history.len(),
            reversed,
        }
    }

    /// True if the listing runs newest first.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    fn describe(&self, index: usize) -> MoveDescription {
        MoveDescription::new(index, self.view_index, &self.history[index])
    }
}

impl Iterator for MoveDescriptions<'_> {
    type Item = MoveDescription;

    fn next(&mut self) -> Option<Self::Item> {
        let index = if self.reversed {
            self.remaining.next_back()
        } else {
            self.remaining.next()
        };
        index.map(|index| self.describe(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining.size_hint()
    }
}

impl DoubleEndedIterator for MoveDescriptions<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = if self.reversed {
            self.remaining.next()
        } else {
            self.remaining.next_back()
        };
        index.map(|index| self.describe(index))
    }
}

impl ExactSizeIterator for MoveDescriptions<'_> {}

impl std::iter::FusedIterator for MoveDescriptions<'_> {}
