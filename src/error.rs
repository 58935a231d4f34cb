//! Engine error types.

use derive_more::{Display, Error};

/// Error returned by history navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// The requested move index is outside the recorded history.
    #[display("Move index {} is out of range (history has {} moves)", index, len)]
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
