//! Strictly Timetravel - tic-tac-toe with full move history.
//!
//! The engine keeps every board as an immutable snapshot, so a game can be
//! viewed at any earlier move and resumed from there. Presentation is left
//! to the caller: the engine exposes derived data and accepts three kinds
//! of intent (play a cell, jump to a move, toggle list order).
//!
//! # Architecture
//!
//! - **GameState**: history of [`Move`] snapshots, the viewed index, and
//!   the list-order preference
//! - **Rules**: pure win and draw detection over one [`Board`]
//! - **Contracts & invariants**: play preconditions and history properties
//!   checked after every play in debug builds
//! - **GameView**: serializable render snapshot for presenters
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     game.play_at(cell);
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//!
//! // Step back and take a different line.
//! game.jump_to(4).unwrap();
//! game.play_at(8);
//! assert_eq!(game.history().len(), 6);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod describe;
mod error;
mod game;
mod phases;
mod position;
mod types;
mod view;

pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Board types
pub use position::Position;
pub use types::{Board, Location, Player, Square};

// Crate-level exports - History model
pub use action::{IgnoreReason, Move, PlayOutcome};
pub use describe::{MoveDescription, MoveDescriptions};
pub use error::HistoryError;
pub use game::GameState;
pub use phases::GameStatus;
pub use rules::Line;
pub use view::GameView;

/// Alias for clarity in presentation code.
pub type Mark = Player;
