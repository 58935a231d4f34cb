//! Time-travel game state for tic-tac-toe.
//!
//! [`GameState`] owns the full list of board snapshots and a pointer to the
//! one being viewed. Playing while viewing an earlier move discards the
//! later moves before appending, so history is always a single line.

use super::action::{IgnoreReason, Move, PlayOutcome};
use super::contracts::{Contract, PlayContract};
use super::describe::MoveDescriptions;
use super::error::HistoryError;
use super::phases::GameStatus;
use super::rules::{self, Line};
use super::view::GameView;
use super::{Board, Player, Position};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Complete game state: move history, view pointer, and list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Snapshots in play order; index 0 is the empty board.
    pub(crate) history: Vec<Move>,
    /// Index of the snapshot currently displayed and acted upon.
    pub(crate) view_index: usize,
    /// Display preference for move listings.
    pub(crate) reverse_order: bool,
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Move::initial()],
            view_index: 0,
            reverse_order: false,
        }
    }

    /// Discards all history and starts over, keeping the list order.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.history.clear();
        self.history.push(Move::initial());
        self.view_index = 0;
    }

    // ─────────────────────────────────────────────────────────────
    //  Intents
    // ─────────────────────────────────────────────────────────────

    /// Plays the next mark at a raw cell index (0-8).
    ///
    /// Out-of-range indices, occupied squares, and finished boards are
    /// ignored; see [`GameState::play`].
    #[instrument(skip(self), fields(view_index = self.view_index))]
    pub fn play_at(&mut self, cell_index: usize) -> PlayOutcome {
        match Position::from_index(cell_index) {
            Some(position) => self.play(position),
            None => {
                let reason = IgnoreReason::OutOfBounds(cell_index);
                debug!(%reason, "Ignoring play");
                PlayOutcome::Ignored(reason)
            }
        }
    }

    /// Plays the next mark at `position` on the viewed board.
    ///
    /// On success, every move after the viewed one is discarded, the new
    /// snapshot is appended, and the view advances to it. If the square is
    /// taken or the viewed board is finished, nothing changes.
    #[instrument(skip(self), fields(view_index = self.view_index, mark = %self.next_player()))]
    pub fn play(&mut self, position: Position) -> PlayOutcome {
        if let Err(reason) = PlayContract::pre(self, &position) {
            debug!(%reason, "Ignoring play");
            return PlayOutcome::Ignored(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let next = self.current_move().next(position, self.next_player());
        let discarded = self.history.len() - (self.view_index + 1);
        self.history.truncate(self.view_index + 1);
        self.history.push(next);
        self.view_index = self.history.len() - 1;

        debug!(
            index = self.view_index,
            discarded,
            status = %self.status(),
            "Move placed"
        );

        #[cfg(debug_assertions)]
        {
            let post = PlayContract::post(&before, self);
            if let Err(violations) = &post {
                warn!(?violations, "Play postcondition failed");
            }
            debug_assert!(post.is_ok(), "play postcondition failed: {:?}", post);
        }

        PlayOutcome::Placed {
            index: self.view_index,
        }
    }

    /// Moves the view to a recorded move without changing history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidIndex`] if `move_index` is not a
    /// history index. The view is left where it was.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), HistoryError> {
        if move_index >= self.history.len() {
            let err = HistoryError::InvalidIndex {
                index: move_index,
                len: self.history.len(),
            };
            warn!(%err, "Rejected jump");
            return Err(err);
        }
        self.view_index = move_index;
        debug!(status = %self.status(), "Jumped");
        Ok(())
    }

    /// Flips the display order of move listings.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.reverse_order = !self.reverse_order;
        debug!(reverse_order = self.reverse_order, "Toggled move order");
    }

    /// Lists every recorded move with its navigation label.
    ///
    /// Each call returns a fresh iterator in the current display order.
    pub fn describe_moves(&self) -> MoveDescriptions<'_> {
        MoveDescriptions::new(&self.history, self.view_index, self.reverse_order)
    }

    // ─────────────────────────────────────────────────────────────
    //  Accessors
    // ─────────────────────────────────────────────────────────────

    /// All recorded snapshots in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Index of the viewed snapshot.
    pub fn view_index(&self) -> usize {
        self.view_index
    }

    /// Index of the newest snapshot.
    pub fn latest_index(&self) -> usize {
        self.history.len() - 1
    }

    /// True while an earlier move is being viewed.
    pub fn is_viewing_past(&self) -> bool {
        self.view_index < self.latest_index()
    }

    /// Whether move listings run newest first.
    pub fn reverse_order(&self) -> bool {
        self.reverse_order
    }

    /// The viewed snapshot.
    pub fn current_move(&self) -> &Move {
        &self.history[self.view_index]
    }

    /// The viewed board.
    pub fn board(&self) -> &Board {
        self.current_move().board()
    }

    // ─────────────────────────────────────────────────────────────
    //  Derived values (always computed from the viewed board)
    // ─────────────────────────────────────────────────────────────

    /// X moves on even view indices.
    pub fn x_is_next(&self) -> bool {
        self.view_index % 2 == 0
    }

    /// The mark the next play would place.
    pub fn next_player(&self) -> Player {
        Player::for_turn(self.view_index)
    }

    /// The completed line on the viewed board, if any.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(self.board())
    }

    /// The winner on the viewed board, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.board())
    }

    /// True if the viewed board is full with no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.board())
    }

    /// Status at the viewed board.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.board())
    }

    /// Squares that would accept a play, empty once the viewed board is finished.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(self.board())
        }
    }

    /// One-line status for display.
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::Won(player) => format!("Winner: {}", player),
            GameStatus::Draw => "It's a draw!".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.next_player()),
        }
    }

    /// Snapshot of everything a presenter needs to render.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        GameView::from(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play_all(game: &mut GameState, cells: &[usize]) {
        for &cell in cells {
            assert!(game.play_at(cell).is_placed(), "cell {} rejected", cell);
        }
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.view_index(), 0);
        assert!(!game.reverse_order());
        assert!(game.x_is_next());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.valid_moves().len(), 9);
    }

    #[test]
    fn test_first_play() {
        let mut game = GameState::new();
        assert_eq!(game.play_at(0), PlayOutcome::Placed { index: 1 });

        let mv = game.current_move();
        assert_eq!(mv.mark(), Some(Player::X));
        assert_eq!(mv.location().map(|l| l.to_string()), Some("(1,1)".to_string()));
        assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(game.board().filled(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.next_player(), Player::O);
    }

    #[test]
    fn test_occupied_square_ignored() {
        let mut game = GameState::new();
        play_all(&mut game, &[4]);
        let before = game.clone();

        let outcome = game.play_at(4);
        assert_eq!(
            outcome,
            PlayOutcome::Ignored(IgnoreReason::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut game = GameState::new();
        let outcome = game.play_at(9);
        assert_eq!(outcome, PlayOutcome::Ignored(IgnoreReason::OutOfBounds(9)));
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_play_after_win_ignored() {
        let mut game = GameState::new();
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert!(game.valid_moves().is_empty());

        let before = game.clone();
        let outcome = game.play_at(8);
        assert_eq!(
            outcome,
            PlayOutcome::Ignored(IgnoreReason::GameOver(GameStatus::Won(Player::X)))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_preserves_history() {
        let mut game = GameState::new();
        play_all(&mut game, &[0, 4, 8]);
        let history = game.history().to_vec();

        game.jump_to(1).expect("valid index");
        assert_eq!(game.view_index(), 1);
        assert_eq!(game.history(), history.as_slice());
        assert!(game.is_viewing_past());
        assert!(!game.x_is_next());
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut game = GameState::new();
        play_all(&mut game, &[0]);
        let err = game.jump_to(2).unwrap_err();
        assert_eq!(err, HistoryError::InvalidIndex { index: 2, len: 2 });
        assert_eq!(game.view_index(), 1);
    }

    #[test]
    fn test_play_from_past_truncates() {
        let mut game = GameState::new();
        play_all(&mut game, &[0, 4, 8]);
        assert_eq!(game.history().len(), 4);

        game.jump_to(1).expect("valid index");
        assert_eq!(game.play_at(5), PlayOutcome::Placed { index: 2 });
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.view_index(), 2);
        assert_eq!(game.current_move().mark(), Some(Player::O));
        assert_eq!(game.current_move().position(), Some(Position::MiddleRight));
    }

    #[test]
    fn test_viewing_past_of_finished_game_is_playable() {
        let mut game = GameState::new();
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        game.jump_to(4).expect("valid index");
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.play_at(8).is_placed());
        assert_eq!(game.history().len(), 6);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.next_player(), Player::O);
    }

    #[test]
    fn test_toggle_order() {
        let mut game = GameState::new();
        game.toggle_order();
        assert!(game.reverse_order());
        game.toggle_order();
        assert!(!game.reverse_order());
    }

    #[test]
    fn test_status_line() {
        let mut game = GameState::new();
        assert_eq!(game.status_line(), "Next player: X");
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(game.status_line(), "Winner: X");
    }

    #[test]
    fn test_reset() {
        let mut game = GameState::new();
        game.toggle_order();
        play_all(&mut game, &[0, 1]);
        game.reset();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.view_index(), 0);
        assert!(game.reverse_order());
    }
}
