//! Application state and key handling.

use crate::config::TuiConfig;
use crate::input::{digit_cell, move_cursor, move_selection};
use crossterm::event::KeyCode;
use strictly_timetravel::{GameState, PlayOutcome, Position};
use tracing::{debug, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move the move-list selection.
    Moves,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    config: TuiConfig,
    cursor: Position,
    focus: Focus,
    /// Selected row in the move list, in display order.
    selected: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(config))]
    pub fn new(config: TuiConfig) -> Self {
        let mut game = GameState::new();
        if *config.reverse_order() {
            game.toggle_order();
        }
        Self {
            game,
            config,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the presentation settings.
    pub fn config(&self) -> &TuiConfig {
        &self.config
    }

    /// Board cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected move-list row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feedback from the last rejected intent.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Dispatches a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        self.message = None;
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.switch_focus(),
            KeyCode::Char('o') => {
                self.game.toggle_order();
                self.select_viewed();
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('[') => self.step(-1),
            KeyCode::Char(']') => self.step(1),
            code => match (self.focus, digit_cell(code)) {
                (_, Some(cell)) => self.play_at(cell),
                (Focus::Board, None) => self.handle_board_key(code),
                (Focus::Moves, None) => self.handle_moves_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play_at(self.cursor.to_index()),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_to_selected(),
            code => {
                let len = self.game.describe_moves().len();
                self.selected = move_selection(self.selected, len, code);
            }
        }
    }

    /// Plays at a cell and reports why if nothing happened.
    pub fn play_at(&mut self, cell: usize) {
        match self.game.play_at(cell) {
            PlayOutcome::Placed { index } => {
                debug!(index, "Move placed");
                self.select_viewed();
            }
            PlayOutcome::Ignored(reason) => {
                self.message = Some(reason.to_string());
            }
        }
    }

    fn jump_to_selected(&mut self) {
        let Some(target) = self.game.describe_moves().nth(self.selected) else {
            return;
        };
        if let Err(e) = self.game.jump_to(target.index) {
            self.message = Some(e.to_string());
        }
    }

    fn step(&mut self, delta: isize) {
        let Some(target) = self.game.view_index().checked_add_signed(delta) else {
            return;
        };
        if target <= self.game.latest_index() && self.game.jump_to(target).is_ok() {
            self.select_viewed();
        }
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.select_viewed();
                Focus::Moves
            }
            Focus::Moves => Focus::Board,
        };
    }

    /// Points the list selection at the viewed move.
    fn select_viewed(&mut self) {
        let viewed = self.game.view_index();
        self.selected = self
            .game
            .describe_moves()
            .position(|d| d.index == viewed)
            .unwrap_or(0);
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Position::Center;
        self.select_viewed();
    }
}
