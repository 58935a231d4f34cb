//! Terminal rendering.

mod board;
mod moves;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP: &str =
    "arrows/hjkl move · enter play · 1-9 play · tab list · [ ] step · o order · r reset · q quit";

/// Draws one frame.
pub fn draw(f: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(13), Constraint::Length(3), Constraint::Length(1)])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(outer[0]);

    let board_block = Block::default().borders(Borders::ALL).title(" Board ");
    let board_inner = board_block.inner(panes[0]);
    f.render_widget(board_block, panes[0]);
    board::render_board(f, board_inner, app);
    moves::render_moves(f, panes[1], app);

    render_status(f, outer[1], app);

    let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, outer[2]);
}

fn render_status(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let game = app.game();
    let mut spans = vec![Span::styled(
        game.status_line(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if game.is_viewing_past() {
        spans.push(Span::raw(format!(
            "  (viewing move {} of {})",
            game.view_index(),
            game.latest_index()
        )));
    }
    if let Some(message) = app.message() {
        spans.push(Span::styled(
            format!("  {}", message),
            Style::default().fg(Color::Yellow),
        ));
    }
    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).expect("test terminal");
        terminal.draw(|f| draw(f, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_status_and_moves() {
        let mut app = App::new(TuiConfig::default());
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        let screen = render(&app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("You are at move #5 -- X@(1,3)"));
    }

    #[test]
    fn test_renders_reversed_title_and_past_view() {
        let mut app = App::new(TuiConfig::default());
        for key in ['5', '1', 'o', '['] {
            app.handle_key(KeyCode::Char(key));
        }
        let screen = render(&app);
        assert!(screen.contains("Moves (Reversed)"));
        assert!(screen.contains("(viewing move 1 of 2)"));
        assert!(screen.contains("Next player: O"));
    }
}
