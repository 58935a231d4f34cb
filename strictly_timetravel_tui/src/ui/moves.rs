//! Move list rendering.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Renders the navigable move list in the game's display order.
pub fn render_moves(f: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let viewed = game.view_index();
    let items: Vec<ListItem> = game
        .describe_moves()
        .map(|d| {
            let line = Line::from(format!("{:>2}. {}", d.index, d.label));
            if d.index == viewed {
                ListItem::new(line).style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                ListItem::new(line)
            }
        })
        .collect();

    let title = if game.reverse_order() {
        " Moves (Reversed) "
    } else {
        " Moves "
    };
    let border_style = if app.focus() == Focus::Moves {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if app.focus() == Focus::Moves {
        state.select(Some(app.selected()));
    }
    f.render_stateful_widget(list, area, &mut state);
}
