//! Status pane and move list rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rewind_games::GameStatus;

use crate::app::App;

/// Renders the info pane: status line, sort toggle, and the move list.
pub fn render_info(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
        ])
        .split(area);

    render_status(f, chunks[0], app);
    render_sort_toggle(f, chunks[1], app);
    render_move_list(f, chunks[2], app);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let (text, color) = match app.game().status() {
        GameStatus::Won(win) => (format!("Winner: {}", win.player()), Color::Green),
        GameStatus::Draw => ("Draw".to_string(), Color::Yellow),
        GameStatus::InProgress { next } => (format!("Next player: {}", next), Color::White),
    };
    let status = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, area);
}

fn render_sort_toggle(f: &mut Frame, area: Rect, app: &App) {
    let order = app.game().sort_order();
    let toggle = Paragraph::new(format!("Sort: {} (press 's' to toggle)", order.label()))
        .style(Style::default().fg(Color::Magenta))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(toggle, area);
}

fn render_move_list(f: &mut Frame, area: Rect, app: &mut App) {
    let current_step = app.game().step();
    let items: Vec<ListItem> = app
        .game()
        .sorted_moves()
        .iter()
        .map(|entry| {
            let item = ListItem::new(entry.description());
            if *entry.step() == current_step {
                // Mark the snapshot currently on the board.
                item.style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Moves"))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, app.list_state_mut());
}
