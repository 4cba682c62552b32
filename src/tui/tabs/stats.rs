//! Token Stats tab layout and rendering.
//!
//! Upstream-aggregated per-token statistics, consumed read-only.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::format::{format_net, format_timestamp};
use crate::tui::app::{App, LoadState};
use crate::tui::components::status_bar;

/// Renders the Token Stats tab.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = app.theme.palette();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Chrome bar (tabs + status)
            Constraint::Min(6),    // Stats table
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    status_bar::render(frame, main_layout[0], app);
    render_stats(frame, main_layout[1], app);
    render_keybindings(frame, main_layout[2], app);
}

/// Renders the token stats panel for the current load state.
fn render_stats(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let block = Block::default()
        .title(" Token Stats ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.card));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.token_stats {
        LoadState::Loading => {
            let para = Paragraph::new("Loading data...")
                .style(Style::default().fg(palette.muted))
                .centered();
            frame.render_widget(para, inner);
        }
        LoadState::Error(message) => {
            let lines = vec![
                Line::from(Span::styled(
                    "Failed to load token stats",
                    Style::default()
                        .fg(palette.negative)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    message.as_str(),
                    Style::default().fg(palette.negative),
                )),
                Line::from(Span::styled(
                    "Press [r] to retry",
                    Style::default().fg(palette.muted),
                )),
            ];
            let para = Paragraph::new(lines).centered();
            frame.render_widget(para, inner);
        }
        LoadState::Loaded(stats) if stats.is_empty() => {
            let para = Paragraph::new("No token stats available")
                .style(Style::default().fg(palette.muted))
                .centered();
            frame.render_widget(para, inner);
        }
        LoadState::Loaded(stats) => {
            render_table(frame, inner, app, stats);
        }
    }
}

/// Renders the populated token stats table in source order.
fn render_table(frame: &mut Frame, area: Rect, app: &App, stats: &[crate::models::TokenStats]) {
    let palette = app.theme.palette();

    let header = Line::from(Span::styled(
        format!(
            "{:<22} {:>8} {:>10} {:>10} {:>8}  {:<14}",
            "Token", "Signals", "Buys", "Sells", "Net", "Latest"
        ),
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    ));

    let mut lines = vec![header];

    let visible_rows = area.height.saturating_sub(1) as usize;
    for row in stats.iter().skip(app.table_offset).take(visible_rows) {
        let net_color = if row.net_activity >= 0 {
            palette.positive
        } else {
            palette.negative
        };

        let token = format!("{} ({})", row.name, row.symbol);

        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<22} ", token),
                Style::default().fg(palette.text),
            ),
            Span::styled(
                format!("{:>8} ", row.notification_count),
                Style::default().fg(palette.text),
            ),
            Span::styled(
                format!("{:>10} ", row.total_buys),
                Style::default().fg(palette.text),
            ),
            Span::styled(
                format!("{:>10} ", row.total_sells),
                Style::default().fg(palette.text),
            ),
            Span::styled(
                format!("{:>8}  ", format_net(row.net_activity)),
                Style::default().fg(net_color),
            ),
            Span::styled(
                format!("{:<14}", format_timestamp(&row.latest_activity)),
                Style::default().fg(palette.muted),
            ),
        ]));
    }

    let para = Paragraph::new(lines);
    frame.render_widget(para, area);
}

/// Renders the keybindings help line.
fn render_keybindings(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let help = "[Tab]switch tab [j/k]scroll [r]reload [t]theme [q]quit";

    let para = Paragraph::new(help).style(Style::default().fg(palette.muted));
    frame.render_widget(para, area);
}
