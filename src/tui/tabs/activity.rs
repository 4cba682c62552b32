//! Activity tab layout and rendering.
//!
//! Header, four summary cards, and the whale-activity table. The table
//! shows records in the exact order the source returned them.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::format::{format_address, format_net, format_timestamp};
use crate::tui::app::{App, LoadState};
use crate::tui::components::{status_bar, summary};

/// Renders the Activity tab.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = app.theme.palette();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    // Main vertical layout
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Chrome bar (tabs + status)
            Constraint::Length(3), // Header
            Constraint::Length(3), // Summary cards
            Constraint::Min(6),    // Activity table
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    status_bar::render(frame, main_layout[0], app);
    render_header(frame, main_layout[1], app);
    summary::render(frame, main_layout[2], app);
    render_activity(frame, main_layout[3], app);
    render_keybindings(frame, main_layout[4], app);
}

/// Renders the dashboard header.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let lines = vec![
        Line::from(Span::styled(
            "Solana Traders Dashboard",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Monitor whale activity and trading patterns on Solana",
            Style::default().fg(palette.muted),
        )),
    ];

    let para = Paragraph::new(lines).centered();
    frame.render_widget(para, area);
}

/// Renders the whale activity panel for the current load state.
fn render_activity(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let block = Block::default()
        .title(" Recent Whale Activity ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.card));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.notifications {
        LoadState::Loading => {
            let para = Paragraph::new("Loading data...")
                .style(Style::default().fg(palette.muted))
                .centered();
            frame.render_widget(para, inner);
        }
        LoadState::Error(message) => {
            let lines = vec![
                Line::from(Span::styled(
                    "Failed to load whale activity",
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
        LoadState::Loaded(records) if records.is_empty() => {
            let para = Paragraph::new("No whale activity data available")
                .style(Style::default().fg(palette.muted))
                .centered();
            frame.render_widget(para, inner);
        }
        LoadState::Loaded(records) => {
            render_table(frame, inner, app, records);
        }
    }
}

/// Renders the populated activity table in source order.
fn render_table(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    records: &[crate::models::WhaleNotification],
) {
    let palette = app.theme.palette();

    let header = Line::from(Span::styled(
        format!(
            "{:<14} {:<22} {:<16} {:>8} {:>8} {:>8}",
            "Time", "Token", "Address", "Buyers", "Sellers", "Net"
        ),
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    ));

    let mut lines = vec![header];

    let visible_rows = area.height.saturating_sub(1) as usize;
    for record in records.iter().skip(app.table_offset).take(visible_rows) {
        let net = record.net_activity();
        let net_color = if net >= 0 {
            palette.positive
        } else {
            palette.negative
        };

        let token = format!("{} ({})", record.name, record.symbol);

        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<14} ", format_timestamp(&record.timestamp)),
                Style::default().fg(palette.muted),
            ),
            Span::styled(
                format!("{:<22} ", token),
                Style::default().fg(palette.text),
            ),
            Span::styled(
                format!("{:<16} ", format_address(&record.address)),
                Style::default().fg(palette.muted),
            ),
            Span::styled(
                format!("{:>8} ", record.buyer_count),
                Style::default().fg(palette.text),
            ),
            Span::styled(
                format!("{:>8} ", record.seller_count),
                Style::default().fg(palette.text),
            ),
            Span::styled(
                format!("{:>8}", format_net(net)),
                Style::default().fg(net_color),
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
