//! Summary metric cards.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::format::format_net;
use crate::tui::app::App;

/// Renders the four summary cards (tracked tokens, buys, sells, net).
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let summary = app.summary();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let net = summary.net_activity();
    let net_color = if net >= 0 {
        palette.positive
    } else {
        palette.negative
    };

    let cards: [(&str, String, ratatui::style::Color); 4] = [
        (
            " Tracked Tokens ",
            summary.unique_tokens.to_string(),
            palette.text,
        ),
        (
            " Buy Transactions ",
            summary.total_buys.to_string(),
            palette.positive,
        ),
        (
            " Sell Transactions ",
            summary.total_sells.to_string(),
            palette.negative,
        ),
        (" Net Activity ", format_net(net), net_color),
    ];

    for (column, (title, value, color)) in columns.iter().zip(cards) {
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.card));

        let inner = block.inner(*column);
        frame.render_widget(block, *column);

        let line = Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line), inner);
    }
}
