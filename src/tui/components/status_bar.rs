//! Single-line chrome bar.
//!
//! Tab selector on the left, then data-source badge, load state, theme
//! label, and any pending fetch error. Replaces separate tab/status rows.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::{App, LoadState};

/// Renders the chrome line.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let divider = Span::styled(" │ ", Style::default().fg(palette.muted));

    let mut spans: Vec<Span> = Vec::new();

    for (i, tab) in app.tabs.iter().enumerate() {
        let style = if i == app.active_tab {
            Style::default()
                .fg(palette.background)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::styled(format!(" {} ", tab.title()), style));
    }

    spans.push(divider.clone());

    if app.fixture_mode {
        spans.push(Span::styled(
            " OFFLINE ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
        spans.push(Span::raw(" "));
    }

    let (state_label, state_color) = load_badge(&app.notifications);
    spans.push(Span::styled(state_label, Style::default().fg(state_color)));

    spans.push(divider.clone());
    spans.push(Span::styled(
        format!("{} theme", app.theme.label()),
        Style::default().fg(palette.muted),
    ));

    if let Some(message) = fetch_error(app) {
        spans.push(divider);
        spans.push(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Maps the notifications load state to a badge label and color.
fn load_badge(state: &LoadState<crate::models::WhaleNotification>) -> (&'static str, Color) {
    match state {
        LoadState::Loading => ("Loading...", Color::Yellow),
        LoadState::Error(_) => ("Error", Color::Red),
        LoadState::Loaded(records) if records.is_empty() => ("No Data", Color::Yellow),
        LoadState::Loaded(_) => ("Live", Color::Green),
    }
}

/// Returns the first fetch error to surface, if any.
fn fetch_error(app: &App) -> Option<&str> {
    if let LoadState::Error(message) = &app.notifications {
        return Some(message.as_str());
    }
    if let LoadState::Error(message) = &app.token_stats {
        return Some(message.as_str());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_string(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn shows_tabs_and_loading_state() {
        let line = render_to_string(&App::new(false));
        assert!(line.contains("Activity"));
        assert!(line.contains("Token Stats"));
        assert!(line.contains("Loading..."));
        assert!(line.contains("Dark theme"));
    }

    #[test]
    fn offline_badge_only_in_fixture_mode() {
        assert!(render_to_string(&App::new(true)).contains("OFFLINE"));
        assert!(!render_to_string(&App::new(false)).contains("OFFLINE"));
    }

    #[test]
    fn empty_load_shows_no_data_badge() {
        let mut app = App::new(false);
        app.notifications = LoadState::Loaded(Vec::new());
        let line = render_to_string(&app);
        assert!(line.contains("No Data"));
        assert!(!line.contains("Error"));
    }

    #[test]
    fn surfaces_fetch_errors() {
        let mut app = App::new(false);
        app.notifications =
            LoadState::Error("API request failed with status 500: db down".to_string());
        let line = render_to_string(&app);
        assert!(line.contains("Error"));
        assert!(line.contains("500"));
        assert!(line.contains("db down"));
    }
}
