//! Main UI rendering coordinator.

use ratatui::Frame;

use super::app::{App, Tab};
use super::tabs::{activity, stats};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    match app.current_tab() {
        Tab::Activity => activity::render(frame, app),
        Tab::TokenStats => stats::render(frame, app),
    }
}
