//! Application state for the TUI.

use crate::metrics::Summary;
use crate::models::{TokenStats, WhaleNotification};

use super::theme::Theme;

/// Observable states of the one-shot fetch that backs a tab.
///
/// An empty `Loaded` collection is a valid state of its own ("no data
/// available") and renders differently from both `Loading` and `Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Fetch in flight, nothing to show yet.
    Loading,
    /// Fetch rejected; carries a human-readable message.
    Error(String),
    /// Fetch resolved with a (possibly empty) collection.
    Loaded(Vec<T>),
}

impl<T> LoadState<T> {
    /// Returns the loaded records, if any.
    pub fn records(&self) -> Option<&[T]> {
        match self {
            LoadState::Loaded(records) => Some(records),
            _ => None,
        }
    }
}

/// Central application state container.
pub struct App {
    // -- Data State --
    /// Whale notifications for the Activity tab.
    pub notifications: LoadState<WhaleNotification>,
    /// Upstream per-token statistics for the Token Stats tab.
    pub token_stats: LoadState<TokenStats>,

    // -- UI State --
    /// List of available tabs.
    pub tabs: Vec<Tab>,
    /// Index of the currently active tab.
    pub active_tab: usize,
    /// Current color theme.
    pub theme: Theme,
    /// First visible row of the active table.
    pub table_offset: usize,

    // -- Internal --
    /// Whether the client serves fixture data (shown as a badge).
    pub fixture_mode: bool,
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new App instance in the Loading state.
    pub fn new(fixture_mode: bool) -> Self {
        Self {
            notifications: LoadState::Loading,
            token_stats: LoadState::Loading,
            tabs: vec![Tab::Activity, Tab::TokenStats],
            active_tab: 0,
            theme: Theme::default(),
            table_offset: 0,
            fixture_mode,
            should_quit: false,
        }
    }

    /// Returns the currently active tab.
    pub fn current_tab(&self) -> &Tab {
        &self.tabs[self.active_tab]
    }

    /// Switches to the next tab and resets table scroll.
    pub fn next_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.active_tab = (self.active_tab + 1) % self.tabs.len();
            self.table_offset = 0;
        }
    }

    /// Switches to the previous tab and resets table scroll.
    pub fn previous_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.active_tab = self
                .active_tab
                .checked_sub(1)
                .unwrap_or(self.tabs.len() - 1);
            self.table_offset = 0;
        }
    }

    /// Summary metrics over the current notification collection.
    ///
    /// All-zero while Loading or Error; recomputed from the collection on
    /// every render rather than stored.
    pub fn summary(&self) -> Summary {
        match self.notifications.records() {
            Some(records) => Summary::compute(records),
            None => Summary::default(),
        }
    }

    /// Number of rows in the active tab's table.
    pub fn active_row_count(&self) -> usize {
        match self.current_tab() {
            Tab::Activity => self.notifications.records().map_or(0, |r| r.len()),
            Tab::TokenStats => self.token_stats.records().map_or(0, |r| r.len()),
        }
    }

    /// Scrolls the active table down one row.
    pub fn scroll_down(&mut self) {
        let rows = self.active_row_count();
        if self.table_offset + 1 < rows {
            self.table_offset += 1;
        }
    }

    /// Scrolls the active table up one row.
    pub fn scroll_up(&mut self) {
        self.table_offset = self.table_offset.saturating_sub(1);
    }

    /// Puts both tabs back into the Loading state for a full reload.
    pub fn begin_reload(&mut self) {
        self.notifications = LoadState::Loading;
        self.token_stats = LoadState::Loading;
        self.table_offset = 0;
    }
}

/// Tab types in the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    /// Whale activity feed with summary cards.
    Activity,
    /// Upstream-aggregated token statistics.
    TokenStats,
}

impl Tab {
    /// Returns the display title for the tab.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Activity => "Activity",
            Tab::TokenStats => "Token Stats",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn summary_is_zero_while_loading() {
        let app = App::new(false);
        assert_eq!(app.summary(), Summary::default());
    }

    #[test]
    fn summary_is_zero_on_error() {
        let mut app = App::new(false);
        app.notifications = LoadState::Error("boom".to_string());
        assert_eq!(app.summary(), Summary::default());
    }

    #[test]
    fn empty_loaded_is_distinct_from_error() {
        let mut app = App::new(false);
        app.notifications = LoadState::Loaded(Vec::new());
        assert!(app.notifications.records().is_some_and(|r| r.is_empty()));
        assert_eq!(app.summary(), Summary::default());
    }

    #[test]
    fn tab_cycling_wraps() {
        let mut app = App::new(false);
        assert_eq!(*app.current_tab(), Tab::Activity);
        app.next_tab();
        assert_eq!(*app.current_tab(), Tab::TokenStats);
        app.next_tab();
        assert_eq!(*app.current_tab(), Tab::Activity);
        app.previous_tab();
        assert_eq!(*app.current_tab(), Tab::TokenStats);
    }

    #[test]
    fn scroll_is_clamped_to_rows() {
        let mut app = App::new(false);
        app.notifications = LoadState::Loaded(fixtures::whale_notifications());
        app.scroll_down();
        app.scroll_down();
        app.scroll_down();
        app.scroll_down();
        assert_eq!(app.table_offset, 2);
        app.scroll_up();
        app.scroll_up();
        app.scroll_up();
        assert_eq!(app.table_offset, 0);
    }

    #[test]
    fn reload_resets_to_loading() {
        let mut app = App::new(false);
        app.notifications = LoadState::Loaded(fixtures::whale_notifications());
        app.table_offset = 2;
        app.begin_reload();
        assert_eq!(app.notifications, LoadState::Loading);
        assert_eq!(app.token_stats, LoadState::Loading);
        assert_eq!(app.table_offset, 0);
    }
}
