//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::models::{TokenStats, WhaleNotification};

use super::app::{App, LoadState};

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),

    /// Whale notifications fetch resolved.
    NotificationsLoaded(Vec<WhaleNotification>),
    /// Whale notifications fetch rejected.
    NotificationsFailed(String),
    /// Token stats fetch resolved.
    StatsLoaded(Vec<TokenStats>),
    /// Token stats fetch rejected.
    StatsFailed(String),

    /// Request to quit the application.
    Quit,
}

/// Actions that require external handling (spawning fetch tasks).
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// User asked for a full reload of both data sets.
    Reload,
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::NotificationsLoaded(records) => {
            app.notifications = LoadState::Loaded(records);
            None
        }
        Message::NotificationsFailed(message) => {
            app.notifications = LoadState::Error(message);
            None
        }
        Message::StatsLoaded(stats) => {
            app.token_stats = LoadState::Loaded(stats);
            None
        }
        Message::StatsFailed(message) => {
            app.token_stats = LoadState::Error(message);
            None
        }
        Message::Quit => {
            app.should_quit = true;
            None
        }
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => None,
        Event::Tick => None,
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            None
        }

        // Tab navigation
        KeyCode::Tab => {
            app.next_tab();
            None
        }
        KeyCode::BackTab => {
            app.previous_tab();
            None
        }

        // Theme toggle
        KeyCode::Char('t') => {
            app.theme.toggle();
            None
        }

        // Table scrolling
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_down();
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_up();
            None
        }

        // Full reload: both tabs go back to Loading and one fresh fetch
        // per data set is issued by the caller.
        KeyCode::Char('r') => {
            app.begin_reload();
            Some(Action::Reload)
        }

        _ => None,
    }
}
