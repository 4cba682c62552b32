//! Terminal user interface for the Solana Traders dashboard.
//!
//! Provides a Ratatui-based dashboard with summary metric cards, a
//! whale-activity table, a token-stats tab, and light/dark theming.

pub mod app;
pub mod components;
pub mod event;
pub mod tabs;
pub mod terminal;
pub mod theme;
pub mod ui;

pub use app::App;
pub use event::{Event, Message};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
