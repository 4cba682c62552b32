//! Solana Traders dashboard library.
//!
//! Provides the typed API client for the whale-activity backend, the
//! summary-metric aggregation, and the Ratatui dashboard that renders
//! both.

pub mod api;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod format;
pub mod metrics;
pub mod models;
pub mod tui;

pub use error::{Result, TradersError};
