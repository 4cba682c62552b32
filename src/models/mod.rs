//! Wire types for the Solana Traders backend API.
//!
//! Field names on the wire use the upstream warehouse casing
//! (`NOTIFICATION_ID`, `NUM_USERS_BOUGHT`, ...); the structs here map them
//! to idiomatic names via serde renames. Records arrive fully formed from
//! the backend and are never mutated or persisted client-side.

pub mod notification;
pub mod stats;

pub use notification::WhaleNotification;
pub use stats::TokenStats;
