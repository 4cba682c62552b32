//! Tab layouts.

pub mod activity;
pub mod stats;
