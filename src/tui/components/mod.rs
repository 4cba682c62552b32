//! Reusable UI components shared across tabs.

pub mod status_bar;
pub mod summary;
