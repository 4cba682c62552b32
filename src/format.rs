//! Display formatting helpers shared by the dashboard widgets.

use chrono::{DateTime, Local};

/// Shortens an on-chain address to `first 6 chars + "..." + last 4 chars`.
///
/// Strings shorter than 10 characters are returned unchanged rather than
/// producing overlapping slices.
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() < 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Formats a per-record or aggregate net-activity value.
///
/// Positive values carry an explicit `+`; zero renders as `0`, not `+0`;
/// negatives already carry their own sign.
pub fn format_net(net: i64) -> String {
    if net > 0 {
        format!("+{net}")
    } else {
        net.to_string()
    }
}

/// Renders an ISO-8601 timestamp as a short local date/time
/// (`Apr  3 14:05` style). Unparseable input falls back to the raw string.
pub fn format_timestamp(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(instant) => instant
            .with_timezone(&Local)
            .format("%b %e %H:%M")
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}
