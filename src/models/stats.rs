use serde::Deserialize;

/// Per-token summary produced upstream. Consumed read-only; the dashboard
/// never derives these itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenStats {
    #[serde(rename = "SYMBOL")]
    pub symbol: String,
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "NOTIFICATION_COUNT")]
    pub notification_count: u64,
    #[serde(rename = "TOTAL_BUYS")]
    pub total_buys: u64,
    #[serde(rename = "TOTAL_SELLS")]
    pub total_sells: u64,
    /// Upstream-computed `total_buys - total_sells`.
    #[serde(rename = "NET_ACTIVITY")]
    pub net_activity: i64,
    /// Most recent activity timestamp for the token (ISO-8601).
    #[serde(rename = "LATEST_ACTIVITY")]
    pub latest_activity: String,
}
