use serde::Deserialize;

/// One aggregated observation of whale buy/sell activity for a token
/// within a time interval.
///
/// `id` is unique within any single fetched collection. The backend
/// guarantees no ordering and the dashboard does not re-sort.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WhaleNotification {
    #[serde(rename = "NOTIFICATION_ID")]
    pub id: u64,
    /// When the observed activity occurred (ISO-8601).
    #[serde(rename = "TIMESTAMP")]
    pub timestamp: String,
    /// On-chain account address associated with the token.
    #[serde(rename = "ADDRESS")]
    pub address: String,
    /// Token ticker, e.g. `"SOL"`.
    #[serde(rename = "SYMBOL")]
    pub symbol: String,
    /// Human-readable token name, e.g. `"Solana"`.
    #[serde(rename = "NAME")]
    pub name: String,
    /// Aggregation window label, e.g. `"1h"`.
    #[serde(rename = "TIME_INTERVAL")]
    pub time_interval: String,
    #[serde(rename = "NUM_USERS_BOUGHT")]
    pub buyer_count: u64,
    #[serde(rename = "NUM_USERS_SOLD")]
    pub seller_count: u64,
    /// When the record was persisted upstream (ISO-8601).
    #[serde(rename = "INSERTED_AT")]
    pub inserted_at: String,
}

impl WhaleNotification {
    /// Buyer count minus seller count. Positive means net buying pressure.
    pub fn net_activity(&self) -> i64 {
        self.buyer_count as i64 - self.seller_count as i64
    }
}
