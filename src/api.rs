//! HTTP client for the Solana Traders backend.
//!
//! [`ApiClient`] is a thin GET wrapper around the two backend endpoints
//! (`/whale-notifications` and `/token-stats`). It is constructed
//! explicitly from configuration and passed to whoever needs data; there
//! is no process-wide singleton. In fixture mode every call is answered
//! from the built-in sample set without touching the network.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::Result;
use crate::config::ApiConfig;
use crate::fixtures;
use crate::models::{TokenStats, WhaleNotification};

/// Default record limit used by call sites that have no preference.
pub const DEFAULT_LIMIT: usize = 100;

/// Where the client sources its data from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataMode {
    /// Real HTTP calls against the configured backend.
    Live,
    /// Built-in sample data, no network I/O.
    Fixture,
}

/// Client for the whale-activity data API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    mode: DataMode,
}

impl ApiClient {
    /// Creates a client from resolved configuration.
    pub fn new(config: &ApiConfig) -> Self {
        let mode = if config.offline {
            DataMode::Fixture
        } else {
            DataMode::Live
        };
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            mode,
        }
    }

    /// Returns the active data mode.
    pub fn mode(&self) -> DataMode {
        self.mode
    }

    /// Fetches up to `limit` whale notifications, optionally filtered to a
    /// single token symbol. Record order is whatever the source returned.
    ///
    /// # Errors
    ///
    /// Returns [`TradersError::Http`](crate::TradersError::Http) for a
    /// non-2xx response (message carries the status and the error detail
    /// extracted from the body),
    /// [`TradersError::Transport`](crate::TradersError::Transport) when no
    /// response was received, and
    /// [`TradersError::Json`](crate::TradersError::Json) when the body is
    /// not a JSON array of notification records.
    pub async fn fetch_whale_notifications(
        &self,
        limit: usize,
        symbol: Option<&str>,
    ) -> Result<Vec<WhaleNotification>> {
        if self.mode == DataMode::Fixture {
            let mut records = fixtures::whale_notifications();
            if let Some(symbol) = symbol {
                records.retain(|r| r.symbol == symbol);
            }
            records.truncate(limit);
            return Ok(records);
        }

        let mut query: Vec<(&str, String)> = vec![("limit", limit.to_string())];
        if let Some(symbol) = symbol {
            query.push(("symbol", symbol.to_string()));
        }

        let records: Vec<WhaleNotification> =
            self.get_json("/whale-notifications", &query).await?;
        debug!(count = records.len(), "received whale notifications");
        Ok(records)
    }

    /// Fetches the upstream-aggregated per-token statistics.
    ///
    /// # Errors
    ///
    /// Same failure modes as
    /// [`fetch_whale_notifications`](Self::fetch_whale_notifications).
    pub async fn fetch_token_stats(&self) -> Result<Vec<TokenStats>> {
        if self.mode == DataMode::Fixture {
            return Ok(fixtures::token_stats());
        }

        let stats: Vec<TokenStats> = self.get_json("/token-stats", &[]).await?;
        debug!(count = stats.len(), "received token stats");
        Ok(stats)
    }

    /// Issues a GET against `{base_url}{path}` and deserializes the 2xx
    /// body. Non-2xx responses become `Http` errors carrying the status
    /// and the `detail` payload (JSON body if parseable, raw text otherwise).
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching");

        let response = self
            .http
            .get(&url)
            .query(query)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = extract_error_detail(&body);
            warn!(%url, status = status.as_u16(), %detail, "request failed");
            return Err(crate::TradersError::Http {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Pulls a human-readable detail string out of an error response body.
///
/// FastAPI-style backends answer with `{"detail": "..."}`; anything else
/// falls back to the raw body text.
fn extract_error_detail(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("detail")
            .and_then(|d| d.as_str().map(String::from))
            .unwrap_or_else(|| value.to_string()),
        Err(_) => body.to_string(),
    }
}
