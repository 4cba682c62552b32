//! Crate-level error types.
//!
//! [`TradersError`] unifies every error source (configuration, HTTP
//! transport, JSON) behind a single enum so callers can match on the
//! variant they care about while still using the `?` operator for easy
//! propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TradersError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum TradersError {
    /// The API answered with a non-success status. Carries the numeric
    /// status and the best-effort error detail extracted from the body.
    #[error("API request failed with status {status}: {detail}")]
    Http { status: u16, detail: String },

    /// The request could not be sent or no response was received
    /// (connection refused, DNS failure, TLS problems).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expected.
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be resolved from the environment.
    #[error("configuration error: {0}")]
    Config(String),

    /// An I/O operation failed (terminal mode switches, screen drawing).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
