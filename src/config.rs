//! Application configuration loaded from environment variables.
//!
//! - `SOLTRADERS_API_BASE_URL` — base URL of the backend API; defaults to
//!   the local development backend when unset.
//! - `SOLTRADERS_OFFLINE` — any non-empty value switches the client into
//!   fixture mode: all data comes from the built-in sample set and no
//!   network calls are made.

/// Default backend base URL (local development server).
const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub api: ApiConfig,
}

/// Backend API configuration values.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// When true, serve fixture data instead of hitting the network.
    pub offline: bool,
}

/// Loads the application configuration from environment variables.
///
/// The base URL defaults to `http://localhost:8000/api` and can be
/// overridden with `SOLTRADERS_API_BASE_URL`. Offline (fixture) mode is a
/// deployment-time choice selected with `SOLTRADERS_OFFLINE`.
///
/// # Errors
///
/// Returns [`TradersError::Config`](crate::TradersError::Config) when the
/// configured base URL is not an http(s) URL.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let base_url = non_empty_var("SOLTRADERS_API_BASE_URL")
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(crate::TradersError::Config(format!(
            "SOLTRADERS_API_BASE_URL must be an http(s) URL, got {base_url:?}"
        )));
    }

    let offline = non_empty_var("SOLTRADERS_OFFLINE").is_some();

    Ok(AppConfig {
        api: ApiConfig { base_url, offline },
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
