//! Client configuration
//!
//! Loads from explicit values or environment variables, env-first:
//! - `TASKDECK_API_URL`: backend base URL
//! - `TASKDECK_HTTP_TIMEOUT_SECS`: general request timeout
//! - `TASKDECK_REFRESH_TIMEOUT_SECS`: bound on the token refresh call

use std::time::Duration;

use crate::api::errors::ApiError;

/// Configuration for the TaskDeck client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the backend (e.g. `"https://api.taskdeck.app"`).
    pub base_url: String,
    /// Timeout applied to every API request.
    pub timeout: Duration,
    /// Timeout applied to the token refresh call only.
    pub refresh_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(30),
            refresh_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Build a configuration with the given base URL and default timeouts.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }

    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] when a timeout variable is present but
    /// not a valid number of seconds.
    pub fn from_env() -> Result<Self, ApiError> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("TASKDECK_API_URL") {
            config.base_url = url;
        }
        if let Some(timeout) = env_secs("TASKDECK_HTTP_TIMEOUT_SECS")? {
            config.timeout = timeout;
        }
        if let Some(timeout) = env_secs("TASKDECK_REFRESH_TIMEOUT_SECS")? {
            config.refresh_timeout = timeout;
        }

        Ok(config)
    }
}

fn env_secs(name: &str) -> Result<Option<Duration>, ApiError> {
    match std::env::var(name) {
        Ok(raw) => {
            let secs = raw
                .parse::<u64>()
                .map_err(|e| ApiError::Config(format!("invalid {name}: {e}")))?;
            Ok(Some(Duration::from_secs(secs)))
        }
        Err(_) => Ok(None),
    }
}
