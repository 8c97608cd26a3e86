//! Builder for creating and configuring path service clients.

use std::time::Duration;

use log::debug;

use super::HttpPathService;
use crate::error::{Result, WaypointError};

/// Service address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Upper bound for any single request, generation included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for creating and configuring [`HttpPathService`] instances.
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service base URL, e.g. `http://localhost:8000`.
    ///
    /// If not specified, uses [`DEFAULT_BASE_URL`].
    pub fn with_base_url<S: Into<String>>(mut self, base_url: Option<S>) -> Self {
        if let Some(url) = base_url {
            self.base_url = Some(url.into());
        }
        self
    }

    /// Sets the per-request timeout.
    ///
    /// If not specified, uses [`DEFAULT_TIMEOUT`].
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        if let Some(timeout) = timeout {
            self.timeout = Some(timeout);
        }
        self
    }

    /// Builds the configured client.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::Configuration` if the URL is not http(s), the
    /// timeout is zero, or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<HttpPathService> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(WaypointError::configuration(format!(
                "Server URL must start with http:// or https://, got '{base_url}'"
            )));
        }

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(WaypointError::configuration("Timeout must be greater than zero"));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WaypointError::configuration(format!("HTTP client error: {e}")))?;

        debug!("Configured path service at {base_url} with timeout {timeout:?}");
        Ok(HttpPathService::new(base_url, http))
    }
}
