//! Client configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

/// Backend origin used when none is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The server URL is not an absolute HTTP(S) URL.
    #[error("invalid server URL '{value}': {message}")]
    InvalidServerUrl {
        /// Configured value.
        value: String,
        /// Parser diagnostic.
        message: String,
    },
    /// A request timeout of zero seconds was configured.
    #[error("timeout must be at least one second")]
    ZeroTimeout,
}

/// Configuration values for the lookup client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STUDENT_PORTAL")]
pub struct PortalClientSettings {
    /// Portal backend origin.
    pub server_url: Option<String>,
    /// Optional per-request timeout in seconds; unset means no client timeout.
    pub timeout_secs: Option<u64>,
    /// Probe `/health` once at start-up.
    #[ortho_config(default = true)]
    pub health_check: bool,
    /// Emit logs as JSON lines.
    #[ortho_config(default = false)]
    pub json_logs: bool,
}

impl PortalClientSettings {
    /// Return the configured backend origin, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidServerUrl`] when the value is not an
    /// absolute HTTP(S) URL.
    pub fn server_url(&self) -> Result<Url, SettingsError> {
        let raw = self.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL);
        let invalid = |message: String| SettingsError::InvalidServerUrl {
            value: raw.to_owned(),
            message,
        };
        let url = Url::parse(raw.trim()).map_err(|error| invalid(error.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }

    /// Return the configured request timeout, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroTimeout`] for a zero-second timeout.
    pub fn timeout(&self) -> Result<Option<Duration>, SettingsError> {
        match self.timeout_secs {
            Some(0) => Err(SettingsError::ZeroTimeout),
            Some(seconds) => Ok(Some(Duration::from_secs(seconds))),
            None => Ok(None),
        }
    }
}
