//! Driven port for the backend health probe.

use async_trait::async_trait;
use thiserror::Error;

/// Health response from the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthReport {
    /// Status message reported by the backend.
    pub message: Option<String>,
}

/// Errors surfaced by the health probe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HealthProbeError {
    /// The probe request failed before a response arrived.
    #[error("health probe transport failed: {message}")]
    Transport {
        /// Underlying transport failure.
        message: String,
    },
    /// The backend answered with a non-success status.
    #[error("health probe returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
    /// The health body could not be decoded.
    #[error("health probe response decode failed: {message}")]
    Decode {
        /// Decoder diagnostic.
        message: String,
    },
}

/// Port for probing backend reachability.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortalHealth: Send + Sync {
    /// Query the backend health endpoint once.
    async fn check(&self) -> Result<HealthReport, HealthProbeError>;
}
