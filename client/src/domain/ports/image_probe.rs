//! Driven port for attempting to load a student photo.

use async_trait::async_trait;
use thiserror::Error;

/// Reasons a photo locator could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageLoadError {
    /// The locator could not be turned into a fetchable address.
    #[error("invalid image locator '{locator}': {message}")]
    InvalidLocator {
        /// Locator as supplied by the backend.
        locator: String,
        /// Parser diagnostic.
        message: String,
    },
    /// The image request failed before a response arrived.
    #[error("image request for '{locator}' failed: {message}")]
    Transport {
        /// Locator as supplied by the backend.
        locator: String,
        /// Underlying transport failure.
        message: String,
    },
    /// The image host answered with a non-success status.
    #[error("image request for '{locator}' returned status {status}")]
    Status {
        /// Locator as supplied by the backend.
        locator: String,
        /// HTTP status code.
        status: u16,
    },
    /// The host answered with an empty body.
    #[error("image request for '{locator}' returned an empty body")]
    Empty {
        /// Locator as supplied by the backend.
        locator: String,
    },
    /// The response was not an image.
    #[error("'{locator}' is not an image (content type {content_type})")]
    NotAnImage {
        /// Locator as supplied by the backend.
        locator: String,
        /// Content type reported by the host.
        content_type: String,
    },
}

/// Port for checking whether a photo locator can be displayed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageProbe: Send + Sync {
    /// Attempt to load the image at `locator`.
    async fn load(&self, locator: &str) -> Result<(), ImageLoadError>;
}
