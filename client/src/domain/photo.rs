//! Student photo resolution.
//!
//! Photos resolve through a small state machine: the primary locator is tried
//! first and the backup only after the primary has definitively failed. At most
//! two loads run, one after the other. Failures are logged and degrade to
//! [`PhotoResolution::NoPhoto`].

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::StudentRecord;
use crate::domain::ports::ImageProbe;

/// Terminal state of photo resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "locator", rename_all = "snake_case")]
pub enum PhotoResolution {
    /// No loadable photo; show the placeholder.
    NoPhoto,
    /// The primary locator loaded.
    Primary(String),
    /// The primary failed and the backup locator loaded.
    Backup(String),
}

impl PhotoResolution {
    /// Locator to display, if any.
    #[must_use]
    pub fn locator(&self) -> Option<&str> {
        match self {
            Self::NoPhoto => None,
            Self::Primary(locator) | Self::Backup(locator) => Some(locator.as_str()),
        }
    }
}

/// Resolve the photo for `record`, probing locators through `images`.
///
/// # Examples
/// ```rust,ignore
/// let resolution = resolve_photo(&record, &probe).await;
/// assert_eq!(resolution, PhotoResolution::NoPhoto);
/// ```
pub async fn resolve_photo(record: &StudentRecord, images: &dyn ImageProbe) -> PhotoResolution {
    let Some(primary) = non_empty(record.primary_image_path.as_deref()) else {
        debug!(student_id = %record.student_id, "no photo locator supplied");
        return PhotoResolution::NoPhoto;
    };

    let primary_error = match images.load(primary).await {
        Ok(()) => return PhotoResolution::Primary(primary.to_owned()),
        Err(error) => error,
    };

    let backup = non_empty(record.backup_image_path.as_deref()).filter(|path| *path != primary);
    let Some(backup) = backup else {
        warn!(error = %primary_error, "failed to load student photo; no backup available");
        return PhotoResolution::NoPhoto;
    };
    warn!(error = %primary_error, "failed to load student photo; trying backup");

    match images.load(backup).await {
        Ok(()) => PhotoResolution::Backup(backup.to_owned()),
        Err(error) => {
            warn!(%error, "failed to load backup student photo");
            PhotoResolution::NoPhoto
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|path| !path.is_empty())
}
