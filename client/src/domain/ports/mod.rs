//! Domain ports and supporting types for the hexagonal boundary.
//!
//! The domain owns these contracts; `crate::outbound` supplies the HTTP
//! implementations and tests supply scripted doubles.

mod image_probe;
mod portal_health;
mod student_directory;

#[cfg(test)]
pub(crate) use image_probe::MockImageProbe;
pub use image_probe::{ImageLoadError, ImageProbe};
#[cfg(test)]
pub(crate) use portal_health::MockPortalHealth;
pub use portal_health::{HealthProbeError, HealthReport, PortalHealth};
#[cfg(test)]
pub(crate) use student_directory::MockStudentDirectory;
pub use student_directory::{DirectoryReply, StudentDirectory, StudentDirectoryError};
