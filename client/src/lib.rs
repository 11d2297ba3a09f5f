//! Student portal lookup client.
//!
//! Looks up students by enrollment number against the portal backend and
//! renders the result into a card view model.

pub mod config;
pub mod domain;
pub mod outbound;
#[cfg(feature = "test-support")]
pub mod test_support;

pub use config::{PortalClientSettings, SettingsError};
