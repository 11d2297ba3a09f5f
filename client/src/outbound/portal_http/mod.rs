//! Portal backend outbound adapters.
//!
//! This module provides thin HTTP implementations of the `StudentDirectory`,
//! `PortalHealth`, and `ImageProbe` ports.

mod dto;
mod http_source;
mod image_probe;

pub use http_source::{PortalHttpClient, PortalHttpClientError};
pub use image_probe::HttpImageProbe;
