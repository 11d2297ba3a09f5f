//! Reqwest-backed photo probe.
//!
//! A locator "loads" when it resolves to an HTTP(S) address answering 2xx with
//! a non-empty body whose declared content type, if any, is an image. Inline
//! `data:image/...` locators load without a request.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use tracing::debug;

use crate::domain::ports::{ImageLoadError, ImageProbe};

const INLINE_IMAGE_PREFIX: &str = "data:image/";

/// Image probe resolving locators against the portal origin.
#[derive(Debug, Clone)]
pub struct HttpImageProbe {
    client: Client,
    base_url: Url,
}

impl HttpImageProbe {
    /// Build a probe from an existing client. Relative locators resolve
    /// against `base_url`.
    #[must_use]
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn resolve(&self, locator: &str) -> Result<Url, ImageLoadError> {
        let url = self
            .base_url
            .join(locator)
            .map_err(|error| ImageLoadError::InvalidLocator {
                locator: locator.to_owned(),
                message: error.to_string(),
            })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ImageLoadError::InvalidLocator {
                locator: locator.to_owned(),
                message: format!("unsupported scheme '{other}'"),
            }),
        }
    }
}

#[async_trait]
impl ImageProbe for HttpImageProbe {
    async fn load(&self, locator: &str) -> Result<(), ImageLoadError> {
        if locator.starts_with(INLINE_IMAGE_PREFIX) {
            return Ok(());
        }
        let url = self.resolve(locator)?;
        debug!(%url, "probing student photo");

        let transport = |error: reqwest::Error| ImageLoadError::Transport {
            locator: locator.to_owned(),
            message: error.to_string(),
        };
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "image/*")
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageLoadError::Status {
                locator: locator.to_owned(),
                status: status.as_u16(),
            });
        }
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        if let Some(content_type) = content_type.filter(|value| !value.starts_with("image/")) {
            return Err(ImageLoadError::NotAnImage {
                locator: locator.to_owned(),
                content_type,
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        if body.is_empty() {
            return Err(ImageLoadError::Empty {
                locator: locator.to_owned(),
            });
        }
        Ok(())
    }
}
