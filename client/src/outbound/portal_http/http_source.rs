//! Reqwest-backed portal backend adapter.
//!
//! This adapter owns transport details only: request serialisation, HTTP
//! status mapping, and JSON decoding into domain values. Classification into
//! lookup outcomes stays in the domain.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;
use tracing::debug;

use super::dto::{
    ErrorBodyDto, HealthResponseDto, ReplyMappingError, StudentLookupBody, StudentResponseDto,
};
use super::image_probe::HttpImageProbe;
use crate::domain::LookupRequest;
use crate::domain::ports::{
    DirectoryReply, HealthProbeError, HealthReport, PortalHealth, StudentDirectory,
    StudentDirectoryError,
};

const STUDENT_PATH: &str = "api/student";
const HEALTH_PATH: &str = "health";
const JSON_MEDIA_TYPE: &str = "application/json";
const DEFAULT_USER_AGENT: &str = "student-portal-client/0.1";

/// Errors raised while building the adapter.
#[derive(Debug, Error)]
pub enum PortalHttpClientError {
    /// The reqwest client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// An endpoint could not be derived from the base URL.
    #[error("failed to derive endpoint from base URL: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Portal backend adapter issuing lookups and health probes against one origin.
pub struct PortalHttpClient {
    client: Client,
    base_url: Url,
    student_endpoint: Url,
    health_endpoint: Url,
}

impl PortalHttpClient {
    /// Build an adapter for the backend rooted at `base_url`.
    ///
    /// `timeout` of `None` leaves requests bounded only by the transport.
    /// ```rust,ignore
    /// let client = PortalHttpClient::new(Url::parse("http://127.0.0.1:3000")?, None)?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or the
    /// endpoints cannot be joined onto `base_url`.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, PortalHttpClientError> {
        let mut builder = Client::builder().user_agent(DEFAULT_USER_AGENT);
        if let Some(limit) = timeout {
            builder = builder.timeout(limit);
        }
        let client = builder.build()?;
        let base_url = directory_url(base_url);
        Ok(Self {
            student_endpoint: base_url.join(STUDENT_PATH)?,
            health_endpoint: base_url.join(HEALTH_PATH)?,
            client,
            base_url,
        })
    }

    /// Image probe sharing this adapter's connection pool and base URL.
    #[must_use]
    pub fn image_probe(&self) -> HttpImageProbe {
        HttpImageProbe::new(self.client.clone(), self.base_url.clone())
    }

    /// Endpoint used for student lookups.
    #[must_use]
    pub fn student_endpoint(&self) -> &Url {
        &self.student_endpoint
    }
}

#[async_trait]
impl StudentDirectory for PortalHttpClient {
    async fn find_student(
        &self,
        request: &LookupRequest,
    ) -> Result<DirectoryReply, StudentDirectoryError> {
        debug!(endpoint = %self.student_endpoint, enrollment_no = %request, "posting student lookup");
        let response = self
            .client
            .post(self.student_endpoint.clone())
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .json(&StudentLookupBody {
                enrollment_no: request.identifier(),
            })
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body still reports the status.
            let body = response.bytes().await.unwrap_or_default();
            return Err(map_status_error(status, body.as_ref()));
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        parse_student_reply(body.as_ref())
    }
}

#[async_trait]
impl PortalHealth for PortalHttpClient {
    async fn check(&self) -> Result<HealthReport, HealthProbeError> {
        let response = self
            .client
            .get(self.health_endpoint.clone())
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .send()
            .await
            .map_err(|error| HealthProbeError::Transport {
                message: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HealthProbeError::Status {
                status: status.as_u16(),
            });
        }
        let body = response
            .bytes()
            .await
            .map_err(|error| HealthProbeError::Transport {
                message: error.to_string(),
            })?;
        let decoded: HealthResponseDto =
            serde_json::from_slice(body.as_ref()).map_err(|error| HealthProbeError::Decode {
                message: format!("invalid health JSON payload: {error}"),
            })?;
        Ok(decoded.into_domain())
    }
}

/// Ensure relative joins land beneath the configured path rather than
/// replacing its last segment.
fn directory_url(mut base_url: Url) -> Url {
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }
    base_url
}

fn parse_student_reply(body: &[u8]) -> Result<DirectoryReply, StudentDirectoryError> {
    StudentResponseDto::from_slice(body)
        .and_then(StudentResponseDto::into_domain_reply)
        .map_err(|error| match error {
            ReplyMappingError::Decode(message) => StudentDirectoryError::decode(message),
            ReplyMappingError::MalformedRecord(message) => {
                StudentDirectoryError::malformed_record(message)
            }
        })
}

fn map_transport_error(error: reqwest::Error) -> StudentDirectoryError {
    StudentDirectoryError::transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> StudentDirectoryError {
    let message = serde_json::from_slice::<ErrorBodyDto>(body)
        .ok()
        .and_then(|error_body| error_body.message);
    debug!(
        status = status.as_u16(),
        body = %body_preview(body),
        "student lookup returned error status"
    );
    StudentDirectoryError::Status {
        status: status.as_u16(),
        message,
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
