//! Student lookup orchestration.
//!
//! [`StudentLookupClient`] validates input, makes a single directory call,
//! and classifies the reply into a [`LookupOutcome`]. It never retries.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::photo::{PhotoResolution, resolve_photo};
use crate::domain::ports::{
    DirectoryReply, ImageProbe, StudentDirectory, StudentDirectoryError,
};
use crate::domain::{LookupRequest, LookupRequestError, StudentRecord};

/// Shown when the backend reports no match without a message of its own.
pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "No student found with this enrollment number";
/// Shown when no response could be obtained from the backend.
pub const CONNECTION_FAILURE_MESSAGE: &str =
    "Failed to fetch student details. Please check your connection and try again.";
/// Shown when a success reply carries an unusable record.
pub const INVALID_RECORD_MESSAGE: &str = "Invalid student data received from server";
/// Shown when a success reply body cannot be decoded.
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response received from server";

/// Result of one lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// A complete record was found.
    Success(StudentRecord),
    /// The request was well formed but matched no student.
    NotFound(String),
    /// The backend could not be reached or answered unusably.
    TransportError(String),
}

impl LookupOutcome {
    /// Return the found record, if any.
    #[must_use]
    pub fn record(&self) -> Option<&StudentRecord> {
        match self {
            Self::Success(record) => Some(record),
            Self::NotFound(_) | Self::TransportError(_) => None,
        }
    }
}

/// Lookup client bound to a student directory and an image probe.
#[derive(Clone)]
pub struct StudentLookupClient {
    directory: Arc<dyn StudentDirectory>,
    images: Arc<dyn ImageProbe>,
}

impl StudentLookupClient {
    /// Build a client from its ports.
    pub fn new(directory: Arc<dyn StudentDirectory>, images: Arc<dyn ImageProbe>) -> Self {
        Self { directory, images }
    }

    /// Validate `identifier` and, when it is well formed, look it up.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupRequestError`] for malformed input; no directory call
    /// is made in that case.
    pub async fn search(&self, identifier: &str) -> Result<LookupOutcome, LookupRequestError> {
        let request = LookupRequest::parse(identifier)?;
        Ok(self.search_request(&request).await)
    }

    /// Look up an already validated request.
    pub async fn search_request(&self, request: &LookupRequest) -> LookupOutcome {
        debug!(enrollment_no = %request, "searching for student");
        let outcome = classify(self.directory.find_student(request).await);
        match &outcome {
            LookupOutcome::Success(record) => {
                info!(enrollment_no = %request, student_id = %record.student_id, "student found");
            }
            LookupOutcome::NotFound(message) => {
                info!(enrollment_no = %request, %message, "no student found");
            }
            LookupOutcome::TransportError(message) => {
                warn!(enrollment_no = %request, %message, "student lookup failed");
            }
        }
        outcome
    }

    /// Resolve the photo for a found record using the configured image probe.
    pub async fn resolve_photo(&self, record: &StudentRecord) -> PhotoResolution {
        resolve_photo(record, self.images.as_ref()).await
    }
}

fn classify(reply: Result<DirectoryReply, StudentDirectoryError>) -> LookupOutcome {
    match reply {
        Ok(DirectoryReply::Found(record)) => LookupOutcome::Success(record),
        Ok(DirectoryReply::NotFound { message }) => LookupOutcome::NotFound(
            message.unwrap_or_else(|| DEFAULT_NOT_FOUND_MESSAGE.to_owned()),
        ),
        Err(error) => {
            debug!(%error, "student directory call failed");
            LookupOutcome::TransportError(transport_message(error))
        }
    }
}

fn transport_message(error: StudentDirectoryError) -> String {
    match error {
        StudentDirectoryError::Status { status, message } => {
            message.unwrap_or_else(|| format!("HTTP error! status: {status}"))
        }
        StudentDirectoryError::Transport { .. } => CONNECTION_FAILURE_MESSAGE.to_owned(),
        StudentDirectoryError::Decode { .. } => INVALID_RESPONSE_MESSAGE.to_owned(),
        StudentDirectoryError::MalformedRecord { .. } => INVALID_RECORD_MESSAGE.to_owned(),
    }
}
