//! Driven port for looking up a student by enrollment number.
//!
//! Adapters own transport details (status codes, JSON decoding). They report
//! what the backend said through [`DirectoryReply`] or a typed
//! [`StudentDirectoryError`]; the lookup service turns either into a
//! `LookupOutcome`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{LookupRequest, StudentRecord};

/// Successful exchange with the student directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryReply {
    /// The backend returned a complete record.
    Found(StudentRecord),
    /// The backend answered but reported no matching student.
    NotFound {
        /// Message supplied by the backend, if any.
        message: Option<String>,
    },
}

/// Errors surfaced while calling the student directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudentDirectoryError {
    /// No response was received.
    #[error("student directory transport failed: {message}")]
    Transport {
        /// Underlying transport failure.
        message: String,
    },
    /// The backend answered with a non-success HTTP status.
    #[error("student directory returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// `message` field from the error body, when it could be decoded.
        message: Option<String>,
    },
    /// A success response body could not be decoded.
    #[error("student directory response decode failed: {message}")]
    Decode {
        /// Decoder diagnostic.
        message: String,
    },
    /// The backend reported success but the record lacks required fields.
    #[error("student directory returned a malformed record: {message}")]
    MalformedRecord {
        /// Description of the missing data.
        message: String,
    },
}

impl StudentDirectoryError {
    /// Convenience constructor for [`StudentDirectoryError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`StudentDirectoryError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`StudentDirectoryError::MalformedRecord`].
    pub fn malformed_record(message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            message: message.into(),
        }
    }
}

/// Port for fetching one student record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentDirectory: Send + Sync {
    /// Look up the student identified by `request`.
    ///
    /// Implementations issue at most one backend call and never retry.
    async fn find_student(
        &self,
        request: &LookupRequest,
    ) -> Result<DirectoryReply, StudentDirectoryError>;
}
