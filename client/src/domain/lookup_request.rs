//! Enrollment-number lookup requests.
//!
//! A [`LookupRequest`] is built once per user action from raw input. Input is
//! trimmed and upper-cased first, then checked against the enrollment-number
//! shape: 5 to 20 characters drawn from ASCII letters, digits, and hyphens.
//! Requests that fail validation never reach a port.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Minimum accepted identifier length.
pub const MIN_IDENTIFIER_LEN: usize = 5;
/// Maximum accepted identifier length.
pub const MAX_IDENTIFIER_LEN: usize = 20;

/// Return `true` when `identifier` is a well-formed enrollment number.
///
/// The check is applied to the value exactly as given: surrounding whitespace
/// makes the identifier invalid.
///
/// # Examples
/// ```
/// use student_portal_client::domain::validate;
///
/// assert!(validate("AB123"));
/// assert!(!validate("AB12"));
/// assert!(!validate("AB 123"));
/// ```
#[must_use]
pub fn validate(identifier: &str) -> bool {
    has_allowed_chars(identifier)
        && (MIN_IDENTIFIER_LEN..=MAX_IDENTIFIER_LEN).contains(&identifier.len())
}

fn has_allowed_chars(identifier: &str) -> bool {
    !identifier.is_empty()
        && identifier
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
}

/// Validation failures for raw lookup input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupRequestError {
    /// The input was empty once trimmed.
    #[error("Please enter an enrollment number")]
    Empty,
    /// The input violates the length or character constraints.
    #[error("Please enter a valid enrollment number format")]
    Malformed {
        /// Normalised input that failed validation.
        identifier: String,
    },
}

/// Validated enrollment-number lookup.
///
/// ## Invariants
/// - `identifier` satisfies [`validate`].
///
/// # Examples
/// ```
/// use student_portal_client::domain::LookupRequest;
///
/// let request = LookupRequest::parse("  ab-123 ").expect("valid input");
/// assert_eq!(request.identifier(), "AB-123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupRequest {
    identifier: String,
}

impl LookupRequest {
    /// Normalise raw user input and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`LookupRequestError::Empty`] for blank input and
    /// [`LookupRequestError::Malformed`] when the normalised value fails
    /// [`validate`].
    pub fn parse(raw: &str) -> Result<Self, LookupRequestError> {
        let identifier = raw.trim().to_ascii_uppercase();
        if identifier.is_empty() {
            return Err(LookupRequestError::Empty);
        }
        if !validate(&identifier) {
            return Err(LookupRequestError::Malformed { identifier });
        }
        Ok(Self { identifier })
    }

    /// The validated enrollment number.
    #[must_use]
    pub fn identifier(&self) -> &str {
        self.identifier.as_str()
    }
}

impl fmt::Display for LookupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}
