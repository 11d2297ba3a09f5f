//! View model for the student card.
//!
//! Rendering is a pure function of what the lookup produced: a lookup outcome
//! plus its photo resolution, or a validation rejection. Presentation layers
//! only ever consume [`CardView`] values.

use serde::Serialize;

use crate::domain::photo::PhotoResolution;
use crate::domain::{DetailRow, LookupOutcome, LookupRequestError, StudentRecord, render_fields};

/// Banner shown after a successful lookup.
pub const SUCCESS_BANNER: &str = "Student details retrieved successfully!";
/// Caption shown in place of a missing photo.
pub const PHOTO_PLACEHOLDER_CAPTION: &str = "Photo Not Available";

/// Dismissible status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Banner {
    /// Lookup succeeded.
    Success(String),
    /// Validation, not-found, or transport failure.
    Error(String),
}

impl Banner {
    /// Message text regardless of kind.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Error(message) => message.as_str(),
        }
    }
}

/// Photo area of the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PhotoView {
    /// Resolution still running; rows are already visible.
    Pending,
    /// A locator loaded.
    Image {
        /// Locator to display.
        src: String,
        /// Alternative text.
        alt: String,
    },
    /// Nothing loadable.
    Placeholder {
        /// Caption shown in the placeholder.
        caption: String,
    },
}

impl PhotoView {
    /// Derive the photo area from a resolution.
    #[must_use]
    pub fn from_resolution(resolution: &PhotoResolution, record: &StudentRecord) -> Self {
        match resolution.locator() {
            Some(src) => Self::Image {
                src: src.to_owned(),
                alt: format!("Photo of {}", display_name(record)),
            },
            None => Self::Placeholder {
                caption: PHOTO_PLACEHOLDER_CAPTION.to_owned(),
            },
        }
    }
}

/// Rendered student card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentCard {
    /// Ordered detail rows.
    pub rows: Vec<DetailRow>,
    /// Photo area.
    pub photo: PhotoView,
}

/// Everything the presentation layer shows for the lookup widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// A search is in flight.
    pub loading: bool,
    /// Status message, if any.
    pub banner: Option<Banner>,
    /// Student card, shown only after a successful lookup.
    pub card: Option<StudentCard>,
}

impl CardView {
    /// View shown while a search is running: previous banner and card cleared.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Render the final view for a completed lookup.
    ///
    /// # Examples
    /// ```
    /// use student_portal_client::domain::{CardView, LookupOutcome, PhotoResolution};
    ///
    /// let view = CardView::render(
    ///     &LookupOutcome::NotFound("none".to_owned()),
    ///     &PhotoResolution::NoPhoto,
    /// );
    /// assert!(view.card.is_none());
    /// assert_eq!(view.banner.map(|b| b.message().to_owned()), Some("none".to_owned()));
    /// ```
    #[must_use]
    pub fn render(outcome: &LookupOutcome, photo: &PhotoResolution) -> Self {
        match outcome {
            LookupOutcome::Success(record) => Self {
                loading: false,
                banner: Some(Banner::Success(SUCCESS_BANNER.to_owned())),
                card: Some(StudentCard {
                    rows: render_fields(record),
                    photo: PhotoView::from_resolution(photo, record),
                }),
            },
            LookupOutcome::NotFound(message) | LookupOutcome::TransportError(message) => {
                Self::error(message)
            }
        }
    }

    /// Render a found record whose photo is still resolving.
    #[must_use]
    pub fn render_pending_photo(record: &StudentRecord) -> Self {
        Self {
            loading: true,
            banner: None,
            card: Some(StudentCard {
                rows: render_fields(record),
                photo: PhotoView::Pending,
            }),
        }
    }

    /// Render a rejected input.
    #[must_use]
    pub fn render_rejection(error: &LookupRequestError) -> Self {
        Self::error(&error.to_string())
    }

    fn error(message: &str) -> Self {
        Self {
            loading: false,
            banner: Some(Banner::Error(message.to_owned())),
            card: None,
        }
    }
}

fn display_name(record: &StudentRecord) -> &str {
    record
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(record.student_id.as_str())
}

#[cfg(test)]
mod tests {
    //! Rendering coverage for the card view model.

    use super::*;
    use rstest::rstest;

    fn asha() -> StudentRecord {
        StudentRecord {
            name: Some("Asha".to_owned()),
            ..StudentRecord::new("S1")
        }
    }

    #[test]
    fn success_renders_card_with_loaded_photo() {
        let view = CardView::render(
            &LookupOutcome::Success(asha()),
            &PhotoResolution::Backup("/photos/b.jpg".to_owned()),
        );

        assert!(!view.loading);
        assert_eq!(view.banner, Some(Banner::Success(SUCCESS_BANNER.to_owned())));
        let card = view.card.expect("card should render");
        assert_eq!(card.rows.len(), 7);
        assert_eq!(
            card.photo,
            PhotoView::Image {
                src: "/photos/b.jpg".to_owned(),
                alt: "Photo of Asha".to_owned(),
            }
        );
    }

    #[test]
    fn success_without_photo_uses_placeholder() {
        let view = CardView::render(&LookupOutcome::Success(asha()), &PhotoResolution::NoPhoto);
        let card = view.card.expect("card should render");
        assert_eq!(
            card.photo,
            PhotoView::Placeholder {
                caption: PHOTO_PLACEHOLDER_CAPTION.to_owned()
            }
        );
    }

    #[rstest]
    #[case::not_found(LookupOutcome::NotFound("none".to_owned()), "none")]
    #[case::transport(LookupOutcome::TransportError("offline".to_owned()), "offline")]
    fn failures_render_error_banner_without_card(
        #[case] outcome: LookupOutcome,
        #[case] expected: &str,
    ) {
        let view = CardView::render(&outcome, &PhotoResolution::Primary("/p.jpg".to_owned()));
        assert!(!view.loading, "view should return to ready");
        assert!(view.card.is_none());
        assert_eq!(view.banner, Some(Banner::Error(expected.to_owned())));
    }

    #[test]
    fn rejection_renders_validation_message() {
        let view = CardView::render_rejection(&LookupRequestError::Empty);
        assert_eq!(
            view.banner.as_ref().map(Banner::message),
            Some("Please enter an enrollment number")
        );
        assert!(view.card.is_none());
    }

    #[test]
    fn pending_photo_keeps_rows_visible() {
        let view = CardView::render_pending_photo(&asha());
        let card = view.card.expect("card should render");
        assert_eq!(card.photo, PhotoView::Pending);
        assert_eq!(card.rows[1].value, "Asha");
    }

    #[rstest]
    #[case::absent(None)]
    #[case::empty(Some(""))]
    fn nameless_record_uses_student_id_in_alt_text(#[case] name: Option<&str>) {
        let record = StudentRecord {
            name: name.map(str::to_owned),
            ..StudentRecord::new("S1")
        };
        let photo = PhotoView::from_resolution(
            &PhotoResolution::Primary("/photos/a.jpg".to_owned()),
            &record,
        );
        assert_eq!(
            photo,
            PhotoView::Image {
                src: "/photos/a.jpg".to_owned(),
                alt: "Photo of S1".to_owned(),
            }
        );
    }
}
