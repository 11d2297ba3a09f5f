//! Lookup session owning the single rendered card.
//!
//! Searches are serialised: a search submitted while another is in flight
//! waits its turn on a fair async mutex, so views are applied in submission
//! order and never interleave. Each completed search overwrites the view.

use tokio::sync::{Mutex, watch};
use tracing::debug;

use crate::domain::lookup::StudentLookupClient;
use crate::domain::photo::PhotoResolution;
use crate::domain::{CardView, LookupRequest};

/// Stateful front for [`StudentLookupClient`] driven by user actions.
pub struct LookupSession {
    client: StudentLookupClient,
    turn: Mutex<()>,
    view: watch::Sender<CardView>,
}

impl LookupSession {
    /// Start a session with an empty view.
    pub fn new(client: StudentLookupClient) -> Self {
        let (view, _) = watch::channel(CardView::default());
        Self {
            client,
            turn: Mutex::new(()),
            view,
        }
    }

    /// Observe every view update, including intermediate loading states.
    pub fn subscribe(&self) -> watch::Receiver<CardView> {
        self.view.subscribe()
    }

    /// Snapshot of the current view.
    #[must_use]
    pub fn current(&self) -> CardView {
        self.view.borrow().clone()
    }

    /// Run one search for raw user input and return the final view.
    ///
    /// Rejected input only replaces the banner; the previous card stays.
    pub async fn submit(&self, raw: &str) -> CardView {
        let _turn = self.turn.lock().await;

        let request = match LookupRequest::parse(raw) {
            Ok(request) => request,
            Err(error) => {
                debug!(%error, "lookup input rejected");
                let banner = CardView::render_rejection(&error).banner;
                self.view.send_modify(|view| {
                    view.loading = false;
                    view.banner = banner;
                });
                return self.current();
            }
        };

        self.view.send_replace(CardView::loading());
        let outcome = self.client.search_request(&request).await;
        let photo = match outcome.record() {
            Some(record) => {
                self.view.send_replace(CardView::render_pending_photo(record));
                self.client.resolve_photo(record).await
            }
            None => PhotoResolution::NoPhoto,
        };

        let rendered = CardView::render(&outcome, &photo);
        self.view.send_replace(rendered.clone());
        rendered
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for session view transitions.

    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{
        DirectoryReply, MockImageProbe, MockStudentDirectory,
    };
    use crate::domain::{Banner, PhotoView, StudentRecord};

    fn session(directory: MockStudentDirectory, images: MockImageProbe) -> LookupSession {
        LookupSession::new(StudentLookupClient::new(
            Arc::new(directory),
            Arc::new(images),
        ))
    }

    #[tokio::test]
    async fn rejected_input_keeps_previous_card() {
        let mut directory = MockStudentDirectory::new();
        directory.expect_find_student().times(1).returning(|_| {
            Ok(DirectoryReply::Found(StudentRecord::new("S1")))
        });
        let session = session(directory, MockImageProbe::new());

        let first = session.submit("AB123").await;
        assert!(first.card.is_some());

        let second = session.submit("x").await;
        assert_eq!(second.card, first.card);
        assert_eq!(
            second.banner,
            Some(Banner::Error(
                "Please enter a valid enrollment number format".to_owned()
            ))
        );
        assert!(!second.loading);
    }

    #[tokio::test]
    async fn not_found_clears_previous_card() {
        let mut directory = MockStudentDirectory::new();
        let mut replies = vec![
            Ok(DirectoryReply::NotFound { message: None }),
            Ok(DirectoryReply::Found(StudentRecord::new("S1"))),
        ];
        directory
            .expect_find_student()
            .times(2)
            .returning(move |_| replies.pop().unwrap_or(Ok(DirectoryReply::NotFound { message: None })));
        let session = session(directory, MockImageProbe::new());

        assert!(session.submit("AB123").await.card.is_some());
        let view = session.submit("AB124").await;
        assert!(view.card.is_none());
        assert!(matches!(view.banner, Some(Banner::Error(_))));
    }

    #[tokio::test]
    async fn photo_resolution_follows_pending_rows() {
        let mut directory = MockStudentDirectory::new();
        directory.expect_find_student().returning(|_| {
            Ok(DirectoryReply::Found(StudentRecord {
                primary_image_path: Some("/p.jpg".to_owned()),
                ..StudentRecord::new("S1")
            }))
        });
        let mut images = MockImageProbe::new();
        images.expect_load().times(1).returning(|_| Ok(()));
        let session = session(directory, images);
        let mut updates = session.subscribe();

        let view = session.submit("AB123").await;
        assert!(updates.has_changed().unwrap_or(false));
        let card = view.card.expect("card should render");
        assert!(matches!(card.photo, PhotoView::Image { .. }));
        assert_eq!(*updates.borrow_and_update(), session.current());
    }
}
