//! Scripted port doubles shared by integration tests.
//!
//! Only compiled with the `test-support` feature.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::LookupRequest;
use crate::domain::ports::{
    DirectoryReply, ImageLoadError, ImageProbe, StudentDirectory, StudentDirectoryError,
};

type ScriptedReply = Result<DirectoryReply, StudentDirectoryError>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Student directory replaying scripted replies in order.
///
/// Tracks how many calls overlapped so tests can assert serialisation. When a
/// gate is installed, each call waits on it before replying.
#[derive(Default)]
pub struct ScriptedStudentDirectory {
    scripted: Mutex<VecDeque<ScriptedReply>>,
    requests: Mutex<Vec<String>>,
    active: AtomicUsize,
    max_active: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl ScriptedStudentDirectory {
    /// Replay `scripted` replies, one per call.
    pub fn new(scripted: Vec<ScriptedReply>) -> Self {
        Self {
            scripted: Mutex::new(scripted.into()),
            ..Self::default()
        }
    }

    /// Hold every call until `gate` is notified.
    #[must_use]
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Identifiers received so far, in call order.
    pub fn requests(&self) -> Vec<String> {
        lock(&self.requests).clone()
    }

    /// Highest number of calls observed in flight at once.
    pub fn max_active(&self) -> usize {
        self.max_active.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StudentDirectory for ScriptedStudentDirectory {
    async fn find_student(&self, request: &LookupRequest) -> ScriptedReply {
        lock(&self.requests).push(request.identifier().to_owned());
        let active_now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(active_now, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.active.fetch_sub(1, Ordering::SeqCst);
        lock(&self.scripted)
            .pop_front()
            .unwrap_or_else(|| Err(StudentDirectoryError::transport("no scripted reply left")))
    }
}

/// Image probe that loads only the listed locators and records every attempt.
#[derive(Default)]
pub struct ScriptedImageProbe {
    loadable: Vec<String>,
    attempts: Mutex<Vec<String>>,
}

impl ScriptedImageProbe {
    /// Treat exactly `loadable` as loadable.
    pub fn new<I, S>(loadable: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            loadable: loadable.into_iter().map(Into::into).collect(),
            attempts: Mutex::default(),
        }
    }

    /// Locators attempted so far, in order.
    pub fn attempts(&self) -> Vec<String> {
        lock(&self.attempts).clone()
    }
}

#[async_trait]
impl ImageProbe for ScriptedImageProbe {
    async fn load(&self, locator: &str) -> Result<(), ImageLoadError> {
        lock(&self.attempts).push(locator.to_owned());
        if self.loadable.iter().any(|candidate| candidate == locator) {
            Ok(())
        } else {
            Err(ImageLoadError::Status {
                locator: locator.to_owned(),
                status: 404,
            })
        }
    }
}
