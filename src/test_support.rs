//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::network::{FetchError, MarsPhoto, PhotoSource};

struct Script {
    gate: Option<oneshot::Receiver<()>>,
    result: Result<Vec<MarsPhoto>, FetchError>,
}

/// A source that replays queued outcomes, one per call.
///
/// Gated outcomes wait until the returned sender fires (or is dropped).
/// Calls beyond the queue fail with a network error.
#[derive(Default)]
pub struct ScriptedSource {
    scripts: Mutex<VecDeque<Script>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, photos: Vec<MarsPhoto>) {
        self.push(None, Ok(photos));
    }

    pub fn push_err(&self, error: FetchError) {
        self.push(None, Err(error));
    }

    pub fn push_gated_ok(&self, photos: Vec<MarsPhoto>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.push(Some(rx), Ok(photos));
        tx
    }

    /// Number of `fetch_photos` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(&self, gate: Option<oneshot::Receiver<()>>, result: Result<Vec<MarsPhoto>, FetchError>) {
        self.scripts.lock().unwrap().push_back(Script { gate, result });
    }
}

#[async_trait]
impl PhotoSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch_photos(&self) -> Result<Vec<MarsPhoto>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let script = self.scripts.lock().unwrap().pop_front();
        match script {
            Some(Script { gate, result }) => {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                result
            }
            None => Err(FetchError::Network("no scripted response".to_string())),
        }
    }
}

/// Builds records from `(id, img_src)` pairs.
pub fn photos(pairs: &[(&str, &str)]) -> Vec<MarsPhoto> {
    pairs
        .iter()
        .map(|(id, img_src)| MarsPhoto::new(*id, *img_src))
        .collect()
}

/// Creates a test App around an empty ScriptedSource.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(ScriptedSource::new()))
}
