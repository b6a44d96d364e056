//! # Photos View Model
//!
//! Owns the `FetchState` and drives the single fetch that moves it out of
//! `Loading`.
//!
//! ```text
//! start() ──▶ Loading (sync) ──▶ spawn fetch ──┬─ Ok  ──▶ Success(photos)
//!                                              └─ Err ──▶ Error
//! ```
//!
//! Every `start()` bumps a generation counter. A spawned fetch only
//! publishes if its generation is still current, and the check happens
//! under the watch channel's write lock, so a superseded or abandoned
//! attempt can never become visible. Dropping the view model counts as
//! abandoning the in-flight attempt.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::task::AbortHandle;

use crate::core::photo_state::FetchState;
use crate::network::{FetchError, MarsPhoto, PhotoSource};

pub struct PhotosViewModel {
    source: Arc<dyn PhotoSource>,
    state_tx: Arc<watch::Sender<FetchState>>,
    /// Private receiver used to answer `poll_changed`.
    state_rx: watch::Receiver<FetchState>,
    generation: Arc<AtomicU64>,
    task: Option<AbortHandle>,
}

impl PhotosViewModel {
    /// Creates a view model in `Loading` without issuing a fetch.
    pub fn new(source: Arc<dyn PhotoSource>) -> Self {
        let (state_tx, state_rx) = watch::channel(FetchState::Loading);
        Self {
            source,
            state_tx: Arc::new(state_tx),
            state_rx,
            generation: Arc::new(AtomicU64::new(0)),
            task: None,
        }
    }

    /// Creates a view model and immediately starts the fetch.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn launch(source: Arc<dyn PhotoSource>) -> Self {
        let mut view_model = Self::new(source);
        view_model.start();
        view_model
    }

    /// Snapshot of the most recently published state.
    pub fn current_state(&self) -> FetchState {
        self.state_tx.borrow().clone()
    }

    /// A receiver that observes every published transition.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state_tx.subscribe()
    }

    /// Returns true if a transition was published since the last call.
    pub fn poll_changed(&mut self) -> bool {
        match self.state_rx.has_changed() {
            Ok(true) => {
                self.state_rx.borrow_and_update();
                true
            }
            _ => false,
        }
    }

    /// Generation of the most recent `start()`; 0 before the first one.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Sets `Loading` and spawns one fetch. Any earlier in-flight fetch is
    /// superseded and its outcome will be discarded.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(&mut self) -> u64 {
        if let Some(handle) = self.task.take() {
            handle.abort();
        }

        let mut generation = 0;
        self.state_tx.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = FetchState::Loading;
        });

        info!(
            "Starting photo fetch (generation={}, source={})",
            generation,
            self.source_name()
        );

        let source = Arc::clone(&self.source);
        let state_tx = Arc::clone(&self.state_tx);
        let current = Arc::clone(&self.generation);

        let handle = tokio::spawn(async move {
            let outcome = source.fetch_photos().await;
            if !publish_outcome(&state_tx, &current, generation, outcome) {
                debug!("Discarded stale fetch result (generation={})", generation);
            }
        });

        self.task = Some(handle.abort_handle());
        generation
    }
}

impl Drop for PhotosViewModel {
    fn drop(&mut self) {
        // Invalidate under the lock so a task racing the abort cannot publish.
        self.state_tx.send_if_modified(|_| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            false
        });
        if let Some(handle) = self.task.take() {
            handle.abort();
        }
    }
}

/// Converts a fetch outcome into a state and publishes it if `generation`
/// is still current. Returns whether it was published.
fn publish_outcome(
    state_tx: &watch::Sender<FetchState>,
    current: &AtomicU64,
    generation: u64,
    outcome: Result<Vec<MarsPhoto>, FetchError>,
) -> bool {
    let next = match outcome {
        Ok(photos) => {
            info!(
                "Fetch succeeded with {} photos (generation={})",
                photos.len(),
                generation
            );
            FetchState::Success(photos)
        }
        Err(e) => {
            warn!("Fetch failed (generation={}): {}", generation, e);
            FetchState::Error
        }
    };

    state_tx.send_if_modified(|state| {
        if current.load(Ordering::SeqCst) != generation {
            return false;
        }
        *state = next;
        true
    })
}
