//! # Application State
//!
//! Core business state for the photo browser. No TUI-specific types live
//! here; presentation state (selection cursor, scroll) lives in `tui`.
//!
//! ```text
//! App
//! ├── photos: PhotosViewModel      // fetch state machine
//! ├── overlays: OverlayState       // per-photo full-view flags
//! ├── status_message: String       // status bar text
//! └── last_updated: Option<..>     // when the last fetch resolved
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs,
//! plus `observe_transitions()` which the event loop calls every tick.

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::core::overlay::OverlayState;
use crate::core::photo_state::FetchState;
use crate::core::view_model::PhotosViewModel;
use crate::network::{MarsPhoto, PhotoSource};

pub struct App {
    pub photos: PhotosViewModel,
    pub overlays: OverlayState,
    pub status_message: String,
    pub last_updated: Option<DateTime<Local>>,
    /// Snapshot of `photos` taken at the last observed transition.
    state: FetchState,
}

impl App {
    /// Builds the app around `source` without fetching yet.
    pub fn new(source: Arc<dyn PhotoSource>) -> Self {
        let photos = PhotosViewModel::new(source);
        let state = photos.current_state();
        Self {
            photos,
            overlays: OverlayState::new(),
            status_message: state.summary(),
            last_updated: None,
            state,
        }
    }

    /// The state the renderer should draw.
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Photo whose overlay is open, if any.
    pub fn open_photo(&self) -> Option<&MarsPhoto> {
        self.state
            .photos()
            .and_then(|photos| self.overlays.open_photo(photos))
    }

    /// Pulls the latest published state from the view model.
    /// Returns true if something changed and a redraw is needed.
    pub fn observe_transitions(&mut self) -> bool {
        if !self.photos.poll_changed() {
            return false;
        }
        self.state = self.photos.current_state();
        self.status_message = self.state.summary();
        if self.state.is_terminal() {
            self.last_updated = Some(Local::now());
        }
        // A new listing is rendered fresh, so every photo starts collapsed.
        self.overlays.clear();
        true
    }
}
