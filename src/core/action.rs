//! # Actions
//!
//! Everything the user can do becomes an `Action`.
//! User presses Enter on a photo? That's `Action::ToggleOverlay(id)`.
//! User presses `r`? That's `Action::Refresh`.
//!
//! The `update()` function applies an action to the `App` and returns an
//! `Effect` telling the event loop what to do next.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Fetch results never pass through here: the view model publishes them
//! itself and the loop picks them up via `App::observe_transitions`.

use log::{debug, info};

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start a fresh fetch, superseding any in flight.
    Refresh,
    ToggleOverlay(String),
    DismissOverlay(String),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
    Quit,
}

/// Must be called from within a Tokio runtime (`Refresh` spawns a fetch).
pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Refresh => {
            let generation = app.photos.start();
            info!("Refresh requested (generation={})", generation);
            app.observe_transitions();
            Effect::Redraw
        }
        Action::ToggleOverlay(id) => {
            let open = app.overlays.toggle(&id);
            debug!("Overlay for {} is now {}", id, if open { "open" } else { "closed" });
            Effect::Redraw
        }
        Action::DismissOverlay(id) => {
            app.overlays.dismiss(&id);
            Effect::Redraw
        }
        Action::Quit => Effect::Quit,
    }
}
