//! # Core Application Logic
//!
//! This module contains the photo browser's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • FetchState           │
//!                    │  • PhotosViewModel      │
//!                    │  • OverlayState         │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │  network   │
//!             │  Renderer  │          │ PhotoSource│
//!             │ (ratatui)  │          │ (reqwest)  │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`photo_state`]: `FetchState` — Loading / Success / Error
//! - [`view_model`]: `PhotosViewModel` — owns the state, runs the fetch
//! - [`overlay`]: `OverlayState` — per-photo full-view flags
//! - [`state`]: `App` — everything the renderer reads
//! - [`action`]: `Action` / `update()` — everything the user can do
//! - [`config`]: settings resolution

pub mod action;
pub mod config;
pub mod overlay;
pub mod photo_state;
pub mod state;
pub mod view_model;

pub use photo_state::FetchState;
pub use view_model::PhotosViewModel;
