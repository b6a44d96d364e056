//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: top status line
//! - `LoadingScreen` / `ErrorScreen`: placeholders for the non-listing states
//! - `PhotoOverlay`: full-screen view of one photo
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `PhotoGrid`: scrollable, keyboard-navigable card grid. Persistent state
//!   lives in `PhotoGridState`; `PhotoGrid` is created each frame with
//!   borrowed state.
//!
//! Components receive external data as props, never by reaching into
//! `App`, which keeps them testable against a `TestBackend`.

pub mod photo_grid;
pub mod photo_overlay;
pub mod status_screen;
mod title_bar;

pub use photo_grid::{GridEvent, PhotoGrid, PhotoGridState};
pub use photo_overlay::PhotoOverlay;
pub use status_screen::{ErrorScreen, LoadingScreen};
pub use title_bar::TitleBar;
