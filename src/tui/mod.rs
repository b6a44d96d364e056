//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the fetch
//! state, and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms for the spinner. This also bounds how
//!   long a resolved fetch waits before it is drawn.
//! - **Idle** (grid, overlay or error): sleeps up to 500ms and only redraws
//!   on input, resize, or a published state transition.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::network::{FetchError, MarsApiClient, PhotoSource};
use crate::tui::component::EventHandler;
use crate::tui::components::{GridEvent, PhotoGridState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub grid: PhotoGridState,
}

impl TuiState {
    pub fn new(columns: u16) -> Self {
        Self {
            grid: PhotoGridState::new(columns),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Build the photo source from a resolved config. Call once per process.
pub fn build_source(config: &ResolvedConfig) -> Result<Arc<dyn PhotoSource>, FetchError> {
    let client = MarsApiClient::new(config.base_url.clone(), config.timeout)?;
    info!("Photo source: {} (timeout {:?})", client.photos_url(), config.timeout);
    Ok(Arc::new(client))
}

pub fn run(config: ResolvedConfig, source: Arc<dyn PhotoSource>) -> std::io::Result<()> {
    let mut app = App::new(source);
    let mut tui = TuiState::new(config.columns);

    // The one fetch per launch
    update(&mut app, Action::Refresh);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if app.observe_transitions() {
            debug!("Observed transition: {}", app.status_message);
            if app.state().photos().is_some() {
                tui.grid.reset();
            }
            needs_redraw = true;
        }

        let animating = app.state().is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            // Photos that scrolled out of view start collapsed when they return.
            if app.open_photo().is_none() {
                app.overlays
                    .retain_visible(tui.grid.visible_ids.iter().map(String::as_str));
            }
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match handle_event(&mut app, &mut tui, event) {
                Effect::Quit => should_quit = true,
                Effect::Redraw => needs_redraw = true,
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Routes one terminal event: global keys first, then the open overlay,
/// then the grid.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => return update(app, Action::Quit),
        TuiEvent::Resize => return Effect::Redraw,
        TuiEvent::Refresh => {
            tui.grid.reset();
            return update(app, Action::Refresh);
        }
        _ => {}
    }

    if let Some(id) = app.open_photo().map(|photo| photo.id.clone()) {
        return match event {
            TuiEvent::Escape => update(app, Action::DismissOverlay(id)),
            TuiEvent::Submit => update(app, Action::ToggleOverlay(id)),
            _ => Effect::None,
        };
    }

    let toggled_id = match app.state().photos() {
        Some(photos) => {
            tui.grid.set_item_count(photos.len());
            match tui.grid.handle_event(&event) {
                Some(GridEvent::Toggle(index)) => photos.get(index).map(|p| p.id.clone()),
                None => return Effect::Redraw,
            }
        }
        None => return Effect::None,
    };

    match toggled_id {
        Some(id) => update(app, Action::ToggleOverlay(id)),
        None => {
            warn!("Grid selection out of range");
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::photo_state::FetchState;
    use crate::test_support::{ScriptedSource, photos, test_app};

    async fn resolved_app(listing: Vec<crate::network::MarsPhoto>) -> App {
        let source = ScriptedSource::new();
        source.push_ok(listing);
        let mut app = App::new(Arc::new(source));
        app.photos.start();
        let mut rx = app.photos.subscribe();
        rx.wait_for(|s| s.is_terminal()).await.unwrap();
        app.observe_transitions();
        app
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        let mut tui = TuiState::new(3);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Quit), Effect::Quit);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit), Effect::Quit);
    }

    #[test]
    fn test_grid_keys_ignored_while_loading() {
        let mut app = test_app();
        let mut tui = TuiState::new(3);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Submit), Effect::None);
        assert!(app.open_photo().is_none());
    }

    #[tokio::test]
    async fn test_enter_opens_selected_and_escape_closes() {
        let mut app = resolved_app(photos(&[("1", "u1"), ("2", "u2"), ("3", "u3")])).await;
        let mut tui = TuiState::new(3);

        handle_event(&mut app, &mut tui, TuiEvent::CursorRight);
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.open_photo().map(|p| p.id.as_str()), Some("2"));
        assert!(!app.overlays.is_open("1"));

        // Navigation is swallowed while the overlay is up
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::CursorRight), Effect::None);
        assert_eq!(tui.grid.selected, 1);

        handle_event(&mut app, &mut tui, TuiEvent::Escape);
        assert!(app.open_photo().is_none());
        assert!(!app.overlays.is_open("2"));
    }

    #[tokio::test]
    async fn test_enter_twice_closes() {
        let mut app = resolved_app(photos(&[("1", "u1")])).await;
        let mut tui = TuiState::new(3);

        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert!(app.overlays.is_open("1"));
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert!(!app.overlays.is_open("1"));
    }

    #[tokio::test]
    async fn test_refresh_restarts_fetch() {
        let mut app = resolved_app(photos(&[("1", "u1")])).await;
        let mut tui = TuiState::new(3);
        let before = app.photos.generation();

        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Refresh), Effect::Redraw);
        assert_eq!(app.photos.generation(), before + 1);
        assert_eq!(*app.state(), FetchState::Loading);
    }
}
