use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::photo_state::FetchState;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ErrorScreen, LoadingScreen, PhotoGrid, PhotoOverlay, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.status_message.clone(), app.last_updated).render(frame, title_area);
    draw_home(frame, main_area, app, tui, spinner_frame);
    frame.render_widget(
        Line::from(help_text(app.state())).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    // The overlay covers everything, so at most one is ever visible. Ids may
    // repeat in a listing; the selected card wins over earlier duplicates.
    if let Some(photos) = app.state().photos()
        && let Some(position) = tui
            .grid
            .selected_index()
            .filter(|&i| photos.get(i).is_some_and(|p| app.overlays.is_open(&p.id)))
            .or_else(|| photos.iter().position(|p| app.overlays.is_open(&p.id)))
    {
        PhotoOverlay::new(&photos[position], position, photos.len()).render(frame, frame.area());
    }
}

/// Picks the screen for the current fetch state.
fn draw_home(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    match app.state() {
        FetchState::Loading => LoadingScreen::new(spinner_frame).render(frame, area),
        FetchState::Success(photos) => PhotoGrid::new(&mut tui.grid, photos).render(frame, area),
        FetchState::Error => ErrorScreen.render(frame, area),
    }
}

fn help_text(state: &FetchState) -> &'static str {
    match state {
        FetchState::Loading => " q Quit",
        FetchState::Success(_) => " ←↑↓→ Move  Enter Open  r Refresh  q Quit",
        FetchState::Error => " r Retry  q Quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::FetchError;
    use crate::test_support::{ScriptedSource, photos, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    async fn resolved_app(source: ScriptedSource) -> App {
        let mut app = App::new(Arc::new(source));
        app.photos.start();
        let mut rx = app.photos.subscribe();
        rx.wait_for(|s| s.is_terminal()).await.unwrap();
        app.observe_transitions();
        app
    }

    #[test]
    fn test_draw_loading() {
        let app = test_app();
        let mut tui = TuiState::new(3);
        let text = draw(&app, &mut tui);
        assert!(text.contains("Mars Photos"));
        assert!(text.contains("Loading…"));
        assert!(text.contains("q Quit"));
    }

    #[tokio::test]
    async fn test_draw_error() {
        let source = ScriptedSource::new();
        source.push_err(FetchError::Api {
            status: 404,
            message: "not here".to_string(),
        });
        let app = resolved_app(source).await;
        let mut tui = TuiState::new(3);
        let text = draw(&app, &mut tui);
        assert!(text.contains("Failed to load photos"));
        // No detail leaks to the screen
        assert!(!text.contains("404"));
        assert!(!text.contains("not here"));
    }

    #[tokio::test]
    async fn test_draw_grid_and_overlay() {
        let source = ScriptedSource::new();
        source.push_ok(photos(&[("1", "http://m/one.jpg"), ("2", "http://m/two.jpg")]));
        let mut app = resolved_app(source).await;
        let mut tui = TuiState::new(3);

        let text = draw(&app, &mut tui);
        assert!(text.contains("2 photos"));
        assert!(text.contains("one.jpg"));
        assert!(text.contains("two.jpg"));
        assert!(!text.contains("Esc Close"));

        app.overlays.toggle("2");
        let text = draw(&app, &mut tui);
        assert!(text.contains("Photo 2"));
        assert!(text.contains("http://m/two.jpg"));
        assert!(text.contains("Esc Close"));
        assert!(!text.contains("one.jpg"));
    }

    #[tokio::test]
    async fn test_overlay_shows_selected_duplicate() {
        let source = ScriptedSource::new();
        source.push_ok(photos(&[
            ("2", "http://m/first.jpg"),
            ("1", "http://m/one.jpg"),
            ("2", "http://m/second.jpg"),
        ]));
        let mut app = resolved_app(source).await;
        let mut tui = TuiState::new(3);
        draw(&app, &mut tui);
        tui.grid.selected = 2;

        app.overlays.toggle("2");
        let text = draw(&app, &mut tui);
        assert!(text.contains("second.jpg"));
        assert!(text.contains("3 of 3"));
        assert!(!text.contains("first.jpg"));
    }

    #[test]
    fn test_help_text_per_state() {
        assert!(help_text(&FetchState::Error).contains("Retry"));
        assert!(help_text(&FetchState::Success(Vec::new())).contains("Refresh"));
        assert!(!help_text(&FetchState::Loading).contains("Refresh"));
    }
}
