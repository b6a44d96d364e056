//! # TitleBar Component
//!
//! Top status bar showing the fetch status.
//!
//! ## Conditional Formatting
//!
//! 1. **Resolved**: `"Mars Photos | 12 photos | updated 14:03:22"`
//! 2. **In flight**: `"Mars Photos | Loading…"`
//! 3. **No status**: `"Mars Photos"`
//!
//! TitleBar is purely presentational. It receives all data as props and
//! has no internal state.

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar {
    /// Status message (e.g., "Loading…", "12 photos")
    pub status_message: String,
    /// When the last fetch resolved
    pub last_updated: Option<DateTime<Local>>,
}

impl TitleBar {
    pub fn new(status_message: String, last_updated: Option<DateTime<Local>>) -> Self {
        Self {
            status_message,
            last_updated,
        }
    }

    fn title_text(&self) -> String {
        let mut text = String::from("Mars Photos");
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if let Some(updated) = self.last_updated {
            text.push_str(&format!(" | updated {}", updated.format("%H:%M:%S")));
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.title_text(),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_loading() {
        let mut title_bar = TitleBar::new("Loading…".to_string(), None);
        let text = rendered_text(&mut title_bar);
        assert!(text.contains("Mars Photos"));
        assert!(text.contains("Loading…"));
        assert!(!text.contains("updated"));
    }

    #[test]
    fn test_title_bar_with_timestamp() {
        let updated = Local.with_ymd_and_hms(2024, 5, 1, 14, 3, 22).unwrap();
        let mut title_bar = TitleBar::new("12 photos".to_string(), Some(updated));
        let text = rendered_text(&mut title_bar);
        assert!(text.contains("12 photos"));
        assert!(text.contains("updated 14:03:22"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new(String::new(), None);
        let text = rendered_text(&mut title_bar);
        assert!(text.contains("Mars Photos"));
        assert!(!text.contains('|'));
    }
}
