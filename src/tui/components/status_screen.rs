//! # Status Screens
//!
//! Full-area placeholders for the two non-listing states.
//!
//! - `LoadingScreen`: animated spinner while the fetch is in flight
//! - `ErrorScreen`: fixed failure message; the cause is never shown

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const LOADING_TEXT: &str = "Loading…";
pub const LOADING_FAILED_TEXT: &str = "Failed to load photos";
const RETRY_HINT: &str = "Press r to try again";

pub struct LoadingScreen {
    frame_index: usize,
}

impl LoadingScreen {
    pub fn new(frame_index: usize) -> Self {
        Self { frame_index }
    }

    fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.frame_index % SPINNER_FRAMES.len()]
    }
}

impl Component for LoadingScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(self.spinner(), Style::default().fg(Color::LightRed))),
            Line::from(Span::styled(LOADING_TEXT, Style::default().fg(Color::DarkGray))),
        ];
        render_centered(frame, area, lines);
    }
}

pub struct ErrorScreen;

impl Component for ErrorScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "✕",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                LOADING_FAILED_TEXT,
                Style::default().fg(Color::Red),
            )),
            Line::from(""),
            Line::from(Span::styled(RETRY_HINT, Style::default().fg(Color::DarkGray))),
        ];
        render_centered(frame, area, lines);
    }
}

/// Centers `lines` vertically and horizontally within `area`.
fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    let height = lines.len() as u16;
    let [center] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, center);
}
