//! # Photo Overlay Component
//!
//! Full-screen view of a single photo. Opened with Enter on a grid card,
//! closed with Esc (or Enter again).

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Padding, Paragraph, Wrap};

use crate::network::MarsPhoto;
use crate::tui::component::Component;

pub struct PhotoOverlay<'a> {
    photo: &'a MarsPhoto,
    /// Zero-based position in the listing
    position: usize,
    total: usize,
}

impl<'a> PhotoOverlay<'a> {
    pub fn new(photo: &'a MarsPhoto, position: usize, total: usize) -> Self {
        Self {
            photo,
            position,
            total,
        }
    }
}

impl Component for PhotoOverlay<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let label = Style::default().fg(Color::DarkGray);
        let lines = vec![
            Line::from(vec![
                Span::styled("id     ", label),
                Span::styled(
                    self.photo.id.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("image  ", label),
                Span::styled(self.photo.img_src.as_str(), Style::default().fg(Color::Cyan)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!("{} of {}", self.position + 1, self.total),
                label,
            )),
        ];

        let block = Block::bordered()
            .title(format!(" Photo {} ", self.photo.id))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Esc Close ").centered())
            .border_style(Style::default().fg(Color::LightRed))
            .padding(Padding::uniform(1));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_overlay_shows_full_url() {
        let photo = MarsPhoto::new(
            "424905",
            "http://mars.jpl.nasa.gov/msl-raw-images/msss/01000/mcam/1000MR0044631300503690E01_DXXX.jpg",
        );
        let backend = TestBackend::new(120, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| PhotoOverlay::new(&photo, 2, 9).render(f, f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("Photo 424905"));
        assert!(text.contains("1000MR0044631300503690E01_DXXX.jpg"));
        assert!(text.contains("3 of 9"));
        assert!(text.contains("Esc Close"));
    }
}
