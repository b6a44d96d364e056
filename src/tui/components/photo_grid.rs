//! # PhotoGrid Component
//!
//! Scrollable grid of photo cards for the `Success` state.
//!
//! ## Architecture
//!
//! `PhotoGrid` is a transient component (created each frame) that wraps
//! `&'a mut PhotoGridState` (persistent state) and the photo slice (props).
//! Rendering updates the state: scroll offset follows the selection and
//! `visible_ids` records which photos ended up on screen, so the event loop
//! can reset overlay flags for photos that left view.
//!
//! ```text
//! ┌ #1 ──────┐┌ #2 ──────┐┌ #3 ──────┐
//! │102693    ││102694    ││102850    │
//! │1000MR0...││1000ML0...││1000MR0...│
//! └──────────┘└──────────┘└──────────┘
//! ```

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::network::MarsPhoto;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Rows per card: two content lines plus borders.
pub const CARD_HEIGHT: u16 = 4;

/// Most card rows whose offsets fit the scroll view's `u16` canvas.
pub const MAX_ROWS: usize = (u16::MAX / CARD_HEIGHT) as usize;

/// Selection and scroll state for the grid.
/// Must be persisted in the parent TuiState.
pub struct PhotoGridState {
    pub scroll_state: ScrollViewState,
    pub selected: usize,
    pub columns: u16,
    /// Last known viewport height (for paging and scroll clamping)
    pub viewport_height: u16,
    /// Ids of photos drawn in the last frame, in display order
    pub visible_ids: Vec<String>,
    item_count: usize,
}

/// Events emitted by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// Enter on the photo at this index.
    Toggle(usize),
}

impl PhotoGridState {
    pub fn new(columns: u16) -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            selected: 0,
            columns: columns.max(1),
            viewport_height: 0,
            visible_ids: Vec::new(),
            item_count: 0,
        }
    }

    /// Syncs the number of photos, clamping the selection. Listings past
    /// `MAX_ROWS` rows are cut off so every selectable card is drawn.
    pub fn set_item_count(&mut self, count: usize) {
        let limit = MAX_ROWS * self.cols();
        if count > limit && self.item_count != limit {
            log::warn!("Showing first {} of {} photos", limit, count);
        }
        let count = count.min(limit);
        self.item_count = count;
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }

    /// Index of the selected photo, `None` when the grid is empty.
    pub fn selected_index(&self) -> Option<usize> {
        (self.item_count > 0).then_some(self.selected)
    }

    /// Back to the top, used when a new listing arrives.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.visible_ids.clear();
        self.scroll_state.set_offset(Position { x: 0, y: 0 });
    }

    fn cols(&self) -> usize {
        self.columns.max(1) as usize
    }

    fn page_size(&self) -> usize {
        let rows = (self.viewport_height / CARD_HEIGHT).max(1) as usize;
        rows * self.cols()
    }

    fn move_by(&mut self, delta: isize) {
        if self.item_count == 0 {
            return;
        }
        let last = self.item_count - 1;
        self.selected = if delta < 0 {
            self.selected.saturating_sub(delta.unsigned_abs())
        } else {
            (self.selected + delta as usize).min(last)
        };
    }

    /// Adjusts the scroll offset so the selected card is fully visible.
    pub fn scroll_to_selected(&mut self) {
        let row = (self.selected / self.cols()) as u16;
        let top = row.saturating_mul(CARD_HEIGHT);
        let bottom = top.saturating_add(CARD_HEIGHT);
        let offset_y = self.scroll_state.offset().y;

        if top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: top });
        } else if self.viewport_height > 0 && bottom > offset_y + self.viewport_height {
            self.scroll_state.set_offset(Position {
                x: 0,
                y: bottom - self.viewport_height,
            });
        }
    }

    /// Indices of the photos whose rows intersect the viewport.
    fn visible_range(&self) -> Range<usize> {
        if self.viewport_height == 0 {
            return 0..0;
        }
        let offset_y = self.scroll_state.offset().y;
        let first_row = (offset_y / CARD_HEIGHT) as usize;
        let last_row = (offset_y.saturating_add(self.viewport_height - 1) / CARD_HEIGHT) as usize;
        let start = (first_row * self.cols()).min(self.item_count);
        let end = ((last_row + 1) * self.cols()).min(self.item_count);
        start..end
    }
}

impl EventHandler for PhotoGridState {
    type Event = GridEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<GridEvent> {
        let cols = self.cols() as isize;
        match event {
            TuiEvent::CursorLeft => self.move_by(-1),
            TuiEvent::CursorRight => self.move_by(1),
            TuiEvent::CursorUp => {
                if self.selected >= self.cols() {
                    self.move_by(-cols);
                }
            }
            TuiEvent::CursorDown => {
                if self.selected + self.cols() < self.item_count {
                    self.move_by(cols);
                }
            }
            TuiEvent::PageUp => self.move_by(-(self.page_size() as isize)),
            TuiEvent::PageDown => self.move_by(self.page_size() as isize),
            TuiEvent::Home => self.selected = 0,
            TuiEvent::End => self.selected = self.item_count.saturating_sub(1),
            TuiEvent::Submit => return self.selected_index().map(GridEvent::Toggle),
            _ => return None,
        }
        self.scroll_to_selected();
        None
    }
}

/// Transient render wrapper for the grid.
pub struct PhotoGrid<'a> {
    state: &'a mut PhotoGridState,
    photos: &'a [MarsPhoto],
}

impl<'a> PhotoGrid<'a> {
    pub fn new(state: &'a mut PhotoGridState, photos: &'a [MarsPhoto]) -> Self {
        Self { state, photos }
    }
}

impl Component for PhotoGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.set_item_count(self.photos.len());
        self.state.viewport_height = area.height;
        let photos: &[MarsPhoto] = self.photos;
        let photos = &photos[..self.state.item_count];

        if photos.is_empty() {
            self.state.visible_ids.clear();
            let empty = Paragraph::new("No photos.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        // One column reserved for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let cols = self.state.cols();
        let card_width = content_width / cols as u16;
        let rows = photos.len().div_ceil(cols);
        let total_height = rows as u16 * CARD_HEIGHT;

        self.state.scroll_to_selected();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (index, photo) in photos.iter().enumerate() {
            let row = (index / cols) as u16;
            let col = (index % cols) as u16;
            let y = row * CARD_HEIGHT;
            let rect = Rect::new(col * card_width, y, card_width, CARD_HEIGHT);
            let is_selected = index == self.state.selected;
            scroll_view.render_widget(photo_card(photo, index, is_selected, card_width), rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);

        let range = self.state.visible_range();
        self.state.visible_ids = photos[range]
            .iter()
            .map(|photo| photo.id.clone())
            .collect();
    }
}

fn photo_card(photo: &MarsPhoto, index: usize, is_selected: bool, card_width: u16) -> Paragraph<'static> {
    let inner_width = card_width.saturating_sub(2) as usize;

    let border_style = if is_selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&photo.id, inner_width),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_to_width(file_name(&photo.img_src), inner_width),
            Style::default().fg(Color::Gray),
        )),
    ];

    Paragraph::new(lines).block(
        Block::bordered()
            .title(format!(" #{} ", index + 1))
            .border_style(border_style)
            .title_style(border_style),
    )
}

/// Last path segment of a URL, or the whole string if there is none.
pub fn file_name(url: &str) -> &str {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(url)
}

/// Truncates `s` to at most `max_width` terminal columns, ending in `…`.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}
