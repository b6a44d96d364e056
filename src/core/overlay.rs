//! # Overlay State
//!
//! Per-photo "is the full view open" flags, keyed by photo id.
//! Unknown ids read as closed. Flags are independent: opening one never
//! closes another. Keeping at most one open is the renderer's job.

use std::collections::HashMap;

use crate::network::MarsPhoto;

#[derive(Debug, Default, Clone)]
pub struct OverlayState {
    open: HashMap<String, bool>,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.get(id).copied().unwrap_or(false)
    }

    /// Flips the flag for `id` and returns the new value.
    pub fn toggle(&mut self, id: &str) -> bool {
        let flag = self.open.entry(id.to_string()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Forces the flag for `id` to closed.
    pub fn dismiss(&mut self, id: &str) {
        if let Some(flag) = self.open.get_mut(id) {
            *flag = false;
        }
    }

    /// The photo with `id` was rendered fresh; it starts collapsed.
    pub fn reset(&mut self, id: &str) {
        self.open.remove(id);
    }

    /// Forgets every id not in `visible`, so photos that scrolled out of
    /// view start collapsed when they come back.
    pub fn retain_visible<'a>(&mut self, visible: impl IntoIterator<Item = &'a str>) {
        let visible: std::collections::HashSet<&str> = visible.into_iter().collect();
        self.open.retain(|id, _| visible.contains(id.as_str()));
    }

    /// Drops all flags (a new listing is being rendered).
    pub fn clear(&mut self) {
        self.open.clear();
    }

    /// First photo, in display order, whose overlay is open.
    pub fn open_photo<'a>(&self, photos: &'a [MarsPhoto]) -> Option<&'a MarsPhoto> {
        photos.iter().find(|photo| self.is_open(&photo.id))
    }
}
