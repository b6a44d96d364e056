//! # Photo Record
//!
//! One item from the remote photo listing. Records only ever come from
//! decoding a server response and are immutable afterwards.
//!
//! ```text
//! wire                      MarsPhoto
//! ──────────────────────    ─────────────────
//! "id"       : String   →   id
//! "img_src"  : String   →   img_src
//! (anything else)       →   ignored
//! ```

use serde::Deserialize;
use std::hash::{Hash, Hasher};

/// A single Mars photo: an opaque id plus the URL of the image bytes.
///
/// Identity is the `id` alone. Two records with the same id but different
/// image URLs compare equal.
#[derive(Debug, Clone, Deserialize)]
pub struct MarsPhoto {
    pub id: String,
    pub img_src: String,
}

impl MarsPhoto {
    pub fn new(id: impl Into<String>, img_src: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            img_src: img_src.into(),
        }
    }
}

impl PartialEq for MarsPhoto {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MarsPhoto {}

impl Hash for MarsPhoto {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Decodes a JSON array body into records, preserving array order.
///
/// Any element that fails to decode fails the whole body.
pub fn decode_photos(body: &[u8]) -> Result<Vec<MarsPhoto>, serde_json::Error> {
    serde_json::from_slice(body)
}
