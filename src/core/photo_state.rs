//! # Fetch State
//!
//! The three-case lifecycle of the photo fetch. Exactly one case is active
//! at any instant and renderers must `match` all three.
//!
//! ```text
//! Loading ──┬──▶ Success(photos)
//!           └──▶ Error
//! ```

use crate::network::MarsPhoto;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    /// A fetch is in flight (or has not resolved yet). Initial state.
    #[default]
    Loading,
    /// The fetch succeeded. Photos are in server order, unsorted and
    /// not deduplicated. May be empty.
    Success(Vec<MarsPhoto>),
    /// The fetch failed. No cause is carried.
    Error,
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// True once the attempt has resolved either way.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    /// Photos of a `Success` state, `None` otherwise.
    pub fn photos(&self) -> Option<&[MarsPhoto]> {
        match self {
            FetchState::Success(photos) => Some(photos),
            FetchState::Loading | FetchState::Error => None,
        }
    }

    /// Short label for status lines and logs.
    pub fn summary(&self) -> String {
        match self {
            FetchState::Loading => "Loading…".to_string(),
            FetchState::Success(photos) if photos.len() == 1 => "1 photo".to_string(),
            FetchState::Success(photos) => format!("{} photos", photos.len()),
            FetchState::Error => "Error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        assert_eq!(FetchState::default(), FetchState::Loading);
        assert!(FetchState::default().is_loading());
    }

    #[test]
    fn test_photos_accessor() {
        let state = FetchState::Success(vec![MarsPhoto::new("1", "u1")]);
        assert_eq!(state.photos().map(|p| p.len()), Some(1));
        assert!(FetchState::Error.photos().is_none());
        assert!(FetchState::Loading.photos().is_none());
    }

    #[test]
    fn test_empty_success_is_terminal_not_error() {
        let state = FetchState::Success(Vec::new());
        assert!(state.is_terminal());
        assert_ne!(state, FetchState::Error);
        assert_eq!(state.summary(), "0 photos");
    }

    #[test]
    fn test_summary() {
        assert_eq!(FetchState::Loading.summary(), "Loading…");
        assert_eq!(FetchState::Error.summary(), "Error");
        assert_eq!(
            FetchState::Success(vec![MarsPhoto::new("1", "u1")]).summary(),
            "1 photo"
        );
    }
}
