//! Fullscreen Synchronization
//!
//! Binary preset state driven by the host's fullscreen-change
//! notifications.

use videoflex_dom::{HostDocument, NodeId};

use crate::presets::StylePreset;

/// Every fullscreen-change notification name the target environments
/// dispatch, vendor prefixes included
pub const FULLSCREEN_EVENTS: [&str; 4] = [
    "fullscreenchange",
    "webkitfullscreenchange",
    "mozfullscreenchange",
    "MSFullscreenChange",
];

/// Whether an event name is one of the fullscreen-change notifications
pub fn is_fullscreen_event(name: &str) -> bool {
    FULLSCREEN_EVENTS.contains(&name)
}

/// Preset the container should be in, given the host's fullscreen element
pub fn preset_for(host: &(impl HostDocument + ?Sized), container: NodeId) -> StylePreset {
    if host.fullscreen_element() == Some(container) {
        StylePreset::Fullscreen
    } else {
        StylePreset::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use videoflex_dom::{ElementKind, MemoryDocument};

    #[test]
    fn test_event_names() {
        for name in FULLSCREEN_EVENTS {
            assert!(is_fullscreen_event(name));
        }
        assert!(!is_fullscreen_event("click"));
        assert!(!is_fullscreen_event("fullscreenerror"));
    }

    #[test]
    fn test_preset_for_follows_host_state() {
        let mut doc = MemoryDocument::new();
        let container = doc.insert_element(ElementKind::Other, None);
        let other = doc.insert_element(ElementKind::Other, None);

        assert_eq!(preset_for(&doc, container), StylePreset::Normal);

        doc.force_fullscreen(Some(container));
        assert_eq!(preset_for(&doc, container), StylePreset::Fullscreen);

        // Some other element being fullscreen does not flip this container
        doc.force_fullscreen(Some(other));
        assert_eq!(preset_for(&doc, container), StylePreset::Normal);
    }
}
