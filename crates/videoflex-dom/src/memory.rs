//! In-Memory Host Document
//!
//! Reference [`HostDocument`] implementation backing the test suite and
//! headless embedders. Tracks nodes, inline styles, playback state, the
//! fullscreen element, and a listener registry.

use std::collections::HashMap;

use crate::NodeId;
use crate::events::ListenerId;
use crate::host::{
    CssPosition, ElementKind, EventTarget, FullscreenError, HostDocument, PlaybackError,
};
use crate::style::{Keyword, PropertyId};

#[derive(Debug)]
struct NodeState {
    kind: ElementKind,
    parent: Option<NodeId>,
    attributes: HashMap<String, String>,
    inline_style: String,
    base_position: CssPosition,
    paused: bool,
    playback_blocked: bool,
}

/// Listener registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerRecord {
    pub target: EventTarget,
    pub event: String,
}

/// In-memory host document
#[derive(Debug, Default)]
pub struct MemoryDocument {
    nodes: HashMap<NodeId, NodeState>,
    listeners: HashMap<ListenerId, ListenerRecord>,
    fullscreen: Option<NodeId>,
    fullscreen_denied: bool,
    next_node: u32,
    next_listener: u64,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element under an optional parent
    pub fn insert_element(&mut self, kind: ElementKind, parent: Option<NodeId>) -> NodeId {
        let id = NodeId::new(self.next_node);
        self.next_node += 1;
        self.nodes.insert(
            id,
            NodeState {
                kind,
                parent,
                attributes: HashMap::new(),
                inline_style: String::new(),
                base_position: CssPosition::Static,
                paused: true,
                playback_blocked: false,
            },
        );
        id
    }

    /// Insert a video element together with a plain container
    pub fn insert_video(&mut self, src: &str) -> NodeId {
        let container = self.insert_element(ElementKind::Other, None);
        let video = self.insert_element(ElementKind::Video, Some(container));
        if !src.is_empty() {
            self.set_attribute(video, "src", src);
        }
        video
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.attributes.insert(name.to_string(), value.to_string());
        }
    }

    /// Stylesheet-derived position, used when no inline position is set
    pub fn set_base_position(&mut self, node: NodeId, position: CssPosition) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.base_position = position;
        }
    }

    /// Make every play request fail, to model autoplay policies
    pub fn block_playback(&mut self, node: NodeId) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.playback_blocked = true;
        }
    }

    /// Make fullscreen requests fail, to model permission policies
    pub fn deny_fullscreen(&mut self) {
        self.fullscreen_denied = true;
    }

    /// Force the fullscreen element, modelling environment-driven changes
    /// such as the user pressing Escape
    pub fn force_fullscreen(&mut self, node: Option<NodeId>) {
        self.fullscreen = node;
    }

    /// Inline style text currently applied to a node
    pub fn inline_style(&self, node: NodeId) -> &str {
        self.nodes
            .get(&node)
            .map(|state| state.inline_style.as_str())
            .unwrap_or("")
    }

    /// Total live listener count
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Live listeners for one event name
    pub fn listener_count_for(&self, event: &str) -> usize {
        self.listeners
            .values()
            .filter(|record| record.event == event)
            .count()
    }

    /// Live listeners registered on a target
    pub fn listeners_on(&self, target: EventTarget) -> Vec<&ListenerRecord> {
        self.listeners
            .values()
            .filter(|record| record.target == target)
            .collect()
    }

    fn inline_position(&self, node: NodeId) -> Option<CssPosition> {
        let state = self.nodes.get(&node)?;
        for declaration in state.inline_style.split(';') {
            let Some((name, value)) = declaration.split_once(':') else {
                continue;
            };
            let (name, value) = (name.trim(), value.trim());
            if PropertyId::from_name(name) == Some(PropertyId::Position) {
                return match Keyword::from_css(value) {
                    Some(Keyword::Relative) => Some(CssPosition::Relative),
                    Some(Keyword::Absolute) => Some(CssPosition::Absolute),
                    Some(Keyword::Fixed) => Some(CssPosition::Fixed),
                    Some(Keyword::Sticky) => Some(CssPosition::Sticky),
                    _ => Some(CssPosition::Static),
                };
            }
        }
        None
    }
}

impl HostDocument for MemoryDocument {
    fn element_kind(&self, node: NodeId) -> Option<ElementKind> {
        self.nodes.get(&node).map(|state| state.kind)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|state| state.parent)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.nodes
            .get(&node)
            .and_then(|state| state.attributes.get(name).cloned())
    }

    fn computed_position(&self, node: NodeId) -> CssPosition {
        self.inline_position(node).unwrap_or_else(|| {
            self.nodes
                .get(&node)
                .map(|state| state.base_position)
                .unwrap_or_default()
        })
    }

    fn set_inline_style(&mut self, node: NodeId, css_text: &str) {
        if let Some(state) = self.nodes.get_mut(&node) {
            tracing::trace!(node = node.raw(), "inline style write");
            state.inline_style = css_text.to_string();
        }
    }

    fn fullscreen_element(&self) -> Option<NodeId> {
        self.fullscreen
    }

    fn request_fullscreen(&mut self, node: NodeId) -> Result<(), FullscreenError> {
        if self.fullscreen_denied {
            return Err(FullscreenError::NotAllowed);
        }
        if !self.nodes.contains_key(&node) {
            return Err(FullscreenError::NotInDocument);
        }
        tracing::debug!(node = node.raw(), "fullscreen requested");
        self.fullscreen = Some(node);
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError> {
        tracing::debug!("fullscreen exited");
        self.fullscreen = None;
        Ok(())
    }

    fn is_paused(&self, node: NodeId) -> bool {
        self.nodes.get(&node).map(|state| state.paused).unwrap_or(true)
    }

    fn play(&mut self, node: NodeId) -> Result<(), PlaybackError> {
        let state = self
            .nodes
            .get_mut(&node)
            .ok_or(PlaybackError::NotEnoughData)?;
        if state.playback_blocked {
            return Err(PlaybackError::NotAllowed);
        }
        state.paused = false;
        Ok(())
    }

    fn pause(&mut self, node: NodeId) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.paused = true;
        }
    }

    fn add_listener(&mut self, target: EventTarget, event: &str) -> ListenerId {
        let id = ListenerId::new(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(
            id,
            ListenerRecord { target, event: event.to_string() },
        );
        tracing::trace!(event, "listener added");
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        if self.listeners.remove(&id).is_some() {
            tracing::trace!("listener removed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_video_has_container() {
        let mut doc = MemoryDocument::new();
        let video = doc.insert_video("clip.mp4");

        assert_eq!(doc.element_kind(video), Some(ElementKind::Video));
        assert!(doc.parent(video).is_some());
        assert_eq!(doc.attribute(video, "src").as_deref(), Some("clip.mp4"));
    }

    #[test]
    fn test_computed_position_reflects_inline_write() {
        let mut doc = MemoryDocument::new();
        let node = doc.insert_element(ElementKind::Other, None);

        assert_eq!(doc.computed_position(node), CssPosition::Static);
        doc.set_inline_style(node, "width: 50%; position: relative");
        assert_eq!(doc.computed_position(node), CssPosition::Relative);
    }

    #[test]
    fn test_base_position_without_inline_style() {
        let mut doc = MemoryDocument::new();
        let node = doc.insert_element(ElementKind::Other, None);
        doc.set_base_position(node, CssPosition::Absolute);

        assert_eq!(doc.computed_position(node), CssPosition::Absolute);
        doc.set_inline_style(node, "position: relative");
        assert_eq!(doc.computed_position(node), CssPosition::Relative);
    }

    #[test]
    fn test_listener_registry() {
        let mut doc = MemoryDocument::new();
        let node = doc.insert_element(ElementKind::Video, None);

        let a = doc.add_listener(EventTarget::Document, "fullscreenchange");
        let _b = doc.add_listener(EventTarget::Node(node), "click");

        assert_eq!(doc.listener_count(), 2);
        assert_eq!(doc.listener_count_for("fullscreenchange"), 1);
        assert_eq!(doc.listeners_on(EventTarget::Node(node)).len(), 1);

        doc.remove_listener(a);
        assert_eq!(doc.listener_count_for("fullscreenchange"), 0);
    }

    #[test]
    fn test_playback_control() {
        let mut doc = MemoryDocument::new();
        let video = doc.insert_video("clip.mp4");

        assert!(doc.is_paused(video));
        doc.play(video).unwrap();
        assert!(!doc.is_paused(video));
        doc.pause(video);
        assert!(doc.is_paused(video));
    }

    #[test]
    fn test_blocked_playback() {
        let mut doc = MemoryDocument::new();
        let video = doc.insert_video("clip.mp4");
        doc.block_playback(video);

        assert_eq!(doc.play(video), Err(PlaybackError::NotAllowed));
        assert!(doc.is_paused(video));
    }

    #[test]
    fn test_fullscreen_roundtrip() {
        let mut doc = MemoryDocument::new();
        let video = doc.insert_video("clip.mp4");
        let container = doc.parent(video).unwrap();

        assert_eq!(doc.fullscreen_element(), None);
        doc.request_fullscreen(container).unwrap();
        assert_eq!(doc.fullscreen_element(), Some(container));
        doc.exit_fullscreen().unwrap();
        assert_eq!(doc.fullscreen_element(), None);
    }

    #[test]
    fn test_denied_fullscreen() {
        let mut doc = MemoryDocument::new();
        let video = doc.insert_video("clip.mp4");
        let container = doc.parent(video).unwrap();
        doc.deny_fullscreen();

        assert_eq!(
            doc.request_fullscreen(container),
            Err(FullscreenError::NotAllowed)
        );
        assert_eq!(doc.fullscreen_element(), None);
    }
}
