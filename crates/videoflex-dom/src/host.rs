//! Host Document Capabilities
//!
//! The environment surface consumed by the sizer: attribute reads, computed
//! style reads, inline style writes, fullscreen control, playback control,
//! and event subscription.

use crate::NodeId;
use crate::events::ListenerId;

/// Element classification as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Video,
    Audio,
    Other,
}

/// Computed `position` of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CssPosition {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

/// Where a listener is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    /// The document itself (fullscreen-change notifications)
    Document,
    /// A specific node (click, dblclick)
    Node(NodeId),
}

/// Fullscreen request/exit failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FullscreenError {
    #[error("fullscreen not supported")]
    NotSupported,

    #[error("fullscreen not allowed")]
    NotAllowed,

    #[error("element not in document")]
    NotInDocument,
}

/// Playback request failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    #[error("not enough data")]
    NotEnoughData,

    #[error("playback not allowed")]
    NotAllowed,
}

/// Capabilities the embedding document must provide.
///
/// One implementor per host environment; [`crate::MemoryDocument`] is the
/// in-memory reference used by tests and headless embedders.
pub trait HostDocument {
    /// Classify a node, or `None` if it is not in the document
    fn element_kind(&self, node: NodeId) -> Option<ElementKind>;

    /// Parent (container) of a node
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Read an attribute value
    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    /// Computed `position` of a node
    fn computed_position(&self, node: NodeId) -> CssPosition;

    /// Replace the inline style of a node
    fn set_inline_style(&mut self, node: NodeId, css_text: &str);

    /// The active fullscreen element, if any
    fn fullscreen_element(&self) -> Option<NodeId>;

    /// Ask the host to make `node` the fullscreen element
    fn request_fullscreen(&mut self, node: NodeId) -> Result<(), FullscreenError>;

    /// Ask the host to leave fullscreen
    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError>;

    /// Whether playback of a media node is paused
    fn is_paused(&self, node: NodeId) -> bool;

    /// Begin playback of a media node
    fn play(&mut self, node: NodeId) -> Result<(), PlaybackError>;

    /// Pause playback of a media node
    fn pause(&mut self, node: NodeId);

    /// Register a listener for `event` on `target`
    fn add_listener(&mut self, target: EventTarget, event: &str) -> ListenerId;

    /// Remove a previously registered listener
    fn remove_listener(&mut self, id: ListenerId);
}
