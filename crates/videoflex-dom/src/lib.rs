//! videoflex DOM seam
//!
//! Handles and capability traits for the host document. The library never
//! owns a DOM tree; it borrows nodes from the embedder through
//! [`HostDocument`].

mod events;
mod host;
mod memory;
mod style;

pub use events::{ListenerId, SubscriptionSet};
pub use host::{
    CssPosition, ElementKind, EventTarget, FullscreenError, HostDocument, PlaybackError,
};
pub use memory::{ListenerRecord, MemoryDocument};
pub use style::{Color, Declaration, InlineStyle, Keyword, Length, LengthUnit, PropertyId, Value};

/// Node identifier issued by the host document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a node id from a raw host index
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw host index
    pub const fn raw(self) -> u32 {
        self.0
    }
}
