//! Event Subscriptions
//!
//! Scoped listener handles. Every listener an attachment registers is owned
//! by a [`SubscriptionSet`] and released through it, so repeated
//! attach/detach cycles cannot leak listeners into the host.

use crate::host::HostDocument;

/// Opaque listener handle issued by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Listener handles owned by one attachment
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    ids: Vec<ListenerId>,
}

impl SubscriptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a listener handle
    pub fn push(&mut self, id: ListenerId) {
        self.ids.push(id);
    }

    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Remove every owned listener from the host.
    ///
    /// Safe to call again; a released set holds no handles.
    pub fn release<H: HostDocument + ?Sized>(&mut self, host: &mut H) {
        for id in self.ids.drain(..) {
            host.remove_listener(id);
        }
        tracing::trace!("subscription set released");
    }
}
