//! videoflex - Responsive Video Sizing
//!
//! Adjusts the CSS sizing of a video element and its container from a
//! configured width percentage, and swaps between Normal and Fullscreen
//! style presets on the host's fullscreen-change notifications.
//!
//! The host document is an external collaborator reached through
//! [`videoflex_dom::HostDocument`]; this crate never owns a DOM tree,
//! a playback engine, or a layout engine.
//!
//! # Usage
//! Attach and teardown are explicit embedder operations:
//!
//! ```
//! use videoflex::{ResponsiveSizer, SizerOptions};
//! use videoflex_dom::MemoryDocument;
//!
//! let mut doc = MemoryDocument::new();
//! let video = doc.insert_video("clip.mp4");
//!
//! let sizer = ResponsiveSizer::with_options(SizerOptions {
//!     width_percent: 60,
//!     ..Default::default()
//! });
//! let mut attachment = sizer.attach(&mut doc, video).unwrap();
//!
//! // Host event loop forwards notifications:
//! attachment.handle_event(&mut doc, "fullscreenchange");
//!
//! // The embedder decides when the attachment ends:
//! attachment.detach(&mut doc);
//! ```

pub mod error;
pub mod format;
pub mod fullscreen;
pub mod presets;
pub mod sizer;
pub mod sizing;

pub use error::AttachError;
pub use format::FormatPolicy;
pub use fullscreen::FULLSCREEN_EVENTS;
pub use presets::{ObjectFit, StylePreset};
pub use sizer::{Attachment, ResponsiveSizer, SizerOptions};
pub use sizing::SizingConfig;

use videoflex_dom::{HostDocument, NodeId};

/// Attach with default options (width 50%, `object-fit: contain`, common
/// formats)
pub fn attach<H: HostDocument>(
    host: &mut H,
    element: NodeId,
) -> Result<Attachment, AttachError> {
    ResponsiveSizer::new().attach(host, element)
}
