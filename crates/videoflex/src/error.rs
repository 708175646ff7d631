//! Attach Errors

/// Validation failure during attach.
///
/// Every variant is also reported through the logging channel before it is
/// returned; no styles are applied and no listeners are registered on any
/// failure path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttachError {
    #[error("invalid video element")]
    InvalidElement,

    #[error("no source attribute found")]
    MissingSource,

    #[error("unsupported video format: {src}")]
    UnsupportedFormat { src: String },
}
