//! Source Format Validation
//!
//! File-extension checks for video sources. Matching is ASCII
//! case-insensitive, so `CLIP.MP4` and `clip.mp4` are equivalent.

/// Most common web video formats
const COMMON: &[&str] = &["mp4", "webm", "ogg"];

/// Formats additionally accepted by [`FormatPolicy::Extended`]
const EXTENDED: &[&str] = &["avi", "mov", "mkv", "wmv", "flv", "mpeg", "mpg", "ogv"];

/// Which source formats attach accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatPolicy {
    /// `mp4`, `webm`, `ogg`
    #[default]
    Common,
    /// The common set plus `avi`, `mov`, `mkv`, `wmv`, `flv`, `mpeg`,
    /// `mpg`, `ogv`
    Extended,
}

impl FormatPolicy {
    /// Whether a file extension is in this policy's set
    pub fn supports(self, extension: &str) -> bool {
        let in_set = |set: &[&str]| set.iter().any(|ext| ext.eq_ignore_ascii_case(extension));
        match self {
            Self::Common => in_set(COMMON),
            Self::Extended => in_set(COMMON) || in_set(EXTENDED),
        }
    }

    /// Whether a source URL's extension is in this policy's set
    pub fn supports_source(self, src: &str) -> bool {
        source_extension(src).is_some_and(|ext| self.supports(ext))
    }
}

/// Extension of a source URL, if it has one
pub fn source_extension(src: &str) -> Option<&str> {
    let name = src.rsplit(['/', '\\']).next().unwrap_or(src);
    let (stem, extension) = name.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(extension)
}
