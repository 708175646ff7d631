//! Responsive Sizer
//!
//! Validates a video element, applies the responsive style preset to it and
//! its container, and keeps both in sync with fullscreen transitions until
//! detached.

use videoflex_dom::{
    CssPosition, ElementKind, EventTarget, HostDocument, NodeId, SubscriptionSet,
};

use crate::error::AttachError;
use crate::format::FormatPolicy;
use crate::fullscreen::{is_fullscreen_event, preset_for, FULLSCREEN_EVENTS};
use crate::presets::{ObjectFit, StylePreset};
use crate::sizing::{SizingConfig, DEFAULT_WIDTH_PERCENT};

/// Attach-time options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizerOptions {
    /// Requested container width percentage, clamped into `[20, 100]`
    pub width_percent: u32,
    /// Video fit in the Normal preset
    pub object_fit: ObjectFit,
    /// Accepted source formats
    pub formats: FormatPolicy,
}

impl Default for SizerOptions {
    fn default() -> Self {
        Self {
            width_percent: DEFAULT_WIDTH_PERCENT,
            object_fit: ObjectFit::default(),
            formats: FormatPolicy::default(),
        }
    }
}

/// Attaches responsive sizing to video elements
#[derive(Debug, Clone, Default)]
pub struct ResponsiveSizer {
    options: SizerOptions,
}

impl ResponsiveSizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SizerOptions) -> Self {
        Self { options }
    }

    /// Validate `element`, style it and its container, and subscribe to the
    /// host's fullscreen-change notifications.
    ///
    /// Fails soft: every error is logged and returned without any style
    /// mutation or listener registration.
    pub fn attach<H: HostDocument>(
        &self,
        host: &mut H,
        element: NodeId,
    ) -> Result<Attachment, AttachError> {
        match host.element_kind(element) {
            Some(ElementKind::Video) => {}
            _ => {
                log::error!("invalid video element provided");
                return Err(AttachError::InvalidElement);
            }
        }

        let Some(container) = host.parent(element) else {
            log::error!("video element has no container");
            return Err(AttachError::InvalidElement);
        };

        let src = host.attribute(element, "src").unwrap_or_default();
        if src.is_empty() {
            log::error!("no source attribute found");
            return Err(AttachError::MissingSource);
        }

        if !self.options.formats.supports_source(&src) {
            log::error!("unsupported video format: {src}");
            return Err(AttachError::UnsupportedFormat { src });
        }

        let config = SizingConfig::new(self.options.width_percent);
        let anchor_container = host.computed_position(container) == CssPosition::Static;

        let mut attachment = Attachment {
            element,
            container,
            config,
            fit: self.options.object_fit,
            anchor_container,
            state: StylePreset::Normal,
            subscriptions: SubscriptionSet::new(),
            controls_bound: false,
        };
        attachment.apply(host, StylePreset::Normal);

        for event in FULLSCREEN_EVENTS {
            attachment
                .subscriptions
                .push(host.add_listener(EventTarget::Document, event));
        }
        log::debug!(
            "attached to node {} at {}% width",
            element.raw(),
            config.width_percent
        );

        Ok(attachment)
    }
}

/// One live attachment; the teardown handle returned by
/// [`ResponsiveSizer::attach`]
#[derive(Debug)]
pub struct Attachment {
    element: NodeId,
    container: NodeId,
    config: SizingConfig,
    fit: ObjectFit,
    anchor_container: bool,
    state: StylePreset,
    subscriptions: SubscriptionSet,
    controls_bound: bool,
}

impl Attachment {
    /// The sized video element
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// Its container
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Clamped width and derived height in effect
    pub fn config(&self) -> SizingConfig {
        self.config
    }

    /// Preset currently applied
    pub fn state(&self) -> StylePreset {
        self.state
    }

    /// Route a host-dispatched event to this attachment.
    ///
    /// Fullscreen-change notifications re-sync the preset; `click` and
    /// `dblclick` drive the pointer controls once bound.
    pub fn handle_event<H: HostDocument>(&mut self, host: &mut H, event: &str) {
        if is_fullscreen_event(event) {
            self.sync_fullscreen(host);
        } else if self.controls_bound && event == "click" {
            self.toggle_playback(host);
        } else if self.controls_bound && event == "dblclick" {
            self.toggle_fullscreen(host);
        }
    }

    /// Subscribe `click` (play/pause) and `dblclick` (fullscreen) on the
    /// video element. No-op when already bound.
    pub fn bind_pointer_controls<H: HostDocument>(&mut self, host: &mut H) {
        if self.controls_bound {
            return;
        }
        for event in ["click", "dblclick"] {
            self.subscriptions
                .push(host.add_listener(EventTarget::Node(self.element), event));
        }
        self.controls_bound = true;
    }

    /// Remove every listener this attachment registered.
    ///
    /// Calling it again is a no-op; teardown is the embedder's
    /// responsibility and never tied to element removal.
    pub fn detach<H: HostDocument>(&mut self, host: &mut H) {
        self.subscriptions.release(host);
    }

    fn sync_fullscreen<H: HostDocument>(&mut self, host: &mut H) {
        let preset = preset_for(host, self.container);
        if preset != self.state {
            log::debug!("preset change: {:?} -> {:?}", self.state, preset);
        }
        self.apply(host, preset);
    }

    fn apply<H: HostDocument>(&mut self, host: &mut H, preset: StylePreset) {
        let styles = preset.styles(&self.config, self.fit, self.anchor_container);
        host.set_inline_style(self.container, &styles.container.css_text());
        host.set_inline_style(self.element, &styles.video.css_text());
        self.state = preset;
    }

    fn toggle_playback<H: HostDocument>(&mut self, host: &mut H) {
        if host.is_paused(self.element) {
            if let Err(err) = host.play(self.element) {
                log::error!("play request rejected: {err}");
            }
        } else {
            host.pause(self.element);
        }
    }

    fn toggle_fullscreen<H: HostDocument>(&mut self, host: &mut H) {
        if host.fullscreen_element().is_none() {
            if let Err(err) = host.request_fullscreen(self.container) {
                log::error!("error attempting to enable fullscreen: {err}");
            }
        } else if let Err(err) = host.exit_fullscreen() {
            log::error!("error attempting to exit fullscreen: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use videoflex_dom::MemoryDocument;

    fn attach_default(doc: &mut MemoryDocument, src: &str) -> Attachment {
        let video = doc.insert_video(src);
        ResponsiveSizer::new().attach(doc, video).unwrap()
    }

    #[test]
    fn test_attach_applies_normal_preset() {
        let mut doc = MemoryDocument::new();
        let attachment = attach_default(&mut doc, "clip.mp4");

        assert_eq!(attachment.state(), StylePreset::Normal);
        assert!(doc.inline_style(attachment.container()).contains("width: 50%"));
        assert!(doc
            .inline_style(attachment.element())
            .contains("position: absolute"));
    }

    #[test]
    fn test_attach_rejects_non_video() {
        let mut doc = MemoryDocument::new();
        let container = doc.insert_element(ElementKind::Other, None);
        let audio = doc.insert_element(ElementKind::Audio, Some(container));
        doc.set_attribute(audio, "src", "clip.mp4");

        let result = ResponsiveSizer::new().attach(&mut doc, audio);
        assert_eq!(result.unwrap_err(), AttachError::InvalidElement);
    }

    #[test]
    fn test_attach_rejects_orphan_video() {
        let mut doc = MemoryDocument::new();
        let video = doc.insert_element(ElementKind::Video, None);
        doc.set_attribute(video, "src", "clip.mp4");

        let result = ResponsiveSizer::new().attach(&mut doc, video);
        assert_eq!(result.unwrap_err(), AttachError::InvalidElement);
    }

    #[test]
    fn test_attach_rejects_missing_node() {
        let mut doc = MemoryDocument::new();
        let result = ResponsiveSizer::new().attach(&mut doc, NodeId::new(99));
        assert_eq!(result.unwrap_err(), AttachError::InvalidElement);
    }

    #[test]
    fn test_options_width_flows_into_styles() {
        let mut doc = MemoryDocument::new();
        let video = doc.insert_video("clip.mp4");
        let sizer = ResponsiveSizer::with_options(SizerOptions {
            width_percent: 60,
            ..Default::default()
        });

        let attachment = sizer.attach(&mut doc, video).unwrap();
        assert_eq!(attachment.config().width_percent, 60);
        assert_eq!(attachment.config().height_percent, 72);
        assert!(doc.inline_style(attachment.container()).contains("width: 60%"));
        assert!(doc
            .inline_style(attachment.container())
            .contains("calc(72vw * 0.5625)"));
    }

    #[test]
    fn test_pointer_controls_bind_once() {
        let mut doc = MemoryDocument::new();
        let mut attachment = attach_default(&mut doc, "clip.mp4");

        attachment.bind_pointer_controls(&mut doc);
        attachment.bind_pointer_controls(&mut doc);

        assert_eq!(doc.listener_count_for("click"), 1);
        assert_eq!(doc.listener_count_for("dblclick"), 1);
    }

    #[test]
    fn test_click_ignored_until_controls_bound() {
        let mut doc = MemoryDocument::new();
        let mut attachment = attach_default(&mut doc, "clip.mp4");

        attachment.handle_event(&mut doc, "click");
        assert!(doc.is_paused(attachment.element()));

        attachment.bind_pointer_controls(&mut doc);
        attachment.handle_event(&mut doc, "click");
        assert!(!doc.is_paused(attachment.element()));
    }
}
