//! Style Presets
//!
//! The two named style bundles applied atomically to the container and the
//! video element. `Normal` carries the responsive sizing; `Fullscreen` fills
//! the viewport edge-to-edge.

use videoflex_dom::{Color, InlineStyle, Keyword, Length, PropertyId, Value};

use crate::sizing::SizingConfig;

/// Upper bound on the container box
const MAX_CONTAINER: (f32, f32) = (1280.0, 720.0);

/// Lower bound on the container box
const MIN_CONTAINER: (f32, f32) = (320.0, 260.0);

/// 16:9-derived scaling of the height against viewport width
const VIEWPORT_ASPECT_FACTOR: f32 = 0.5625;

/// How the video is fitted inside its container in the Normal preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectFit {
    #[default]
    Contain,
    Cover,
}

impl ObjectFit {
    fn keyword(self) -> Keyword {
        match self {
            Self::Contain => Keyword::Contain,
            Self::Cover => Keyword::Cover,
        }
    }
}

/// Style bundle name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StylePreset {
    #[default]
    Normal,
    Fullscreen,
}

impl StylePreset {
    /// Container and video styles for this preset.
    ///
    /// `anchor_container` adds `position: relative` so the absolutely
    /// positioned video has a containing block; it is decided once at attach
    /// time from the container's computed position.
    pub fn styles(
        self,
        config: &SizingConfig,
        fit: ObjectFit,
        anchor_container: bool,
    ) -> PresetStyles {
        match self {
            Self::Normal => PresetStyles {
                container: container_style(
                    Value::Length(Length::percent(config.width_percent as f32)),
                    Value::Scaled {
                        base: Length::vw(config.height_percent as f32),
                        factor: VIEWPORT_ASPECT_FACTOR,
                    },
                    true,
                    anchor_container,
                ),
                video: video_style(fit),
            },
            Self::Fullscreen => PresetStyles {
                container: container_style(
                    Value::Length(Length::percent(100.0)),
                    Value::Length(Length::percent(100.0)),
                    false,
                    anchor_container,
                ),
                video: video_style(ObjectFit::Contain),
            },
        }
    }
}

/// Rendered styles for one preset
#[derive(Debug, Clone, PartialEq)]
pub struct PresetStyles {
    pub container: InlineStyle,
    pub video: InlineStyle,
}

fn container_style(width: Value, height: Value, bounded: bool, anchored: bool) -> InlineStyle {
    let mut style = InlineStyle::new();
    style
        .set(PropertyId::Width, width)
        .set(PropertyId::Height, height);
    if bounded {
        style
            .set(PropertyId::MaxWidth, Value::Length(Length::px(MAX_CONTAINER.0)))
            .set(PropertyId::MaxHeight, Value::Length(Length::px(MAX_CONTAINER.1)))
            .set(PropertyId::MinHeight, Value::Length(Length::px(MIN_CONTAINER.1)))
            .set(PropertyId::MinWidth, Value::Length(Length::px(MIN_CONTAINER.0)));
    }
    style.set(PropertyId::BackgroundColor, Value::Color(Color::BLACK));
    if anchored {
        style.set(PropertyId::Position, Value::Keyword(Keyword::Relative));
    }
    style
}

fn video_style(fit: ObjectFit) -> InlineStyle {
    let mut style = InlineStyle::new();
    style
        .set(PropertyId::Width, Value::Length(Length::percent(100.0)))
        .set(PropertyId::Height, Value::Length(Length::percent(100.0)))
        .set(PropertyId::Position, Value::Keyword(Keyword::Absolute))
        .set(PropertyId::Top, Value::Length(Length::zero()))
        .set(PropertyId::Left, Value::Length(Length::zero()))
        .set(PropertyId::ObjectFit, Value::Keyword(fit.keyword()));
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_container_bundle() {
        let config = SizingConfig::new(60);
        let styles = StylePreset::Normal.styles(&config, ObjectFit::Contain, true);

        assert_eq!(
            styles.container.css_text(),
            "width: 60%; height: calc(72vw * 0.5625); max-width: 1280px; \
             max-height: 720px; min-height: 260px; min-width: 320px; \
             background-color: #000000; position: relative"
        );
    }

    #[test]
    fn test_normal_video_bundle() {
        let config = SizingConfig::new(60);
        let styles = StylePreset::Normal.styles(&config, ObjectFit::Contain, true);

        assert_eq!(
            styles.video.css_text(),
            "width: 100%; height: 100%; position: absolute; top: 0; left: 0; \
             object-fit: contain"
        );
    }

    #[test]
    fn test_fullscreen_bundle() {
        let config = SizingConfig::new(60);
        let styles = StylePreset::Fullscreen.styles(&config, ObjectFit::Cover, true);

        assert_eq!(
            styles.container.css_text(),
            "width: 100%; height: 100%; background-color: #000000; position: relative"
        );
        // Fullscreen always letterboxes, whatever the normal fit is
        assert_eq!(
            styles.video.get(PropertyId::ObjectFit),
            Some(&Value::Keyword(Keyword::Contain))
        );
    }

    #[test]
    fn test_unanchored_container_keeps_position_untouched() {
        let config = SizingConfig::new(60);
        let styles = StylePreset::Normal.styles(&config, ObjectFit::Contain, false);

        assert_eq!(styles.container.get(PropertyId::Position), None);
    }

    #[test]
    fn test_normal_fit_is_configurable() {
        let config = SizingConfig::new(60);
        let styles = StylePreset::Normal.styles(&config, ObjectFit::Cover, true);

        assert_eq!(
            styles.video.get(PropertyId::ObjectFit),
            Some(&Value::Keyword(Keyword::Cover))
        );
    }
}
