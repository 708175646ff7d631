//! Inline Style Model
//!
//! Typed declarations for the handful of properties the sizer writes.
//! Uses enums for fixed values to save memory vs strings.

use std::fmt;

/// Property identifier - uses enum for type safety and memory efficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyId {
    // Box model
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,

    // Positioning
    Position,
    Top,
    Left,

    // Media fit
    ObjectFit,

    // Background
    BackgroundColor,
}

impl PropertyId {
    /// Parse a property name into a PropertyId
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "width" => Self::Width,
            "height" => Self::Height,
            "min-width" => Self::MinWidth,
            "min-height" => Self::MinHeight,
            "max-width" => Self::MaxWidth,
            "max-height" => Self::MaxHeight,
            "position" => Self::Position,
            "top" => Self::Top,
            "left" => Self::Left,
            "object-fit" => Self::ObjectFit,
            "background-color" => Self::BackgroundColor,
            _ => return None,
        })
    }

    /// CSS name of the property
    pub fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::MinWidth => "min-width",
            Self::MinHeight => "min-height",
            Self::MaxWidth => "max-width",
            Self::MaxHeight => "max-height",
            Self::Position => "position",
            Self::Top => "top",
            Self::Left => "left",
            Self::ObjectFit => "object-fit",
            Self::BackgroundColor => "background-color",
        }
    }
}

/// CSS keyword values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    // Position
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,

    // Object fit
    Contain,
    Cover,
}

impl Keyword {
    pub fn from_css(s: &str) -> Option<Self> {
        Some(match s {
            "static" => Self::Static,
            "relative" => Self::Relative,
            "absolute" => Self::Absolute,
            "fixed" => Self::Fixed,
            "sticky" => Self::Sticky,
            "contain" => Self::Contain,
            "cover" => Self::Cover,
            _ => return None,
        })
    }

    pub fn as_css(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Relative => "relative",
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
            Self::Sticky => "sticky",
            Self::Contain => "contain",
            Self::Cover => "cover",
        }
    }
}

/// Length units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Px,
    Percent,
    Vw,
}

impl LengthUnit {
    fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Percent => "%",
            Self::Vw => "vw",
        }
    }
}

/// CSS length value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    pub fn px(value: f32) -> Self {
        Self { value, unit: LengthUnit::Px }
    }

    pub fn percent(value: f32) -> Self {
        Self { value, unit: LengthUnit::Percent }
    }

    pub fn vw(value: f32) -> Self {
        Self { value, unit: LengthUnit::Vw }
    }

    pub fn zero() -> Self {
        Self::px(0.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Unitless zero, integral values without a fraction
        if self.value == 0.0 {
            write!(f, "0")
        } else if self.value.fract() == 0.0 {
            write!(f, "{}{}", self.value as i64, self.unit.suffix())
        } else {
            write!(f, "{}{}", self.value, self.unit.suffix())
        }
    }
}

/// CSS color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Property value - typed, renders to CSS text
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Keyword(Keyword),
    Length(Length),
    Color(Color),
    /// `calc(<base> * <factor>)` against the viewport
    Scaled { base: Length, factor: f32 },
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(kw) => write!(f, "{}", kw.as_css()),
            Self::Length(len) => write!(f, "{len}"),
            Self::Color(color) => write!(f, "{color}"),
            Self::Scaled { base, factor } => write!(f, "calc({base} * {factor})"),
        }
    }
}

/// Single declaration (property: value)
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: PropertyId,
    pub value: Value,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property.name(), self.value)
    }
}

/// Ordered declaration list, applied to a node as one inline style write
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    declarations: Vec<Declaration>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration
    pub fn set(&mut self, property: PropertyId, value: Value) -> &mut Self {
        self.declarations.push(Declaration { property, value });
        self
    }

    /// Look up the value of a property
    pub fn get(&self, property: PropertyId) -> Option<&Value> {
        self.declarations
            .iter()
            .find(|decl| decl.property == property)
            .map(|decl| &decl.value)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Render as `property: value; ...` inline CSS text
    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(Declaration::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}
