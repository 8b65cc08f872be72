//! Visual style for the glow button.
//!
//! A [`GlowStyle`] bundles every tunable the control exposes: the four
//! per-state color pairs, glow geometry, corner shape, and the two behavior
//! switches (momentary, hover highlighting). Styles are plain values; apply
//! one with [`GlowButton::set_style`](crate::GlowButton::set_style) or tweak
//! a single knob through the control's setters.
//!
//! Styles can also be loaded from a TOML document, with colors written as
//! `#rrggbb` / `#rrggbbaa` hex strings:
//!
//! ```toml
//! fill_color = "#00000000"
//! fill_color_active = "#2a6db520"
//! icon_color = "#ffffff"
//! icon_color_active = "#8ecdf7"
//! glow_radius = 6.0
//! glow_opacity = 0.9
//! corner_radius = 4.0
//! momentary = false
//! ```
//!
//! Fields missing from the document keep their defaults.

use lumen_render::{Color, CornerMask};
use serde::Deserialize;

use lumen_core::logging::targets;

/// How much hover highlighting lightens the resolved fill color.
pub const HOVER_HIGHLIGHT_LEVEL: f32 = 0.15;

/// A color (or any value) with a normal and an active variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatePair<T> {
    /// Value used while the control is off.
    pub normal: T,
    /// Value used while the control is on.
    pub active: T,
}

impl<T> StatePair<T> {
    /// Create a pair from its two variants.
    pub const fn new(normal: T, active: T) -> Self {
        Self { normal, active }
    }

    /// The variant for the given on/off state.
    pub fn resolve(&self, active: bool) -> &T {
        if active {
            &self.active
        } else {
            &self.normal
        }
    }
}

/// The complete visual configuration of a glow button.
#[derive(Debug, Clone, PartialEq)]
pub struct GlowStyle {
    /// Border color per state.
    pub border: StatePair<Color>,
    /// Background fill color per state.
    pub fill: StatePair<Color>,
    /// Title text color per state.
    pub text: StatePair<Color>,
    /// Icon tint per state. The active variant doubles as the glow color.
    pub icon: StatePair<Color>,
    /// Drop-shadow blur radius of the glow, in points.
    pub glow_radius: f32,
    /// Drop-shadow opacity of the glow, 0.0 to 1.0.
    pub glow_opacity: f32,
    /// Corner rounding radius, in points.
    pub corner_radius: f32,
    /// Border stroke width, in points.
    pub border_width: f32,
    /// Which corners are rounded.
    pub rounded_corners: CornerMask,
    /// Whether the control springs back to off after each activation.
    pub momentary: bool,
    /// Whether the fill lightens while the pointer hovers.
    pub hover_highlighting: bool,
}

impl Default for GlowStyle {
    fn default() -> Self {
        Self {
            border: StatePair::new(Color::DARK_GRAY, Color::WHITE),
            fill: StatePair::new(Color::TRANSPARENT, Color::TRANSPARENT),
            text: StatePair::new(Color::GRAY, Color::GRAY),
            icon: StatePair::new(Color::WHITE, Color::LIGHT_GRAY),
            glow_radius: 0.0,
            glow_opacity: 0.0,
            corner_radius: 4.0,
            border_width: 1.0,
            rounded_corners: CornerMask::ALL,
            momentary: true,
            hover_highlighting: true,
        }
    }
}

impl GlowStyle {
    /// Clamp the numeric fields into their valid ranges.
    pub fn sanitized(mut self) -> Self {
        self.glow_radius = self.glow_radius.max(0.0);
        self.glow_opacity = self.glow_opacity.clamp(0.0, 1.0);
        self.corner_radius = self.corner_radius.max(0.0);
        self.border_width = self.border_width.max(0.0);
        self
    }

    /// Parse a style from a TOML document.
    ///
    /// Unknown keys are rejected so typos surface instead of silently keeping
    /// a default. Numeric fields are clamped as by [`sanitized`](Self::sanitized).
    pub fn from_toml(source: &str) -> Result<Self, StyleError> {
        let doc: StyleDoc = toml::from_str(source)?;
        let mut style = Self::default();

        if let Some(raw) = doc.border_color {
            style.border.normal = parse_color("border_color", &raw)?;
        }
        if let Some(raw) = doc.border_color_active {
            style.border.active = parse_color("border_color_active", &raw)?;
        }
        if let Some(raw) = doc.fill_color {
            style.fill.normal = parse_color("fill_color", &raw)?;
        }
        if let Some(raw) = doc.fill_color_active {
            style.fill.active = parse_color("fill_color_active", &raw)?;
        }
        if let Some(raw) = doc.text_color {
            style.text.normal = parse_color("text_color", &raw)?;
        }
        if let Some(raw) = doc.text_color_active {
            style.text.active = parse_color("text_color_active", &raw)?;
        }
        if let Some(raw) = doc.icon_color {
            style.icon.normal = parse_color("icon_color", &raw)?;
        }
        if let Some(raw) = doc.icon_color_active {
            style.icon.active = parse_color("icon_color_active", &raw)?;
        }
        if let Some(value) = doc.glow_radius {
            style.glow_radius = value;
        }
        if let Some(value) = doc.glow_opacity {
            style.glow_opacity = value;
        }
        if let Some(value) = doc.corner_radius {
            style.corner_radius = value;
        }
        if let Some(value) = doc.border_width {
            style.border_width = value;
        }
        if let Some(value) = doc.momentary {
            style.momentary = value;
        }
        if let Some(value) = doc.hover_highlighting {
            style.hover_highlighting = value;
        }

        tracing::debug!(target: targets::STYLE, "loaded style from TOML");
        Ok(style.sanitized())
    }
}

/// Errors from style loading.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// The document is not valid TOML or contains unknown keys.
    #[error("invalid style document: {0}")]
    Parse(#[from] toml::de::Error),

    /// A color field holds something other than a `#rrggbb`/`#rrggbbaa` string.
    #[error("invalid color {value:?} for `{field}`")]
    InvalidColor {
        /// The offending field name.
        field: &'static str,
        /// The raw value found in the document.
        value: String,
    },
}

/// Raw deserialization target; every field optional so partial documents work.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleDoc {
    border_color: Option<String>,
    border_color_active: Option<String>,
    fill_color: Option<String>,
    fill_color_active: Option<String>,
    text_color: Option<String>,
    text_color_active: Option<String>,
    icon_color: Option<String>,
    icon_color_active: Option<String>,
    glow_radius: Option<f32>,
    glow_opacity: Option<f32>,
    corner_radius: Option<f32>,
    border_width: Option<f32>,
    momentary: Option<bool>,
    hover_highlighting: Option<bool>,
}

fn parse_color(field: &'static str, raw: &str) -> Result<Color, StyleError> {
    Color::from_hex(raw).ok_or_else(|| StyleError::InvalidColor {
        field,
        value: raw.to_owned(),
    })
}
