//! Font description for title text.
//!
//! Actual glyph shaping and rasterization belong to the host compositor; a
//! [`Font`](crate::Font) here is only the description handed to the backend
//! for measurement ([`LayerBackend::measure_text`](crate::LayerBackend::measure_text))
//! and display.

/// A font family selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontFamily {
    /// The platform's default UI sans-serif face.
    #[default]
    SansSerif,
    /// The platform's default serif face.
    Serif,
    /// The platform's default monospace face.
    Monospace,
    /// A named family, resolved by the backend.
    Named(String),
}

/// A font description: family plus point size.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    point_size: f32,
}

impl Font {
    /// Create a font with the given family and point size.
    ///
    /// Non-positive sizes are clamped to 1.0.
    pub fn new(family: FontFamily, point_size: f32) -> Self {
        Self {
            family,
            point_size: point_size.max(1.0),
        }
    }

    /// The font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// The point size.
    pub fn point_size(&self) -> f32 {
        self.point_size
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 13.0)
    }
}
