//! Layer compositing abstraction.
//!
//! Widgets in Lumen do not draw; they own a small tree of compositing layers
//! and write style properties (tint, frame, border, shadow, text) into them.
//! The [`Layer`] trait is the capability set a host compositor must supply,
//! and [`LayerBackend`] is the factory plus the measurement services widgets
//! need (text measurement, backing scale).
//!
//! One implementation ships with this crate: [`MemoryLayer`] /
//! [`MemoryBackend`], which record the written state so tests and headless
//! callers can inspect exactly what a real compositor would have been asked
//! to display. A binding to a GPU or platform compositor implements the same
//! two traits.

use crate::font::Font;
use crate::image::Image;
use crate::types::{Color, CornerMask, Point, Rect, Size};

/// A drop-shadow description, used for the glow effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub radius: f32,
    pub opacity: f32,
    pub offset: Point,
}

impl Shadow {
    /// No shadow: transparent, zero radius and opacity.
    pub const NONE: Self = Self {
        color: Color::TRANSPARENT,
        radius: 0.0,
        opacity: 0.0,
        offset: Point::ZERO,
    };
}

impl Default for Shadow {
    fn default() -> Self {
        Self::NONE
    }
}

/// A compositable visual surface.
///
/// Layers hold color, shape, text, and image-mask content, positioned
/// independently of widget layout logic. All setters take effect
/// synchronously; getters report the last written value so callers can verify
/// state without a live compositor.
pub trait Layer: Send + Sync {
    /// Position and size within the parent's coordinate space.
    fn frame(&self) -> Rect;
    fn set_frame(&mut self, frame: Rect);

    /// Background fill, also used as the tint for image-masked layers.
    fn background(&self) -> Color;
    fn set_background(&mut self, color: Color);

    fn border_color(&self) -> Color;
    fn set_border_color(&mut self, color: Color);

    fn border_width(&self) -> f32;
    fn set_border_width(&mut self, width: f32);

    fn corner_radius(&self) -> f32;
    fn set_corner_radius(&mut self, radius: f32);

    fn masked_corners(&self) -> CornerMask;
    fn set_masked_corners(&mut self, corners: CornerMask);

    fn opacity(&self) -> f32;
    fn set_opacity(&mut self, opacity: f32);

    fn shadow(&self) -> Shadow;
    fn set_shadow(&mut self, shadow: Shadow);

    /// Replace only the shadow color, keeping radius/opacity/offset.
    fn set_shadow_color(&mut self, color: Color) {
        let mut shadow = self.shadow();
        shadow.color = color;
        self.set_shadow(shadow);
    }

    fn masks_to_bounds(&self) -> bool;
    fn set_masks_to_bounds(&mut self, masks: bool);

    /// Text content for title layers.
    fn text(&self) -> &str;
    fn set_text(&mut self, text: &str, font: &Font);

    fn text_color(&self) -> Color;
    fn set_text_color(&mut self, color: Color);

    /// Image mask content for icon layers. The layer displays its background
    /// color through the image's alpha, which is how icons are recolored
    /// without re-rasterizing.
    fn mask_image(&self) -> Option<&Image>;
    fn set_mask_image(&mut self, image: Option<Image>);

    /// Backing-store pixels per point.
    fn contents_scale(&self) -> f32;
    fn set_contents_scale(&mut self, scale: f32);
}

/// Factory and measurement services a widget needs from the compositor.
pub trait LayerBackend: Send + Sync {
    /// Create a fresh, empty layer.
    fn create_layer(&self) -> Box<dyn Layer>;

    /// Measure the rendered size of a string in the given font.
    fn measure_text(&self, text: &str, font: &Font) -> Size;

    /// Backing-store pixels per point for the current display.
    fn backing_scale(&self) -> f32 {
        1.0
    }
}

// ============================================================================
// In-memory implementation
// ============================================================================

/// A [`Layer`] that records written state for inspection.
#[derive(Debug, Clone)]
pub struct MemoryLayer {
    frame: Rect,
    background: Color,
    border_color: Color,
    border_width: f32,
    corner_radius: f32,
    masked_corners: CornerMask,
    opacity: f32,
    shadow: Shadow,
    masks_to_bounds: bool,
    text: String,
    font: Font,
    text_color: Color,
    mask: Option<Image>,
    contents_scale: f32,
}

impl Default for MemoryLayer {
    fn default() -> Self {
        Self {
            frame: Rect::ZERO,
            background: Color::TRANSPARENT,
            border_color: Color::TRANSPARENT,
            border_width: 0.0,
            corner_radius: 0.0,
            masked_corners: CornerMask::ALL,
            opacity: 1.0,
            shadow: Shadow::NONE,
            masks_to_bounds: false,
            text: String::new(),
            font: Font::default(),
            text_color: Color::TRANSPARENT,
            mask: None,
            contents_scale: 1.0,
        }
    }
}

impl MemoryLayer {
    /// The font last written alongside the text content.
    pub fn font(&self) -> &Font {
        &self.font
    }
}

impl Layer for MemoryLayer {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn background(&self) -> Color {
        self.background
    }

    fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    fn border_color(&self) -> Color {
        self.border_color
    }

    fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
    }

    fn border_width(&self) -> f32 {
        self.border_width
    }

    fn set_border_width(&mut self, width: f32) {
        self.border_width = width.max(0.0);
    }

    fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius.max(0.0);
    }

    fn masked_corners(&self) -> CornerMask {
        self.masked_corners
    }

    fn set_masked_corners(&mut self, corners: CornerMask) {
        self.masked_corners = corners;
    }

    fn opacity(&self) -> f32 {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    fn shadow(&self) -> Shadow {
        self.shadow
    }

    fn set_shadow(&mut self, shadow: Shadow) {
        self.shadow = shadow;
    }

    fn masks_to_bounds(&self) -> bool {
        self.masks_to_bounds
    }

    fn set_masks_to_bounds(&mut self, masks: bool) {
        self.masks_to_bounds = masks;
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str, font: &Font) {
        self.text = text.to_owned();
        self.font = font.clone();
    }

    fn text_color(&self) -> Color {
        self.text_color
    }

    fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    fn mask_image(&self) -> Option<&Image> {
        self.mask.as_ref()
    }

    fn set_mask_image(&mut self, image: Option<Image>) {
        self.mask = image;
    }

    fn contents_scale(&self) -> f32 {
        self.contents_scale
    }

    fn set_contents_scale(&mut self, scale: f32) {
        self.contents_scale = scale.max(1.0);
    }
}

/// A [`LayerBackend`] producing [`MemoryLayer`]s, with deterministic text
/// metrics.
///
/// Text measurement defaults to a simple advance-per-character heuristic; for
/// layout tests that need exact title sizes, pin the result with
/// [`with_fixed_text_size`](Self::with_fixed_text_size).
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    backing_scale: f32,
    glyph_advance: f32,
    fixed_text_size: Option<Size>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    /// Create a backend with 1.0 backing scale and heuristic text metrics.
    pub fn new() -> Self {
        Self {
            backing_scale: 1.0,
            glyph_advance: 0.6,
            fixed_text_size: None,
        }
    }

    /// Set the backing-store scale factor (e.g. 2.0 for a HiDPI display).
    pub fn with_backing_scale(mut self, scale: f32) -> Self {
        self.backing_scale = scale.max(1.0);
        self
    }

    /// Make `measure_text` return a fixed size, regardless of input.
    pub fn with_fixed_text_size(mut self, size: Size) -> Self {
        self.fixed_text_size = Some(size);
        self
    }
}

impl LayerBackend for MemoryBackend {
    fn create_layer(&self) -> Box<dyn Layer> {
        Box::new(MemoryLayer::default())
    }

    fn measure_text(&self, text: &str, font: &Font) -> Size {
        if let Some(size) = self.fixed_text_size {
            return size;
        }
        if text.is_empty() {
            return Size::new(0.0, font.point_size());
        }
        let advance = font.point_size() * self.glyph_advance;
        Size::new(
            (text.chars().count() as f32 * advance).round(),
            (font.point_size() * 1.2).round(),
        )
    }

    fn backing_scale(&self) -> f32 {
        self.backing_scale
    }
}

// Ensure backends stay usable from widget types that promise Send + Sync
static_assertions::assert_impl_all!(MemoryLayer: Send, Sync);
static_assertions::assert_impl_all!(MemoryBackend: Send, Sync);
