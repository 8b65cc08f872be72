//! The glow button control.
//!
//! [`GlowButton`] is an on/off button with per-state colors, an optional
//! icon, and a drop-shadow glow while on. It owns a small tree of compositing
//! layers and drives them through two passes:
//!
//! - the recolor pass ([`update_colors`](GlowButton::update_colors) internally)
//!   resolves every color pair against the on/off state, applies hover
//!   highlighting, chooses which icon layer is visible, and gates the glow;
//! - the layout pass positions the title and icon inside the frame according
//!   to the [`ImagePlacement`].
//!
//! Every mutation runs the passes it affects, so layers are always consistent
//! with the control state:
//!
//! | Mutation | Recolor | Layout |
//! |----------------------------------------------------------|---------|--------|
//! | `set_on`, color pairs, hover/glow switches, `set_enabled` | yes | no |
//! | `set_frame`, `set_title`, `set_font`, `set_image_placement`, `set_corner_radius` | no | yes |
//! | `set_style` | yes | yes |
//! | image installs (`set_image`, `set_alternate_image`) | yes | yes |
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use lumen::widget::{GlowButton, ImagePlacement};
//! use lumen_render::{Image, MemoryBackend, Rect};
//!
//! let backend = Arc::new(MemoryBackend::new());
//! let mut button = GlowButton::new(backend)
//!     .with_frame(Rect::new(0.0, 0.0, 120.0, 40.0))
//!     .with_title("Record")
//!     .with_image(Image::from_size((16.0, 16.0)))
//!     .with_image_placement(ImagePlacement::Left);
//!
//! button.activated.connect(|()| {
//!     println!("clicked");
//! });
//! button.click();
//! ```

use std::sync::Arc;

use lumen_core::logging::targets;
use lumen_core::Signal;
use lumen_render::{
    scaled_size, Color, CornerMask, Font, Image, ImageScaling, Layer, LayerBackend, Point, Rect,
    Shadow,
};

use super::events::{
    MouseButton, PointerEnterEvent, PointerLeaveEvent, PointerPressEvent, PointerReleaseEvent,
};
use super::style::{GlowStyle, StatePair, HOVER_HIGHLIGHT_LEVEL};
use super::tracking::{TrackingId, TrackingRegistry};

/// Whole-control opacity while disabled.
const DISABLED_OPACITY: f32 = 0.25;

/// Where the icon sits relative to the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImagePlacement {
    /// Title only; the icon layers are not positioned.
    #[default]
    NoImage,
    /// Icon centered, title not positioned.
    ImageOnly,
    /// Icon above the title.
    Above,
    /// Icon below the title.
    Below,
    /// Icon on the left edge, title centered.
    Left,
    /// Icon on the right edge, title centered.
    Right,
}

/// An on/off button with per-state colors, an icon, and a glow.
///
/// The control keeps two icon layers so it can cross-fade between a primary
/// and an alternate glyph purely by tint: with an alternate image installed,
/// exactly one of the two layers carries a non-transparent tint at any time.
/// Without one, the primary layer is recolored in place.
///
/// Pointer input arrives through the four `handle_pointer_*` methods; a host
/// pairs them with a [`TrackingRegistry`] to generate enter/leave crossings.
/// Press toggles the state immediately, dragging out while pressed toggles it
/// back, and releasing a tracked press emits [`activated`](Self::activated)
/// (reverting the state first when the style is momentary).
pub struct GlowButton {
    backend: Arc<dyn LayerBackend>,

    /// Fill, border, and corner shape.
    base: Box<dyn Layer>,
    /// Carries the glow drop-shadow, sized to the control bounds.
    glow: Box<dyn Layer>,
    /// Primary icon, recolored through its image mask.
    primary_icon: Box<dyn Layer>,
    /// Alternate icon, shown while on when an alternate image is set.
    alternate_icon: Box<dyn Layer>,
    /// Title text.
    caption: Box<dyn Layer>,

    style: GlowStyle,
    title: String,
    font: Font,
    frame: Rect,

    image: Option<Image>,
    alternate_image: Option<Image>,
    over_image: Option<Image>,
    image_scaling: ImageScaling,
    image_placement: ImagePlacement,

    enabled: bool,
    on: bool,
    pointer_down: bool,
    pointer_over: bool,

    tracking: Option<TrackingId>,

    /// Emitted when a tracked press is released over the control.
    pub activated: Signal<()>,
    /// Emitted whenever the on/off state actually changes.
    pub toggled: Signal<bool>,
}

impl GlowButton {
    /// Create a button with default style, empty title, and zero frame.
    pub fn new(backend: Arc<dyn LayerBackend>) -> Self {
        let style = GlowStyle::default();

        let mut base = backend.create_layer();
        base.set_masks_to_bounds(false);
        base.set_corner_radius(style.corner_radius);
        base.set_border_width(style.border_width);
        base.set_masked_corners(style.rounded_corners);

        let mut glow = backend.create_layer();
        glow.set_masks_to_bounds(false);
        glow.set_shadow(Shadow {
            color: Color::TRANSPARENT,
            radius: style.glow_radius,
            opacity: style.glow_opacity,
            offset: Point::ZERO,
        });

        let mut primary_icon = backend.create_layer();
        primary_icon.set_masks_to_bounds(true);
        let mut alternate_icon = backend.create_layer();
        alternate_icon.set_masks_to_bounds(true);

        let caption = backend.create_layer();

        let mut button = Self {
            backend,
            base,
            glow,
            primary_icon,
            alternate_icon,
            caption,
            style,
            title: String::new(),
            font: Font::default(),
            frame: Rect::ZERO,
            image: None,
            alternate_image: None,
            over_image: None,
            image_scaling: ImageScaling::default(),
            image_placement: ImagePlacement::default(),
            enabled: true,
            on: false,
            pointer_down: false,
            pointer_over: false,
            tracking: None,
            activated: Signal::new(),
            toggled: Signal::new(),
        };
        button.update_backing_scale();
        button.update_colors();
        button
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Set the frame (builder style).
    pub fn with_frame(mut self, frame: Rect) -> Self {
        self.set_frame(frame);
        self
    }

    /// Set the title (builder style).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    /// Set the font (builder style).
    pub fn with_font(mut self, font: Font) -> Self {
        self.set_font(font);
        self
    }

    /// Set the style (builder style).
    pub fn with_style(mut self, style: GlowStyle) -> Self {
        self.set_style(style);
        self
    }

    /// Set the primary image (builder style).
    pub fn with_image(mut self, image: Image) -> Self {
        self.set_image(Some(image));
        self
    }

    /// Set the alternate image (builder style).
    pub fn with_alternate_image(mut self, image: Image) -> Self {
        self.set_alternate_image(Some(image));
        self
    }

    /// Set the hover image (builder style).
    pub fn with_over_image(mut self, image: Image) -> Self {
        self.set_over_image(Some(image));
        self
    }

    /// Set the image scaling mode (builder style).
    pub fn with_image_scaling(mut self, scaling: ImageScaling) -> Self {
        self.set_image_scaling(scaling);
        self
    }

    /// Set the image placement (builder style).
    pub fn with_image_placement(mut self, placement: ImagePlacement) -> Self {
        self.set_image_placement(placement);
        self
    }

    // ========================================================================
    // State
    // ========================================================================

    /// Whether the control is on.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Set the on/off state.
    ///
    /// Recolors and emits [`toggled`](Self::toggled) only when the state
    /// actually changes.
    pub fn set_on(&mut self, on: bool) {
        if self.on == on {
            return;
        }
        self.on = on;
        tracing::trace!(target: targets::INTERACTION, on, "state changed");
        self.update_colors();
        self.toggled.emit(on);
    }

    /// Whether the control accepts pointer input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the control.
    ///
    /// A disabled control renders at reduced opacity and suppresses pointer
    /// events and hit-testing entirely.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        self.base
            .set_opacity(if enabled { 1.0 } else { DISABLED_OPACITY });
        self.update_colors();
    }

    /// Whether the pointer is currently over the control.
    pub fn is_pointer_over(&self) -> bool {
        self.pointer_over
    }

    /// Whether a tracked press is in progress.
    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    // ========================================================================
    // Geometry, title, style
    // ========================================================================

    /// The frame in parent coordinates.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Move and resize the control.
    ///
    /// If the control is registered with a [`TrackingRegistry`], follow up
    /// with [`sync_tracking`](Self::sync_tracking).
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.base.set_frame(frame);
        self.glow.set_frame(Rect::from_size(frame.size));
        self.position_title_and_image();
    }

    /// The title text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the title text.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.caption.set_text(&self.title, &self.font);
        self.position_title_and_image();
    }

    /// The title font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Set the title font.
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
        self.caption.set_text(&self.title, &self.font);
        self.position_title_and_image();
    }

    /// The current style.
    pub fn style(&self) -> &GlowStyle {
        &self.style
    }

    /// Replace the whole style.
    pub fn set_style(&mut self, style: GlowStyle) {
        self.style = style.sanitized();
        self.apply_style_metrics();
        self.update_colors();
        self.position_title_and_image();
    }

    /// Set the normal/active border colors.
    pub fn set_border_colors(&mut self, colors: StatePair<Color>) {
        self.style.border = colors;
        self.update_colors();
    }

    /// Set the normal/active fill colors.
    pub fn set_fill_colors(&mut self, colors: StatePair<Color>) {
        self.style.fill = colors;
        self.update_colors();
    }

    /// Set the normal/active title colors.
    pub fn set_text_colors(&mut self, colors: StatePair<Color>) {
        self.style.text = colors;
        self.update_colors();
    }

    /// Set the normal/active icon tints. The active tint is also the glow color.
    pub fn set_icon_colors(&mut self, colors: StatePair<Color>) {
        self.style.icon = colors;
        self.update_colors();
    }

    /// Set the glow blur radius in points.
    pub fn set_glow_radius(&mut self, radius: f32) {
        self.style.glow_radius = radius.max(0.0);
        self.apply_style_metrics();
        self.update_colors();
    }

    /// Set the glow opacity (0.0 to 1.0).
    pub fn set_glow_opacity(&mut self, opacity: f32) {
        self.style.glow_opacity = opacity.clamp(0.0, 1.0);
        self.apply_style_metrics();
        self.update_colors();
    }

    /// Set the corner rounding radius. Side image placements anchor to it.
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.style.corner_radius = radius.max(0.0);
        self.base.set_corner_radius(self.style.corner_radius);
        self.position_title_and_image();
    }

    /// Set the border stroke width.
    pub fn set_border_width(&mut self, width: f32) {
        self.style.border_width = width.max(0.0);
        self.base.set_border_width(self.style.border_width);
    }

    /// Choose which corners are rounded.
    pub fn set_rounded_corners(&mut self, corners: CornerMask) {
        self.style.rounded_corners = corners;
        self.base.set_masked_corners(corners);
    }

    /// Whether the control reverts to off after each activation.
    pub fn set_momentary(&mut self, momentary: bool) {
        self.style.momentary = momentary;
    }

    /// Enable or disable hover highlighting of the fill.
    pub fn set_hover_highlighting(&mut self, hover: bool) {
        self.style.hover_highlighting = hover;
        self.update_colors();
    }

    // ========================================================================
    // Images
    // ========================================================================

    /// The primary image.
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Install the primary image.
    ///
    /// The image is rescaled against the current frame with the active
    /// [`ImageScaling`] mode and installed as the primary icon layer's mask.
    pub fn set_image(&mut self, image: Option<Image>) {
        self.image = image;
        let display = self.image.clone();
        self.show_primary_image(display);
        // A freshly installed mask still needs its tint resolved.
        self.update_colors();
    }

    /// The alternate image, shown while on.
    pub fn alternate_image(&self) -> Option<&Image> {
        self.alternate_image.as_ref()
    }

    /// Install the alternate image, or clear it with `None`.
    pub fn set_alternate_image(&mut self, image: Option<Image>) {
        self.alternate_image = image;
        match self.alternate_image.clone() {
            Some(image) => {
                let display = scaled_size(image.size(), self.frame.size, self.image_scaling);
                self.alternate_icon.set_frame(Rect::from_size(display));
                self.alternate_icon.set_mask_image(Some(image));
                self.position_title_and_image();
            }
            None => {
                self.alternate_icon.set_mask_image(None);
            }
        }
        self.update_colors();
    }

    /// The hover image.
    pub fn over_image(&self) -> Option<&Image> {
        self.over_image.as_ref()
    }

    /// Set the image shown in the primary slot while the pointer hovers.
    ///
    /// Takes effect on the next pointer crossing; when unset, the primary
    /// image stays up during hover.
    pub fn set_over_image(&mut self, image: Option<Image>) {
        self.over_image = image;
    }

    /// The image scaling mode.
    pub fn image_scaling(&self) -> ImageScaling {
        self.image_scaling
    }

    /// Set the scaling mode. Applies to images installed from now on.
    pub fn set_image_scaling(&mut self, scaling: ImageScaling) {
        self.image_scaling = scaling;
    }

    /// The image placement.
    pub fn image_placement(&self) -> ImagePlacement {
        self.image_placement
    }

    /// Set the image placement and re-run layout.
    pub fn set_image_placement(&mut self, placement: ImagePlacement) {
        self.image_placement = placement;
        self.position_title_and_image();
    }

    // ========================================================================
    // Pointer input
    // ========================================================================

    /// Handle the pointer entering the tracked area.
    ///
    /// Swaps in the hover image if one is set, refreshes hover colors, and
    /// resumes drag-toggling when a press is in progress. Returns `true` and
    /// accepts the event when handled; disabled controls handle nothing.
    pub fn handle_pointer_enter(&mut self, event: &mut PointerEnterEvent) -> bool {
        if !self.enabled {
            return false;
        }
        self.pointer_over = true;
        tracing::trace!(target: targets::INTERACTION, "pointer entered");

        let over = self.over_image.clone();
        self.show_primary_image(over);
        self.update_colors();
        if self.pointer_down {
            self.set_on(!self.on);
        }
        event.base.accept();
        true
    }

    /// Handle the pointer leaving the tracked area.
    ///
    /// Restores the primary image, drops hover colors, and toggles back any
    /// press that is dragged out, ending its tracking.
    pub fn handle_pointer_leave(&mut self, event: &mut PointerLeaveEvent) -> bool {
        if !self.enabled {
            return false;
        }
        self.pointer_over = false;
        tracing::trace!(target: targets::INTERACTION, "pointer left");

        let primary = self.image.clone();
        self.show_primary_image(primary);
        self.update_colors();
        if self.pointer_down {
            self.set_on(!self.on);
            self.pointer_down = false;
        }
        event.base.accept();
        true
    }

    /// Handle a primary-button press over the control.
    ///
    /// Toggles the state immediately and starts press tracking.
    pub fn handle_pointer_press(&mut self, event: &mut PointerPressEvent) -> bool {
        if !self.enabled || event.button != MouseButton::Left {
            return false;
        }
        self.pointer_down = true;
        tracing::trace!(target: targets::INTERACTION, "press started");

        self.set_on(!self.on);
        let primary = self.image.clone();
        self.show_primary_image(primary);
        self.update_colors();
        event.base.accept();
        true
    }

    /// Handle a primary-button release.
    ///
    /// Only a release that ends a tracked press counts: it emits
    /// [`activated`](Self::activated), after reverting the state when the
    /// style is momentary. A release with no press in progress (for example
    /// after dragging out) is ignored.
    pub fn handle_pointer_release(&mut self, event: &mut PointerReleaseEvent) -> bool {
        if !self.enabled || event.button != MouseButton::Left {
            return false;
        }
        if !self.pointer_down {
            return false;
        }
        self.pointer_down = false;
        if self.style.momentary {
            self.set_on(!self.on);
        }
        tracing::debug!(target: targets::INTERACTION, "activated");
        self.activated.emit(());
        event.base.accept();
        true
    }

    /// Whether `point` (in parent coordinates) hits the control.
    ///
    /// Disabled controls are transparent to hit-testing.
    pub fn hit_test(&self, point: Point) -> bool {
        self.enabled && self.frame.contains(point)
    }

    /// Activate programmatically, as if pressed and released in place.
    pub fn click(&mut self) {
        if !self.enabled {
            return;
        }
        self.set_on(!self.on);
        if self.style.momentary {
            self.set_on(!self.on);
        }
        self.activated.emit(());
    }

    // ========================================================================
    // Tracking integration
    // ========================================================================

    /// Register this control's frame with a tracking registry.
    pub fn attach_tracking(&mut self, registry: &mut TrackingRegistry) -> TrackingId {
        let id = registry.register(self.frame);
        self.tracking = Some(id);
        id
    }

    /// Remove this control's area from the registry.
    pub fn detach_tracking(&mut self, registry: &mut TrackingRegistry) {
        if let Some(id) = self.tracking.take() {
            registry.unregister(id);
        }
    }

    /// Push the current frame to the registered tracking area.
    pub fn sync_tracking(&self, registry: &mut TrackingRegistry) {
        if let Some(id) = self.tracking {
            registry.set_rect(id, self.frame);
        }
    }

    /// The tracking handle, if registered.
    pub fn tracking_id(&self) -> Option<TrackingId> {
        self.tracking
    }

    /// Reconcile hover state against the current pointer position.
    ///
    /// Hosts call this after moving or re-registering the control, when the
    /// pointer may already sit inside (or outside) the new area without a
    /// crossing event having fired. Synthesizes the missing enter or leave.
    pub fn resync_pointer(&mut self, pointer: Point) {
        if !self.enabled {
            return;
        }
        let inside = self.frame.contains(pointer);
        if inside && !self.pointer_over {
            let mut event = PointerEnterEvent::new(pointer);
            self.handle_pointer_enter(&mut event);
        } else if !inside && self.pointer_over {
            let mut event = PointerLeaveEvent::new();
            self.handle_pointer_leave(&mut event);
        }
    }

    // ========================================================================
    // Layer access
    // ========================================================================

    /// The fill/border layer.
    pub fn base_layer(&self) -> &dyn Layer {
        &*self.base
    }

    /// The glow shadow layer.
    pub fn glow_layer(&self) -> &dyn Layer {
        &*self.glow
    }

    /// The primary icon layer.
    pub fn primary_icon_layer(&self) -> &dyn Layer {
        &*self.primary_icon
    }

    /// The alternate icon layer.
    pub fn alternate_icon_layer(&self) -> &dyn Layer {
        &*self.alternate_icon
    }

    /// The title text layer.
    pub fn title_layer(&self) -> &dyn Layer {
        &*self.caption
    }

    /// Propagate the backend's backing scale to every layer.
    pub fn update_backing_scale(&mut self) {
        let scale = self.backend.backing_scale();
        for layer in [
            &mut self.base,
            &mut self.glow,
            &mut self.primary_icon,
            &mut self.alternate_icon,
            &mut self.caption,
        ] {
            layer.set_contents_scale(scale);
        }
    }

    // ========================================================================
    // Passes
    // ========================================================================

    /// Push the style's non-color metrics into the layers.
    fn apply_style_metrics(&mut self) {
        self.base.set_corner_radius(self.style.corner_radius);
        self.base.set_border_width(self.style.border_width);
        self.base.set_masked_corners(self.style.rounded_corners);

        let mut shadow = self.glow.shadow();
        shadow.radius = self.style.glow_radius;
        shadow.opacity = self.style.glow_opacity;
        self.glow.set_shadow(shadow);
    }

    /// Install `image` into the primary icon slot, rescaled to the frame.
    ///
    /// `None` is a no-op so a missing hover image keeps the primary up.
    fn show_primary_image(&mut self, image: Option<Image>) {
        let Some(image) = image else {
            return;
        };
        let display = scaled_size(image.size(), self.frame.size, self.image_scaling);
        let frame = self.primary_icon.frame().with_size(display);
        self.primary_icon.set_frame(frame);
        self.primary_icon.set_mask_image(Some(image));
        self.position_title_and_image();
    }

    /// The recolor pass.
    ///
    /// Idempotent: derives every layer color from current state, so running
    /// it twice writes the same values.
    fn update_colors(&mut self) {
        let on = self.on;

        let mut fill = *self.style.fill.resolve(on);
        if self.pointer_over && self.enabled && self.style.hover_highlighting {
            fill = fill.highlighted(HOVER_HIGHLIGHT_LEVEL);
        }
        self.base.set_background(fill);
        self.base.set_border_color(*self.style.border.resolve(on));
        self.caption.set_text_color(*self.style.text.resolve(on));

        if self.alternate_image.is_none() {
            self.primary_icon
                .set_background(*self.style.icon.resolve(on));
        } else if on {
            // Exactly one icon layer visible at a time.
            self.primary_icon.set_background(Color::TRANSPARENT);
            self.alternate_icon.set_background(self.style.icon.active);
        } else {
            self.primary_icon.set_background(self.style.icon.normal);
            self.alternate_icon.set_background(Color::TRANSPARENT);
        }

        // The glow only participates when it has both radius and opacity.
        if self.style.glow_radius > 0.0 && self.style.glow_opacity > 0.0 {
            let glow = if on {
                self.style.icon.active
            } else {
                Color::TRANSPARENT
            };
            self.glow.set_shadow_color(glow);
        }

        tracing::trace!(
            target: targets::STYLE,
            on,
            hover = self.pointer_over,
            "recolor pass"
        );
    }

    /// The layout pass.
    ///
    /// Positions the title and icon inside the control bounds. Origins are
    /// rounded to whole points. The `Below` placement keeps its historical
    /// bottom-up coordinates: the title lands 2pt from the top edge and the
    /// icon is offset up from the bottom.
    fn position_title_and_image(&mut self) {
        let bounds = Rect::from_size(self.frame.size);
        let title_size = self.backend.measure_text(&self.title, &self.font);
        let mut title_rect = Rect::from_size(title_size);
        let mut icon_rect = self.primary_icon.frame();

        let center_x = |width: f32| ((bounds.width() - width) / 2.0).round();
        let center_y = |height: f32| ((bounds.height() - height) / 2.0).round();
        let v_spacing =
            ((bounds.height() - (icon_rect.height() + title_rect.height())) / 3.0).round();

        match self.image_placement {
            ImagePlacement::NoImage => {
                title_rect.origin.x = center_x(title_rect.width());
                title_rect.origin.y = center_y(title_rect.height());
            }
            ImagePlacement::ImageOnly => {
                icon_rect.origin.x = center_x(icon_rect.width());
                icon_rect.origin.y = center_y(icon_rect.height());
            }
            ImagePlacement::Above => {
                title_rect.origin.x = center_x(title_rect.width());
                title_rect.origin.y = bounds.height() - title_rect.height() - 2.0;
                icon_rect.origin.x = center_x(icon_rect.width());
                icon_rect.origin.y = v_spacing;
            }
            ImagePlacement::Below => {
                title_rect.origin.x = center_x(title_rect.width());
                title_rect.origin.y = 2.0;
                icon_rect.origin.x = center_x(icon_rect.width());
                icon_rect.origin.y = bounds.height() - v_spacing - icon_rect.height();
            }
            ImagePlacement::Left => {
                title_rect.origin.x = center_x(title_rect.width());
                title_rect.origin.y = center_y(title_rect.height());
                icon_rect.origin.x = self.style.corner_radius;
                icon_rect.origin.y = center_y(icon_rect.height());
            }
            ImagePlacement::Right => {
                title_rect.origin.x = center_x(title_rect.width());
                title_rect.origin.y = center_y(title_rect.height());
                icon_rect.origin.x = bounds.width() - icon_rect.width() - self.style.corner_radius;
                icon_rect.origin.y = center_y(icon_rect.height());
            }
        }

        self.caption.set_frame(title_rect);
        self.primary_icon.set_frame(icon_rect);
        self.alternate_icon.set_frame(icon_rect);

        tracing::trace!(
            target: targets::LAYOUT,
            placement = ?self.image_placement,
            ?title_rect,
            ?icon_rect,
            "layout pass"
        );
    }
}

impl std::fmt::Debug for GlowButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlowButton")
            .field("title", &self.title)
            .field("frame", &self.frame)
            .field("on", &self.on)
            .field("enabled", &self.enabled)
            .field("pointer_over", &self.pointer_over)
            .field("pointer_down", &self.pointer_down)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(GlowButton: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use lumen_render::{MemoryBackend, Size};

    const FRAME: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    fn button() -> GlowButton {
        GlowButton::new(Arc::new(MemoryBackend::new())).with_frame(FRAME)
    }

    fn press(button: &mut GlowButton) -> bool {
        let mut event = PointerPressEvent::new(MouseButton::Left, Point::new(50.0, 50.0));
        button.handle_pointer_press(&mut event)
    }

    fn release(button: &mut GlowButton) -> bool {
        let mut event = PointerReleaseEvent::new(MouseButton::Left, Point::new(50.0, 50.0));
        button.handle_pointer_release(&mut event)
    }

    fn enter(button: &mut GlowButton) -> bool {
        let mut event = PointerEnterEvent::new(Point::new(50.0, 50.0));
        button.handle_pointer_enter(&mut event)
    }

    fn leave(button: &mut GlowButton) -> bool {
        let mut event = PointerLeaveEvent::new();
        button.handle_pointer_leave(&mut event)
    }

    fn activation_counter(button: &GlowButton) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        button.activated.connect(move |()| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn test_recolor_is_idempotent() {
        let mut b = button();
        b.set_on(true);

        let background = b.base_layer().background();
        let border = b.base_layer().border_color();
        let tint = b.primary_icon_layer().background();

        b.update_colors();
        assert_eq!(b.base_layer().background(), background);
        assert_eq!(b.base_layer().border_color(), border);
        assert_eq!(b.primary_icon_layer().background(), tint);
    }

    #[test]
    fn test_hover_highlight_requires_all_three_conditions() {
        let mut b = button();
        let fill = Color::from_rgb8(40, 40, 60);
        b.set_fill_colors(StatePair::new(fill, fill));

        for over in [false, true] {
            for enabled in [false, true] {
                for hover in [false, true] {
                    b.pointer_over = over;
                    b.enabled = enabled;
                    b.style.hover_highlighting = hover;
                    b.update_colors();

                    let expected = if over && enabled && hover {
                        fill.highlighted(HOVER_HIGHLIGHT_LEVEL)
                    } else {
                        fill
                    };
                    assert_eq!(
                        b.base_layer().background(),
                        expected,
                        "over={over} enabled={enabled} hover={hover}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_image_install_applies_scaling() {
        let mut b = button();
        b.set_image_scaling(ImageScaling::ProportionallyDown);
        b.set_image(Some(Image::from_size((200.0, 100.0))));

        assert_eq!(
            b.primary_icon_layer().frame().size,
            Size::new(100.0, 50.0)
        );
    }

    #[test]
    fn test_image_above_layout() {
        let backend = MemoryBackend::new().with_fixed_text_size(Size::new(60.0, 20.0));
        let mut b = GlowButton::new(Arc::new(backend))
            .with_frame(FRAME)
            .with_title("Run")
            .with_image(Image::from_size((40.0, 40.0)))
            .with_image_placement(ImagePlacement::Above);

        let title = b.title_layer().frame();
        assert_eq!(title.origin, Point::new(20.0, 78.0));

        let icon = b.primary_icon_layer().frame();
        assert_eq!(icon.origin, Point::new(30.0, 13.0));
        // Alternate icon mirrors the primary frame.
        assert_eq!(b.alternate_icon_layer().frame(), icon);
    }

    #[test]
    fn test_image_below_keeps_bottom_up_coordinates() {
        let backend = MemoryBackend::new().with_fixed_text_size(Size::new(60.0, 20.0));
        let mut b = GlowButton::new(Arc::new(backend))
            .with_frame(FRAME)
            .with_title("Run")
            .with_image(Image::from_size((40.0, 40.0)));
        b.set_image_placement(ImagePlacement::Below);

        assert_eq!(b.title_layer().frame().origin.y, 2.0);
        // v_spacing = round((100 - 60) / 3) = 13, icon y = 100 - 13 - 40.
        assert_eq!(b.primary_icon_layer().frame().origin.y, 47.0);
    }

    #[test]
    fn test_side_placements_anchor_to_corner_radius() {
        let mut b = button().with_image(Image::from_size((40.0, 40.0)));

        b.set_image_placement(ImagePlacement::Left);
        assert_eq!(b.primary_icon_layer().frame().origin.x, 4.0);

        b.set_image_placement(ImagePlacement::Right);
        assert_eq!(b.primary_icon_layer().frame().origin.x, 56.0);

        b.set_corner_radius(10.0);
        assert_eq!(b.primary_icon_layer().frame().origin.x, 50.0);
    }

    #[test]
    fn test_hover_crossing_swaps_over_image() {
        let mut b = button()
            .with_image(Image::from_size((40.0, 40.0)))
            .with_over_image(Image::from_size((20.0, 20.0)));

        assert!(enter(&mut b));
        assert!(b.is_pointer_over());
        assert_eq!(
            b.primary_icon_layer().frame().size,
            Size::new(20.0, 20.0)
        );

        assert!(leave(&mut b));
        assert!(!b.is_pointer_over());
        assert_eq!(
            b.primary_icon_layer().frame().size,
            Size::new(40.0, 40.0)
        );
        assert!(!b.is_on());
    }

    #[test]
    fn test_enter_without_over_image_keeps_primary() {
        let mut b = button().with_image(Image::from_size((40.0, 40.0)));

        enter(&mut b);
        let mask_size = b.primary_icon_layer().mask_image().unwrap().size();
        assert_eq!(mask_size, Size::new(40.0, 40.0));
    }

    #[test]
    fn test_momentary_press_release_cycle() {
        let mut b = button();
        let activations = activation_counter(&b);

        assert!(press(&mut b));
        assert!(b.is_on());

        assert!(release(&mut b));
        assert!(!b.is_on());
        assert_eq!(activations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_persistent_mode_keeps_state_on_release() {
        let mut b = button();
        b.set_momentary(false);
        let activations = activation_counter(&b);

        press(&mut b);
        release(&mut b);
        assert!(b.is_on());
        assert_eq!(activations.load(Ordering::SeqCst), 1);

        press(&mut b);
        release(&mut b);
        assert!(!b.is_on());
        assert_eq!(activations.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_drag_out_cancels_press() {
        let mut b = button();
        b.set_momentary(false);
        let activations = activation_counter(&b);

        press(&mut b);
        assert!(b.is_on());

        // Dragging out while pressed toggles back and ends tracking.
        leave(&mut b);
        assert!(!b.is_on());
        assert!(!b.is_pointer_down());

        // The release outside no longer counts.
        assert!(!release(&mut b));
        assert_eq!(activations.load(Ordering::SeqCst), 0);

        // Re-entering without a live press does not toggle.
        enter(&mut b);
        assert!(!b.is_on());
    }

    #[test]
    fn test_drag_back_in_resumes_toggle() {
        let mut b = button();
        b.set_momentary(false);

        press(&mut b);
        assert!(b.is_on());

        // Simulate drag out and back in with the press still alive: the
        // crossing itself toggles each time.
        b.pointer_over = false;
        let mut event = PointerEnterEvent::new(Point::new(50.0, 50.0));
        b.handle_pointer_enter(&mut event);
        assert!(!b.is_on());
    }

    #[test]
    fn test_non_primary_button_is_ignored() {
        let mut b = button();
        let mut event = PointerPressEvent::new(MouseButton::Right, Point::new(50.0, 50.0));
        assert!(!b.handle_pointer_press(&mut event));
        assert!(!b.is_on());
        assert!(!event.base.is_accepted());
    }

    #[test]
    fn test_disabled_suppresses_input_and_hit_testing() {
        let mut b = button();
        let activations = activation_counter(&b);
        b.set_enabled(false);

        assert_eq!(b.base_layer().opacity(), DISABLED_OPACITY);
        assert!(!enter(&mut b));
        assert!(!press(&mut b));
        assert!(!release(&mut b));
        assert!(!b.is_on());
        assert!(!b.is_pointer_over());
        assert!(!b.hit_test(Point::new(50.0, 50.0)));
        assert_eq!(activations.load(Ordering::SeqCst), 0);

        b.set_enabled(true);
        assert_eq!(b.base_layer().opacity(), 1.0);
        assert!(b.hit_test(Point::new(50.0, 50.0)));
    }

    #[test]
    fn test_toggled_emits_only_on_change() {
        let b = button();
        let toggles = Arc::new(AtomicUsize::new(0));
        let toggles_clone = toggles.clone();
        b.toggled.connect(move |_| {
            toggles_clone.fetch_add(1, Ordering::SeqCst);
        });

        let mut b = b;
        b.set_on(true);
        b.set_on(true);
        b.set_on(false);
        assert_eq!(toggles.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_glow_follows_active_icon_color() {
        let mut b = button();
        let active = Color::from_rgb8(140, 205, 247);
        b.set_icon_colors(StatePair::new(Color::WHITE, active));
        b.set_glow_radius(6.0);
        b.set_glow_opacity(0.9);

        b.set_on(true);
        let shadow = b.glow_layer().shadow();
        assert_eq!(shadow.color, active);
        assert_eq!(shadow.radius, 6.0);
        assert_eq!(shadow.opacity, 0.9);

        b.set_on(false);
        assert_eq!(b.glow_layer().shadow().color, Color::TRANSPARENT);
    }

    #[test]
    fn test_zero_glow_stays_dark() {
        let mut b = button();
        b.set_on(true);
        assert_eq!(b.glow_layer().shadow().color, Color::TRANSPARENT);
        assert_eq!(b.glow_layer().shadow().radius, 0.0);
    }

    #[test]
    fn test_alternate_icon_visibility() {
        let mut b = button()
            .with_image(Image::from_size((40.0, 40.0)))
            .with_alternate_image(Image::from_size((40.0, 40.0)));
        let normal = Color::from_rgb8(230, 230, 230);
        let active = Color::from_rgb8(120, 190, 255);
        b.set_icon_colors(StatePair::new(normal, active));

        assert_eq!(b.primary_icon_layer().background(), normal);
        assert!(b.alternate_icon_layer().background().is_transparent());

        b.set_on(true);
        assert!(b.primary_icon_layer().background().is_transparent());
        assert_eq!(b.alternate_icon_layer().background(), active);
    }

    #[test]
    fn test_no_alternate_recolors_primary_in_place() {
        let mut b = button().with_image(Image::from_size((40.0, 40.0)));
        let normal = Color::WHITE;
        let active = Color::from_rgb8(255, 64, 64);
        b.set_icon_colors(StatePair::new(normal, active));

        assert_eq!(b.primary_icon_layer().background(), normal);
        b.set_on(true);
        assert_eq!(b.primary_icon_layer().background(), active);
    }

    #[test]
    fn test_click_is_a_full_activation() {
        let mut b = button();
        let activations = activation_counter(&b);

        b.click();
        assert!(!b.is_on());
        assert_eq!(activations.load(Ordering::SeqCst), 1);

        b.set_momentary(false);
        b.click();
        assert!(b.is_on());
        assert_eq!(activations.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_tracking_attach_sync_detach() {
        let mut registry = TrackingRegistry::new();
        let mut b = button();

        let id = b.attach_tracking(&mut registry);
        assert!(registry.contains(id, Point::new(50.0, 50.0)));

        b.set_frame(Rect::new(200.0, 0.0, 100.0, 100.0));
        b.sync_tracking(&mut registry);
        assert!(!registry.contains(id, Point::new(50.0, 50.0)));
        assert!(registry.contains(id, Point::new(250.0, 50.0)));

        b.detach_tracking(&mut registry);
        assert!(registry.is_empty());
        assert!(b.tracking_id().is_none());
    }

    #[test]
    fn test_resync_pointer_synthesizes_crossings() {
        let mut b = button();

        b.resync_pointer(Point::new(50.0, 50.0));
        assert!(b.is_pointer_over());

        b.resync_pointer(Point::new(500.0, 500.0));
        assert!(!b.is_pointer_over());
    }

    #[test]
    fn test_zero_sized_image_does_not_break_layout() {
        let mut b = button().with_title("Run");
        b.set_image(Some(Image::from_size((0.0, 0.0))));
        b.set_image_placement(ImagePlacement::Above);

        assert_eq!(b.primary_icon_layer().frame().size, Size::ZERO);
    }

    #[test]
    fn test_disabled_then_enabled_restores_hover_path() {
        let mut b = button();
        b.set_enabled(false);
        assert!(!enter(&mut b));

        b.set_enabled(true);
        assert!(enter(&mut b));
        assert!(b.is_pointer_over());
    }
}
