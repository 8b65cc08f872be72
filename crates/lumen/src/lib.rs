//! Lumen: a customizable glow-button control built on layer compositing.
//!
//! The centerpiece is [`GlowButton`], an on/off button with configurable
//! per-state colors, rounded corners, an optional icon with several placement
//! and rescaling modes, hover highlighting, and a drop-shadow glow while on.
//! The control never draws; it writes state into a small tree of compositing
//! layers supplied by a [`LayerBackend`], so it runs identically against a
//! real compositor or the bundled in-memory one.
//!
//! # Quick start
//!
//! ```
//! use std::sync::Arc;
//! use lumen::widget::{GlowButton, GlowStyle, StatePair};
//! use lumen_render::{Color, MemoryBackend, Rect};
//!
//! let style = GlowStyle {
//!     icon: StatePair::new(Color::WHITE, Color::from_rgb8(140, 205, 247)),
//!     glow_radius: 6.0,
//!     glow_opacity: 0.9,
//!     momentary: false,
//!     ..GlowStyle::default()
//! };
//!
//! let mut button = GlowButton::new(Arc::new(MemoryBackend::new()))
//!     .with_frame(Rect::new(0.0, 0.0, 120.0, 40.0))
//!     .with_title("Power")
//!     .with_style(style);
//!
//! button.toggled.connect(|on| println!("power: {on}"));
//! button.click();
//! assert!(button.is_on());
//! ```
//!
//! # Crate layout
//!
//! - [`widget`]: the control, its style, events, and pointer tracking
//! - [`lumen_core`] (re-exported): signals and logging targets
//! - [`lumen_render`] (re-exported): geometry, colors, images, and the
//!   [`Layer`]/[`LayerBackend`] compositing contract

pub mod widget;

pub use widget::{GlowButton, GlowStyle, ImagePlacement, StatePair, TrackingRegistry};

pub use lumen_core::{ConnectionId, Signal};
pub use lumen_render::{
    Color, CornerMask, Font, FontFamily, Image, ImageScaling, Layer, LayerBackend, MemoryBackend,
    MemoryLayer, Point, Rect, Shadow, Size,
};
