//! Presentation primitives for Lumen.
//!
//! This crate provides the value types and the compositing abstraction the
//! widget crate is built on:
//!
//! - Geometry: [`Point`], [`Size`], [`Rect`], [`CornerMask`]
//! - [`Color`] with the lighten/darken/highlight helpers widgets use for
//!   state feedback
//! - [`Layer`] / [`LayerBackend`]: the capability contract a host compositor
//!   supplies, with the in-memory [`MemoryLayer`] / [`MemoryBackend`]
//!   implementation for tests and headless use
//! - [`Image`] and the [`scaled_size`] rescaling rules
//! - [`Font`] descriptions for backend text measurement
//!
//! # Example
//!
//! ```
//! use lumen_render::{Color, LayerBackend, MemoryBackend, Rect};
//!
//! let backend = MemoryBackend::new();
//! let mut layer = backend.create_layer();
//! layer.set_frame(Rect::new(0.0, 0.0, 80.0, 24.0));
//! layer.set_background(Color::from_rgb8(60, 60, 60));
//! assert_eq!(layer.background(), Color::from_rgb8(60, 60, 60));
//! ```

mod error;
mod font;
mod image;
mod layer;
mod types;

pub use error::{RenderError, RenderResult};
pub use font::{Font, FontFamily};
pub use image::{scaled_size, Image, ImageScaling};
pub use layer::{Layer, LayerBackend, MemoryBackend, MemoryLayer, Shadow};
pub use types::{Color, CornerMask, Point, Rect, Size};
