//! Image model and rescaling rules.
//!
//! An [`Image`] carries an intrinsic size in points and, when decoded from
//! disk, its RGBA pixel data. Widgets only reason about the intrinsic size;
//! pixels are opaque payload for the compositor.
//!
//! [`scaled_size`] implements the button image-rescaling rules: a mode
//! selector chooses between proportional down-scaling, proportional scaling
//! in either direction, or per-axis clamping.

use std::path::Path;

use crate::error::{RenderError, RenderResult};
use crate::types::Size;

/// How an image is rescaled to a target frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageScaling {
    /// Leave the image size unchanged.
    #[default]
    None,
    /// Scale down proportionally until the image fits; never scale up.
    ProportionallyDown,
    /// Scale proportionally in either direction so the image fills the frame.
    ProportionallyUpOrDown,
    /// Clamp width and height independently; aspect ratio is not preserved.
    AxesIndependently,
}

/// Compute the displayed size of an image inside a target frame.
///
/// The two proportional modes apply the width ratio first and then the height
/// ratio to the already-width-scaled result, so the outcome always fits the
/// frame. An image with a zero dimension cannot be scaled meaningfully and is
/// returned unchanged.
pub fn scaled_size(image: Size, frame: Size, mode: ImageScaling) -> Size {
    if image.is_empty() {
        return image;
    }

    let mut size = image;
    match mode {
        ImageScaling::None => {}

        ImageScaling::ProportionallyDown => {
            if size.width > frame.width {
                let factor = frame.width / size.width;
                size.width *= factor;
                size.height *= factor;
            }
            if size.height > frame.height {
                let factor = frame.height / size.height;
                size.width *= factor;
                size.height *= factor;
            }
        }

        ImageScaling::ProportionallyUpOrDown => {
            // Too large in either dimension: scale down.
            if size.width > frame.width || size.height > frame.height {
                if size.width > frame.width {
                    let factor = frame.width / size.width;
                    size.width *= factor;
                    size.height *= factor;
                }
                if size.height > frame.height {
                    let factor = frame.height / size.height;
                    size.width *= factor;
                    size.height *= factor;
                }
            }
            // Smaller than the frame in both dimensions: scale up.
            if size.width < frame.width && size.height < frame.height {
                if size.width < frame.width {
                    let factor = frame.width / size.width;
                    size.width *= factor;
                    size.height *= factor;
                }
                if size.height < frame.height {
                    let factor = frame.height / size.height;
                    size.width *= factor;
                    size.height *= factor;
                }
            }
        }

        ImageScaling::AxesIndependently => {
            if size.width > frame.width {
                size.width = frame.width;
            }
            if size.height > frame.height {
                size.height = frame.height;
            }
        }
    }
    size
}

/// An image with an intrinsic size and optional pixel data.
#[derive(Debug, Clone)]
pub struct Image {
    /// Intrinsic size in points.
    size: Size,
    /// Decoded pixels, present for images loaded from disk.
    pixels: Option<image::RgbaImage>,
}

impl Image {
    /// Create an image with a bare intrinsic size and no pixel data.
    ///
    /// Useful for tests and for placeholder icons whose pixels the host
    /// supplies separately.
    pub fn from_size(size: impl Into<Size>) -> Self {
        Self {
            size: size.into(),
            pixels: None,
        }
    }

    /// Load and decode an image from disk.
    ///
    /// The intrinsic size is taken from the pixel dimensions. Zero-sized
    /// images are rejected rather than propagated into layout math.
    pub fn load(path: impl AsRef<Path>) -> RenderResult<Self> {
        let decoded = image::open(path.as_ref())?.to_rgba8();
        let (width, height) = decoded.dimensions();
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }

        tracing::debug!(
            path = %path.as_ref().display(),
            width,
            height,
            "decoded image"
        );

        Ok(Self {
            size: Size::new(width as f32, height as f32),
            pixels: Some(decoded),
        })
    }

    /// The intrinsic size in points.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Decoded pixel data, if this image was loaded from disk.
    pub fn pixels(&self) -> Option<&image::RgbaImage> {
        self.pixels.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Size = Size::new(100.0, 100.0);

    #[test]
    fn test_proportionally_down_shrinks_oversized() {
        let out = scaled_size(
            Size::new(200.0, 100.0),
            FRAME,
            ImageScaling::ProportionallyDown,
        );
        assert_eq!(out, Size::new(100.0, 50.0));
    }

    #[test]
    fn test_proportionally_down_never_grows() {
        let input = Size::new(50.0, 40.0);
        let out = scaled_size(input, FRAME, ImageScaling::ProportionallyDown);
        assert_eq!(out, input);
    }

    #[test]
    fn test_proportionally_down_applies_both_ratios() {
        // 400x400 -> width ratio 0.25 -> 100x100; height then fits.
        let out = scaled_size(
            Size::new(400.0, 400.0),
            FRAME,
            ImageScaling::ProportionallyDown,
        );
        assert_eq!(out, Size::new(100.0, 100.0));

        // 200x400 -> width -> 100x200 -> height -> 50x100.
        let out = scaled_size(
            Size::new(200.0, 400.0),
            FRAME,
            ImageScaling::ProportionallyDown,
        );
        assert_eq!(out, Size::new(50.0, 100.0));
    }

    #[test]
    fn test_up_or_down_scales_up_small_images() {
        let out = scaled_size(
            Size::new(50.0, 50.0),
            FRAME,
            ImageScaling::ProportionallyUpOrDown,
        );
        assert_eq!(out, Size::new(100.0, 100.0));
    }

    #[test]
    fn test_up_or_down_scales_down_large_images() {
        let out = scaled_size(
            Size::new(200.0, 100.0),
            FRAME,
            ImageScaling::ProportionallyUpOrDown,
        );
        assert_eq!(out, Size::new(100.0, 50.0));
    }

    #[test]
    fn test_up_or_down_wide_image_not_scaled_up() {
        // Wider than the frame is tall-fitting already; only one dimension is
        // smaller, so no up-scaling happens.
        let input = Size::new(100.0, 40.0);
        let out = scaled_size(input, FRAME, ImageScaling::ProportionallyUpOrDown);
        assert_eq!(out, input);
    }

    #[test]
    fn test_axes_independently_clamps_each_axis() {
        let out = scaled_size(
            Size::new(200.0, 50.0),
            FRAME,
            ImageScaling::AxesIndependently,
        );
        assert_eq!(out, Size::new(100.0, 50.0));
    }

    #[test]
    fn test_none_mode_is_identity() {
        let input = Size::new(640.0, 480.0);
        assert_eq!(scaled_size(input, FRAME, ImageScaling::None), input);
    }

    #[test]
    fn test_zero_sized_image_is_left_unchanged() {
        let degenerate = Size::new(0.0, 50.0);
        for mode in [
            ImageScaling::ProportionallyDown,
            ImageScaling::ProportionallyUpOrDown,
            ImageScaling::AxesIndependently,
        ] {
            assert_eq!(scaled_size(degenerate, FRAME, mode), degenerate);
        }
    }

    #[test]
    fn test_image_from_size() {
        let img = Image::from_size((64.0, 32.0));
        assert_eq!(img.size(), Size::new(64.0, 32.0));
        assert!(img.pixels().is_none());
    }
}
