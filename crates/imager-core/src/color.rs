//! Per-pixel colour transforms: inversion and monochrome conversion.
//!
//! ## Brightness
//! Monochrome conversion uses a simple weighted brightness:
//!
//! ```text
//! brightness = 0.3 * red + 0.6 * green + 0.1 * blue
//! ```
//!
//! The weighted sum is kept in `f64` and only truncated (never rounded) when
//! the final channel is written.

use crate::bitmap::{Bitmap, Pixel};
use tracing::debug;

/// Brightness weight for the red channel.
pub const BRIGHTNESS_R: f64 = 0.3;

/// Brightness weight for the green channel.
pub const BRIGHTNESS_G: f64 = 0.6;

/// Brightness weight for the blue channel.
pub const BRIGHTNESS_B: f64 = 0.1;

/// Sepia green as a fraction of brightness.
pub const SEPIA_G: f64 = 0.6;

/// Sepia blue as a fraction of brightness.
pub const SEPIA_B: f64 = 0.4;

/// Replace every channel with its complement (`255 - c`).
pub fn invert(bitmap: &mut Bitmap) {
    debug!(
        width = bitmap.width(),
        height = bitmap.height(),
        "inverting bitmap"
    );

    for pos in 0..bitmap.len() {
        let rgb = bitmap.get(pos);
        bitmap.set(pos, Pixel::new(255 - rgb.red, 255 - rgb.green, 255 - rgb.blue));
    }
}

/// Convert to greyscale, or to sepia tone when `sepia` is true.
///
/// Greyscale sets all channels to the pixel's brightness. Sepia keeps red at
/// the brightness and scales green by [`SEPIA_G`] and blue by [`SEPIA_B`].
pub fn monochromify(bitmap: &mut Bitmap, sepia: bool) {
    debug!(
        width = bitmap.width(),
        height = bitmap.height(),
        sepia,
        "converting bitmap to monochrome"
    );

    for pos in 0..bitmap.len() {
        let level = brightness(bitmap.get(pos));
        let toned = if sepia {
            Pixel::new(
                truncate(level),
                truncate(SEPIA_G * level),
                truncate(SEPIA_B * level),
            )
        } else {
            Pixel::gray(truncate(level))
        };
        bitmap.set(pos, toned);
    }
}

/// Weighted brightness of a pixel (0.0 to 255.0).
#[inline]
pub fn brightness(pixel: Pixel) -> f64 {
    BRIGHTNESS_R * pixel.red as f64
        + BRIGHTNESS_G * pixel.green as f64
        + BRIGHTNESS_B * pixel.blue as f64
}

/// Drop the fractional part of a channel value.
///
/// Float-to-int `as` casts truncate toward zero and saturate, so tiny negative
/// values from floating point noise land on 0.
#[inline]
pub(crate) fn truncate(value: f64) -> u8 {
    value as u8
}
