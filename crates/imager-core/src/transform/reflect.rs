//! In-place mirror operations.
//!
//! Both reflections swap pixel pairs across the centre line and never touch
//! the middle column/row of an odd-sized bitmap.

use crate::bitmap::Bitmap;
use tracing::debug;

/// Mirror the bitmap left to right.
pub fn reflect_horizontal(bitmap: &mut Bitmap) {
    let (width, height) = (bitmap.width(), bitmap.height());
    debug!(width, height, "reflecting bitmap horizontally");

    for h in 0..width / 2 {
        let k = width - 1 - h;
        for row in 0..height {
            bitmap.swap_pixels(row, h, row, k);
        }
    }
}

/// Mirror the bitmap top to bottom.
pub fn reflect_vertical(bitmap: &mut Bitmap) {
    let (width, height) = (bitmap.width(), bitmap.height());
    debug!(width, height, "reflecting bitmap vertically");

    for v in 0..height / 2 {
        let k = height - 1 - v;
        for col in 0..width {
            bitmap.swap_pixels(v, col, k, col);
        }
    }
}
