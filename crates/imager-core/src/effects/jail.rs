//! Jail bars.
//!
//! The cage is built from fixed-thickness bars:
//! - 3-pixel horizontal bars across the top and bottom rows
//! - 4-pixel vertical bars down the left and right edges
//! - `n = (width - 8) / 50` interior vertical bars
//!
//! Interior bar `i` (1..=n) starts at column `((width - 4) / (n + 1)) * i`.
//! The spacing is truncated once and then multiplied, so when `width - 4` is
//! not a multiple of `n + 1` the gap before the right edge bar is wider than
//! the others.

use crate::bitmap::{Bitmap, Pixel};
use tracing::debug;

/// Colour of every bar.
pub const JAIL_COLOR: Pixel = Pixel::RED;

/// Rows covered by a horizontal bar.
pub const HBAR_THICKNESS: u32 = 3;

/// Columns covered by a vertical bar.
pub const VBAR_THICKNESS: u32 = 4;

/// One interior bar per this many columns (after the 8 edge-bar columns).
pub const BARS_PER_WIDTH: u32 = 50;

/// Draw jail bars over the bitmap.
pub fn jail(bitmap: &mut Bitmap) {
    let (width, height) = (bitmap.width(), bitmap.height());
    let interior = width.saturating_sub(2 * VBAR_THICKNESS) / BARS_PER_WIDTH;
    debug!(width, height, interior, "drawing jail bars");

    draw_hbar(bitmap, 0, JAIL_COLOR);
    draw_hbar(bitmap, height.saturating_sub(HBAR_THICKNESS), JAIL_COLOR);

    draw_vbar(bitmap, 0, JAIL_COLOR);
    let spacing = width.saturating_sub(VBAR_THICKNESS) / (interior + 1);
    for index in 1..=interior {
        draw_vbar(bitmap, spacing * index, JAIL_COLOR);
    }
    draw_vbar(bitmap, width.saturating_sub(VBAR_THICKNESS), JAIL_COLOR);
}

/// Paint rows `row..row + 3` across the full width.
///
/// Callers keep `row + 2 < height`; rows past the bottom edge are skipped.
pub fn draw_hbar(bitmap: &mut Bitmap, row: u32, color: Pixel) {
    let end = row.saturating_add(HBAR_THICKNESS).min(bitmap.height());
    for r in row..end {
        for col in 0..bitmap.width() {
            bitmap.set_pixel(r, col, color);
        }
    }
}

/// Paint columns `col..col + 4` down the full height.
///
/// Callers keep `col + 3 < width`; columns past the right edge are skipped.
pub fn draw_vbar(bitmap: &mut Bitmap, col: u32, color: Pixel) {
    let end = col.saturating_add(VBAR_THICKNESS).min(bitmap.width());
    for row in 0..bitmap.height() {
        for c in col..end {
            bitmap.set_pixel(row, c, color);
        }
    }
}
