//! Pixellation by block averaging.
//!
//! The bitmap is tiled with `step x step` blocks anchored at `(0, 0)`. Blocks
//! on the right and bottom edges are clipped to the image, so they may be
//! narrower or shorter than `step` but always hold at least one pixel.
//!
//! Each block is replaced by the per-channel average of exactly its own
//! pixels. Sums are integers and the division truncates.

use crate::bitmap::{Bitmap, Pixel};
use crate::filter::{FilterError, FilterResult};
use tracing::{debug, trace};

/// Pixellate the bitmap with blocks of `step x step` pixels.
///
/// # Errors
/// Returns [`FilterError::InvalidStep`] if `step` is 0. The bitmap is left
/// untouched in that case.
pub fn pixellate(bitmap: &mut Bitmap, step: u32) -> FilterResult<()> {
    if step == 0 {
        return Err(FilterError::InvalidStep(step));
    }

    let (width, height) = (bitmap.width(), bitmap.height());
    debug!(width, height, step, "pixellating bitmap");

    for top in (0..height).step_by(step as usize) {
        let rows = step.min(height - top);
        for left in (0..width).step_by(step as usize) {
            let cols = step.min(width - left);
            fill_block_average(bitmap, top, left, rows, cols);
        }
    }

    Ok(())
}

/// Replace the `rows x cols` block at `(top, left)` with its average colour.
fn fill_block_average(bitmap: &mut Bitmap, top: u32, left: u32, rows: u32, cols: u32) {
    let mut sum = [0u64; 3];
    for row in top..top + rows {
        for col in left..left + cols {
            let p = bitmap.pixel(row, col);
            sum[0] += p.red as u64;
            sum[1] += p.green as u64;
            sum[2] += p.blue as u64;
        }
    }

    let count = rows as u64 * cols as u64;
    let average = Pixel::new(
        (sum[0] / count) as u8,
        (sum[1] / count) as u8,
        (sum[2] / count) as u8,
    );
    trace!(top, left, rows, cols, ?average, "block averaged");

    for row in top..top + rows {
        for col in left..left + cols {
            bitmap.set_pixel(row, col, average);
        }
    }
}
