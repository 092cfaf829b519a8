//! Transpose and 90-degree rotations.
//!
//! All three operations use inverse mapping: for each pixel in the output
//! bitmap we compute which source pixel lands there.
//!
//! With `W`/`H` the source width/height, the output is `H` wide and `W` tall:
//! ```text
//! transpose:    dst(row, col) = src(col, row)
//! rotate_right: dst(row, col) = src(H - col - 1, row)
//! rotate_left:  dst(row, col) = src(col, W - row - 1)
//! ```

use crate::bitmap::Bitmap;
use tracing::debug;

/// Swap rows and columns.
pub fn transpose(bitmap: &mut Bitmap) {
    debug!(
        width = bitmap.width(),
        height = bitmap.height(),
        "transposing bitmap"
    );
    remap(bitmap, |_, row, col| (col, row));
}

/// Rotate 90 degrees clockwise.
pub fn rotate_right(bitmap: &mut Bitmap) {
    debug!(
        width = bitmap.width(),
        height = bitmap.height(),
        "rotating bitmap right"
    );
    remap(bitmap, |src, row, col| (src.height() - col - 1, row));
}

/// Rotate 90 degrees counter-clockwise.
pub fn rotate_left(bitmap: &mut Bitmap) {
    debug!(
        width = bitmap.width(),
        height = bitmap.height(),
        "rotating bitmap left"
    );
    remap(bitmap, |src, row, col| (col, src.width() - row - 1));
}

/// Rebuild `bitmap` with width and height swapped.
///
/// `source` maps a destination `(row, col)` to the `(row, col)` it reads from
/// in the original bitmap.
fn remap<F>(bitmap: &mut Bitmap, source: F)
where
    F: Fn(&Bitmap, u32, u32) -> (u32, u32),
{
    let (src_w, src_h) = (bitmap.width(), bitmap.height());
    let original = std::mem::replace(bitmap, Bitmap::new(src_h, src_w));

    for row in 0..bitmap.height() {
        for col in 0..bitmap.width() {
            let (src_row, src_col) = source(&original, row, col);
            bitmap.set_pixel(row, col, original.pixel(src_row, src_col));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Pixel;
    use crate::transform::{reflect_horizontal, reflect_vertical};

    /// Create a test image where each pixel has a unique value based on position.
    fn test_image(width: u32, height: u32) -> Bitmap {
        let mut bmp = Bitmap::new(width, height);
        for row in 0..height {
            for col in 0..width {
                bmp.set_pixel(row, col, Pixel::new(row as u8, col as u8, 0));
            }
        }
        bmp
    }

    #[test]
    fn test_transpose_swaps_dimensions() {
        let mut bmp = test_image(100, 50);
        transpose(&mut bmp);
        assert_eq!(bmp.width(), 50);
        assert_eq!(bmp.height(), 100);
        assert_eq!(bmp.len(), 5000);
    }

    #[test]
    fn test_transpose_mapping() {
        let src = test_image(4, 3);
        let mut bmp = src.clone();
        transpose(&mut bmp);

        for row in 0..bmp.height() {
            for col in 0..bmp.width() {
                assert_eq!(bmp.pixel(row, col), src.pixel(col, row));
            }
        }
    }

    #[test]
    fn test_rotate_right_mapping() {
        // 3 wide, 2 tall:
        //   a b c
        //   d e f
        // rotated clockwise (2 wide, 3 tall):
        //   d a
        //   e b
        //   f c
        let src = test_image(3, 2);
        let mut bmp = src.clone();
        rotate_right(&mut bmp);

        assert_eq!((bmp.width(), bmp.height()), (2, 3));
        assert_eq!(bmp.pixel(0, 0), src.pixel(1, 0));
        assert_eq!(bmp.pixel(0, 1), src.pixel(0, 0));
        assert_eq!(bmp.pixel(1, 0), src.pixel(1, 1));
        assert_eq!(bmp.pixel(1, 1), src.pixel(0, 1));
        assert_eq!(bmp.pixel(2, 0), src.pixel(1, 2));
        assert_eq!(bmp.pixel(2, 1), src.pixel(0, 2));
    }

    #[test]
    fn test_rotate_left_mapping() {
        // 3 wide, 2 tall:
        //   a b c
        //   d e f
        // rotated counter-clockwise (2 wide, 3 tall):
        //   c f
        //   b e
        //   a d
        let src = test_image(3, 2);
        let mut bmp = src.clone();
        rotate_left(&mut bmp);

        assert_eq!((bmp.width(), bmp.height()), (2, 3));
        assert_eq!(bmp.pixel(0, 0), src.pixel(0, 2));
        assert_eq!(bmp.pixel(0, 1), src.pixel(1, 2));
        assert_eq!(bmp.pixel(1, 0), src.pixel(0, 1));
        assert_eq!(bmp.pixel(1, 1), src.pixel(1, 1));
        assert_eq!(bmp.pixel(2, 0), src.pixel(0, 0));
        assert_eq!(bmp.pixel(2, 1), src.pixel(1, 0));
    }

    #[test]
    fn test_rotate_right_matches_transpose_then_reflect() {
        let src = test_image(7, 4);

        let mut direct = src.clone();
        rotate_right(&mut direct);

        let mut composed = src;
        transpose(&mut composed);
        reflect_horizontal(&mut composed);

        assert_eq!(direct, composed);
    }

    #[test]
    fn test_rotate_left_matches_transpose_then_reflect() {
        let src = test_image(7, 4);

        let mut direct = src.clone();
        rotate_left(&mut direct);

        let mut composed = src;
        transpose(&mut composed);
        reflect_vertical(&mut composed);

        assert_eq!(direct, composed);
    }

    #[test]
    fn test_four_right_turns_is_identity() {
        let src = test_image(5, 3);
        let mut bmp = src.clone();
        for _ in 0..4 {
            rotate_right(&mut bmp);
        }
        assert_eq!(bmp, src);
    }

    #[test]
    fn test_1x1_rotation() {
        let mut bmp = Bitmap::filled(1, 1, Pixel::new(1, 2, 3));
        rotate_right(&mut bmp);
        assert_eq!(bmp.pixel(0, 0), Pixel::new(1, 2, 3));
    }

    #[test]
    fn test_very_thin_image_rotation() {
        let src = test_image(10, 1);
        let mut bmp = src.clone();
        rotate_right(&mut bmp);

        assert_eq!((bmp.width(), bmp.height()), (1, 10));
        for row in 0..10 {
            assert_eq!(bmp.pixel(row, 0), src.pixel(0, row));
        }
    }

    #[test]
    fn test_empty_image_rotation() {
        let mut bmp = Bitmap::new(5, 0);
        rotate_left(&mut bmp);
        assert_eq!((bmp.width(), bmp.height()), (0, 5));
        assert!(bmp.is_empty());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
