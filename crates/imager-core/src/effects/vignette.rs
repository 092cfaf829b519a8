//! Vignetting (corner darkening).
//!
//! Each pixel is darkened by the factor
//!
//! ```text
//! f = 1 - (d / hfD)^2
//! ```
//!
//! where `d` is the distance from the pixel to the image centre
//! `(width / 2, height / 2)` and `hfD` is the half diagonal, the distance from
//! the centre to any corner. Distances stay in `f64`; only the final
//! `channel * f` product is truncated.

use crate::bitmap::{Bitmap, Pixel};
use crate::color::truncate;
use tracing::debug;

/// Darken the bitmap towards its corners.
pub fn vignette(bitmap: &mut Bitmap) {
    let (width, height) = (bitmap.width(), bitmap.height());
    let geometry = VignetteGeometry::new(width, height);
    debug!(
        width,
        height,
        half_diagonal = geometry.half_diagonal,
        "applying vignette"
    );

    for row in 0..height {
        for col in 0..width {
            let f = geometry.factor(row, col);
            let p = bitmap.pixel(row, col);
            bitmap.set_pixel(
                row,
                col,
                Pixel::new(
                    truncate(p.red as f64 * f),
                    truncate(p.green as f64 * f),
                    truncate(p.blue as f64 * f),
                ),
            );
        }
    }
}

/// Centre and half diagonal of a bitmap, computed once per vignette pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VignetteGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub half_diagonal: f64,
}

impl VignetteGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        let (w, h) = (width as f64, height as f64);
        Self {
            center_x: w / 2.0,
            center_y: h / 2.0,
            half_diagonal: (w * w + h * h).sqrt() / 2.0,
        }
    }

    /// Darkening factor for the pixel at `(row, col)`.
    ///
    /// 1.0 at the exact centre, falling to 0.0 at the corners.
    #[inline]
    pub fn factor(&self, row: u32, col: u32) -> f64 {
        let dx = self.center_x - col as f64;
        let dy = self.center_y - row as f64;
        let d = (dx * dx + dy * dy).sqrt();
        1.0 - (d / self.half_diagonal).powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry() {
        let geometry = VignetteGeometry::new(6, 8);
        assert_eq!(geometry.center_x, 3.0);
        assert_eq!(geometry.center_y, 4.0);
        assert_eq!(geometry.half_diagonal, 5.0);
    }

    #[test]
    fn test_factor_at_center_is_one() {
        assert_eq!(VignetteGeometry::new(10, 10).factor(5, 5), 1.0);
        assert_eq!(VignetteGeometry::new(100, 50).factor(25, 50), 1.0);
    }

    #[test]
    fn test_factor_at_origin_corner_is_zero() {
        // The (0, 0) pixel sits exactly on the half diagonal
        let f = VignetteGeometry::new(10, 10).factor(0, 0);
        assert!(f.abs() < 1e-12, "factor was {}", f);
    }

    #[test]
    fn test_factor_decreases_with_distance() {
        let geometry = VignetteGeometry::new(20, 20);
        let mut prev = geometry.factor(10, 10);
        for step in 1..=10 {
            let f = geometry.factor(10 - step, 10 - step);
            assert!(f < prev, "factor should decrease away from centre");
            prev = f;
        }
    }

    #[test]
    fn test_vignette_white_10x10() {
        let mut bmp = Bitmap::filled(10, 10, Pixel::WHITE);
        vignette(&mut bmp);

        // Centre untouched, corners darkest
        assert_eq!(bmp.pixel(5, 5), Pixel::WHITE);
        assert!(bmp.pixel(0, 0).red <= 1);

        let center = bmp.pixel(5, 5).red;
        for p in bmp.iter() {
            assert!(p.red <= center);
            assert!(p.red >= bmp.pixel(0, 0).red);
        }
    }

    #[test]
    fn test_vignette_truncates() {
        // 10x10 pixel (9, 9): d^2 = 32, hfD^2 = 50, f = 0.36; 255 * 0.36 = 91.8
        let mut bmp = Bitmap::filled(10, 10, Pixel::WHITE);
        vignette(&mut bmp);
        assert_eq!(bmp.pixel(9, 9), Pixel::gray(91));
    }

    #[test]
    fn test_vignette_black_stays_black() {
        let mut bmp = Bitmap::new(7, 5);
        vignette(&mut bmp);
        assert!(bmp.iter().all(|p| p == Pixel::BLACK));
    }

    #[test]
    fn test_vignette_keeps_channel_ratio_order() {
        let mut bmp = Bitmap::filled(9, 9, Pixel::new(200, 100, 50));
        vignette(&mut bmp);
        for p in bmp.iter() {
            assert!(p.red >= p.green && p.green >= p.blue);
        }
    }

    #[test]
    fn test_vignette_empty_image() {
        let mut bmp = Bitmap::new(0, 0);
        vignette(&mut bmp);
        assert!(bmp.is_empty());
    }

    #[test]
    fn test_vignette_1x1() {
        // The only pixel sits on a corner of its own half diagonal
        let mut bmp = Bitmap::filled(1, 1, Pixel::WHITE);
        vignette(&mut bmp);
        assert!(bmp.pixel(0, 0).red <= 1);
    }
}
