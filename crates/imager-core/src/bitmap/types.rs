//! Core pixel and bitmap types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for bitmap construction and reshaping.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitmapError {
    /// Pixel buffer length doesn't match the requested dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// The requested shape cannot hold exactly the bitmap's pixels.
    #[error("Cannot reshape {pixels} pixels to {width}x{height}")]
    InvalidShape {
        width: u32,
        height: u32,
        pixels: usize,
    },

    /// Width * height * 3 does not fit in the address space.
    #[error("Bitmap dimensions {width}x{height} are too large")]
    TooLarge { width: u32, height: u32 },
}

/// Bytes needed for a `width x height` RGB buffer, or `None` on overflow.
fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(3)
}

/// An RGB pixel with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    /// All channels 0.
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);

    /// All channels 255.
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    /// Pure red, the jail bar colour.
    pub const RED: Pixel = Pixel::new(255, 0, 0);

    /// Create a pixel from its three channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Same value in all three channels.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Channels as `[r, g, b]`.
    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<(u8, u8, u8)> for Pixel {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Pixel> for [u8; 3] {
    fn from(pixel: Pixel) -> Self {
        pixel.to_array()
    }
}

/// An editable RGB bitmap.
///
/// Pixels live in one contiguous row-major buffer (3 bytes per pixel) and can
/// be addressed either linearly (`pos = row * width + col`) or by
/// `(row, col)`. Both views share the same storage.
///
/// Cloning produces an independent copy; filters that must read old values
/// while overwriting the same storage work from a clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Create a black bitmap with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Pixel::BLACK)
    }

    /// Create a bitmap with every pixel set to `pixel`.
    ///
    /// # Panics
    /// Panics if the buffer size overflows `usize`, like `Vec::with_capacity`.
    /// Use [`Bitmap::from_pixels`] for dimensions that come from outside.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        let Some(bytes) = byte_len(width, height) else {
            panic!("bitmap dimensions {width}x{height} overflow the address space");
        };
        let pixels = pixel.to_array().repeat(bytes / 3);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a bitmap from raw RGB bytes in row-major order.
    ///
    /// Fails with [`BitmapError::TooLarge`] when the dimensions overflow the
    /// address space and with [`BitmapError::SizeMismatch`] when the buffer
    /// length differs from `width * height * 3`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BitmapError> {
        let expected = byte_len(width, height).ok_or(BitmapError::TooLarge { width, height })?;
        if pixels.len() != expected {
            return Err(BitmapError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a Bitmap from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an image::RgbImage for encoding or display.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (width * height).
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len() / 3
    }

    /// Check if the bitmap has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Raw RGB bytes in row-major order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }

    /// Read the pixel at linear position `pos`.
    ///
    /// # Panics
    /// Panics if `pos >= self.len()`.
    #[inline]
    pub fn get(&self, pos: usize) -> Pixel {
        let idx = pos * 3;
        let rgb = &self.pixels[idx..idx + 3];
        Pixel::new(rgb[0], rgb[1], rgb[2])
    }

    /// Write the pixel at linear position `pos`.
    ///
    /// # Panics
    /// Panics if `pos >= self.len()`.
    #[inline]
    pub fn set(&mut self, pos: usize, pixel: Pixel) {
        let idx = pos * 3;
        self.pixels[idx..idx + 3].copy_from_slice(&pixel.to_array());
    }

    /// Iterate over all pixels in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.pixels
            .chunks_exact(3)
            .map(|rgb| Pixel::new(rgb[0], rgb[1], rgb[2]))
    }

    /// Linear position of `(row, col)`.
    #[inline]
    fn offset(&self, row: u32, col: u32) -> usize {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) out of bounds for {}x{} bitmap",
            self.width,
            self.height
        );
        row as usize * self.width as usize + col as usize
    }

    /// Read the pixel at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row >= height` or `col >= width`.
    #[inline]
    pub fn pixel(&self, row: u32, col: u32) -> Pixel {
        self.get(self.offset(row, col))
    }

    /// Write the pixel at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row >= height` or `col >= width`.
    #[inline]
    pub fn set_pixel(&mut self, row: u32, col: u32, pixel: Pixel) {
        let pos = self.offset(row, col);
        self.set(pos, pixel);
    }

    /// Exchange the pixels at `(row1, col1)` and `(row2, col2)`.
    pub fn swap_pixels(&mut self, row1: u32, col1: u32, row2: u32, col2: u32) {
        let a = self.offset(row1, col1);
        let b = self.offset(row2, col2);
        if a == b {
            return;
        }
        let tmp = self.get(a);
        self.set(a, self.get(b));
        self.set(b, tmp);
    }

    /// Change the width, keeping the pixel storage.
    ///
    /// The height becomes `len / width`. Pixel meaning at each `(row, col)` is
    /// lost; callers must rewrite every pixel afterwards.
    pub fn set_width(&mut self, width: u32) -> Result<(), BitmapError> {
        let count = self.len();
        if width == 0 {
            if count != 0 {
                return Err(BitmapError::InvalidShape {
                    width,
                    height: self.height,
                    pixels: count,
                });
            }
            self.width = 0;
            return Ok(());
        }
        let height = u32::try_from(count / width as usize).unwrap_or(u32::MAX);
        if height as usize * width as usize != count {
            return Err(BitmapError::InvalidShape {
                width,
                height,
                pixels: count,
            });
        }
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Change both dimensions, keeping the pixel storage.
    pub fn reshape(&mut self, width: u32, height: u32) -> Result<(), BitmapError> {
        if (width as usize).checked_mul(height as usize) != Some(self.len()) {
            return Err(BitmapError::InvalidShape {
                width,
                height,
                pixels: self.len(),
            });
        }
        self.width = width;
        self.height = height;
        Ok(())
    }
}
