//! WASM-compatible wrapper types for image data.
//!
//! This module provides a JavaScript-friendly bitmap type that wraps the core
//! [`Bitmap`], handling the conversion between Rust and JavaScript data
//! representations.

use imager_core::Bitmap;
use wasm_bindgen::prelude::*;

/// An RGB bitmap wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`. For chains of filters, keep the bitmap in
/// WASM memory and only extract pixels when the result is displayed.
#[wasm_bindgen]
pub struct JsBitmap {
    inner: Bitmap,
}

#[wasm_bindgen]
impl JsBitmap {
    /// Create a new JsBitmap from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    ///
    /// Fails if `pixels.length != width * height * 3`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsBitmap, JsValue> {
        Bitmap::from_pixels(width, height, pixels)
            .map(Self::from_bitmap)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3 for RGB)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.as_bytes().len()
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.as_bytes().to_vec()
    }
}

impl JsBitmap {
    pub(crate) fn from_bitmap(inner: Bitmap) -> Self {
        Self { inner }
    }

    /// Clone the wrapped bitmap so a filter can edit it without touching the
    /// caller's copy.
    pub(crate) fn to_bitmap(&self) -> Bitmap {
        self.inner.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_bitmap_accessors() {
        let img = JsBitmap::from_bitmap(Bitmap::new(4, 3));
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 3);
        assert_eq!(img.byte_length(), 36);
        assert_eq!(img.pixels(), vec![0u8; 36]);
    }

    #[test]
    fn test_to_bitmap_is_a_copy() {
        let img = JsBitmap::from_bitmap(Bitmap::new(2, 2));
        let mut copy = img.to_bitmap();
        copy.set(0, imager_core::Pixel::WHITE);
        assert_eq!(img.pixels()[0], 0);
    }
}
