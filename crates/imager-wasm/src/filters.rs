//! WASM bindings for the image filters.
//!
//! Every binding takes a bitmap, runs one filter on a copy of it and returns
//! the result as a new `JsBitmap`. The source bitmap is never modified, so the
//! caller can keep it as an undo snapshot.

use crate::types::JsBitmap;
use imager_core::{Bitmap, Filter};
use wasm_bindgen::prelude::*;

/// Run `f` on a copy of `image`.
fn with_copy(image: &JsBitmap, f: impl FnOnce(&mut Bitmap)) -> JsBitmap {
    let mut bitmap = image.to_bitmap();
    f(&mut bitmap);
    JsBitmap::from_bitmap(bitmap)
}

/// Invert every colour channel.
#[wasm_bindgen]
pub fn invert(image: &JsBitmap) -> JsBitmap {
    with_copy(image, imager_core::invert)
}

/// Swap rows and columns.
#[wasm_bindgen]
pub fn transpose(image: &JsBitmap) -> JsBitmap {
    with_copy(image, imager_core::transpose)
}

/// Mirror left to right.
#[wasm_bindgen]
pub fn reflect_horizontal(image: &JsBitmap) -> JsBitmap {
    with_copy(image, imager_core::reflect_horizontal)
}

/// Mirror top to bottom.
#[wasm_bindgen]
pub fn reflect_vertical(image: &JsBitmap) -> JsBitmap {
    with_copy(image, imager_core::reflect_vertical)
}

/// Rotate 90 degrees clockwise.
#[wasm_bindgen]
pub fn rotate_right(image: &JsBitmap) -> JsBitmap {
    with_copy(image, imager_core::rotate_right)
}

/// Rotate 90 degrees counter-clockwise.
#[wasm_bindgen]
pub fn rotate_left(image: &JsBitmap) -> JsBitmap {
    with_copy(image, imager_core::rotate_left)
}

/// Convert to greyscale, or sepia tone when `sepia` is true.
#[wasm_bindgen]
pub fn monochromify(image: &JsBitmap, sepia: bool) -> JsBitmap {
    with_copy(image, |bitmap| imager_core::monochromify(bitmap, sepia))
}

/// Draw red jail bars.
#[wasm_bindgen]
pub fn jail(image: &JsBitmap) -> JsBitmap {
    with_copy(image, imager_core::jail)
}

/// Darken towards the corners.
#[wasm_bindgen]
pub fn vignette(image: &JsBitmap) -> JsBitmap {
    with_copy(image, imager_core::vignette)
}

/// Pixellate with `step x step` blocks.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const blocky = pixellate(sourceImage, 8);
/// ```
#[wasm_bindgen]
pub fn pixellate(image: &JsBitmap, step: u32) -> Result<JsBitmap, JsValue> {
    apply_core(image, Filter::Pixellate { step })
}

/// Apply a filter described as a plain object.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const sepia = apply_filter(sourceImage, { type: "monochromify", sepia: true });
/// const rotated = apply_filter(sepia, { type: "rotateRight" });
/// ```
#[wasm_bindgen]
pub fn apply_filter(image: &JsBitmap, filter: JsValue) -> Result<JsBitmap, JsValue> {
    let filter: Filter = serde_wasm_bindgen::from_value(filter)
        .map_err(|e| JsValue::from_str(&format!("Invalid filter: {}", e)))?;
    apply_core(image, filter)
}

fn apply_core(image: &JsBitmap, filter: Filter) -> Result<JsBitmap, JsValue> {
    let mut bitmap = image.to_bitmap();
    filter
        .apply(&mut bitmap)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsBitmap::from_bitmap(bitmap))
}
