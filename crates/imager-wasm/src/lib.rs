//! Imager WASM - WebAssembly bindings for Imager
//!
//! This crate provides WASM bindings to expose the imager-core filters
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for bitmap data
//! - `filters` - One binding per filter plus `apply_filter` for filter objects
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsBitmap, rotate_right, apply_filter } from '@imager/wasm';
//!
//! await init();
//!
//! const image = new JsBitmap(width, height, rgbBytes);
//! const rotated = rotate_right(image);
//! const sepia = apply_filter(rotated, { type: "monochromify", sepia: true });
//! ```

use wasm_bindgen::prelude::*;

mod filters;
mod types;

// Re-export public types
pub use filters::{
    apply_filter, invert, jail, monochromify, pixellate, reflect_horizontal, reflect_vertical,
    rotate_left, rotate_right, transpose, vignette,
};
pub use types::JsBitmap;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
