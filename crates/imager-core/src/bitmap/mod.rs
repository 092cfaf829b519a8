//! The editable bitmap the filters operate on.
//!
//! This module provides:
//! - [`Pixel`] - an RGB triple with 8-bit channels
//! - [`Bitmap`] - a row-major pixel grid with linear and `(row, col)` access
//! - [`BufferProvider`] - the seam through which filters obtain the image to edit
//!
//! # Ownership
//!
//! Bitmaps are owned by whoever provides them (an editor with undo history, a
//! WASM wrapper, a test). Filters borrow the current bitmap mutably for the
//! duration of one call and never retain it.

mod types;

pub use types::{Bitmap, BitmapError, Pixel};

/// Source of the "current" bitmap that a filter should edit.
///
/// Editors that keep an undo history implement this by handing out the most
/// recent image in the history. A bare [`Bitmap`] is its own provider.
pub trait BufferProvider {
    /// Mutable handle to the bitmap to edit.
    fn current_mut(&mut self) -> &mut Bitmap;
}

impl BufferProvider for Bitmap {
    fn current_mut(&mut self) -> &mut Bitmap {
        self
    }
}
