//! Filter descriptors.
//!
//! A [`Filter`] names one operation together with its parameters. It is plain
//! serde data, so callers (UI buttons, the WASM bindings, scripted batches)
//! can describe an edit without linking against each function directly.
//!
//! # Example
//!
//! ```ignore
//! use imager_core::{Bitmap, Filter};
//!
//! let mut image = Bitmap::new(100, 50);
//! Filter::Pixellate { step: 8 }.apply(&mut image)?;
//! Filter::RotateRight.apply(&mut image)?;
//! assert_eq!((image.width(), image.height()), (50, 100));
//! ```

use crate::bitmap::BufferProvider;
use crate::{color, effects, transform};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a filter's parameters are invalid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Pixellation block size must be at least 1.
    #[error("Invalid pixellation step: {0} (must be greater than 0)")]
    InvalidStep(u32),
}

pub type FilterResult<T> = Result<T, FilterError>;

/// One image operation and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Filter {
    /// Replace each channel with `255 - c`.
    Invert,
    /// Swap rows and columns.
    Transpose,
    /// Mirror left to right.
    ReflectHorizontal,
    /// Mirror top to bottom.
    ReflectVertical,
    /// Rotate 90 degrees clockwise.
    RotateRight,
    /// Rotate 90 degrees counter-clockwise.
    RotateLeft,
    /// Greyscale, or sepia tone when `sepia` is set.
    Monochromify { sepia: bool },
    /// Red jail bars.
    Jail,
    /// Corner darkening.
    Vignette,
    /// Block averaging with `step x step` blocks.
    Pixellate { step: u32 },
}

impl Filter {
    /// Every parameterless filter, in menu order.
    pub const SIMPLE: [Filter; 8] = [
        Filter::Invert,
        Filter::Transpose,
        Filter::ReflectHorizontal,
        Filter::ReflectVertical,
        Filter::RotateRight,
        Filter::RotateLeft,
        Filter::Jail,
        Filter::Vignette,
    ];

    /// Apply this filter to the provider's current bitmap.
    ///
    /// Parameters are validated before the bitmap is touched, so an error
    /// leaves the image unchanged.
    pub fn apply<P>(&self, provider: &mut P) -> FilterResult<()>
    where
        P: BufferProvider + ?Sized,
    {
        let bitmap = provider.current_mut();
        match *self {
            Filter::Invert => color::invert(bitmap),
            Filter::Transpose => transform::transpose(bitmap),
            Filter::ReflectHorizontal => transform::reflect_horizontal(bitmap),
            Filter::ReflectVertical => transform::reflect_vertical(bitmap),
            Filter::RotateRight => transform::rotate_right(bitmap),
            Filter::RotateLeft => transform::rotate_left(bitmap),
            Filter::Monochromify { sepia } => color::monochromify(bitmap, sepia),
            Filter::Jail => effects::jail(bitmap),
            Filter::Vignette => effects::vignette(bitmap),
            Filter::Pixellate { step } => effects::pixellate(bitmap, step)?,
        }
        Ok(())
    }

    /// Returns true if this filter swaps width and height.
    #[inline]
    pub fn reshapes(&self) -> bool {
        matches!(self, Filter::Transpose | Filter::RotateRight | Filter::RotateLeft)
    }

    /// Stable identifier, matching the serialized `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Invert => "invert",
            Filter::Transpose => "transpose",
            Filter::ReflectHorizontal => "reflectHorizontal",
            Filter::ReflectVertical => "reflectVertical",
            Filter::RotateRight => "rotateRight",
            Filter::RotateLeft => "rotateLeft",
            Filter::Monochromify { .. } => "monochromify",
            Filter::Jail => "jail",
            Filter::Vignette => "vignette",
            Filter::Pixellate { .. } => "pixellate",
        }
    }
}
