//! Imager Core - pixel-level image filters
//!
//! This crate provides the filters behind the Imager editor's buttons:
//! geometric transforms, colour transforms and region effects, all applied
//! to an in-memory RGB [`Bitmap`].
//!
//! # Module Structure
//!
//! - `bitmap` - [`Pixel`], [`Bitmap`] and the [`BufferProvider`] seam
//! - `transform` - transpose, rotation, reflection
//! - `color` - invert, greyscale/sepia
//! - `effects` - jail bars, vignette, pixellate
//! - `filter` - [`Filter`] descriptors and [`FilterError`]
//!
//! # Rounding
//!
//! Every filter computes in real arithmetic and truncates (never rounds) when
//! writing the final channel value.

pub mod bitmap;
pub mod color;
pub mod effects;
pub mod filter;
pub mod transform;

pub use bitmap::{Bitmap, BitmapError, BufferProvider, Pixel};
pub use color::{invert, monochromify};
pub use effects::{jail, pixellate, vignette};
pub use filter::{Filter, FilterError, FilterResult};
pub use transform::{reflect_horizontal, reflect_vertical, rotate_left, rotate_right, transpose};
