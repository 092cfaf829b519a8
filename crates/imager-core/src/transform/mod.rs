//! Geometric transforms: transpose, quarter-turn rotation and reflection.
//!
//! # Coordinate System
//!
//! - `(row, col)` addresses a pixel, origin at the top-left corner
//! - "Horizontal" reflection mirrors columns (left/right)
//! - "Vertical" reflection mirrors rows (top/bottom)
//!
//! # Reshaping
//!
//! [`transpose`], [`rotate_right`] and [`rotate_left`] swap width and height.
//! They move the old pixels out as a read-only snapshot, give the bitmap its
//! new shape, then fill every cell of the new shape from the snapshot. A cell
//! is never read after it has been written in the same pass.
//!
//! Rotations are single-pass direct mappings rather than compositions of
//! transpose and reflection; the result is identical to the composition.

mod reflect;
mod rotation;

pub use reflect::{reflect_horizontal, reflect_vertical};
pub use rotation::{rotate_left, rotate_right, transpose};
