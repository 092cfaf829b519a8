//! Region effects: jail bars, vignetting and pixellation.
//!
//! ## Effects
//!
//! - **Jail**: Red bars around the border plus evenly spaced interior bars
//! - **Vignette**: Darkening that grows with distance from the centre
//! - **Pixellate**: Each `step x step` block replaced by its average colour
//!
//! All effects edit pixel values in place and keep the bitmap's dimensions.

pub mod jail;
pub mod pixellate;
pub mod vignette;

pub use jail::{draw_hbar, draw_vbar, jail, JAIL_COLOR};
pub use pixellate::pixellate;
pub use vignette::{vignette, VignetteGeometry};
