//! Rotating shape field for the whirl background.
//!
//! This crate owns the animated objects, the field that places them around a
//! reserved safe area, and the frame loop that cycles the background hue and
//! eases each object's rotation speed toward the cursor. Drawing goes through
//! the [`Surface`] trait; [`Sketch`] implements it on a ratatui canvas.

mod color;
mod field;
mod object;
mod sketch;
mod state;
mod surface;

#[cfg(test)]
mod testing;

pub use color::{Hsl, background_color, hsl_to_rgb, shape_color};
pub use field::{Field, MAX_PLACEMENT_ATTEMPTS, Placement, place};
pub use object::AnimatedObject;
pub use sketch::{DOT_HEIGHT_PX, DOT_WIDTH_PX, Mark, Sketch, scanline_fill};
pub use state::{BackgroundState, LoopPhase};
pub use surface::{Affine, Pen, Subpath, Surface};
