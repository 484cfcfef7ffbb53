//! Core types for the whirl background animation.
//!
//! Everything here is plain data shared by the animation, the configuration
//! loader and the terminal front end.

mod geometry;
mod settings;
mod shape;

pub use geometry::{Cursor, Dimensions, Rect};
pub use settings::FieldSettings;
pub use shape::{ParseShapeError, ShapeKind};

/// Rotation speed of an object nobody is pointing at, in radians per frame.
pub const DEFAULT_SPEED: f64 = 0.01;

/// Rotation speed an object eases toward while the cursor hovers near it.
pub const HOVER_SPEED: f64 = 0.1;

/// Cursor distance in pixels below which an object counts as hovered.
pub const HOVER_RADIUS: f64 = 150.0;

/// Fraction of the remaining speed difference closed on each frame.
pub const SPEED_SMOOTHING: f64 = 0.05;

/// Hue advance per frame, in degrees.
pub const HUE_STEP: f64 = 0.1;

/// Default size of the reserved rectangle in the middle of the canvas.
pub const SAFE_AREA_WIDTH: f64 = 320.0;
pub const SAFE_AREA_HEIGHT: f64 = 132.0;

/// Canvas pixels covered by one terminal cell.
pub const CELL_WIDTH_PX: f64 = 8.0;
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// Object count slider bounds and default.
pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 500;
pub const DEFAULT_COUNT: usize = 100;

/// Object size slider bounds and default, in pixels.
pub const MIN_SIZE: f64 = 5.0;
pub const MAX_SIZE: f64 = 100.0;
pub const DEFAULT_SIZE: f64 = 25.0;
