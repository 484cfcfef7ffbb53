//! User-tunable field parameters.

use crate::{
    DEFAULT_COUNT, DEFAULT_SIZE, MAX_COUNT, MAX_SIZE, MIN_COUNT, MIN_SIZE, SAFE_AREA_HEIGHT,
    SAFE_AREA_WIDTH, ShapeKind,
};

/// Parameters the field is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSettings {
    /// Number of objects in the field.
    pub count: usize,
    /// Size of every object, in pixels.
    pub size: f64,
    /// Shape every object is drawn as.
    pub shape: ShapeKind,
    /// Width of the reserved area in the middle of the canvas.
    pub safe_area_width: f64,
    /// Height of the reserved area in the middle of the canvas.
    pub safe_area_height: f64,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            size: DEFAULT_SIZE,
            shape: ShapeKind::default(),
            safe_area_width: SAFE_AREA_WIDTH,
            safe_area_height: SAFE_AREA_HEIGHT,
        }
    }
}

impl FieldSettings {
    /// Clamp an object count into the slider range.
    pub fn clamp_count(count: usize) -> usize {
        count.clamp(MIN_COUNT, MAX_COUNT)
    }

    /// Clamp an object size into the slider range.
    pub fn clamp_size(size: f64) -> f64 {
        if size.is_nan() {
            return DEFAULT_SIZE;
        }
        size.clamp(MIN_SIZE, MAX_SIZE)
    }

    /// Copy with count and size forced into their slider ranges.
    pub fn clamped(self) -> Self {
        Self {
            count: Self::clamp_count(self.count),
            size: Self::clamp_size(self.size),
            safe_area_width: self.safe_area_width.max(0.0),
            safe_area_height: self.safe_area_height.max(0.0),
            ..self
        }
    }
}
