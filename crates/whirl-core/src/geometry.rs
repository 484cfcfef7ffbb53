//! Canvas geometry: dimensions, rectangles and the pointer.

use crate::{CELL_HEIGHT_PX, CELL_WIDTH_PX};

/// Size of the drawing canvas in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Canvas size covering a terminal area of `columns` x `rows` cells.
    pub fn from_cells(columns: u16, rows: u16) -> Self {
        Self::new(
            columns as f64 * CELL_WIDTH_PX,
            rows as f64 * CELL_HEIGHT_PX,
        )
    }

    /// Center point of the canvas.
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A `width` x `height` rectangle centered on the canvas, clipped to it.
    pub fn centered(dimensions: Dimensions, width: f64, height: f64) -> Self {
        let (cx, cy) = dimensions.center();
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height).clip_to(dimensions)
    }

    /// Intersection with the canvas bounds.
    pub fn clip_to(self, dimensions: Dimensions) -> Self {
        let left = self.x.clamp(0.0, dimensions.width);
        let top = self.y.clamp(0.0, dimensions.height);
        let right = (self.x + self.width).clamp(0.0, dimensions.width);
        let bottom = (self.y + self.height).clamp(0.0, dimensions.height);
        Self::new(left, top, (right - left).max(0.0), (bottom - top).max(0.0))
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Strict containment: points on the border are outside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x > self.x && x < self.right() && y > self.y && y < self.bottom()
    }

    /// The closest point to `(x, y)` that is not strictly inside.
    ///
    /// Points already outside are returned unchanged; points inside are
    /// moved onto the nearest edge.
    pub fn nearest_outside(&self, x: f64, y: f64) -> (f64, f64) {
        if !self.contains(x, y) {
            return (x, y);
        }
        let to_left = x - self.x;
        let to_right = self.right() - x;
        let to_top = y - self.y;
        let to_bottom = self.bottom() - y;
        let nearest = to_left.min(to_right).min(to_top).min(to_bottom);
        if nearest == to_left {
            (self.x, y)
        } else if nearest == to_right {
            (self.right(), y)
        } else if nearest == to_top {
            (x, self.y)
        } else {
            (x, self.bottom())
        }
    }
}

/// Last known pointer position and whether it is over the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cursor {
    pub x: f64,
    pub y: f64,
    pub hovering: bool,
}

impl Cursor {
    /// A resting cursor in the middle of the canvas.
    pub fn centered(dimensions: Dimensions) -> Self {
        let (x, y) = dimensions.center();
        Self {
            x,
            y,
            hovering: false,
        }
    }

    /// Euclidean distance from the cursor to `(x, y)`.
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Pixel at the center of terminal cell (`column`, `row`).
    pub fn cell_center(column: u16, row: u16) -> (f64, f64) {
        (
            (column as f64 + 0.5) * CELL_WIDTH_PX,
            (row as f64 + 0.5) * CELL_HEIGHT_PX,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let rect = Rect::centered(Dimensions::new(800.0, 480.0), 320.0, 132.0);
        assert_eq!(rect, Rect::new(240.0, 174.0, 320.0, 132.0));
    }

    #[test]
    fn test_centered_rect_clipped_on_small_canvas() {
        let dims = Dimensions::new(100.0, 50.0);
        let rect = Rect::centered(dims, 320.0, 132.0);
        assert_eq!(rect, Rect::new(0.0, 0.0, 100.0, 50.0));
    }

    #[test]
    fn test_contains_is_strict() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(15.0, 15.0));
        assert!(!rect.contains(10.0, 15.0));
        assert!(!rect.contains(30.0, 15.0));
        assert!(!rect.contains(15.0, 30.0));
        assert!(!rect.contains(40.0, 40.0));
    }

    #[test]
    fn test_nearest_outside() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(rect.nearest_outside(5.0, 20.0), (0.0, 20.0));
        assert_eq!(rect.nearest_outside(97.0, 20.0), (100.0, 20.0));
        assert_eq!(rect.nearest_outside(50.0, 3.0), (50.0, 0.0));
        assert_eq!(rect.nearest_outside(50.0, 38.0), (50.0, 40.0));
        assert_eq!(rect.nearest_outside(150.0, 20.0), (150.0, 20.0));
        let (x, y) = rect.nearest_outside(50.0, 20.0);
        assert!(!rect.contains(x, y));
    }

    #[test]
    fn test_cursor_distance() {
        let cursor = Cursor {
            x: 0.0,
            y: 0.0,
            hovering: true,
        };
        assert_eq!(cursor.distance_to(3.0, 4.0), 5.0);
    }

    #[test]
    fn test_cell_mapping() {
        let dims = Dimensions::from_cells(100, 30);
        assert_eq!(dims, Dimensions::new(800.0, 480.0));
        assert_eq!(Cursor::cell_center(0, 0), (4.0, 8.0));
    }
}
