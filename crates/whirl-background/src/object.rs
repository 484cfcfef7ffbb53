//! A single rotating shape.

use whirl_core::{Cursor, DEFAULT_SPEED, HOVER_RADIUS, HOVER_SPEED, SPEED_SMOOTHING, ShapeKind};

use crate::color::shape_color;
use crate::surface::Surface;

/// State for one rotating shape in the field.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedObject {
    /// Horizontal position in canvas pixels.
    pub x: f64,
    /// Vertical position in canvas pixels, growing downward.
    pub y: f64,
    /// Size in pixels.
    pub size: f64,
    /// Rotation in radians. Never normalized.
    pub angle: f64,
    /// Speed the object settles back to when left alone.
    pub default_speed: f64,
    /// Speed the object is easing toward.
    pub target_speed: f64,
    /// Speed the object currently rotates at.
    pub current_speed: f64,
}

impl AnimatedObject {
    pub fn new(x: f64, y: f64, size: f64, angle: f64) -> Self {
        Self {
            x,
            y,
            size,
            angle,
            default_speed: DEFAULT_SPEED,
            target_speed: DEFAULT_SPEED,
            current_speed: DEFAULT_SPEED,
        }
    }

    /// Advance the rotation for one frame without drawing.
    ///
    /// The target speed is picked from the cursor distance, then the current
    /// speed closes a fixed fraction of the gap to it.
    pub fn steer(&mut self, cursor: Cursor) {
        let distance = cursor.distance_to(self.x, self.y);
        self.target_speed = if cursor.hovering && distance < HOVER_RADIUS {
            HOVER_SPEED
        } else {
            self.default_speed
        };

        self.current_speed += (self.target_speed - self.current_speed) * SPEED_SMOOTHING;
        self.angle += self.current_speed;
    }

    /// Advance one frame and draw the result.
    pub fn update<S: Surface>(&mut self, cursor: Cursor, surface: &mut S, hue: f64, shape: ShapeKind) {
        self.steer(cursor);
        self.draw(surface, hue, shape);
    }

    /// Draw the object at its position and angle in the complementary color of `hue`.
    pub fn draw<S: Surface>(&self, surface: &mut S, hue: f64, shape: ShapeKind) {
        surface.save();
        surface.translate(self.x, self.y);
        surface.rotate(self.angle);
        surface.set_color(shape_color(hue));

        let size = self.size;
        surface.begin_path();
        match shape {
            ShapeKind::Line => {
                surface.move_to(0.0, 0.0);
                surface.line_to(size, 0.0);
                surface.stroke();
            }
            ShapeKind::Triangle => {
                surface.move_to(0.0, -size);
                surface.line_to(size, size);
                surface.line_to(-size, size);
                surface.close_path();
                surface.fill();
            }
            ShapeKind::Square => {
                surface.rect(-size / 2.0, -size / 2.0, size, size);
                surface.fill();
            }
        }

        surface.restore();
    }
}
