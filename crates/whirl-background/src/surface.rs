//! Immediate-mode drawing surface the animation renders onto.
//!
//! The animation only talks to [`Surface`]. [`Pen`] holds the transform
//! stack and path state an implementation needs to turn the calls into
//! device-space polygons.

use crate::color::Hsl;

/// A 2D drawing context in the style of an HTML canvas.
pub trait Surface {
    /// Paint the whole background with `color`.
    fn set_background(&mut self, color: Hsl);

    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Push the current transform.
    fn save(&mut self);

    /// Pop the transform pushed by the matching [`Surface::save`].
    fn restore(&mut self);

    fn translate(&mut self, dx: f64, dy: f64);

    /// Rotate clockwise (y points down) by `radians`.
    fn rotate(&mut self, radians: f64);

    /// Color used by subsequent strokes and fills.
    fn set_color(&mut self, color: Hsl);

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    fn close_path(&mut self);

    /// Add a closed rectangle subpath.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.move_to(x, y);
        self.line_to(x + width, y);
        self.line_to(x + width, y + height);
        self.line_to(x, y + height);
        self.close_path();
    }

    /// Outline the current path.
    fn stroke(&mut self);

    /// Fill the current path.
    fn fill(&mut self);
}

/// 2D affine transform `[a c e; b d f; 0 0 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// This transform followed by a translation in local coordinates.
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            e: self.a * dx + self.c * dy + self.e,
            f: self.b * dx + self.d * dy + self.f,
            ..self
        }
    }

    /// This transform followed by a rotation in local coordinates.
    pub fn rotated(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            a: self.a * cos + self.c * sin,
            b: self.b * cos + self.d * sin,
            c: self.c * cos - self.a * sin,
            d: self.d * cos - self.b * sin,
            ..self
        }
    }

    /// Map a local point to device space.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }
}

/// A device-space polyline; `closed` joins the last point to the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subpath {
    pub points: Vec<(f64, f64)>,
    pub closed: bool,
}

impl Subpath {
    /// Consecutive point pairs, including the closing edge.
    pub fn segments(&self) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
        let closing = match (self.closed, self.points.first(), self.points.last()) {
            (true, Some(&first), Some(&last)) if self.points.len() > 2 => Some((last, first)),
            _ => None,
        };
        self.points
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .chain(closing)
    }
}

/// Transform stack and current path shared by surface implementations.
#[derive(Debug, Clone, Default)]
pub struct Pen {
    transform: Affine,
    stack: Vec<Affine>,
    path: Vec<Subpath>,
}

impl Pen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }

    pub fn save(&mut self) {
        self.stack.push(self.transform);
    }

    /// Unbalanced restores leave the transform untouched.
    pub fn restore(&mut self) {
        if let Some(transform) = self.stack.pop() {
            self.transform = transform;
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform.translated(dx, dy);
    }

    pub fn rotate(&mut self, radians: f64) {
        self.transform = self.transform.rotated(radians);
    }

    pub fn begin_path(&mut self) {
        self.path.clear();
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        let point = self.transform.apply(x, y);
        self.path.push(Subpath {
            points: vec![point],
            closed: false,
        });
    }

    /// Without a preceding `move_to` this starts a new subpath.
    pub fn line_to(&mut self, x: f64, y: f64) {
        let point = self.transform.apply(x, y);
        match self.path.last_mut() {
            Some(subpath) if !subpath.closed => subpath.points.push(point),
            _ => self.path.push(Subpath {
                points: vec![point],
                closed: false,
            }),
        }
    }

    pub fn close_path(&mut self) {
        if let Some(subpath) = self.path.last_mut() {
            subpath.closed = true;
        }
    }

    /// The current path in device space.
    pub fn path(&self) -> &[Subpath] {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn test_translate_then_rotate() {
        let transform = Affine::IDENTITY.translated(10.0, 20.0).rotated(FRAC_PI_2);
        // +x in local space points down (+y) after a quarter turn.
        assert_close(transform.apply(5.0, 0.0), (10.0, 25.0));
        assert_close(transform.apply(0.0, 5.0), (5.0, 20.0));
    }

    #[test]
    fn test_save_restore() {
        let mut pen = Pen::new();
        pen.save();
        pen.translate(3.0, 4.0);
        assert_close(pen.transform().apply(0.0, 0.0), (3.0, 4.0));
        pen.restore();
        assert_eq!(pen.transform(), Affine::IDENTITY);
        pen.restore();
        assert_eq!(pen.transform(), Affine::IDENTITY);
    }

    #[test]
    fn test_path_building() {
        let mut pen = Pen::new();
        pen.begin_path();
        pen.translate(1.0, 1.0);
        pen.move_to(0.0, 0.0);
        pen.line_to(2.0, 0.0);
        pen.line_to(2.0, 2.0);
        pen.close_path();

        let path = pen.path();
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].points, vec![(1.0, 1.0), (3.0, 1.0), (3.0, 3.0)]);
        assert_eq!(path[0].segments().count(), 3);

        pen.begin_path();
        assert!(pen.path().is_empty());
    }

    #[test]
    fn test_open_line_has_one_segment() {
        let subpath = Subpath {
            points: vec![(0.0, 0.0), (5.0, 0.0)],
            closed: false,
        };
        let segments: Vec<_> = subpath.segments().collect();
        assert_eq!(segments, vec![((0.0, 0.0), (5.0, 0.0))]);
    }
}
