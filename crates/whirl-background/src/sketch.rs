//! Terminal implementation of [`Surface`] on top of the ratatui canvas.

use ratatui::{
    buffer::Buffer,
    style::Color,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Line, Points},
    },
};
use whirl_core::{CELL_HEIGHT_PX, CELL_WIDTH_PX, Dimensions};

use crate::color::Hsl;
use crate::surface::{Pen, Subpath, Surface};

/// Width in canvas pixels of one Braille dot (two per cell).
pub const DOT_WIDTH_PX: f64 = CELL_WIDTH_PX / 2.0;

/// Height in canvas pixels of one Braille dot (four per cell).
pub const DOT_HEIGHT_PX: f64 = CELL_HEIGHT_PX / 4.0;

/// Something already drawn on the sketch, in canvas coordinates (y up).
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Segment {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
    },
    Dots {
        coords: Vec<(f64, f64)>,
        color: Color,
    },
}

/// One frame worth of drawing, rendered as a Braille canvas.
#[derive(Debug, Clone)]
pub struct Sketch {
    dimensions: Dimensions,
    fill_step: (f64, f64),
    background: Option<Color>,
    color: Color,
    pen: Pen,
    marks: Vec<Mark>,
}

impl Sketch {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            fill_step: (DOT_WIDTH_PX, DOT_HEIGHT_PX),
            background: None,
            color: Color::White,
            pen: Pen::new(),
            marks: Vec::new(),
        }
    }

    /// Sample fills on a `step_x` by `step_y` grid instead of one sample per
    /// Braille dot. Non-positive steps are ignored.
    pub fn with_fill_step(mut self, step_x: f64, step_y: f64) -> Self {
        if step_x > 0.0 && step_y > 0.0 {
            self.fill_step = (step_x, step_y);
        }
        self
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Canvas y grows upward; surface y grows downward.
    fn flip(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (x, self.dimensions.height - y)
    }

    fn push_segments<'a>(&mut self, subpaths: impl IntoIterator<Item = &'a Subpath>) {
        let color = self.color;
        let mut marks = Vec::new();
        for subpath in subpaths {
            for (from, to) in subpath.segments() {
                let (x1, y1) = self.flip(from);
                let (x2, y2) = self.flip(to);
                marks.push(Mark::Segment {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                });
            }
        }
        self.marks.extend(marks);
    }
}

impl Surface for Sketch {
    fn set_background(&mut self, color: Hsl) {
        self.background = Some(color.to_color());
    }

    fn clear(&mut self) {
        self.marks.clear();
    }

    fn save(&mut self) {
        self.pen.save();
    }

    fn restore(&mut self) {
        self.pen.restore();
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.pen.translate(dx, dy);
    }

    fn rotate(&mut self, radians: f64) {
        self.pen.rotate(radians);
    }

    fn set_color(&mut self, color: Hsl) {
        self.color = color.to_color();
    }

    fn begin_path(&mut self) {
        self.pen.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.pen.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.pen.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.pen.close_path();
    }

    fn stroke(&mut self) {
        let path = self.pen.path().to_vec();
        self.push_segments(&path);
    }

    fn fill(&mut self) {
        let path = self.pen.path().to_vec();
        let (step_x, step_y) = self.fill_step;
        let coords: Vec<(f64, f64)> = scanline_fill(&path, step_x, step_y)
            .into_iter()
            .map(|point| self.flip(point))
            .collect();
        if !coords.is_empty() {
            self.marks.push(Mark::Dots {
                coords,
                color: self.color,
            });
        }
        // Outline too, so shapes thinner than a dot still show up.
        self.push_segments(&path);
    }
}

/// Grid points inside the path, by the even-odd rule.
///
/// Samples sit at the centers of a `step_x` by `step_y` grid anchored at the
/// origin, so at the dot pitch every sample is a distinct Braille dot. Both
/// axes are half-open: a center on the left or top edge is inside, one on
/// the right or bottom edge is not.
pub fn scanline_fill(path: &[Subpath], step_x: f64, step_y: f64) -> Vec<(f64, f64)> {
    let edges: Vec<((f64, f64), (f64, f64))> = path
        .iter()
        .filter(|subpath| subpath.points.len() > 2)
        .flat_map(|subpath| {
            let closing = (
                *subpath.points.last().unwrap_or(&(0.0, 0.0)),
                *subpath.points.first().unwrap_or(&(0.0, 0.0)),
            );
            subpath
                .points
                .windows(2)
                .map(|pair| (pair[0], pair[1]))
                .chain(std::iter::once(closing))
        })
        .collect();

    let Some((min_y, max_y)) = edges
        .iter()
        .flat_map(|(a, b)| [a.1, b.1])
        .fold(None, |range: Option<(f64, f64)>, y| match range {
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            None => Some((y, y)),
        })
    else {
        return Vec::new();
    };

    let mut points = Vec::new();
    let mut crossings = Vec::new();
    let mut y = grid_start(min_y, step_y);
    while y <= max_y {
        crossings.clear();
        for &((x1, y1), (x2, y2)) in &edges {
            if (y1 <= y && y < y2) || (y2 <= y && y < y1) {
                crossings.push(x1 + (y - y1) * (x2 - x1) / (y2 - y1));
            }
        }
        crossings.sort_by(f64::total_cmp);
        for span in crossings.chunks_exact(2) {
            let mut x = grid_start(span[0], step_x);
            while x < span[1] {
                points.push((x, y));
                x += step_x;
            }
        }
        y += step_y;
    }
    points
}

/// First grid-cell center at or after `from`.
fn grid_start(from: f64, step: f64) -> f64 {
    let center = ((from / step).floor() + 0.5) * step;
    if center < from { center + step } else { center }
}

impl Widget for &Sketch {
    fn render(self, area: ratatui::layout::Rect, buf: &mut Buffer) {
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, self.dimensions.width])
            .y_bounds([0.0, self.dimensions.height])
            .paint(|ctx| {
                for mark in &self.marks {
                    match mark {
                        Mark::Segment {
                            x1,
                            y1,
                            x2,
                            y2,
                            color,
                        } => ctx.draw(&Line::new(*x1, *y1, *x2, *y2, *color)),
                        Mark::Dots { coords, color } => ctx.draw(&Points {
                            coords,
                            color: *color,
                        }),
                    }
                }
            });
        match self.background {
            Some(color) => canvas.background_color(color).render(area, buf),
            None => canvas.render(area, buf),
        }
    }
}
