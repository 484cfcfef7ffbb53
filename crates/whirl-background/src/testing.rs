//! Test double recording every surface call.

use crate::color::Hsl;
use crate::surface::Surface;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    SetBackground(Hsl),
    Clear,
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    SetColor(Hsl),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    Stroke,
    Fill,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn count(&self, op: &Op) -> usize {
        self.ops.iter().filter(|recorded| *recorded == op).count()
    }
}

impl Surface for RecordingSurface {
    fn set_background(&mut self, color: Hsl) {
        self.ops.push(Op::SetBackground(color));
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn save(&mut self) {
        self.ops.push(Op::Save);
    }

    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.ops.push(Op::Translate(dx, dy));
    }

    fn rotate(&mut self, radians: f64) {
        self.ops.push(Op::Rotate(radians));
    }

    fn set_color(&mut self, color: Hsl) {
        self.ops.push(Op::SetColor(color));
    }

    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }

    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }

    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }

    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }
}
