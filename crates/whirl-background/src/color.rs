//! Color utility functions for the hue-cycling background.

use ratatui::style::Color;

/// A color on the HSL wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, [0, 360).
    pub hue: f64,
    /// Saturation, 0.0-1.0.
    pub saturation: f64,
    /// Lightness, 0.0-1.0.
    pub lightness: f64,
}

impl Hsl {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation: saturation.clamp(0.0, 1.0),
            lightness: lightness.clamp(0.0, 1.0),
        }
    }

    /// Terminal color for this HSL value.
    pub fn to_color(self) -> Color {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }
}

/// Background color for the given hue: fully saturated, dark.
pub fn background_color(hue: f64) -> Hsl {
    Hsl::new(hue, 1.0, 0.2)
}

/// Shape color for the given background hue: the complementary hue, light.
pub fn shape_color(hue: f64) -> Hsl {
    Hsl::new((hue + 180.0) % 360.0, 1.0, 0.75)
}

/// Convert HSL to RGB color.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Color {
    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Color::Rgb(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
