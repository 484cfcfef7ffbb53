//! Shape kinds drawn by every object in the field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The shape every object in the field is drawn as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Line,
    Triangle,
    Square,
}

impl ShapeKind {
    /// All shape kinds in menu order.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Line, ShapeKind::Triangle, ShapeKind::Square];

    /// Cycle to the next shape kind.
    pub fn next(self) -> Self {
        match self {
            ShapeKind::Line => ShapeKind::Triangle,
            ShapeKind::Triangle => ShapeKind::Square,
            ShapeKind::Square => ShapeKind::Line,
        }
    }

    /// Lowercase name, as used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Square => "square",
        }
    }

    /// Capitalized name for button labels.
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Square => "Square",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known shape kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseShapeError(String);

impl fmt::Display for ParseShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown shape '{}', expected one of: line, triangle, square",
            self.0
        )
    }
}

impl std::error::Error for ParseShapeError {}

impl FromStr for ShapeKind {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| ParseShapeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles_through_all() {
        let mut kind = ShapeKind::Line;
        for expected in [ShapeKind::Triangle, ShapeKind::Square, ShapeKind::Line] {
            kind = kind.next();
            assert_eq!(kind, expected);
        }
    }

    #[test]
    fn test_parse_shape() {
        assert_eq!("line".parse::<ShapeKind>(), Ok(ShapeKind::Line));
        assert_eq!("Triangle".parse::<ShapeKind>(), Ok(ShapeKind::Triangle));
        assert_eq!(" square ".parse::<ShapeKind>(), Ok(ShapeKind::Square));
        let err = "circle".parse::<ShapeKind>().unwrap_err();
        assert!(err.to_string().contains("circle"));
    }

    #[test]
    fn test_display_matches_name() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.to_string(), kind.name());
        }
    }
}
