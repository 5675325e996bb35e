//! Plain-text point lists: one `(x,y)` per line.
//!
//! `format_points` writes the shortest round-tripping decimal of each
//! coordinate, so `parse_points(&format_points(ps)) == ps` for finite input.
//! The parser accepts surrounding whitespace and blank lines.

use std::fmt;

use crate::prims::Point;

/// Parse failure with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsePointsError {
    Malformed { line: usize, text: String },
    InvalidNumber { line: usize, text: String },
    NonFinite { line: usize },
}

impl fmt::Display for ParsePointsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { line, text } => {
                write!(f, "line {line}: expected `(x,y)`, got {text:?}")
            }
            Self::InvalidNumber { line, text } => {
                write!(f, "line {line}: invalid number {text:?}")
            }
            Self::NonFinite { line } => write!(f, "line {line}: coordinates must be finite"),
        }
    }
}

impl std::error::Error for ParsePointsError {}

/// One `(x,y)` per line, no trailing newline.
pub fn format_points(points: &[Point]) -> String {
    points
        .iter()
        .map(Point::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn parse_points(input: &str) -> Result<Vec<Point>, ParsePointsError> {
    let mut out = Vec::new();
    for (k, raw) in input.lines().enumerate() {
        let line = k + 1;
        let s = raw.trim();
        if s.is_empty() {
            continue;
        }
        let malformed = || ParsePointsError::Malformed {
            line,
            text: s.to_string(),
        };
        let inner = s
            .strip_prefix('(')
            .and_then(|r| r.strip_suffix(')'))
            .ok_or_else(malformed)?;
        let (xs, ys) = inner.split_once(',').ok_or_else(malformed)?;
        let x = parse_coord(xs, line)?;
        let y = parse_coord(ys, line)?;
        let p = Point::new(x, y);
        if !p.is_finite() {
            return Err(ParsePointsError::NonFinite { line });
        }
        out.push(p);
    }
    Ok(out)
}

fn parse_coord(s: &str, line: usize) -> Result<f64, ParsePointsError> {
    let s = s.trim();
    s.parse::<f64>()
        .map_err(|_| ParsePointsError::InvalidNumber {
            line,
            text: s.to_string(),
        })
}
