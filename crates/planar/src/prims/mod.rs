//! Planar value types and predicates.
//!
//! Purpose
//! - Small `Copy` values (`Point`, `Edge`, `Triangle`, `Circle`, `Ray`,
//!   `LineSegment`) plus `Polygon`, shared by every algorithm in the crate.
//! - Predicates are plain `f64` with explicit epsilons (see `crate::cfg`).
//!
//! Conventions
//! - Counterclockwise = positive signed area (y axis up).
//! - Exact vs tolerant point comparison is documented on `point::Point`.

mod circle;
mod edge;
mod linear;
mod point;
mod polygon;
mod predicates;
mod triangle;

pub use circle::Circle;
pub use edge::Edge;
pub use linear::{LineSegment, Ray};
pub use point::{BBox2, Point, PointKey};
pub use polygon::Polygon;
pub use predicates::{
    cross, distance, distance_squared, is_counter_clockwise, normalized_or_zero, signed_area,
    Winding,
};
pub use triangle::{Triangle, TriangleKey};

#[cfg(test)]
mod tests;
