//! Orientation and distance predicates (plain floating point, no filtering).

use nalgebra::Vector2;

use super::point::Point;

/// z-component of `(b − a) × (c − a)`; twice the signed area of `abc`.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Signed area of triangle `abc`; positive for counterclockwise order.
#[inline]
pub fn signed_area(a: Point, b: Point, c: Point) -> f64 {
    0.5 * cross(a, b, c)
}

/// Strict left turn `a → b → c`. Collinear triples are not counterclockwise.
#[inline]
pub fn is_counter_clockwise(a: Point, b: Point, c: Point) -> bool {
    cross(a, b, c) > 0.0
}

#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

#[inline]
pub fn distance_squared(a: Point, b: Point) -> f64 {
    a.distance_squared(b)
}

/// Unit vector along `v`, or the zero vector when `v` has zero length.
#[inline]
pub fn normalized_or_zero(v: Vector2<f64>) -> Vector2<f64> {
    v.try_normalize(0.0).unwrap_or_else(Vector2::zeros)
}

/// Orientation of an ordered vertex triple (or polygon) by signed-area sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
    Collinear,
}

impl Winding {
    /// Classify a doubled signed area.
    #[inline]
    pub fn from_area(area2: f64) -> Self {
        if area2 > 0.0 {
            Winding::CounterClockwise
        } else if area2 < 0.0 {
            Winding::Clockwise
        } else {
            Winding::Collinear
        }
    }
}
