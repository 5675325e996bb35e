use std::fmt;

use super::point::Point;
use crate::cfg::CIRCLE_EPS;

/// Circle by center and radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Zero-radius circle at `p`.
    #[inline]
    pub fn at_point(p: Point) -> Self {
        Self::new(p, 0.0)
    }

    /// Circle with segment `ab` as diameter.
    #[inline]
    pub fn from_diameter(a: Point, b: Point) -> Self {
        Self::new(a.midpoint(b), a.distance(b) / 2.0)
    }

    /// Closed membership: `d² < r²` or `|d² − r²| < eps` (absolute, squared units).
    #[inline]
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        let d2 = self.center.distance_squared(p);
        let r2 = self.radius * self.radius;
        d2 < r2 || (d2 - r2).abs() < eps
    }

    /// Shorthand for `contains_eps(p, 1e-8)`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.contains_eps(p, CIRCLE_EPS)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(center: {}, radius: {:?})", self.center, self.radius)
    }
}
