//! Rays and line segments.

use nalgebra::Vector2;
use std::fmt;

use super::point::Point;
use super::predicates::normalized_or_zero;

/// Half-line `origin + t · direction`, `t ≥ 0`. `direction` need not be unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vector2<f64>,
}

impl Ray {
    #[inline]
    pub fn new(origin: Point, direction: Vector2<f64>) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }
}

/// Directed segment `start → end`. Equality and hashing respect direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Clip a ray to length `max_length` along its normalized direction.
    /// A zero direction yields a degenerate segment at the origin.
    pub fn from_ray(ray: &Ray, max_length: f64) -> Self {
        let dir = normalized_or_zero(ray.direction);
        Self::new(ray.origin, ray.origin + dir * max_length)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// `end` if `p == start` (exact), otherwise `start`.
    #[inline]
    pub fn other_point(&self, p: Point) -> Point {
        if self.start == p {
            self.end
        } else {
            self.start
        }
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LineSegment(({:.3}, {:.3}), ({:.3}, {:.3}))",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ray(({:.3}, {:.3}), ({:.3}, {:.3}))",
            self.origin.x, self.origin.y, self.direction.x, self.direction.y
        )
    }
}
