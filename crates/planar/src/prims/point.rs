//! Planar points with two equality regimes.
//!
//! - `==`, `Hash` and `PointKey` compare coordinates bitwise (with `-0.0`
//!   folded onto `0.0`). Site and circumcenter maps rely on this.
//! - `approx_eq` / `approx_eq_rel` compare with an absolute (and optionally
//!   relative) tolerance. Vertex matching uses them.
//!
//! The two regimes are deliberately not unified: two circumcenters that agree
//! mathematically but were computed along different paths may differ in the
//! last bits and then fail to match as map keys.

use nalgebra::Vector2;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Point (or free vector) in R².
///
/// Coordinates are expected to be finite; NaN compares equal to itself under
/// the bitwise key, which keeps `Eq` lawful but is otherwise meaningless.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Exact, hashable identity of a `Point`.
///
/// Ordering is by raw bit pattern: stable and total, not numeric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey(u64, u64);

#[inline]
fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn key(&self) -> PointKey {
        PointKey(canonical_bits(self.x), canonical_bits(self.y))
    }

    #[inline]
    pub fn to_vec(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn dot(&self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length when read as a vector.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        (*self - other).norm()
    }

    #[inline]
    pub fn distance_squared(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Per-coordinate comparison with absolute tolerance `abs_tol` (inclusive).
    #[inline]
    pub fn approx_eq(&self, other: Point, abs_tol: f64) -> bool {
        self.approx_eq_rel(other, abs_tol, 0.0)
    }

    /// Per-coordinate `|a − b| <= max(abs_tol, rel_tol · max(|a|, |b|))`.
    #[inline]
    pub fn approx_eq_rel(&self, other: Point, abs_tol: f64, rel_tol: f64) -> bool {
        let close = |a: f64, b: f64| {
            a == b || (a - b).abs() <= abs_tol.max(rel_tol * a.abs().max(b.abs()))
        };
        close(self.x, other.x) && close(self.y, other.y)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vec()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<Vector2<f64>> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Vector2<f64>) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Plain-text form `(x,y)`; the point-list export format uses one per line.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?},{:?})", self.x, self.y)
    }
}

/// Axis-aligned bounding box of a point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox2 {
    pub min: Point,
    pub max: Point,
}

impl BBox2 {
    /// `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = *points.first()?;
        let mut min = first;
        let mut max = first;
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self { min, max })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    #[inline]
    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }
    #[inline]
    pub fn min_x_max_y(&self) -> Point {
        Point::new(self.min.x, self.max.y)
    }
    #[inline]
    pub fn max_x_min_y(&self) -> Point {
        Point::new(self.max.x, self.min.y)
    }
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
