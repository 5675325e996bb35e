use std::fmt;

use super::circle::Circle;
use super::edge::Edge;
use super::point::{BBox2, Point, PointKey};
use super::predicates::{cross, Winding};
use crate::cfg::COLLINEAR_EPS;

/// Triangle with ordered vertices `a, b, c`.
///
/// Derived `==`/`Hash` respect vertex order; use `key()` for an
/// order-independent identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

/// Order-independent structural key (vertex keys sorted).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriangleKey([PointKey; 3]);

impl Triangle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    pub fn key(&self) -> TriangleKey {
        let mut k = [self.a.key(), self.b.key(), self.c.key()];
        k.sort_unstable();
        TriangleKey(k)
    }

    /// Equilateral triangle inscribed in `circle`, first vertex at angle 0,
    /// counterclockwise.
    pub fn fitting(circle: Circle) -> Self {
        let at = |k: f64| {
            let t = k * 2.0 * std::f64::consts::FRAC_PI_3;
            Point::new(
                circle.center.x + circle.radius * t.cos(),
                circle.center.y + circle.radius * t.sin(),
            )
        };
        Self::new(at(0.0), at(1.0), at(2.0))
    }

    /// Equilateral triangle circumscribed about the circle through the
    /// corners of `bb`, grown by `scale` (`>= 1`). Vertices are bottom-left,
    /// top, bottom-right, like `delaunay::super_triangle`.
    ///
    /// The box's circumradius `r` is floored at `0.5` so a single point still
    /// gets a proper triangle.
    pub fn around_bbox(bb: &BBox2, scale: f64) -> Self {
        let m = bb.center();
        let r = scale * m.distance(bb.max).max(0.5);
        let half_side = 3f64.sqrt() * r;
        Self::new(
            Point::new(m.x - half_side, m.y - r),
            Point::new(m.x, m.y + 2.0 * r),
            Point::new(m.x + half_side, m.y - r),
        )
    }

    /// Edges in `ab`, `bc`, `ca` order.
    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.b, self.c),
            Edge::new(self.c, self.a),
        ]
    }

    /// Exact vertex membership.
    #[inline]
    pub fn has_vertex(&self, p: Point) -> bool {
        self.a == p || self.b == p || self.c == p
    }

    /// Vertex membership with absolute per-coordinate tolerance.
    #[inline]
    pub fn has_vertex_eps(&self, p: Point, abs_tol: f64) -> bool {
        self.has_vertex_tol(p, abs_tol, 0.0)
    }

    /// Vertex membership under `Point::approx_eq_rel`.
    pub fn has_vertex_tol(&self, p: Point, abs_tol: f64, rel_tol: f64) -> bool {
        self.vertices()
            .iter()
            .any(|v| v.approx_eq_rel(p, abs_tol, rel_tol))
    }

    /// The vertex not on `edge` (exact comparison); `c` if none qualifies earlier.
    pub fn opposite_vertex(&self, edge: &Edge) -> Point {
        if !edge.has_endpoint(self.a) {
            self.a
        } else if !edge.has_endpoint(self.b) {
            self.b
        } else {
            self.c
        }
    }

    /// Twice the signed area; positive for counterclockwise.
    #[inline]
    pub fn signed_area2(&self) -> f64 {
        cross(self.a, self.b, self.c)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        0.5 * self.signed_area2().abs()
    }

    #[inline]
    pub fn winding(&self) -> Winding {
        Winding::from_area(self.signed_area2())
    }

    /// Strict interior test via barycentric coordinates.
    ///
    /// Points on edges or vertices are not contained; a degenerate triangle
    /// contains nothing.
    pub fn contains(&self, p: Point) -> bool {
        let (a, b, c) = (self.a, self.b, self.c);
        let den = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);
        let alpha = ((b.y - c.y) * (p.x - c.x) + (c.x - b.x) * (p.y - c.y)) / den;
        let beta = ((c.y - a.y) * (p.x - c.x) + (a.x - c.x) * (p.y - c.y)) / den;
        let gamma = 1.0 - alpha - beta;
        alpha > 0.0 && beta > 0.0 && gamma > 0.0
    }

    /// Circumcircle, or `None` when `|D| <= eps` (near-collinear vertices).
    ///
    /// `D = 2 (a.x (b.y − c.y) + b.x (c.y − a.y) + c.x (a.y − b.y))`.
    pub fn circumcircle_eps(&self, eps: f64) -> Option<Circle> {
        let (a, b, c) = (self.a, self.b, self.c);
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        if d.abs() <= eps {
            return None;
        }
        let a2 = a.x * a.x + a.y * a.y;
        let b2 = b.x * b.x + b.y * b.y;
        let c2 = c.x * c.x + c.y * c.y;
        let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
        let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
        let center = Point::new(ux, uy);
        Some(Circle::new(center, center.distance(a)))
    }

    /// Shorthand for `circumcircle_eps(1e-10)`.
    #[inline]
    pub fn circumcircle(&self) -> Option<Circle> {
        self.circumcircle_eps(COLLINEAR_EPS)
    }

    /// Same triangle and winding, rotated so the lowest (then leftmost) vertex comes first.
    pub fn standardized(&self) -> Triangle {
        let below = |p: Point, q: Point| p.y < q.y || (p.y == q.y && p.x < q.x);
        let (a, b, c) = (self.a, self.b, self.c);
        let first_is_a = below(a, b) && below(a, c);
        let first_is_b = !below(a, b) && below(b, c);
        if first_is_a {
            *self
        } else if first_is_b {
            Triangle::new(b, c, a)
        } else {
            Triangle::new(c, a, b)
        }
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle(a: {}, b: {}, c: {})", self.a, self.b, self.c)
    }
}
