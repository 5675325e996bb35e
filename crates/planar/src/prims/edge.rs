use std::hash::{Hash, Hasher};

use super::point::Point;

/// Undirected edge between two points.
///
/// Equality and hashing go through `ordered()`, so `Edge::new(a, b)` and
/// `Edge::new(b, a)` are the same map key.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub a: Point,
    pub b: Point,
}

impl Edge {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Endpoints sorted lexicographically (x, then y).
    #[inline]
    pub fn ordered(&self) -> Edge {
        if self.a.x < self.b.x || (self.a.x == self.b.x && self.a.y <= self.b.y) {
            *self
        } else {
            Edge::new(self.b, self.a)
        }
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        self.a.midpoint(self.b)
    }

    #[inline]
    pub fn has_endpoint(&self, p: Point) -> bool {
        self.a == p || self.b == p
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        let l = self.ordered();
        let r = other.ordered();
        l.a == r.a && l.b == r.b
    }
}
impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let o = self.ordered();
        o.a.hash(state);
        o.b.hash(state);
    }
}
