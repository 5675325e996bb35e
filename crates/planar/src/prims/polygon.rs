use std::collections::HashMap;

use super::linear::LineSegment;
use super::point::Point;
use super::predicates::Winding;

/// Closed polygon as an ordered vertex list (last vertex connects to the first).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Shoelace area; positive for counterclockwise vertex order.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let mut acc = 0.0;
        for i in 0..n {
            let p = self.vertices[i];
            let q = self.vertices[(i + 1) % n];
            acc += p.x * q.y - q.x * p.y;
        }
        0.5 * acc
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[inline]
    pub fn winding(&self) -> Winding {
        Winding::from_area(self.signed_area())
    }

    /// Reassemble a single closed loop from unordered segments.
    ///
    /// Returns `None` unless every endpoint (exact equality) touches exactly two
    /// segments, one walk from `segments[0].start` consumes every segment, and
    /// the loop has at least three vertices. Vertex order follows the walk.
    pub fn from_segments(segments: &[LineSegment]) -> Option<Polygon> {
        let first = segments.first()?;
        let mut adjacency: HashMap<Point, Vec<usize>> = HashMap::new();
        for (k, s) in segments.iter().enumerate() {
            adjacency.entry(s.start).or_default().push(k);
            adjacency.entry(s.end).or_default().push(k);
        }
        if adjacency.values().any(|incident| incident.len() != 2) {
            return None;
        }

        let start = first.start;
        let mut used = vec![false; segments.len()];
        let mut used_count = 0usize;
        let mut vertices = vec![start];
        let mut cur_seg = 0usize;
        let mut cur_pt = start;
        while used_count < segments.len() {
            used[cur_seg] = true;
            used_count += 1;
            let next = segments[cur_seg].other_point(cur_pt);
            if next == start {
                break;
            }
            vertices.push(next);
            // Dead end: cannot happen when every degree is 2, kept as a guard.
            cur_seg = adjacency
                .get(&next)?
                .iter()
                .copied()
                .find(|&k| !used[k])?;
            cur_pt = next;
        }
        if used_count < segments.len() || vertices.len() < 3 {
            return None;
        }
        Some(Polygon { vertices })
    }
}
