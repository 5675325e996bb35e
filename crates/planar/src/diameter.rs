//! Hull diameter (rotating calipers).
//!
//! For each hull edge `(i, i+1)` the opposite pointer `j` advances while the
//! triangle `(i, i+1, j+1)` is larger than `(i, i+1, j)`; the antipodal
//! candidates `(i, j)` and `(i+1, j)` are then scored by squared distance.
//! The pointer only moves forward, so the scan is O(n).

use crate::prims::{cross, Point};

/// Farthest pair of a counterclockwise convex hull, `None` below two vertices.
///
/// The hull must be convex with no repeated vertices (as produced by
/// `hull::convex_hull`); other inputs yield an unspecified pair.
pub fn farthest_pair(hull: &[Point]) -> Option<(Point, Point)> {
    let n = hull.len();
    if n < 2 {
        return None;
    }
    if n == 2 {
        return Some((hull[0], hull[1]));
    }
    let area = |i: usize, k: usize, j: usize| cross(hull[i], hull[k], hull[j]).abs();

    let mut best = (hull[0], hull[1]);
    let mut best_d2 = hull[0].distance_squared(hull[1]);
    let mut j = 1usize;
    for i in 0..n {
        let i1 = (i + 1) % n;
        while area(i, i1, (j + 1) % n) > area(i, i1, j) {
            j = (j + 1) % n;
        }
        for a in [i, i1] {
            let d2 = hull[a].distance_squared(hull[j]);
            if d2 > best_d2 {
                best_d2 = d2;
                best = (hull[a], hull[j]);
            }
        }
    }
    Some(best)
}

/// Length of the farthest pair, `None` below two vertices.
#[inline]
pub fn diameter(hull: &[Point]) -> Option<f64> {
    farthest_pair(hull).map(|(a, b)| a.distance(b))
}
