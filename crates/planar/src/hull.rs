//! Convex hull (Graham scan).
//!
//! Purpose
//! - Counterclockwise hull vertices of a point set, taken from the input.
//!
//! Notes
//! - Pivot is the lowest point (ties: leftmost). The remaining points are
//!   ordered by polar angle around the pivot; equal angles by distance.
//! - The scan pops while `cross(second, top, candidate) <= 0`, so collinear
//!   boundary points are dropped and an all-collinear input collapses to its
//!   two extreme points.
//! - Inputs with fewer than three points are returned unchanged.

use std::cmp::Ordering;

use crate::prims::{cross, Point};

/// Graham-scan convex hull in counterclockwise order.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let pivot_idx = lowest_point(points);
    let pivot = points[pivot_idx];

    let mut rest: Vec<(f64, f64, Point)> = points
        .iter()
        .enumerate()
        .filter(|&(k, _)| k != pivot_idx)
        .map(|(_, &p)| {
            let d = p - pivot;
            (d.y.atan2(d.x), pivot.distance_squared(p), p)
        })
        .collect();
    rest.sort_by(|a, b| match a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal),
        o => o,
    });

    let mut stack: Vec<Point> = Vec::with_capacity(points.len());
    stack.push(pivot);
    for (_, _, p) in rest {
        while stack.len() >= 2 && cross(stack[stack.len() - 2], stack[stack.len() - 1], p) <= 0.0 {
            stack.pop();
        }
        stack.push(p);
    }
    stack
}

/// Index of the lowest point, ties broken by smallest x.
fn lowest_point(points: &[Point]) -> usize {
    let mut best = 0;
    for (k, p) in points.iter().enumerate().skip(1) {
        let b = points[best];
        if p.y < b.y || (p.y == b.y && p.x < b.x) {
            best = k;
        }
    }
    best
}
