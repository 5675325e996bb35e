//! Smallest enclosing circle (Welzl).
//!
//! Purpose
//! - Minimum-radius circle containing every input point, in expected O(n).
//!
//! Algorithm
//! - Shuffle, then grow the circle point by point. A point outside the
//!   current circle must lie on the boundary of the next one, so the scan
//!   restarts over the prefix with that point pinned (up to three pins).
//! - The boundary is an explicit argument of each level; nothing is shared or
//!   mutated across levels.
//! - Three collinear pins have no circumcircle; the diameter circle of their
//!   farthest pair is used instead.
//!
//! References
//! - E. Welzl, "Smallest enclosing disks (balls and ellipsoids)", 1991.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cfg::GeomCfg;
use crate::prims::{Circle, Point, Triangle};

/// Smallest enclosing circle, shuffled with the thread-local RNG.
///
/// Panics on an empty slice.
pub fn smallest_enclosing_circle(points: &[Point]) -> Circle {
    smallest_enclosing_circle_with(points, &mut rand::thread_rng(), GeomCfg::default())
}

/// Smallest enclosing circle with a caller-supplied RNG and tolerances.
///
/// Membership uses `Circle::contains_eps(p, cfg.eps_circle)`. The circle is
/// independent of the RNG up to floating-point rounding.
///
/// Panics on an empty slice.
pub fn smallest_enclosing_circle_with<R: Rng + ?Sized>(
    points: &[Point],
    rng: &mut R,
    cfg: GeomCfg,
) -> Circle {
    assert!(
        !points.is_empty(),
        "cannot compute the smallest enclosing circle of an empty point set"
    );
    match points {
        [a] => return Circle::at_point(*a),
        [a, b] => return Circle::from_diameter(*a, *b),
        _ => {}
    }

    let mut pts = points.to_vec();
    pts.shuffle(rng);

    let mut circle = Circle::at_point(pts[0]);
    for i in 1..pts.len() {
        let p = pts[i];
        if !circle.contains_eps(p, cfg.eps_circle) {
            circle = with_one_pin(&pts[..i], p, cfg);
        }
    }
    circle
}

/// Smallest circle through `b1` containing `prefix`.
fn with_one_pin(prefix: &[Point], b1: Point, cfg: GeomCfg) -> Circle {
    let mut circle = Circle::at_point(b1);
    for (j, &p) in prefix.iter().enumerate() {
        if !circle.contains_eps(p, cfg.eps_circle) {
            circle = with_two_pins(&prefix[..j], b1, p, cfg);
        }
    }
    circle
}

/// Smallest circle through `b1` and `b2` containing `prefix`.
fn with_two_pins(prefix: &[Point], b1: Point, b2: Point, cfg: GeomCfg) -> Circle {
    let mut circle = Circle::from_diameter(b1, b2);
    for &p in prefix {
        if !circle.contains_eps(p, cfg.eps_circle) {
            circle = through_three(b1, b2, p, cfg);
        }
    }
    circle
}

/// Circumcircle of three pins, or the farthest-pair diameter circle when collinear.
fn through_three(a: Point, b: Point, c: Point, cfg: GeomCfg) -> Circle {
    if let Some(circle) = Triangle::new(a, b, c).circumcircle_eps(cfg.eps_collinear) {
        return circle;
    }
    let (ab, bc, ca) = (a.distance_squared(b), b.distance_squared(c), c.distance_squared(a));
    tracing::trace!(%a, %b, %c, "collinear boundary, using farthest pair");
    if ab >= bc && ab >= ca {
        Circle::from_diameter(a, b)
    } else if bc >= ca {
        Circle::from_diameter(b, c)
    } else {
        Circle::from_diameter(c, a)
    }
}
