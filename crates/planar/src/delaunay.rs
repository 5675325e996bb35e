//! Delaunay triangulation (Bowyer–Watson).
//!
//! Purpose
//! - Triangulate a point set so that no input point lies strictly inside any
//!   triangle's circumcircle.
//!
//! Algorithm
//! - Seed the working set with a super-triangle enclosing all points.
//! - Insert points in input order: collect the triangles whose circumcircle
//!   contains the point (boundary-tolerant), keep the cavity edges that belong
//!   to exactly one of them, drop the cavity, and fan the point to each
//!   boundary edge in counterclockwise order.
//! - Finally drop every triangle touching a super-triangle vertex and every
//!   triangle without a circumcircle.
//!
//! Notes
//! - The working set is keyed by `TriangleKey` in a `BTreeMap`, so structural
//!   duplicates collapse and the output order is deterministic.
//! - Exact duplicate input points are inserted once.
//! - A finite super-triangle can miss hull edges whose opposite points sit
//!   within roughly `|edge|² / (8 · scale · d)` of the edge line; raise
//!   `GeomCfg::super_scale` if that matters.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::cfg::GeomCfg;
use crate::prims::{is_counter_clockwise, BBox2, Edge, Point, Triangle, TriangleKey};

/// Enclosing triangle for `points` scaled by `scale`; `None` for an empty set.
///
/// With `d = max(width, height, 1)` and bounding-box center `(mx, my)`:
/// `a = (mx − s·d, my − d)`, `b = (mx, my + s·d)`, `c = (mx + s·d, my − d/2)`.
pub fn super_triangle(points: &[Point], scale: f64) -> Option<Triangle> {
    let bb = BBox2::from_points(points)?;
    let d = bb.width().max(bb.height()).max(1.0);
    let m = bb.center();
    Some(Triangle::new(
        Point::new(m.x - scale * d, m.y - d),
        Point::new(m.x, m.y + scale * d),
        Point::new(m.x + scale * d, m.y - 0.5 * d),
    ))
}

/// Delaunay triangulation with default tolerances.
pub fn triangulate(points: &[Point]) -> Vec<Triangle> {
    triangulate_with_cfg(points, GeomCfg::default(), None)
}

/// Delaunay triangulation with explicit tolerances and an optional
/// caller-supplied super-triangle (it must enclose every point).
///
/// Output triangles are counterclockwise and contain only input points.
pub fn triangulate_with_cfg(
    points: &[Point],
    cfg: GeomCfg,
    super_tri: Option<Triangle>,
) -> Vec<Triangle> {
    let Some(st) = super_tri.or_else(|| super_triangle(points, cfg.super_scale)) else {
        return Vec::new();
    };
    let mut work: BTreeMap<TriangleKey, Triangle> = BTreeMap::new();
    work.insert(st.key(), st);

    let mut seen = HashSet::with_capacity(points.len());
    for &p in points {
        if !seen.insert(p.key()) {
            tracing::trace!(point = %p, "duplicate point skipped");
            continue;
        }
        insert_point(&mut work, p, cfg);
    }

    let before = work.len();
    let out: Vec<Triangle> = work
        .into_values()
        .filter(|t| !(t.has_vertex(st.a) || t.has_vertex(st.b) || t.has_vertex(st.c)))
        .collect();
    let n_inner = out.len();
    let out: Vec<Triangle> = out
        .into_iter()
        .filter(|t| t.circumcircle_eps(cfg.eps_collinear).is_some())
        .collect();
    if out.len() < n_inner {
        tracing::debug!(
            dropped = n_inner - out.len(),
            "dropped triangles without circumcircle"
        );
    }
    tracing::trace!(working = before, kept = out.len(), "triangulation done");
    out
}

/// One Bowyer–Watson insertion step.
fn insert_point(work: &mut BTreeMap<TriangleKey, Triangle>, p: Point, cfg: GeomCfg) {
    let bad: Vec<TriangleKey> = work
        .iter()
        .filter(|(_, t)| {
            t.circumcircle_eps(cfg.eps_collinear)
                .is_some_and(|c| c.contains_eps(p, cfg.eps_circle))
        })
        .map(|(k, _)| *k)
        .collect();

    // Cavity boundary: edges owned by exactly one bad triangle, in first-seen order.
    let mut count: HashMap<Edge, usize> = HashMap::new();
    let mut order: Vec<Edge> = Vec::new();
    for k in &bad {
        if let Some(t) = work.remove(k) {
            for e in t.edges() {
                let e = e.ordered();
                let c = count.entry(e).or_insert(0);
                if *c == 0 {
                    order.push(e);
                }
                *c += 1;
            }
        }
    }

    for e in order {
        if count.get(&e).copied() != Some(1) {
            continue;
        }
        let t = if is_counter_clockwise(e.a, e.b, p) {
            Triangle::new(e.a, e.b, p)
        } else {
            Triangle::new(e.b, e.a, p)
        };
        work.insert(t.key(), t);
    }
}
