use std::collections::HashMap;

use super::{VoronoiEdge, VoronoiEdgeKind};
use crate::cfg::GeomCfg;
use crate::prims::{LineSegment, Point, PointKey, Polygon, Triangle};

/// Map each site to the Voronoi edges whose endpoint triangles contain it.
///
/// Endpoints are matched to triangles by exact circumcenter equality, so
/// edges must come from the same `triangles`. When several triangles share a
/// circumcenter the last one wins.
pub fn edges_by_site(
    edges: &[VoronoiEdge],
    triangles: &[Triangle],
    cfg: GeomCfg,
) -> HashMap<Point, Vec<VoronoiEdge>> {
    let mut by_center: HashMap<PointKey, Triangle> = HashMap::with_capacity(triangles.len());
    for t in triangles {
        if let Some(c) = t.circumcircle_eps(cfg.eps_collinear) {
            by_center.insert(c.center.key(), *t);
        }
    }

    let mut out: HashMap<Point, Vec<VoronoiEdge>> = HashMap::new();
    for edge in edges {
        let ends = match edge.kind {
            VoronoiEdgeKind::Segment(s) => [Some(s.start), Some(s.end)],
            VoronoiEdgeKind::Ray(r) => [Some(r.origin), None],
        };
        let mut sites: Vec<Point> = Vec::with_capacity(6);
        for end in ends.iter().flatten() {
            if let Some(t) = by_center.get(&end.key()) {
                for v in t.vertices() {
                    if !sites.contains(&v) {
                        sites.push(v);
                    }
                }
            }
        }
        for s in sites {
            out.entry(s).or_default().push(*edge);
        }
    }
    out
}

/// Bounded Voronoi cell per input point, with default tolerances.
pub fn interior_cells(
    points: &[Point],
    edges: &[VoronoiEdge],
    triangles: &[Triangle],
) -> Vec<(Point, Option<Polygon>)> {
    interior_cells_with_cfg(points, edges, triangles, GeomCfg::default())
}

/// Bounded Voronoi cell per input point, in input order.
///
/// A cell is rebuilt from the segments attached to the point whose opposite
/// sites both differ from it. Points on the hull (their cell touches a ray)
/// and points whose segments do not close into one loop get `None`.
///
/// Cocircular inputs hit the second case: two triangles sharing a
/// circumcircle yield a zero-length segment, its endpoint gets degree four
/// and the loop is rejected. The center of a 3×3 grid has no cell for this
/// reason.
pub fn interior_cells_with_cfg(
    points: &[Point],
    edges: &[VoronoiEdge],
    triangles: &[Triangle],
    cfg: GeomCfg,
) -> Vec<(Point, Option<Polygon>)> {
    let by_site = edges_by_site(edges, triangles, cfg);
    points
        .iter()
        .map(|&p| {
            let segments: Vec<LineSegment> = by_site
                .get(&p)
                .map(|es| {
                    es.iter()
                        .filter(|e| !e.touches_site(p))
                        .filter_map(VoronoiEdge::segment)
                        .collect()
                })
                .unwrap_or_default();
            let cell = Polygon::from_segments(&segments);
            if cell.is_none() {
                tracing::trace!(site = %p, segments = segments.len(), "no bounded cell");
            }
            (p, cell)
        })
        .collect()
}
