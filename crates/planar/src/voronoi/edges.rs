use std::collections::HashMap;

use nalgebra::Vector2;

use super::{VoronoiEdge, VoronoiEdgeKind};
use crate::cfg::GeomCfg;
use crate::prims::{Edge, LineSegment, Point, Ray, Triangle};

/// Voronoi edges dual to `triangles`, with default tolerances.
pub fn voronoi_edges(triangles: &[Triangle]) -> Vec<VoronoiEdge> {
    voronoi_edges_with_cfg(triangles, GeomCfg::default())
}

/// Voronoi edges dual to `triangles`.
///
/// Triangles without a circumcircle are skipped. Edges shared by two
/// triangles become segments between their circumcenters; edges owned by one
/// triangle become rays from its circumcenter, perpendicular to the edge and
/// pointing away from the opposite vertex. Output follows the first
/// appearance of each edge in `triangles`.
pub fn voronoi_edges_with_cfg(triangles: &[Triangle], cfg: GeomCfg) -> Vec<VoronoiEdge> {
    let mut centers: Vec<Option<Point>> = Vec::with_capacity(triangles.len());
    let mut slot: HashMap<Edge, usize> = HashMap::new();
    let mut incident: Vec<(Edge, Vec<usize>)> = Vec::new();

    for (ti, t) in triangles.iter().enumerate() {
        let center = t.circumcircle_eps(cfg.eps_collinear).map(|c| c.center);
        centers.push(center);
        if center.is_none() {
            tracing::debug!(triangle = %t, "no circumcircle, skipped");
            continue;
        }
        for e in t.edges() {
            let e = e.ordered();
            let k = *slot.entry(e).or_insert_with(|| {
                incident.push((e, Vec::with_capacity(2)));
                incident.len() - 1
            });
            incident[k].1.push(ti);
        }
    }

    let mut out = Vec::with_capacity(incident.len());
    for (edge, tris) in &incident {
        match tris.as_slice() {
            &[i, j] => {
                let (Some(ci), Some(cj)) = (centers[i], centers[j]) else {
                    continue;
                };
                out.push(VoronoiEdge {
                    kind: VoronoiEdgeKind::Segment(LineSegment::new(ci, cj)),
                    left_site: triangles[i].opposite_vertex(edge),
                    right_site: Some(triangles[j].opposite_vertex(edge)),
                });
            }
            &[i] => {
                let Some(ci) = centers[i] else { continue };
                let site = triangles[i].opposite_vertex(edge);
                out.push(VoronoiEdge {
                    kind: VoronoiEdgeKind::Ray(Ray::new(ci, outward_normal(edge, site))),
                    left_site: site,
                    right_site: None,
                });
            }
            more => {
                tracing::debug!(edge = ?edge, count = more.len(), "non-manifold edge skipped");
            }
        }
    }
    out
}

/// Perpendicular `(-dy, dx)` of the edge, flipped unless it points from
/// `site` towards the edge midpoint.
fn outward_normal(edge: &Edge, site: Point) -> Vector2<f64> {
    let d = edge.b - edge.a;
    let normal = Vector2::new(-d.y, d.x);
    let to_mid = (edge.midpoint() - site).to_vec();
    if normal.dot(&to_mid) > 0.0 {
        normal
    } else {
        -normal
    }
}
