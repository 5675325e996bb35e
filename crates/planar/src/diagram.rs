//! One-shot recomputation of every planar structure for a point set.
//!
//! Purpose
//! - Bundle hull, triangulation, Voronoi edges, bounded cells, smallest
//!   enclosing circle and diameter for a caller that redraws after each edit.
//! - Offer the per-point queries used when inspecting a single site.
//!
//! Notes
//! - Every call recomputes from scratch; there is no incremental update.
//! - Point queries compare exactly, so pass points taken from the input.

use rand::Rng;

use crate::cfg::GeomCfg;
use crate::delaunay::triangulate_with_cfg;
use crate::diameter::farthest_pair;
use crate::hull::convex_hull;
use crate::prims::{Circle, Point, Polygon, Triangle};
use crate::voronoi::{interior_cells_with_cfg, voronoi_edges_with_cfg, VoronoiEdge};
use crate::welzl::smallest_enclosing_circle_with;

/// All derived structures of one point set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diagram {
    pub points: Vec<Point>,
    /// Counterclockwise hull vertices.
    pub hull: Vec<Point>,
    pub triangles: Vec<Triangle>,
    pub voronoi_edges: Vec<VoronoiEdge>,
    /// One entry per input point, in input order.
    pub cells: Vec<(Point, Option<Polygon>)>,
    /// `None` only for an empty point set.
    pub enclosing_circle: Option<Circle>,
    pub farthest_pair: Option<(Point, Point)>,
}

/// What the diagram knows about one point.
#[derive(Clone, Debug, PartialEq)]
pub struct PointReport {
    pub point: Point,
    pub triangles_with_vertex: Vec<Triangle>,
    pub triangles_containing: Vec<Triangle>,
    pub on_hull: bool,
    pub voronoi_edges: Vec<VoronoiEdge>,
    pub cell: Option<Polygon>,
}

impl Diagram {
    /// Recompute with default tolerances and a thread-local RNG for Welzl.
    pub fn recompute(points: &[Point]) -> Self {
        Self::recompute_with(points, GeomCfg::default(), &mut rand::thread_rng())
    }

    /// Recompute with explicit tolerances and RNG.
    pub fn recompute_with<R: Rng + ?Sized>(points: &[Point], cfg: GeomCfg, rng: &mut R) -> Self {
        let hull = convex_hull(points);
        let triangles = triangulate_with_cfg(points, cfg, None);
        let voronoi_edges = voronoi_edges_with_cfg(&triangles, cfg);
        let cells = interior_cells_with_cfg(points, &voronoi_edges, &triangles, cfg);
        let enclosing_circle =
            (!points.is_empty()).then(|| smallest_enclosing_circle_with(points, rng, cfg));
        let farthest_pair = farthest_pair(&hull);
        tracing::debug!(
            points = points.len(),
            hull = hull.len(),
            triangles = triangles.len(),
            voronoi_edges = voronoi_edges.len(),
            "diagram recomputed"
        );
        Self {
            points: points.to_vec(),
            hull,
            triangles,
            voronoi_edges,
            cells,
            enclosing_circle,
            farthest_pair,
        }
    }

    /// Triangles having `p` as an exact vertex.
    pub fn triangles_with_vertex(&self, p: Point) -> Vec<Triangle> {
        self.triangles.iter().filter(|t| t.has_vertex(p)).copied().collect()
    }

    /// Triangles with `p` strictly inside.
    pub fn triangles_containing(&self, p: Point) -> Vec<Triangle> {
        self.triangles.iter().filter(|t| t.contains(p)).copied().collect()
    }

    #[inline]
    pub fn is_on_hull(&self, p: Point) -> bool {
        self.hull.contains(&p)
    }

    /// Voronoi edges whose left or right site is `p`.
    pub fn voronoi_edges_of_site(&self, p: Point) -> Vec<VoronoiEdge> {
        self.voronoi_edges
            .iter()
            .filter(|e| e.touches_site(p))
            .copied()
            .collect()
    }

    /// Bounded cell of `p`, if `p` is an input point with one.
    pub fn cell_of(&self, p: Point) -> Option<&Polygon> {
        self.cells
            .iter()
            .find(|(site, _)| *site == p)
            .and_then(|(_, cell)| cell.as_ref())
    }

    /// Everything above for the `index`-th input point.
    pub fn inspect(&self, index: usize) -> Option<PointReport> {
        let point = *self.points.get(index)?;
        Some(PointReport {
            point,
            triangles_with_vertex: self.triangles_with_vertex(point),
            triangles_containing: self.triangles_containing(point),
            on_hull: self.is_on_hull(point),
            voronoi_edges: self.voronoi_edges_of_site(point),
            cell: self.cells.get(index).and_then(|(_, c)| c.clone()),
        })
    }
}
