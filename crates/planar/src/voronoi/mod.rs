//! Voronoi diagram as the dual of a Delaunay triangulation.
//!
//! Purpose
//! - `edges`: one Voronoi edge per triangulation edge. Interior edges become
//!   segments between adjacent circumcenters; hull edges become rays.
//! - `cells`: bounded per-site polygons reassembled from those segments.
//!
//! Site convention
//! - `left_site`/`right_site` hold the triangle vertices OPPOSITE the shared
//!   Delaunay edge (one per incident triangle), not the two sites the Voronoi
//!   edge separates. Cell reconstruction depends on this: the segments that
//!   bound the cell of `p` are exactly the ones reachable from `p` whose
//!   opposite sites are both different from `p`.

mod cells;
mod edges;

pub use cells::{edges_by_site, interior_cells, interior_cells_with_cfg};
pub use edges::{voronoi_edges, voronoi_edges_with_cfg};

use std::fmt;

use crate::prims::{LineSegment, Point, Ray};

/// Geometry of a Voronoi edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VoronoiEdgeKind {
    Segment(LineSegment),
    Ray(Ray),
}

/// Voronoi edge with the sites opposite its dual Delaunay edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoronoiEdge {
    pub kind: VoronoiEdgeKind,
    pub left_site: Point,
    /// `None` exactly for boundary rays.
    pub right_site: Option<Point>,
}

impl VoronoiEdge {
    #[inline]
    pub fn is_segment(&self) -> bool {
        matches!(self.kind, VoronoiEdgeKind::Segment(_))
    }

    #[inline]
    pub fn is_ray(&self) -> bool {
        !self.is_segment()
    }

    #[inline]
    pub fn segment(&self) -> Option<LineSegment> {
        match self.kind {
            VoronoiEdgeKind::Segment(s) => Some(s),
            VoronoiEdgeKind::Ray(_) => None,
        }
    }

    /// Exact match against either site.
    #[inline]
    pub fn touches_site(&self, p: Point) -> bool {
        self.left_site == p || self.right_site == Some(p)
    }
}

impl fmt::Display for VoronoiEdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Segment(s) => s.fmt(f),
            Self::Ray(r) => r.fmt(f),
        }
    }
}

impl fmt::Display for VoronoiEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.right_site {
            Some(r) => write!(f, "VoronoiEdge({}, {}, {})", self.kind, self.left_site, r),
            None => write!(f, "VoronoiEdge({}, {}, nil)", self.kind, self.left_site),
        }
    }
}
