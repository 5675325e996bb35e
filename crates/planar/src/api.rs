//! Curated surface for callers outside the kernel (CLI, benches).
//!
//! Flat re-exports so call sites do not depend on the module layout.

// Values and predicates
pub use crate::prims::{
    cross, is_counter_clockwise, signed_area, BBox2, Circle, Edge, LineSegment, Point, Polygon,
    Ray, Triangle, Winding,
};
// Algorithms
pub use crate::delaunay::{super_triangle, triangulate, triangulate_with_cfg};
pub use crate::diameter::{diameter, farthest_pair};
pub use crate::hull::convex_hull;
pub use crate::voronoi::{
    edges_by_site, interior_cells, interior_cells_with_cfg, voronoi_edges, voronoi_edges_with_cfg,
    VoronoiEdge, VoronoiEdgeKind,
};
pub use crate::welzl::{smallest_enclosing_circle, smallest_enclosing_circle_with};
// Whole-diagram recomputation
pub use crate::cfg::GeomCfg;
pub use crate::diagram::{Diagram, PointReport};
// Inputs
pub use crate::rand::{draw_points, PointSampleCfg, ReplayToken, SampleError};
pub use crate::text::{format_points, parse_points, ParsePointsError};
