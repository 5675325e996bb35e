//! Planar geometry kernel.
//!
//! Convex hull, Delaunay triangulation, Voronoi diagram, bounded Voronoi
//! cells, smallest enclosing circle and hull diameter over `f64` points.
//!
//! Conventions
//! - Counterclockwise is positive signed area.
//! - Degeneracy is reported by absence (`Option`, empty output), never by
//!   errors. The only panic is the smallest enclosing circle of an empty set.
//! - Tolerances live in `GeomCfg`; every algorithm has a default entry point
//!   and a `*_with_cfg` / `*_with` variant.
//! - All functions are pure and recompute from scratch.

pub mod api;
pub mod cfg;
pub mod delaunay;
pub mod diagram;
pub mod diameter;
pub mod hull;
pub mod prims;
pub mod rand;
pub mod text;
pub mod voronoi;
pub mod welzl;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::GeomCfg;
pub use diagram::Diagram;
pub use nalgebra::Vector2 as Vec2;
pub use prims::Point;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::GeomCfg;
    pub use crate::delaunay::{triangulate, triangulate_with_cfg};
    pub use crate::diagram::{Diagram, PointReport};
    pub use crate::diameter::farthest_pair;
    pub use crate::hull::convex_hull;
    pub use crate::prims::{
        BBox2, Circle, Edge, LineSegment, Point, Polygon, Ray, Triangle, Winding,
    };
    pub use crate::rand::{draw_points, PointSampleCfg, ReplayToken};
    pub use crate::voronoi::{interior_cells, voronoi_edges, VoronoiEdge, VoronoiEdgeKind};
    pub use crate::welzl::{smallest_enclosing_circle, smallest_enclosing_circle_with};
    pub use nalgebra::Vector2 as Vec2;
}

#[cfg(test)]
mod tests_props;
