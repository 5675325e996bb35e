//! Print structure counts for a few reproducible random point sets.
//!
//! Usage:
//!   cargo run -p planar --example random_diagram -- [seed]
//!
//! Each line shows n points, hull size, triangles, Voronoi edges, bounded
//! cells, enclosing radius and diameter for one replay index.

use planar::api::{draw_points, Diagram, GeomCfg, PointSampleCfg, ReplayToken};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);
    let mut tok = ReplayToken::new(seed, 0);
    for _ in 0..5 {
        let pts = draw_points(PointSampleCfg::default(), tok).unwrap();
        let d = Diagram::recompute_with(&pts, GeomCfg::default(), &mut tok.to_std_rng());
        let bounded = d.cells.iter().filter(|(_, c)| c.is_some()).count();
        let radius = d.enclosing_circle.map_or(0.0, |c| c.radius);
        let diameter = d.farthest_pair.map_or(0.0, |(a, b)| a.distance(b));
        println!(
            "index {}: n={} hull={} triangles={} voronoi={} cells={} r={:.4} diam={:.4}",
            tok.index,
            pts.len(),
            d.hull.len(),
            d.triangles.len(),
            d.voronoi_edges.len(),
            bounded,
            radius,
            diameter
        );
        tok = tok.advance();
    }
}
