//! Property tests across modules.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use crate::cfg::GeomCfg;
use crate::delaunay::triangulate;
use crate::diameter::farthest_pair;
use crate::hull::convex_hull;
use crate::prims::{cross, Edge, Point, Polygon, Winding};
use crate::voronoi::voronoi_edges;
use crate::welzl::smallest_enclosing_circle_with;

fn cloud(min: usize, max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), min..max)
        .prop_map(|v| v.into_iter().map(Point::from).collect())
}

fn brute_force_d2(points: &[Point]) -> f64 {
    let mut best = 0.0f64;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            best = best.max(a.distance_squared(*b));
        }
    }
    best
}

proptest! {
    #[test]
    fn prop_hull_contains_every_point(pts in cloud(3, 60)) {
        let h = convex_hull(&pts);
        prop_assert!(h.iter().all(|v| pts.contains(v)));
        let n = h.len();
        if n >= 3 {
            prop_assert!(Polygon::new(h.clone()).winding() == Winding::CounterClockwise);
            for q in &pts {
                for i in 0..n {
                    prop_assert!(cross(h[i], h[(i + 1) % n], *q) >= -1e-9);
                }
            }
        }
    }

    #[test]
    fn prop_enclosing_circle_contains_all(pts in cloud(1, 50), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let c = smallest_enclosing_circle_with(&pts, &mut rng, GeomCfg::default());
        for q in &pts {
            prop_assert!(c.contains_eps(*q, 1e-6), "{} outside {}", q, c);
        }
        // No point set fits in a circle smaller than half its diameter.
        prop_assert!(2.0 * c.radius >= brute_force_d2(&pts).sqrt() - 1e-9);
    }

    #[test]
    fn prop_diameter_matches_brute_force(pts in cloud(2, 50)) {
        let hull = convex_hull(&pts);
        let (a, b) = farthest_pair(&hull).expect("at least two points");
        let expected = brute_force_d2(&pts);
        prop_assert!((a.distance_squared(b) - expected).abs() <= 1e-9 * expected.max(1.0));
    }

    #[test]
    fn prop_triangulation_partitions_hull(pts in cloud(3, 40)) {
        let tris = triangulate(&pts);
        let hull = convex_hull(&pts);
        let hull_area = Polygon::new(hull.clone()).area();
        let mut sum = 0.0;
        for t in &tris {
            prop_assert_eq!(t.winding(), Winding::CounterClockwise);
            prop_assert!(t.vertices().iter().all(|v| pts.contains(v)));
            let c = t.circumcircle().expect("kept triangles have a circumcircle");
            let slack = 1e-6 * c.radius * c.radius;
            for q in &pts {
                if !t.has_vertex(*q) {
                    prop_assert!(c.center.distance_squared(*q) >= c.radius * c.radius - slack);
                }
            }
            sum += t.area();
        }
        prop_assert!(
            (sum - hull_area).abs() <= 1e-9 * hull_area.max(1.0),
            "triangles {} vs hull {}", sum, hull_area
        );
        // 2n − 2 − h for points in general position.
        let n = pts.iter().collect::<HashSet<_>>().len();
        if hull.len() >= 3 {
            prop_assert_eq!(tris.len(), 2 * n - 2 - hull.len());
        }
    }

    #[test]
    fn prop_one_voronoi_edge_per_delaunay_edge(pts in cloud(3, 40)) {
        let tris = triangulate(&pts);
        let edges = voronoi_edges(&tris);
        let distinct: HashSet<Edge> = tris.iter().flat_map(|t| t.edges()).collect();
        prop_assert_eq!(edges.len(), distinct.len());
        let segments = edges.iter().filter(|e| e.is_segment()).count();
        prop_assert_eq!(2 * segments + (edges.len() - segments), 3 * tris.len());
    }
}
