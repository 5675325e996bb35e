use super::*;
use nalgebra::vector;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::{HashMap, HashSet};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn circle_contains_is_boundary_tolerant() {
    let c = Circle::new(p(5.0, 5.0), 10.0);
    assert!(c.contains(p(6.0, 6.0)));
    assert!(!c.contains(p(20.0, 20.0)));
    assert!(c.contains(p(15.0, 5.0))); // exactly on the boundary
    // Just outside by more than the squared-distance slack.
    assert!(!c.contains(p(15.0 + 1e-6, 5.0)));
    // A looser slack admits it.
    assert!(c.contains_eps(p(15.0 + 1e-6, 5.0), 1e-3));
}

#[test]
fn circle_from_diameter_and_display() {
    let c = Circle::from_diameter(p(0.0, 0.0), p(2.0, 0.0));
    assert_eq!(c.center, p(1.0, 0.0));
    assert!((c.radius - 1.0).abs() < 1e-15);
    let s = Circle::new(p(1.0, 2.0), 3.0).to_string();
    assert!(s.contains("Circle") && s.contains("1.0") && s.contains("2.0") && s.contains("3.0"));
}

#[test]
fn circumcircle_right_triangle() {
    let t = Triangle::new(p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0));
    let c = t.circumcircle().expect("non-degenerate");
    assert!(c.center.approx_eq(p(0.5, 0.5), 1e-10));
    assert!((c.radius - 0.5 * 2f64.sqrt()).abs() < 1e-10);
    for v in t.vertices() {
        assert!(c.contains(v));
    }
    assert!(c.contains(p(0.3, 0.3)));
}

#[test]
fn circumcircle_equilateral_and_translated() {
    let side = 10.0;
    let h = side * 3f64.sqrt() / 2.0;
    let t = Triangle::new(p(0.0, 0.0), p(side, 0.0), p(side / 2.0, h));
    let c = t.circumcircle().unwrap();
    assert!(c.center.approx_eq(p(side / 2.0, h / 3.0), 1e-9));
    assert!((c.radius - side / 3f64.sqrt()).abs() < 1e-9);

    let off = p(100.0, 200.0);
    let t2 = Triangle::new(t.a + off, t.b + off, t.c + off);
    let c2 = t2.circumcircle().unwrap();
    assert!((c2.radius - c.radius).abs() < 1e-6);
    assert!((c2.center - c.center).approx_eq(off, 1e-6));
}

#[test]
fn circumcircle_degenerate_cases() {
    let exact = Triangle::new(p(0.0, 0.0), p(5.0, 0.0), p(10.0, 0.0));
    assert!(exact.circumcircle().is_none());
    let diag = Triangle::new(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0));
    assert!(diag.circumcircle().is_none());

    // Nearly collinear but above the threshold: huge yet well-defined.
    let thin = Triangle::new(p(0.0, 0.0), p(10.0, 0.0), p(5.0, 0.001));
    let c = thin.circumcircle().expect("above collinearity threshold");
    let d: Vec<f64> = thin.vertices().iter().map(|v| v.distance(c.center)).collect();
    assert!((d[0] - d[1]).abs() < 1e-3 && (d[1] - d[2]).abs() < 1e-3);
    assert!(c.radius > 1000.0);

    // Raising the threshold turns it into a degenerate triangle.
    assert!(thin.circumcircle_eps(1.0).is_none());
}

#[test]
fn circumcircle_random_triangles_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let a = p(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
        let mut b = p(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
        let mut c = p(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
        while signed_area(a, b, c).abs() < 50.0 {
            b = p(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
            c = p(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
        }
        let circ = Triangle::new(a, b, c).circumcircle().unwrap();
        for v in [a, b, c] {
            assert!((v.distance(circ.center) - circ.radius).abs() < 1e-8 * circ.radius.max(1.0));
        }
    }
}

#[test]
fn triangle_contains_is_strict() {
    let t = Triangle::new(p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
    assert!(t.contains(p(1.0, 1.0)));
    assert!(!t.contains(p(0.0, 0.0))); // vertex
    assert!(!t.contains(p(2.0, 0.0))); // edge
    assert!(!t.contains(p(3.0, 3.0))); // outside
    // Same answer for the reversed winding.
    let r = Triangle::new(t.a, t.c, t.b);
    assert!(r.contains(p(1.0, 1.0)));
    // Degenerate triangles contain nothing.
    let flat = Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0));
    assert!(!flat.contains(p(1.0, 0.0)));
}

#[test]
fn triangle_winding_edges_and_vertices() {
    let ccw = Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
    assert_eq!(ccw.winding(), Winding::CounterClockwise);
    assert_eq!(Triangle::new(ccw.a, ccw.c, ccw.b).winding(), Winding::Clockwise);
    assert_eq!(
        Triangle::new(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)).winding(),
        Winding::Collinear
    );
    let e = ccw.edges();
    assert_eq!(e[0], Edge::new(ccw.a, ccw.b));
    assert_eq!(e[1], Edge::new(ccw.b, ccw.c));
    assert_eq!(e[2], Edge::new(ccw.c, ccw.a));
    assert!(ccw.has_vertex(p(1.0, 0.0)));
    assert!(!ccw.has_vertex(p(1.0 + 1e-9, 0.0)));
    assert!(ccw.has_vertex_eps(p(1.0 + 1e-9, 0.0), 1e-6));
    assert_eq!(ccw.opposite_vertex(&Edge::new(ccw.b, ccw.a)), ccw.c);
    assert!((ccw.area() - 0.5).abs() < 1e-15);
}

#[test]
fn triangle_key_ignores_vertex_order() {
    let t = Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
    let rotated = Triangle::new(t.b, t.c, t.a);
    let flipped = Triangle::new(t.a, t.c, t.b);
    assert_ne!(t, rotated);
    assert_eq!(t.key(), rotated.key());
    assert_eq!(t.key(), flipped.key());
    let set: HashSet<TriangleKey> = [t.key(), rotated.key(), flipped.key()].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn triangle_standardized_keeps_winding() {
    let t = Triangle::new(p(1.0, 1.0), p(0.0, 2.0), p(0.5, -1.0));
    let s = t.standardized();
    assert_eq!(s.a, p(0.5, -1.0));
    assert_eq!(s.winding(), t.winding());
    assert_eq!(s.key(), t.key());
    // Ties on y break by x.
    let tie = Triangle::new(p(2.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)).standardized();
    assert_eq!(tie.a, p(0.0, 0.0));
}

#[test]
fn edge_canonical_equality_and_hash() {
    let a = p(0.0, 0.0);
    let b = p(10.0, 10.0);
    assert_eq!(Edge::new(a, b), Edge::new(b, a));
    assert_eq!(Edge::new(b, a).ordered().a, a);
    // Equal x: ordering by y.
    let e = Edge::new(p(1.0, 2.0), p(1.0, 0.0));
    assert_eq!(e.ordered().a, p(1.0, 0.0));

    let mut m: HashMap<Edge, &str> = HashMap::new();
    m.insert(Edge::new(a, b), "first");
    m.insert(Edge::new(b, a), "second");
    assert_eq!(m.len(), 1);
    assert_eq!(m[&Edge::new(a, b)], "second");
}

#[test]
fn point_exact_and_tolerant_equality() {
    assert_eq!(p(0.0, 1.0), p(-0.0, 1.0));
    assert_eq!(p(0.0, 1.0).key(), p(-0.0, 1.0).key());
    assert_ne!(p(1.0, 2.0), p(1.000_000_1, 2.0));
    assert!(p(1.0, 2.0).approx_eq(p(1.000_001, 2.000_001), 1e-3));
    assert!(p(1.0, 2.0).approx_eq(p(1.01, 2.01), 0.02));
    assert!(!p(1.0, 2.0).approx_eq(p(1.01, 2.01), 0.005));
}

#[test]
fn relative_tolerance_scales_with_magnitude() {
    let far = p(1000.0, -1000.0);
    assert!(far.approx_eq_rel(p(1000.5, -1000.5), 0.0, 1e-3));
    assert!(!far.approx_eq_rel(p(1002.0, -1000.0), 0.0, 1e-3));
    // rel_tol = 0 is the absolute comparison.
    assert_eq!(
        far.approx_eq_rel(p(1000.01, -1000.0), 0.02, 0.0),
        far.approx_eq(p(1000.01, -1000.0), 0.02)
    );
    assert!(p(0.0, 0.0).approx_eq_rel(p(0.0, -0.0), 0.0, 0.0));

    let big = Triangle::new(p(1e6, 0.0), p(0.0, 1e6), p(-1e6, 0.0));
    let near = p(1e6 + 1.0, 0.0);
    assert!(!big.has_vertex_eps(near, 1e-6));
    assert!(big.has_vertex_tol(near, 1e-6, 1e-5));
}

#[test]
fn triangle_fitting_a_circle() {
    let c = Circle::new(p(2.0, -1.0), 3.0);
    let t = Triangle::fitting(c);
    assert!(t.a.approx_eq(p(5.0, -1.0), 1e-12));
    assert_eq!(t.winding(), Winding::CounterClockwise);
    for v in t.vertices() {
        assert!((v.distance(c.center) - 3.0).abs() < 1e-12);
    }
    let cc = t.circumcircle().unwrap();
    assert!(cc.center.approx_eq(c.center, 1e-9));
    assert!((cc.radius - c.radius).abs() < 1e-9);
}

#[test]
fn triangle_around_bbox_encloses_corners() {
    let bb = BBox2::from_points(&[p(0.0, 0.0), p(2.0, 2.0)]).unwrap();
    let t = Triangle::around_bbox(&bb, 1.0);
    for corner in [bb.min, bb.max, bb.min_x_max_y(), bb.max_x_min_y(), bb.center()] {
        assert!(t.contains(corner), "{corner} outside {t}");
    }
    // Circumscribed about the box circle: circumradius twice the box's.
    let cc = t.circumcircle().unwrap();
    assert!(cc.center.approx_eq(p(1.0, 1.0), 1e-9));
    assert!((cc.radius - 2.0 * 2f64.sqrt()).abs() < 1e-9);
    assert_eq!(t.winding(), Winding::Clockwise);

    let grown = Triangle::around_bbox(&bb, 10.0);
    assert!((grown.circumcircle().unwrap().radius - 20.0 * 2f64.sqrt()).abs() < 1e-9);

    // A single point still gets a proper triangle.
    let dot = BBox2::from_points(&[p(3.0, 4.0)]).unwrap();
    let t = Triangle::around_bbox(&dot, 1.0);
    assert!(t.contains(p(3.0, 4.0)));
    assert_eq!(t.b, p(3.0, 5.0));
}

#[test]
fn point_arithmetic_and_display() {
    let a = p(1.0, 2.0);
    let b = p(3.0, 4.0);
    assert_eq!(a + b, p(4.0, 6.0));
    assert_eq!(b - a, p(2.0, 2.0));
    assert_eq!(a * 2.0, p(2.0, 4.0));
    assert_eq!(b / 2.0, p(1.5, 2.0));
    assert_eq!(a.dot(b), 11.0);
    assert_eq!(p(3.0, 4.0).norm(), 5.0);
    assert_eq!(distance(p(0.0, 0.0), b), 5.0);
    assert_eq!(distance_squared(p(0.0, 0.0), b), 25.0);
    assert_eq!(Point::from(a.to_vec()), a);
    assert_eq!(a + vector![1.0, 1.0], p(2.0, 3.0));
    assert_eq!(a.to_string(), "(1.0,2.0)");
    assert_eq!(p(0.25, -3.5).to_string(), "(0.25,-3.5)");
}

#[test]
fn predicates_cross_and_orientation() {
    let a = p(0.0, 0.0);
    let b = p(1.0, 0.0);
    let c = p(0.0, 1.0);
    assert_eq!(cross(a, b, c), 1.0);
    assert_eq!(cross(a, b, c), 2.0 * signed_area(a, b, c));
    assert_eq!(signed_area(a, c, b), -0.5);
    assert!(is_counter_clockwise(a, b, p(0.5, 1.0)));
    assert!(!is_counter_clockwise(a, b, p(0.5, -1.0)));
    assert!(!is_counter_clockwise(a, b, p(2.0, 0.0)));

    let n = normalized_or_zero(vector![3.0, 4.0]);
    assert!((n.x - 0.6).abs() < 1e-12 && (n.y - 0.8).abs() < 1e-12);
    assert_eq!(normalized_or_zero(vector![0.0, 0.0]), vector![0.0, 0.0]);
}

#[test]
fn bbox_from_points() {
    assert!(BBox2::from_points(&[]).is_none());
    let b = BBox2::from_points(&[p(1.0, 1.0), p(5.0, 1.0), p(5.0, 5.0), p(1.0, 5.0)]).unwrap();
    assert_eq!(b.min, p(1.0, 1.0));
    assert_eq!(b.max, p(5.0, 5.0));
    assert_eq!(b.width(), 4.0);
    assert_eq!(b.center(), p(3.0, 3.0));
    assert_eq!(b.min_x_max_y(), p(1.0, 5.0));
    assert_eq!(b.max_x_min_y(), p(5.0, 1.0));
    assert!(b.contains(p(3.0, 5.0)));
}

#[test]
fn segment_from_ray_and_other_point() {
    let ray = Ray::new(p(0.0, 0.0), vector![1.0, 1.0]);
    let s = LineSegment::from_ray(&ray, 5.0 * 2f64.sqrt());
    assert_eq!(s.start, ray.origin);
    assert!(s.end.approx_eq(p(5.0, 5.0), 1e-9));
    assert!(ray.point_at(2.0).approx_eq(p(2.0, 2.0), 1e-15));

    let seg = LineSegment::new(p(1.0, 2.0), p(3.0, 4.0));
    assert_eq!(seg.other_point(p(1.0, 2.0)), p(3.0, 4.0));
    assert_eq!(seg.other_point(p(3.0, 4.0)), p(1.0, 2.0));
    // Unrelated or nearly-equal points fall back to `start`.
    assert_eq!(seg.other_point(p(10.0, 10.0)), p(1.0, 2.0));
    assert_eq!(seg.other_point(p(1.000_000_1, 2.000_000_1)), p(1.0, 2.0));
    let text = seg.to_string();
    assert!(text.contains("LineSegment") && text.contains("1.000") && text.contains("4.000"));
}

fn square_segments() -> Vec<LineSegment> {
    vec![
        LineSegment::new(p(0.0, 0.0), p(10.0, 0.0)),
        LineSegment::new(p(10.0, 0.0), p(10.0, 10.0)),
        LineSegment::new(p(10.0, 10.0), p(0.0, 10.0)),
        LineSegment::new(p(0.0, 10.0), p(0.0, 0.0)),
    ]
}

#[test]
fn polygon_from_segments_square_follows_walk() {
    let poly = Polygon::from_segments(&square_segments()).expect("closed loop");
    assert_eq!(
        poly.vertices,
        vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]
    );
    assert_eq!(poly.winding(), Winding::CounterClockwise);
    assert!((poly.area() - 100.0).abs() < 1e-12);
}

#[test]
fn polygon_from_segments_shuffled_and_reversed() {
    let segs = vec![
        LineSegment::new(p(0.0, 0.0), p(10.0, 0.0)),
        LineSegment::new(p(0.0, 10.0), p(0.0, 0.0)),
        LineSegment::new(p(10.0, 10.0), p(10.0, 0.0)),
        LineSegment::new(p(0.0, 10.0), p(10.0, 10.0)),
    ];
    let poly = Polygon::from_segments(&segs).unwrap();
    assert_eq!(poly.len(), 4);
    let corners: HashSet<Point> = square_segments().iter().map(|s| s.start).collect();
    assert!(poly.vertices.iter().all(|v| corners.contains(v)));

    let tri = vec![
        LineSegment::new(p(0.0, 0.0), p(10.0, 0.0)),
        LineSegment::new(p(10.0, 0.0), p(5.0, 10.0)),
        LineSegment::new(p(5.0, 10.0), p(0.0, 0.0)),
    ];
    assert_eq!(Polygon::from_segments(&tri).unwrap().len(), 3);
}

#[test]
fn polygon_from_segments_rejections() {
    assert!(Polygon::from_segments(&[]).is_none());
    // Disconnected pieces: endpoints of degree 1.
    let pieces = vec![
        LineSegment::new(p(0.0, 0.0), p(10.0, 0.0)),
        LineSegment::new(p(20.0, 0.0), p(30.0, 0.0)),
    ];
    assert!(Polygon::from_segments(&pieces).is_none());
    // Y-shape: a vertex of degree 3.
    let y = vec![
        LineSegment::new(p(0.0, 0.0), p(10.0, 0.0)),
        LineSegment::new(p(10.0, 0.0), p(20.0, 0.0)),
        LineSegment::new(p(10.0, 0.0), p(10.0, 10.0)),
    ];
    assert!(Polygon::from_segments(&y).is_none());
    // Open chain.
    let open = vec![
        LineSegment::new(p(0.0, 0.0), p(10.0, 0.0)),
        LineSegment::new(p(10.0, 0.0), p(10.0, 10.0)),
        LineSegment::new(p(10.0, 10.0), p(5.0, 5.0)),
    ];
    assert!(Polygon::from_segments(&open).is_none());
    // Two separate closed loops: all degrees 2, but one walk cannot use everything.
    let mut two = square_segments();
    two.extend([
        LineSegment::new(p(20.0, 0.0), p(30.0, 0.0)),
        LineSegment::new(p(30.0, 0.0), p(25.0, 5.0)),
        LineSegment::new(p(25.0, 5.0), p(20.0, 0.0)),
    ]);
    assert!(Polygon::from_segments(&two).is_none());
    // Two segments bouncing between the same endpoints: fewer than three vertices.
    let bounce = vec![
        LineSegment::new(p(0.0, 0.0), p(1.0, 0.0)),
        LineSegment::new(p(1.0, 0.0), p(0.0, 0.0)),
    ];
    assert!(Polygon::from_segments(&bounce).is_none());
}
