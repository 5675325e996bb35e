//! JSON shapes for kernel results. Points serialize as `[x, y]`.

use planar::api::{Circle, Diagram, Point, PointReport, Triangle, VoronoiEdge, VoronoiEdgeKind};
use serde::Serialize;

type Xy = [f64; 2];

#[inline]
fn xy(p: Point) -> Xy {
    [p.x, p.y]
}

fn tri(t: &Triangle) -> [Xy; 3] {
    [xy(t.a), xy(t.b), xy(t.c)]
}

#[derive(Debug, Serialize)]
pub struct CircleOut {
    pub center: Xy,
    pub radius: f64,
}

impl From<Circle> for CircleOut {
    fn from(c: Circle) -> Self {
        Self {
            center: xy(c.center),
            radius: c.radius,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VoronoiEdgeOut {
    Segment {
        start: Xy,
        end: Xy,
        left_site: Xy,
        right_site: Option<Xy>,
    },
    Ray {
        origin: Xy,
        direction: Xy,
        left_site: Xy,
        right_site: Option<Xy>,
    },
}

impl From<&VoronoiEdge> for VoronoiEdgeOut {
    fn from(e: &VoronoiEdge) -> Self {
        let left_site = xy(e.left_site);
        let right_site = e.right_site.map(xy);
        match e.kind {
            VoronoiEdgeKind::Segment(s) => Self::Segment {
                start: xy(s.start),
                end: xy(s.end),
                left_site,
                right_site,
            },
            VoronoiEdgeKind::Ray(r) => Self::Ray {
                origin: xy(r.origin),
                direction: [r.direction.x, r.direction.y],
                left_site,
                right_site,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CellOut {
    pub site: Xy,
    /// `null` for unbounded or unreconstructable cells.
    pub polygon: Option<Vec<Xy>>,
}

#[derive(Debug, Serialize)]
pub struct DiagramOut {
    pub points: Vec<Xy>,
    pub hull: Vec<Xy>,
    pub triangles: Vec<[Xy; 3]>,
    pub voronoi_edges: Vec<VoronoiEdgeOut>,
    pub cells: Vec<CellOut>,
    pub enclosing_circle: Option<CircleOut>,
    pub farthest_pair: Option<[Xy; 2]>,
    pub diameter: Option<f64>,
}

impl From<&Diagram> for DiagramOut {
    fn from(d: &Diagram) -> Self {
        Self {
            points: d.points.iter().copied().map(xy).collect(),
            hull: d.hull.iter().copied().map(xy).collect(),
            triangles: d.triangles.iter().map(tri).collect(),
            voronoi_edges: d.voronoi_edges.iter().map(VoronoiEdgeOut::from).collect(),
            cells: d
                .cells
                .iter()
                .map(|(site, poly)| CellOut {
                    site: xy(*site),
                    polygon: poly
                        .as_ref()
                        .map(|p| p.vertices.iter().copied().map(xy).collect()),
                })
                .collect(),
            enclosing_circle: d.enclosing_circle.map(CircleOut::from),
            farthest_pair: d.farthest_pair.map(|(a, b)| [xy(a), xy(b)]),
            diameter: d.farthest_pair.map(|(a, b)| a.distance(b)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PointReportOut {
    pub index: usize,
    pub point: Xy,
    pub on_hull: bool,
    pub triangles_with_vertex: Vec<[Xy; 3]>,
    pub triangles_containing: Vec<[Xy; 3]>,
    pub voronoi_edges: Vec<VoronoiEdgeOut>,
    pub cell: Option<Vec<Xy>>,
}

impl PointReportOut {
    pub fn new(index: usize, r: &PointReport) -> Self {
        Self {
            index,
            point: xy(r.point),
            on_hull: r.on_hull,
            triangles_with_vertex: r.triangles_with_vertex.iter().map(tri).collect(),
            triangles_containing: r.triangles_containing.iter().map(tri).collect(),
            voronoi_edges: r.voronoi_edges.iter().map(VoronoiEdgeOut::from).collect(),
            cell: r
                .cell
                .as_ref()
                .map(|p| p.vertices.iter().copied().map(xy).collect()),
        }
    }
}
