//! Faces and edges of a brush, derived from its planes via vertex saturation.

use std::cmp::Ordering;

use nalgebra::Vector3;

use super::cfg::EPS;
use super::convert::vertex_enumeration;
use super::types::{HalfPlane, Point};

/// Polygon on one brush plane.
///
/// `vertices` appear clockwise when viewed from inside the brush, the same
/// winding `HalfPlane::from_points` expects.
#[derive(Clone, Debug)]
pub struct Face {
    pub plane_index: usize,
    pub plane: HalfPlane,
    pub vertices: Vec<Point>,
}

/// Edge shared by two faces (indices into the brush plane list).
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub planes: (usize, usize),
    pub vertices: [Point; 2],
}

/// Enumerate vertices, wound faces and edges from a plane list.
///
/// Algorithm
/// - H→V.
/// - For each plane, collect the vertices lying on it; fewer than 3 means the
///   plane is redundant and yields no face. ε-equal planes keep only the first.
/// - For each pair of planes sharing at least two vertices, the two farthest
///   shared vertices form the edge.
pub fn enumerate_faces(planes: &[HalfPlane]) -> (Vec<Point>, Vec<Face>, Vec<Edge>) {
    let verts = vertex_enumeration(planes);
    let unit: Vec<Option<HalfPlane>> = planes.iter().map(|h| h.normalized()).collect();

    // on[i] = vertex ids lying on plane i
    let on: Vec<Vec<usize>> = unit
        .iter()
        .map(|h| match h {
            Some(h) => (0..verts.len())
                .filter(|&vi| h.is_point_on_plane(&verts[vi]))
                .collect(),
            None => Vec::new(),
        })
        .collect();

    let mut faces: Vec<Face> = Vec::new();
    for (i, ids) in on.iter().enumerate() {
        let Some(plane) = unit[i] else { continue };
        if ids.len() < 3 || faces.iter().any(|f| f.plane.equals(&plane)) {
            continue;
        }
        let pts: Vec<Point> = ids.iter().map(|&vi| verts[vi]).collect();
        faces.push(Face {
            plane_index: i,
            vertices: wind_clockwise(&pts, plane.normal()),
            plane,
        });
    }

    let mut edges = Vec::new();
    for (fi, f) in faces.iter().enumerate() {
        for g in &faces[fi + 1..] {
            let shared: Vec<Point> = on[f.plane_index]
                .iter()
                .filter(|&&vi| on[g.plane_index].contains(&vi))
                .map(|&vi| verts[vi])
                .collect();
            if let Some(pair) = farthest_pair(&shared) {
                edges.push(Edge {
                    planes: (f.plane_index, g.plane_index),
                    vertices: pair,
                });
            }
        }
    }
    tracing::trace!(
        vertices = verts.len(),
        faces = faces.len(),
        edges = edges.len(),
        "enumerate_faces"
    );
    (verts, faces, edges)
}

/// Sort coplanar points clockwise as seen from the side `normal` points to.
pub fn wind_clockwise(points: &[Point], normal: Vector3<f32>) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let center = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords)
        / points.len() as f32;
    // In-plane basis; `v = n × u` turns counterclockwise seen from the normal side.
    let Some(u) = points
        .iter()
        .map(|p| p.coords - center)
        .find(|d| d.norm() > EPS)
        .map(|d| d.normalize())
    else {
        return points.to_vec();
    };
    let v = normal.cross(&u);
    let angle = |p: &Point| {
        let d = p.coords - center;
        d.dot(&v).atan2(d.dot(&u))
    };
    let mut out = points.to_vec();
    out.sort_by(|a, b| angle(b).partial_cmp(&angle(a)).unwrap_or(Ordering::Equal));
    out
}

fn farthest_pair(points: &[Point]) -> Option<[Point; 2]> {
    let mut best: Option<([Point; 2], f32)> = None;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let d = (a - b).norm();
            if best.map_or(true, |(_, bd)| d > bd) {
                best = Some(([*a, *b], d));
            }
        }
    }
    best.map(|(pair, _)| pair)
}
