//! Smoke tests for the primitive brush constructors and both conversions.
//!
//! Counts are exact here: every primitive is in general position apart from
//! its intended symmetries.

use nalgebra::Vector3;

use super::{facet_enumeration, special, vertex_enumeration, Brush, HalfPlane, Point};

fn same_point_set(a: &[Point], b: &[Point]) -> bool {
    a.len() == b.len()
        && a.iter().all(|p| b.iter().any(|q| (p - q).norm() < 1e-3))
        && b.iter().all(|p| a.iter().any(|q| (p - q).norm() < 1e-3))
}

fn same_plane_set(a: &[HalfPlane], b: &[HalfPlane]) -> bool {
    a.len() == b.len()
        && a.iter().all(|p| b.iter().any(|q| p.equals(q)))
        && b.iter().all(|p| a.iter().any(|q| p.equals(q)))
}

#[test]
fn unit_cube_round_trip() {
    let mut c = special::unit_cube();
    assert!(c.check_solid().is_ok());
    assert_eq!(c.vertices.len(), 8);
    let again = facet_enumeration(&c.vertices);
    assert_eq!(again.len(), 6);
    assert!(same_plane_set(&again, &c.planes));
}

#[test]
fn regular_tetrahedron_round_trip() {
    let mut t = special::regular_tetrahedron(3.0);
    let original = t.vertices.clone();
    t.ensure_planes();
    assert_eq!(t.planes.len(), 4);
    let back = vertex_enumeration(&t.planes);
    assert_eq!(back.len(), 4);
    assert!(same_point_set(&back, &original));
    // Centre is strictly inside every facet.
    assert!(t.planes.iter().all(|h| h.distance_to(&Point::origin()) > 0.1));
}

#[test]
fn wedge_counts() {
    let mut w = special::wedge(Point::new(0.0, 0.0, 0.0), Point::new(4.0, 2.0, 1.0));
    w.ensure_planes();
    assert_eq!(w.planes.len(), 5);
    assert!(w.is_convex());
    assert_eq!(w.contains_point(&Point::new(3.9, 1.0, 0.9)), Some(false));
    assert_eq!(w.contains_point(&Point::new(0.1, 1.0, 0.9)), Some(true));
}

#[test]
fn prism_counts() {
    for sides in 3..=10 {
        let mut p = special::prism(sides, 5.0, 2.0);
        p.ensure_planes();
        assert_eq!(p.planes.len(), sides + 2, "sides={sides}");
        let back = vertex_enumeration(&p.planes);
        assert!(same_point_set(&back, &p.vertices), "sides={sides}");
    }
    assert!(special::prism(2, 1.0, 1.0).planes.is_empty());
}

#[test]
fn reversed_drag_builds_same_box() {
    let mut a = special::axis_box(Point::new(0.0, 0.0, 0.0), Point::new(2.0, 3.0, 4.0));
    let mut b = special::axis_box(Point::new(2.0, 0.0, 4.0), Point::new(0.0, 3.0, 0.0));
    a.ensure_vertices();
    b.ensure_vertices();
    assert!(same_point_set(&a.vertices, &b.vertices));
}

#[test]
fn translated_brush_round_trips() {
    let mut b = special::prism(7, 64.0, 128.0).translate(Vector3::new(512.0, -256.0, 32.0));
    b.ensure_planes();
    let mut from_h = Brush::from_planes(b.planes.clone());
    from_h.ensure_vertices();
    assert!(same_point_set(&from_h.vertices, &b.vertices));
}
