//! Randomized properties of the two conversions.

use nalgebra::{Rotation3, Vector3};
use proptest::prelude::*;

use super::{facet_enumeration, special, vertex_enumeration, Classification, HalfPlane, Point};
use crate::rand3::{random_brush, RandomBrushParams};

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

proptest! {
    #[test]
    fn rotated_cube_duality(
        roll in -3.1f32..3.1,
        pitch in -1.5f32..1.5,
        yaw in -3.1f32..3.1,
        size in 0.5f32..100.0,
    ) {
        let rot = Rotation3::from_euler_angles(roll, pitch, yaw);
        let planes: Vec<HalfPlane> = special::axis_box(Point::origin(), Point::new(size, size, size))
            .planes
            .iter()
            .map(|h| {
                let n = rot * h.normal();
                HalfPlane::new(n.x, n.y, n.z, h.d)
            })
            .collect();
        let vs = vertex_enumeration(&planes);
        prop_assert_eq!(vs.len(), 8);
        let hs = facet_enumeration(&vs);
        prop_assert!(same_plane_set(&hs, &planes));
    }

    #[test]
    fn prism_duality(
        sides in 3usize..12,
        radius in 0.5f32..50.0,
        height in 0.5f32..50.0,
        tx in -200.0f32..200.0,
        ty in -200.0f32..200.0,
        tz in -200.0f32..200.0,
    ) {
        let p = special::prism(sides, radius, height).translate(Vector3::new(tx, ty, tz));
        let hs = facet_enumeration(&p.vertices);
        prop_assert_eq!(hs.len(), sides + 2);
        let vs = vertex_enumeration(&hs);
        prop_assert!(same_point_set(&vs, &p.vertices));
    }

    #[test]
    fn random_brush_vertices_are_inside(cuts in 0usize..10, seed in any::<u64>()) {
        let b = random_brush(&RandomBrushParams::with_cuts(cuts), seed).unwrap();
        let vs = vertex_enumeration(&b.planes);
        prop_assert!(vs.len() >= 4);
        for v in &vs {
            prop_assert!(b.planes.iter().all(|h| h.classify(v) != Classification::Below));
        }
        prop_assert_eq!(&vs, &vertex_enumeration(&b.planes));
        for f in facet_enumeration(&vs) {
            prop_assert!(vs.iter().all(|v| f.classify(v) != Classification::Below));
            prop_assert!(vs.iter().filter(|v| f.is_point_on_plane(v)).count() >= 3);
        }
    }
}
