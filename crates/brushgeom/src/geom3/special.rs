//! Primitive brushes produced by the editor's creation tools.
//!
//! Purpose
//! - `axis_box` is what a bounding-box drag produces; it is stored as planes.
//! - The rest are built from vertices so creation goes through facet
//!   enumeration exactly as hand-placed points would.
//! - Constructors stay small and explicit so tests can rely on their counts:
//!   box 6/8, tetrahedron 4/4, wedge 5/6, n-prism (n+2)/(2n) planes/vertices.

use std::f32::consts::TAU;

use super::brush::Brush;
use super::types::{HalfPlane, Point};

/// Axis-aligned box `[min, max]`, planes ordered x≥, x≤, y≥, y≤, z≥, z≤.
///
/// Corners are swapped per axis if given in the wrong order (drags can go either way).
pub fn axis_box(min: Point, max: Point) -> Brush {
    let lo = min.inf(&max);
    let hi = min.sup(&max);
    Brush::from_planes(vec![
        HalfPlane::new(1.0, 0.0, 0.0, -lo.x),
        HalfPlane::new(-1.0, 0.0, 0.0, hi.x),
        HalfPlane::new(0.0, 1.0, 0.0, -lo.y),
        HalfPlane::new(0.0, -1.0, 0.0, hi.y),
        HalfPlane::new(0.0, 0.0, 1.0, -lo.z),
        HalfPlane::new(0.0, 0.0, -1.0, hi.z),
    ])
}

/// `[0, 1]³`.
pub fn unit_cube() -> Brush {
    axis_box(Point::origin(), Point::new(1.0, 1.0, 1.0))
}

/// Regular tetrahedron with the given edge length, centred on the origin.
pub fn regular_tetrahedron(edge: f32) -> Brush {
    // Alternate cube corners (±1,±1,±1) have edge 2√2.
    let s = edge / (2.0 * std::f32::consts::SQRT_2);
    Brush::from_vertices(vec![
        Point::new(s, s, s),
        Point::new(s, -s, -s),
        Point::new(-s, s, -s),
        Point::new(-s, -s, s),
    ])
}

/// Ramp inside `[min, max]`: full height at `min.x`, zero height at `max.x`.
pub fn wedge(min: Point, max: Point) -> Brush {
    let lo = min.inf(&max);
    let hi = min.sup(&max);
    Brush::from_vertices(vec![
        Point::new(lo.x, lo.y, lo.z),
        Point::new(hi.x, lo.y, lo.z),
        Point::new(lo.x, hi.y, lo.z),
        Point::new(hi.x, hi.y, lo.z),
        Point::new(lo.x, lo.y, hi.z),
        Point::new(lo.x, hi.y, hi.z),
    ])
}

/// Regular `sides`-gon prism around the z axis, base at z = 0.
///
/// `sides < 3` yields an empty brush.
pub fn prism(sides: usize, radius: f32, height: f32) -> Brush {
    if sides < 3 {
        return Brush::default();
    }
    let mut vs = Vec::with_capacity(2 * sides);
    for k in 0..sides {
        let t = TAU * k as f32 / sides as f32;
        let (x, y) = (radius * t.cos(), radius * t.sin());
        vs.push(Point::new(x, y, 0.0));
        vs.push(Point::new(x, y, height));
    }
    Brush::from_vertices(vs)
}
