//! Curated surface for the editor and map converters (UNSTABLE).
//!
//! Important
//! - Collaborators (brush tools, map import/export) should import from here
//!   rather than reaching into `geom3` submodules.

// Primitive
pub use crate::geom3::{Classification, DegeneratePlane, HalfPlane, Point};
// Conversions
pub use crate::geom3::{
    facet_enumeration, try_facet_enumeration, try_vertex_enumeration, vertex_enumeration,
    EnumerationError, GeomCfg,
};
// Brushes
pub use crate::geom3::{enumerate_faces, special, Brush, BrushError, Edge, Face};

/// Planes persisted for a brush built from tool-supplied points.
///
/// Pre: `points` come from a creation tool (box drag, clipping, hand placement).
/// Post: the supporting planes of their hull, or `BrushError::Empty` if the
/// points are too few or flat.
pub fn planes_for_points(points: &[Point]) -> Result<Vec<HalfPlane>, BrushError> {
    let planes = facet_enumeration(points);
    if planes.is_empty() {
        return Err(BrushError::Empty {
            vertices: points.len(),
        });
    }
    Ok(planes)
}

/// Vertices to draw/select for a brush loaded from a map file.
///
/// The plane list is only read, never rewritten.
pub fn vertices_for_planes(planes: &[HalfPlane]) -> Vec<Point> {
    vertex_enumeration(planes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn box_drag_points_give_six_planes() {
        let mut rng = StdRng::seed_from_u64(42);
        let lo = Point::new(rng.gen_range(-64.0..0.0), rng.gen_range(-64.0..0.0), 0.0);
        let hi = Point::new(rng.gen_range(1.0..64.0), rng.gen_range(1.0..64.0), 16.0);
        let mut corners = Vec::new();
        for x in [lo.x, hi.x] {
            for y in [lo.y, hi.y] {
                for z in [lo.z, hi.z] {
                    corners.push(Point::new(x, y, z));
                }
            }
        }
        let planes = planes_for_points(&corners).unwrap();
        assert_eq!(planes.len(), 6);
        let back = vertices_for_planes(&planes);
        assert_eq!(back.len(), 8);
    }

    #[test]
    fn mid_drag_coincident_points_are_empty_not_fatal() {
        let p = Point::new(3.0, 3.0, 3.0);
        assert_eq!(
            planes_for_points(&[p, p, p, p, p]).unwrap_err(),
            BrushError::Empty { vertices: 5 }
        );
        assert!(vertices_for_planes(&[]).is_empty());
    }
}
