//! Convex brush holding lazily derived plane/vertex caches.

use std::fmt;

use nalgebra::Vector3;

use super::cfg::GeomCfg;
use super::convert::{
    facet_enumeration, facet_enumeration_with_cfg, vertex_enumeration,
    vertex_enumeration_with_cfg,
};
use super::faces::{enumerate_faces, Edge, Face};
use super::types::{HalfPlane, Point};

/// Why a plane set does not describe a usable brush.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrushError {
    /// No enclosed volume (too few planes/vertices, empty intersection, or flat).
    Empty { vertices: usize },
    /// The planes leave the region open; the vertex hull needs caps not in the plane list.
    Unbounded { missing_caps: usize },
}

impl fmt::Display for BrushError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { vertices } => {
                write!(f, "brush encloses no volume ({vertices} vertices)")
            }
            Self::Unbounded { missing_caps } => {
                write!(f, "brush is unbounded ({missing_caps} hull planes missing)")
            }
        }
    }
}

impl std::error::Error for BrushError {}

/// Convex brush; either representation may be empty and is computed on demand.
///
/// Invariants:
/// - `planes` and `vertices` are caches of the same solid; one or both may be empty.
/// - Map files persist `planes`; `vertices` is recomputed for drawing/selection
///   and never written back into the plane list.
#[derive(Clone, Debug, Default)]
pub struct Brush {
    pub planes: Vec<HalfPlane>,
    pub vertices: Vec<Point>,
}

impl Brush {
    #[inline]
    pub fn from_planes(planes: Vec<HalfPlane>) -> Self {
        Self {
            planes,
            vertices: Vec::new(),
        }
    }

    #[inline]
    pub fn from_vertices(vertices: Vec<Point>) -> Self {
        Self {
            planes: Vec::new(),
            vertices,
        }
    }

    /// Clip by one more half-plane.
    #[inline]
    pub fn add_plane(&mut self, hp: HalfPlane) {
        self.ensure_planes();
        self.planes.push(hp);
        // Stale; recomputed on next request.
        self.vertices.clear();
    }

    /// H→V if vertices are not cached yet.
    pub fn ensure_vertices(&mut self) {
        if !self.vertices.is_empty() {
            return;
        }
        self.vertices = vertex_enumeration(&self.planes);
    }

    /// V→H if planes are not cached yet.
    pub fn ensure_planes(&mut self) {
        if !self.planes.is_empty() {
            return;
        }
        self.planes = facet_enumeration(&self.vertices);
    }

    /// Every cached vertex lies inside every cached plane.
    pub fn is_convex(&mut self) -> bool {
        if self.planes.is_empty() && self.vertices.is_empty() {
            return false;
        }
        self.ensure_vertices();
        self.ensure_planes();
        self.vertices
            .iter()
            .all(|v| self.planes.iter().all(|h| h.contains(v)))
    }

    /// Point inside or on the boundary. `None` when the brush has no geometry.
    pub fn contains_point(&mut self, p: &Point) -> Option<bool> {
        if self.planes.is_empty() && self.vertices.is_empty() {
            return None;
        }
        self.ensure_planes();
        if self.planes.is_empty() {
            return None;
        }
        Some(self.planes.iter().all(|h| h.contains(p)))
    }

    /// Check that the planes enclose a bounded, non-flat volume.
    ///
    /// Bounded iff every facet of the vertex hull is one of the brush planes;
    /// an open region is capped by hull facets the plane list lacks.
    #[inline]
    pub fn check_solid(&mut self) -> Result<(), BrushError> {
        self.check_solid_with_cfg(&GeomCfg::default())
    }

    /// [`Brush::check_solid`] with caller tolerances for every derived cache
    /// and for the hull/plane comparison.
    pub fn check_solid_with_cfg(&mut self, cfg: &GeomCfg) -> Result<(), BrushError> {
        if self.vertices.is_empty() {
            self.vertices = vertex_enumeration_with_cfg(&self.planes, cfg);
        }
        if self.planes.is_empty() {
            self.planes = facet_enumeration_with_cfg(&self.vertices, cfg);
        }
        let hull = facet_enumeration_with_cfg(&self.vertices, cfg);
        if hull.is_empty() {
            return Err(BrushError::Empty {
                vertices: self.vertices.len(),
            });
        }
        let own: Vec<HalfPlane> = self.planes.iter().filter_map(|h| h.normalized()).collect();
        let missing_caps = hull
            .iter()
            .filter(|f| !own.iter().any(|h| h.approx_eq_eps(f, cfg.eps)))
            .count();
        if missing_caps > 0 {
            return Err(BrushError::Unbounded { missing_caps });
        }
        Ok(())
    }

    /// Translate both caches by `t`.
    pub fn translate(&self, t: Vector3<f32>) -> Self {
        Self {
            planes: self.planes.iter().map(|h| h.translated(t)).collect(),
            vertices: self.vertices.iter().map(|v| v + t).collect(),
        }
    }

    /// Mean of the vertices (inside for convex brushes).
    pub fn centroid(&mut self) -> Option<Point> {
        self.ensure_vertices();
        if self.vertices.is_empty() {
            return None;
        }
        let sum = self
            .vertices
            .iter()
            .fold(Vector3::zeros(), |acc, v| acc + v.coords);
        Some(Point::from(sum / self.vertices.len() as f32))
    }

    /// Axis-aligned `(min, max)` corners.
    pub fn bounding_box(&mut self) -> Option<(Point, Point)> {
        self.ensure_vertices();
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().fold((first, first), |(lo, hi), v| {
            (lo.inf(v), hi.sup(v))
        }))
    }

    /// Faces (wound polygons) and edges for drawing and selection.
    pub fn faces(&mut self) -> (Vec<Face>, Vec<Edge>) {
        self.ensure_planes();
        let (_verts, faces, edges) = enumerate_faces(&self.planes);
        (faces, edges)
    }
}
