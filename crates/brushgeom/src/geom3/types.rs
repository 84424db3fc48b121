//! Core 3D types: points, half-planes and point classification.

use std::fmt;

use nalgebra::{Point3, Vector3};

use super::cfg::{DET_EPS, EPS};

/// Brush vertex / plane construction point (single precision, as stored in map files).
pub type Point = Point3<f32>;

/// Side of a half-plane a point falls on.
///
/// `Above` is the interior side (the normal points into the solid).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    On,
    Above,
    Below,
}

/// Bounding plane `a·x + b·y + c·z + d = 0` of a convex brush.
///
/// Invariants:
/// - `(a, b, c)` is the inward normal; it is unit length when built from points.
/// - Points with `distance_to(p) >= -EPS` are inside.
/// - No `PartialEq`: plane equality is componentwise within a tolerance
///   (`equals`, `approx_eq_eps`) and therefore not transitive.
#[derive(Clone, Copy, Debug)]
pub struct HalfPlane {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

impl HalfPlane {
    #[inline]
    pub fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self { a, b, c, d }
    }

    /// Plane with inward normal `n` passing through `p`. `n` is used as given.
    #[inline]
    pub fn from_normal_and_point(n: Vector3<f32>, p: Point) -> Self {
        Self::new(n.x, n.y, n.z, -n.dot(&p.coords))
    }

    /// Plane through three points that appear clockwise when viewed from the
    /// side the normal points to (the brush interior).
    ///
    /// Winding is the caller's responsibility. Collinear points yield NaN
    /// coefficients; use [`HalfPlane::try_from_points`] to branch on that instead.
    pub fn from_points(a: Point, b: Point, c: Point) -> Self {
        let n = (c - a).cross(&(b - a)).normalize();
        Self::from_normal_and_point(n, a)
    }

    /// Checked form of [`HalfPlane::from_points`].
    #[inline]
    pub fn try_from_points(a: Point, b: Point, c: Point) -> Result<Self, DegeneratePlane> {
        Self::try_from_points_eps(a, b, c, DET_EPS)
    }

    /// As [`HalfPlane::try_from_points`]; triples whose cross product has norm
    /// `<= eps_det` count as collinear.
    pub fn try_from_points_eps(
        a: Point,
        b: Point,
        c: Point,
        eps_det: f32,
    ) -> Result<Self, DegeneratePlane> {
        let n = (c - a).cross(&(b - a));
        let len = n.norm();
        if !len.is_finite() || len <= eps_det {
            return Err(DegeneratePlane { points: [a, b, c] });
        }
        Ok(Self::from_normal_and_point(n / len, a))
    }

    #[inline]
    pub fn normal(&self) -> Vector3<f32> {
        Vector3::new(self.a, self.b, self.c)
    }

    /// Signed distance (exact for unit normals); positive inside.
    #[inline]
    pub fn distance_to(&self, p: &Point) -> f32 {
        self.a * p.x + self.b * p.y + self.c * p.z + self.d
    }

    #[inline]
    pub fn classify(&self, p: &Point) -> Classification {
        self.classify_eps(p, EPS)
    }

    pub fn classify_eps(&self, p: &Point, eps: f32) -> Classification {
        let dist = self.distance_to(p);
        if dist.abs() <= eps {
            Classification::On
        } else if dist > eps {
            Classification::Above
        } else {
            Classification::Below
        }
    }

    #[inline]
    pub fn is_point_on_plane(&self, p: &Point) -> bool {
        self.classify(p) == Classification::On
    }

    /// Inside or on the boundary (never `Below`).
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.classify(p) != Classification::Below
    }

    #[inline]
    pub fn equals(&self, other: &HalfPlane) -> bool {
        self.approx_eq_eps(other, EPS)
    }

    pub fn approx_eq_eps(&self, other: &HalfPlane, eps: f32) -> bool {
        (self.a - other.a).abs() <= eps
            && (self.b - other.b).abs() <= eps
            && (self.c - other.c).abs() <= eps
            && (self.d - other.d).abs() <= eps
    }

    /// Same plane, opposite interior.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self::new(-self.a, -self.b, -self.c, -self.d)
    }

    /// NaN/inf coefficients or a zero normal.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.is_degenerate_eps(DET_EPS)
    }

    pub fn is_degenerate_eps(&self, eps_det: f32) -> bool {
        let finite = [self.a, self.b, self.c, self.d]
            .iter()
            .all(|x| x.is_finite());
        !finite || self.normal().norm() <= eps_det
    }

    /// Rescale to a unit normal; `None` for degenerate planes.
    pub fn normalized(&self) -> Option<Self> {
        if self.is_degenerate() {
            return None;
        }
        let len = self.normal().norm();
        Some(Self::new(
            self.a / len,
            self.b / len,
            self.c / len,
            self.d / len,
        ))
    }

    /// Shift the plane by `t` (points `p` on it map to `p + t`).
    #[inline]
    pub fn translated(&self, t: Vector3<f32>) -> Self {
        Self::new(self.a, self.b, self.c, self.d - self.normal().dot(&t))
    }
}

impl fmt::Display for HalfPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.4}, {:.4}, {:.4}, {:.4})",
            self.a, self.b, self.c, self.d
        )
    }
}

/// Three points that do not span a plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegeneratePlane {
    pub points: [Point; 3],
}

impl fmt::Display for DegeneratePlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.points;
        write!(f, "degenerate plane: points {a}, {b}, {c} are collinear")
    }
}

impl std::error::Error for DegeneratePlane {}

/// Input too small to bound a solid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnumerationError {
    TooFewHalfPlanes { got: usize },
    TooFewVertices { got: usize },
}

impl fmt::Display for EnumerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewHalfPlanes { got } => {
                write!(f, "need at least 4 half-planes to bound a solid, got {got}")
            }
            Self::TooFewVertices { got } => {
                write!(f, "need at least 4 vertices to span a solid, got {got}")
            }
        }
    }
}

impl std::error::Error for EnumerationError {}
