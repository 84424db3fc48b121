//! Reproducible random convex brushes for tests and benchmarks.
//!
//! Purpose
//! - Seeded streams of brushes with a controllable face count, so benchmarks
//!   scale and failing property tests can be replayed from the seed alone.
//!
//! Construction
//! - Start from the cube `[-h, h]³` (guarantees boundedness).
//! - Add `cuts` planes `n·x <= c` with `n` uniform on the sphere and
//!   `c ∈ [min_offset, max_offset]`; `min_offset > 0` keeps the origin inside,
//!   so the result always has volume.

use std::fmt;

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom3::{Brush, HalfPlane};

#[derive(Debug)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomBrushParams {
    pub cuts: usize,
    pub half_extent: f32,
    pub min_offset: f32,
    pub max_offset: f32,
}

impl Default for RandomBrushParams {
    fn default() -> Self {
        Self {
            cuts: 6,
            half_extent: 1.0,
            min_offset: 0.6,
            max_offset: 1.8,
        }
    }
}

impl RandomBrushParams {
    pub fn with_cuts(cuts: usize) -> Self {
        Self {
            cuts,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), GeneratorError> {
        if !(self.half_extent.is_finite() && self.half_extent > 0.0) {
            return Err(GeneratorError::invalid("half_extent must be positive"));
        }
        if !(self.min_offset > 0.0 && self.min_offset <= self.max_offset) {
            return Err(GeneratorError::invalid(
                "offsets must satisfy 0 < min_offset <= max_offset",
            ));
        }
        if !self.max_offset.is_finite() {
            return Err(GeneratorError::invalid("max_offset must be finite"));
        }
        Ok(())
    }
}

/// Plane-only brush; vertices are left for the caller to enumerate.
pub fn random_brush(params: &RandomBrushParams, seed: u64) -> Result<Brush, GeneratorError> {
    params.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let h = params.half_extent;
    let mut planes = Vec::with_capacity(6 + params.cuts);
    for axis in 0..3 {
        let mut n = Vector3::<f32>::zeros();
        n[axis] = 1.0;
        planes.push(HalfPlane::new(n.x, n.y, n.z, h));
        planes.push(HalfPlane::new(-n.x, -n.y, -n.z, h));
    }
    for _ in 0..params.cuts {
        let n = sample_unit_vector(&mut rng);
        let c = if params.min_offset < params.max_offset {
            rng.gen_range(params.min_offset..params.max_offset)
        } else {
            params.min_offset
        };
        // n·x <= c  ⇔  -n·x + c >= 0
        planes.push(HalfPlane::new(-n.x, -n.y, -n.z, c));
    }
    Ok(Brush::from_planes(planes))
}

/// Uniform direction by rejection from the unit ball.
pub fn sample_unit_vector<R: Rng>(rng: &mut R) -> Vector3<f32> {
    loop {
        let v = Vector3::new(
            rng.gen_range(-1.0f32..1.0),
            rng.gen_range(-1.0f32..1.0),
            rng.gen_range(-1.0f32..1.0),
        );
        let n = v.norm();
        if n > 1e-3 && n <= 1.0 {
            return v / n;
        }
    }
}
