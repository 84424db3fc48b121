//! Tolerance defaults for brush geometry.
//!
//! Policy
//! - Defaults are fixed constants so call sites never juggle tolerances.
//! - `GeomCfg` exists for the rare caller (importers of coarse map formats)
//!   that needs a looser or tighter ε; it is passed explicitly, never global.

/// Classification/equality epsilon used by `HalfPlane` and vertex dedup.
pub const EPS: f32 = 1e-3;
/// Smallest |det| of a 3×3 plane system treated as a unique intersection;
/// also the smallest cross-product norm of a non-collinear point triple.
pub const DET_EPS: f32 = 1e-6;
/// Smallest ε the CLI accepts. Below this, f32 map coordinates cannot resolve
/// the band and dedup degenerates to exact comparison.
pub const MIN_EPS: f32 = 1e-6;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps: f32,
    pub eps_det: f32,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps: EPS,
            eps_det: DET_EPS,
        }
    }
}
