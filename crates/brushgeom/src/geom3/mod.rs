//! Convex brushes in R³ (plane and vertex representations; explicit, simple algorithms).
//!
//! Purpose
//! - Every brush in a map is a convex polyhedron. Map files persist its planes;
//!   editing tools need its vertices, faces and edges. This module converts
//!   between the two.
//!
//! Why this design (short)
//! - Track both plane and vertex lists on `Brush` (either may be empty until requested).
//! - Keep conversions explicit (brute-force enumeration over triples); brushes
//!   have a few dozen faces at most.
//! - Functions take slices, not rich objects, so importers can call them directly.
//!
//! Assumptions and conventions
//! - Half-planes are `a·x + b·y + c·z + d = 0` with the normal pointing into the
//!   solid; `distance >= -EPS` is inside.
//! - All tolerances are absolute, `EPS = 1e-3` in map units (see `cfg`).
//! - V→H keeps only supporting planes and orients each one itself, so vertex
//!   order never matters. The three-point constructor does rely on winding.
//! - Degenerate configurations (parallel planes, collinear points) are skipped,
//!   never reported; only inputs too small to bound a solid are errors, and only
//!   through the `try_*` entry points.

mod brush;
pub mod cfg;
mod convert;
pub mod faces;
pub mod special;
mod types;
mod util;

pub use brush::{Brush, BrushError};
pub use cfg::GeomCfg;
pub use convert::{
    facet_enumeration, facet_enumeration_with_cfg, intersect3, try_facet_enumeration,
    try_facet_enumeration_with_cfg, try_vertex_enumeration, try_vertex_enumeration_with_cfg,
    vertex_enumeration, vertex_enumeration_with_cfg,
};
pub use faces::{enumerate_faces, Edge, Face};
pub use types::{Classification, DegeneratePlane, EnumerationError, HalfPlane, Point};

#[cfg(test)]
mod tests_props;
#[cfg(test)]
mod tests_special;
