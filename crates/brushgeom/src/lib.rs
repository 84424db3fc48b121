//! Convex brush geometry for the level editor.
//!
//! Brushes are convex polyhedra. Map files store them as plane lists; the
//! editor needs vertices, faces and edges to draw and pick them. This crate
//! converts between the two representations:
//! - `geom3::vertex_enumeration`: planes → vertices.
//! - `geom3::facet_enumeration`: vertices → planes.
//!
//! API Policy
//! - Consumed by the editor and the map converters in this repository only.
//!   There is no stable public API; prefer clearer types over compatibility.

pub mod api;
pub mod geom3;
pub mod rand3;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom3::{Brush, GeomCfg, HalfPlane, Point};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom3::{
        enumerate_faces, facet_enumeration, special, vertex_enumeration, Brush, Classification,
        Edge, Face, GeomCfg, HalfPlane, Point,
    };
    pub use crate::rand3::{random_brush, RandomBrushParams};
    pub use nalgebra::Vector3;
}
