//! H↔V conversions: vertex enumeration and facet enumeration.
//!
//! Both are brute force over 3-combinations (O(n⁴) with the containment
//! check). Brushes rarely exceed a few dozen faces, so this stays cheap and
//! easy to audit.

use nalgebra::{Matrix3, Vector3};

use super::cfg::GeomCfg;
use super::types::{Classification, EnumerationError, HalfPlane, Point};
use super::util::{push_unique_plane, triples, VertexSet};

/// H→V with default tolerances. Fewer than 4 planes yield an empty set.
pub fn vertex_enumeration(planes: &[HalfPlane]) -> Vec<Point> {
    vertex_enumeration_with_cfg(planes, &GeomCfg::default())
}

pub fn vertex_enumeration_with_cfg(planes: &[HalfPlane], cfg: &GeomCfg) -> Vec<Point> {
    try_vertex_enumeration_with_cfg(planes, cfg).unwrap_or_default()
}

/// H→V, rejecting inputs that cannot bound a solid.
pub fn try_vertex_enumeration(planes: &[HalfPlane]) -> Result<Vec<Point>, EnumerationError> {
    try_vertex_enumeration_with_cfg(planes, &GeomCfg::default())
}

/// H→V: intersect every plane triple and keep points inside all planes.
///
/// Singular triples (parallel or coaxial planes) are skipped; degenerate
/// planes neither produce nor reject vertices. The result is deduplicated
/// within `cfg.eps` and sorted.
pub fn try_vertex_enumeration_with_cfg(
    planes: &[HalfPlane],
    cfg: &GeomCfg,
) -> Result<Vec<Point>, EnumerationError> {
    if planes.len() < 4 {
        return Err(EnumerationError::TooFewHalfPlanes { got: planes.len() });
    }
    let mut out = VertexSet::new(cfg.eps);
    let mut singular = 0usize;
    let mut outside = 0usize;
    for [i, j, k] in triples(planes.len()) {
        let Some(x) = intersect3(&planes[i], &planes[j], &planes[k], cfg.eps_det) else {
            singular += 1;
            continue;
        };
        if planes
            .iter()
            .all(|h| {
                h.is_degenerate_eps(cfg.eps_det)
                    || h.classify_eps(&x, cfg.eps) != Classification::Below
            })
        {
            out.insert(x);
        } else {
            outside += 1;
        }
    }
    tracing::debug!(
        planes = planes.len(),
        singular,
        outside,
        vertices = out.len(),
        "vertex_enumeration"
    );
    Ok(out.into_sorted_vec())
}

/// Unique common point of three planes, if the system is well conditioned.
pub fn intersect3(p1: &HalfPlane, p2: &HalfPlane, p3: &HalfPlane, eps_det: f32) -> Option<Point> {
    if [p1, p2, p3].iter().any(|p| p.is_degenerate_eps(eps_det)) {
        return None;
    }
    let m = Matrix3::new(
        p1.a, p1.b, p1.c, //
        p2.a, p2.b, p2.c, //
        p3.a, p3.b, p3.c,
    );
    if m.determinant().abs() <= eps_det {
        return None;
    }
    let inv = m.try_inverse()?;
    let x = inv * Vector3::new(-p1.d, -p2.d, -p3.d);
    if !x.iter().all(|v| v.is_finite()) {
        return None;
    }
    Some(Point::from(x))
}

/// V→H with default tolerances. Fewer than 4 vertices yield an empty set.
pub fn facet_enumeration(vertices: &[Point]) -> Vec<HalfPlane> {
    facet_enumeration_with_cfg(vertices, &GeomCfg::default())
}

pub fn facet_enumeration_with_cfg(vertices: &[Point], cfg: &GeomCfg) -> Vec<HalfPlane> {
    try_facet_enumeration_with_cfg(vertices, cfg).unwrap_or_default()
}

/// V→H, rejecting inputs that cannot span a solid.
pub fn try_facet_enumeration(vertices: &[Point]) -> Result<Vec<HalfPlane>, EnumerationError> {
    try_facet_enumeration_with_cfg(vertices, &GeomCfg::default())
}

/// V→H: supporting planes through vertex triples.
///
/// Input points closer than `cfg.eps` are merged first; a near-duplicate
/// corner would otherwise span sliver planes that bevel the hull edges.
/// Triples carry no winding, so each candidate is oriented to put the
/// remaining vertices on its `Above` side. Planes with vertices on both sides
/// cut through the solid and are dropped; so are planes every vertex lies on
/// (flat input has no interior). Output keeps first-discovery order.
pub fn try_facet_enumeration_with_cfg(
    vertices: &[Point],
    cfg: &GeomCfg,
) -> Result<Vec<HalfPlane>, EnumerationError> {
    if vertices.len() < 4 {
        return Err(EnumerationError::TooFewVertices {
            got: vertices.len(),
        });
    }
    let mut merged = VertexSet::new(cfg.eps);
    for v in vertices {
        merged.insert(*v);
    }
    let points = merged.into_vec();
    let mut out: Vec<HalfPlane> = Vec::new();
    let mut collinear = 0usize;
    let mut cutting = 0usize;
    for [i, j, k] in triples(points.len()) {
        let Ok(candidate) =
            HalfPlane::try_from_points_eps(points[i], points[j], points[k], cfg.eps_det)
        else {
            collinear += 1;
            continue;
        };
        let Some(hp) = orient_supporting(candidate, &points, cfg.eps) else {
            cutting += 1;
            continue;
        };
        push_unique_plane(&mut out, hp, cfg.eps);
    }
    tracing::debug!(
        vertices = vertices.len(),
        distinct = points.len(),
        collinear,
        cutting,
        facets = out.len(),
        "facet_enumeration"
    );
    Ok(out)
}

/// Orient `hp` so all `vertices` are On/Above; `None` if it is not supporting.
fn orient_supporting(hp: HalfPlane, vertices: &[Point], eps: f32) -> Option<HalfPlane> {
    let mut above = false;
    let mut below = false;
    for v in vertices {
        match hp.classify_eps(v, eps) {
            Classification::Above => above = true,
            Classification::Below => below = true,
            Classification::On => {}
        }
        if above && below {
            return None;
        }
    }
    match (above, below) {
        (true, false) => Some(hp),
        (false, true) => Some(hp.flipped()),
        _ => None,
    }
}
