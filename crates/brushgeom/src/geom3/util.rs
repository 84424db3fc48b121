//! Small utilities: index triples, ε-aware vertex set and plane dedup.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::types::{HalfPlane, Point};

/// All 3-combinations `i < j < k` of `0..n` in lexicographic order.
pub(crate) fn triples(n: usize) -> impl Iterator<Item = [usize; 3]> {
    (0..n).flat_map(move |i| {
        (i + 1..n).flat_map(move |j| (j + 1..n).map(move |k| [i, j, k]))
    })
}

/// Grid keys beyond this magnitude would lose integer precision in `f32` and
/// overflow when offset to a neighbour cell.
const MAX_CELL: f32 = 1e15;

/// Point set that merges points closer than `tol`.
///
/// Grid of cell size `2·tol`; a lookup scans the 3×3×3 neighbourhood so
/// near-duplicates straddling a cell border still merge. Points the grid
/// cannot key (zero or tiny `tol`, huge coordinates) live in `unkeyed` and are
/// always compared directly. First insert wins.
#[derive(Clone, Debug)]
pub(crate) struct VertexSet {
    cells: HashMap<(i64, i64, i64), Vec<usize>>,
    unkeyed: Vec<usize>,
    points: Vec<Point>,
    cell_size: f32,
    tol: f32,
}

impl VertexSet {
    pub(crate) fn new(tol: f32) -> Self {
        let tol = if tol.is_finite() { tol.max(0.0) } else { 0.0 };
        Self {
            cells: HashMap::new(),
            unkeyed: Vec::new(),
            points: Vec::new(),
            cell_size: tol * 2.0,
            tol,
        }
    }

    #[inline]
    fn cell(&self, p: &Point) -> Option<(i64, i64, i64)> {
        if self.cell_size <= 0.0 {
            return None;
        }
        let q = |v: f32| {
            let k = (v / self.cell_size).floor();
            (k.is_finite() && k.abs() < MAX_CELL).then_some(k as i64)
        };
        Some((q(p.x)?, q(p.y)?, q(p.z)?))
    }

    #[inline]
    fn near(&self, ids: &[usize], p: &Point) -> bool {
        ids.iter().any(|&i| (self.points[i] - p).norm() <= self.tol)
    }

    pub(crate) fn contains(&self, p: &Point) -> bool {
        let Some((cx, cy, cz)) = self.cell(p) else {
            return self.points.iter().any(|q| (q - p).norm() <= self.tol);
        };
        if self.near(&self.unkeyed, p) {
            return true;
        }
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    if let Some(ids) = self.cells.get(&(cx + dx, cy + dy, cz + dz)) {
                        if self.near(ids, p) {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    /// Returns `true` if `p` was new.
    pub(crate) fn insert(&mut self, p: Point) -> bool {
        if self.contains(&p) {
            return false;
        }
        let id = self.points.len();
        match self.cell(&p) {
            Some(key) => self.cells.entry(key).or_default().push(id),
            None => self.unkeyed.push(id),
        }
        self.points.push(p);
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }

    /// Points in insertion order.
    pub(crate) fn into_vec(self) -> Vec<Point> {
        self.points
    }

    /// Points sorted lexicographically so repeated runs agree.
    pub(crate) fn into_sorted_vec(self) -> Vec<Point> {
        let mut out = self.points;
        out.sort_by(cmp_points);
        out
    }
}

pub(crate) fn cmp_points(a: &Point, b: &Point) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
        .then_with(|| a.z.partial_cmp(&b.z).unwrap_or(Ordering::Equal))
}

/// Push `hp` unless an ε-equal plane is already present. Returns `true` if pushed.
pub(crate) fn push_unique_plane(planes: &mut Vec<HalfPlane>, hp: HalfPlane, eps: f32) -> bool {
    if planes.iter().any(|q| q.approx_eq_eps(&hp, eps)) {
        return false;
    }
    planes.push(hp);
    true
}
