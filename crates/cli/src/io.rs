//! Brush file I/O: JSON plane/point lists and CSV point clouds.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use brushgeom::geom3::{Face, HalfPlane, Point};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// One persisted brush plane, `a·x + b·y + c·z + d = 0`, normal pointing inside.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlaneRow {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

impl From<&HalfPlane> for PlaneRow {
    fn from(h: &HalfPlane) -> Self {
        Self {
            a: h.a,
            b: h.b,
            c: h.c,
            d: h.d,
        }
    }
}

impl From<PlaneRow> for HalfPlane {
    fn from(r: PlaneRow) -> Self {
        HalfPlane::new(r.a, r.b, r.c, r.d)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct PointRow {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<&Point> for PointRow {
    fn from(p: &Point) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

impl From<PointRow> for Point {
    fn from(r: PointRow) -> Self {
        Point::new(r.x, r.y, r.z)
    }
}

/// Wound polygon for drawing tools.
#[derive(Clone, Debug, Serialize)]
pub struct FaceRow {
    pub plane_index: usize,
    pub plane: PlaneRow,
    pub vertices: Vec<PointRow>,
}

impl From<&Face> for FaceRow {
    fn from(f: &Face) -> Self {
        Self {
            plane_index: f.plane_index,
            plane: PlaneRow::from(&f.plane),
            vertices: f.vertices.iter().map(PointRow::from).collect(),
        }
    }
}

pub fn read_planes(path: &Path) -> Result<Vec<HalfPlane>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let rows: Vec<PlaneRow> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing plane list {}", path.display()))?;
    Ok(rows.into_iter().map(HalfPlane::from).collect())
}

/// Points from `.json` (list of `{x,y,z}`) or `.csv` (columns `x`, `y`, `z`).
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_points_csv(path),
        Some("json") => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let rows: Vec<PointRow> = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing point list {}", path.display()))?;
            Ok(rows.into_iter().map(Point::from).collect())
        }
        other => bail!("unsupported point file extension {other:?} (expected .json or .csv)"),
    }
}

fn read_points_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float32),
            col("y").cast(DataType::Float32),
            col("z").cast(DataType::Float32),
        ])
        .collect()
        .with_context(|| format!("reading x,y,z columns of {}", path.display()))?;
    let xs = df.column("x")?.f32()?;
    let ys = df.column("y")?.f32()?;
    let zs = df.column("z")?.f32()?;
    let mut out = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        match (xs.get(i), ys.get(i), zs.get(i)) {
            (Some(x), Some(y), Some(z)) => out.push(Point::new(x, y, z)),
            _ => bail!("{}: row {i} has a missing coordinate", path.display()),
        }
    }
    Ok(out)
}

/// Pretty JSON, creating parent directories as needed.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
