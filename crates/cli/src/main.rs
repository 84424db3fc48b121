mod io;
mod provenance;

use anyhow::{bail, Result};
use brushgeom::geom3::cfg::{EPS, MIN_EPS};
use brushgeom::geom3::{
    enumerate_faces, try_facet_enumeration_with_cfg, try_vertex_enumeration_with_cfg, Brush,
    GeomCfg,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

use io::{FaceRow, PlaneRow, PointRow};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "brushgeom")]
#[command(about = "Convert brushes between plane lists and vertex lists")]
struct Cmd {
    /// Optional tag (map or ticket name); propagated to provenance and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Planes (JSON) → vertices (JSON)
    Vertices {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = EPS)]
        eps: f32,
    },
    /// Points (JSON or CSV) → supporting planes (JSON)
    Facets {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = EPS)]
        eps: f32,
    },
    /// Planes (JSON) → wound face polygons (JSON)
    Faces {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Vertices { input, out, eps } => vertices(input, out, eps, cmd.tag),
        Action::Facets { input, out, eps } => facets(input, out, eps, cmd.tag),
        Action::Faces { input, out } => faces(input, out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn cfg_for(eps: f32) -> Result<GeomCfg> {
    if !(eps.is_finite() && eps >= MIN_EPS) {
        bail!("--eps must be a finite number >= {MIN_EPS}, got {eps}");
    }
    Ok(GeomCfg {
        eps,
        ..GeomCfg::default()
    })
}

fn vertices(input: PathBuf, out: PathBuf, eps: f32, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), eps, tag = ?tag, "vertices");
    let cfg = cfg_for(eps)?;
    let planes = io::read_planes(&input)?;
    let verts = try_vertex_enumeration_with_cfg(&planes, &cfg)?;
    if verts.is_empty() {
        tracing::warn!(planes = planes.len(), "plane list encloses no vertices");
    }
    let mut brush = Brush {
        planes: planes.clone(),
        vertices: verts.clone(),
    };
    if let Err(err) = brush.check_solid_with_cfg(&cfg) {
        tracing::warn!(%err, "brush is not a closed solid");
    }
    let rows: Vec<PointRow> = verts.iter().map(PointRow::from).collect();
    io::write_json(&out, &rows)?;
    let payload = Payload::new(
        "vertices",
        serde_json::json!({
            "input": input,
            "eps": eps,
            "planes": planes.len(),
            "vertices": rows.len()
        }),
    )
    .with_tag(tag);
    provenance::write_sidecar(&out, payload)?;
    tracing::info!(vertices = rows.len(), "done");
    Ok(())
}

fn facets(input: PathBuf, out: PathBuf, eps: f32, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), eps, tag = ?tag, "facets");
    let cfg = cfg_for(eps)?;
    let points = io::read_points(&input)?;
    let planes = try_facet_enumeration_with_cfg(&points, &cfg)?;
    if planes.is_empty() {
        bail!(
            "{} points are flat or coincident; no brush planes",
            points.len()
        );
    }
    let rows: Vec<PlaneRow> = planes.iter().map(PlaneRow::from).collect();
    io::write_json(&out, &rows)?;
    let payload = Payload::new(
        "facets",
        serde_json::json!({
            "input": input,
            "eps": eps,
            "points": points.len(),
            "planes": rows.len()
        }),
    )
    .with_tag(tag);
    provenance::write_sidecar(&out, payload)?;
    tracing::info!(planes = rows.len(), "done");
    Ok(())
}

fn faces(input: PathBuf, out: PathBuf, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "faces");
    let planes = io::read_planes(&input)?;
    let (verts, faces, edges) = enumerate_faces(&planes);
    let rows: Vec<FaceRow> = faces.iter().map(FaceRow::from).collect();
    io::write_json(&out, &rows)?;
    let payload = Payload::new(
        "faces",
        serde_json::json!({
            "input": input,
            "planes": planes.len(),
            "vertices": verts.len(),
            "faces": rows.len(),
            "edges": edges.len()
        }),
    )
    .with_tag(tag);
    provenance::write_sidecar(&out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let payload = Payload::new("report", serde_json::json!({})).with_tag(tag);
    let doc = provenance::document(None, &payload);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
