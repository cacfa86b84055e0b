use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hullring::api::{
    convex_hull_with, draw_cloud, CloudCfg, Hull, HullCfg, HullObserver, NoopObserver, PointCount,
    ReplayToken, Ring, Tangent,
};
use hullring::Vec2;
use polars::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "hull")]
#[command(about = "Convex hull runner: CSV points in, JSON boundary out")]
struct Cmd {
    /// Optional tag; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a CSV point file and write a JSON artifact
    Solve {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Log each merge's tangent pair at debug level
        #[arg(long)]
        trace: bool,
    },
    /// Sample a reproducible point cloud and write it as CSV
    Gen {
        #[arg(long, default_value_t = 256)]
        count: usize,
        #[arg(long, default_value_t = 2025)]
        seed: u64,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve { input, out, trace } => solve(input, out, trace, cmd.tag),
        Action::Gen { count, seed, out } => gen(count, seed, out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

/// Boundary polygon artifact, counter-clockwise vertex order.
#[derive(Serialize)]
struct HullArtifact {
    input_points: usize,
    hull_points: usize,
    hull: Vec<[f64; 2]>,
}

/// Observer that mirrors merge checkpoints into the log stream.
struct LogObserver;

impl HullObserver for LogObserver {
    fn on_tangents(&mut self, upper: Tangent, lower: Tangent) {
        tracing::debug!(
            upper_left = ?(upper.left.x, upper.left.y),
            upper_right = ?(upper.right.x, upper.right.y),
            lower_left = ?(lower.left.x, lower.left.y),
            lower_right = ?(lower.right.x, lower.right.y),
            "tangents"
        );
    }

    fn on_merge(&mut self, _ring: &Ring, hull: Hull) {
        tracing::debug!(leftmost = hull.leftmost.0, rightmost = hull.rightmost.0, "merge");
    }
}

fn solve(input: String, out: String, trace: bool, tag: Option<String>) -> Result<()> {
    tracing::info!(input, out, tag = ?tag, "solve");
    let lf = LazyCsvReader::new(&input)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {input}"))?;
    let df = lf.collect()?;
    let pts = points_from_df(&df)?;

    let hull = if trace {
        convex_hull_with(&pts, HullCfg::default(), &mut LogObserver)?
    } else {
        convex_hull_with(&pts, HullCfg::default(), &mut NoopObserver)?
    };
    tracing::info!(
        input_points = pts.len(),
        hull_points = hull.len(),
        "hull computed"
    );

    let artifact = HullArtifact {
        input_points: pts.len(),
        hull_points: hull.len(),
        hull: hull.iter().map(|p| [p.x, p.y]).collect(),
    };
    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&artifact)?)?;
    provenance::write_sidecar(
        out_path,
        serde_json::json!({
            "action": "solve",
            "input": input,
            "tag": tag,
            "input_points": artifact.input_points,
            "hull_points": artifact.hull_points,
        }),
    )?;
    Ok(())
}

fn gen(count: usize, seed: u64, out: String, tag: Option<String>) -> Result<()> {
    tracing::info!(count, seed, out, tag = ?tag, "gen");
    let cfg = CloudCfg {
        point_count: PointCount::Fixed(count),
        half_extent: 1.0,
        snap_step: None,
    };
    let pts = draw_cloud(cfg, ReplayToken { seed, index: 0 });
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = pts.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;

    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file =
        std::fs::File::create(out_path).with_context(|| format!("creating {out}"))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    provenance::write_sidecar(
        out_path,
        serde_json::json!({
            "action": "gen",
            "count": count,
            "seed": seed,
            "tag": tag,
        }),
    )?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn points_from_df(df: &DataFrame) -> Result<Vec<Vec2<f64>>> {
    let xs = df
        .column("x")
        .context("csv needs an `x` column")?
        .cast(&DataType::Float64)?;
    let ys = df
        .column("y")
        .context("csv needs a `y` column")?
        .cast(&DataType::Float64)?;
    let xs = xs.f64()?;
    let ys = ys.f64()?;
    let mut pts = Vec::with_capacity(df.height());
    for (i, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        let (Some(x), Some(y)) = (x, y) else {
            anyhow::bail!("row {i} has a null coordinate");
        };
        pts.push(Vec2::new(x, y));
    }
    Ok(pts)
}
