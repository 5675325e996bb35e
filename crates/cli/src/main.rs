mod output;
mod points_io;
mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use planar::api::{draw_points, Diagram, GeomCfg, PointSampleCfg, ReplayToken};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::output::{DiagramOut, PointReportOut};
use crate::provenance::Provenance;

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Batch runner for the planar geometry kernel")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Kernel tolerances; defaults match `GeomCfg::default()`.
#[derive(Args, Clone, Copy, Debug)]
struct CfgArgs {
    /// Slack on d² − r² for circle membership
    #[arg(long, default_value_t = 1e-8)]
    eps_circle: f64,
    /// Minimum |D| before a triangle counts as collinear
    #[arg(long, default_value_t = 1e-10)]
    eps_collinear: f64,
    /// Super-triangle size relative to the input bounding box
    #[arg(long, default_value_t = 1000.0)]
    super_scale: f64,
}

impl CfgArgs {
    fn to_cfg(self) -> Result<GeomCfg> {
        for (name, v) in [
            ("eps-circle", self.eps_circle),
            ("eps-collinear", self.eps_collinear),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                bail!("--{name} must be a finite, non-negative number");
            }
        }
        if !(self.super_scale.is_finite() && self.super_scale > 1.0) {
            bail!("--super-scale must be finite and > 1");
        }
        Ok(GeomCfg {
            eps_circle: self.eps_circle,
            eps_collinear: self.eps_collinear,
            super_scale: self.super_scale,
        })
    }
}

#[derive(Subcommand)]
enum Action {
    /// Compute every structure for a point file and write JSON
    Run {
        /// `.csv`/`.parquet` with x,y columns, or `(x,y)` lines
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Seed for the smallest-circle shuffle
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[command(flatten)]
        cfg: CfgArgs,
    },
    /// Write a reproducible random point set
    Random {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 10)]
        min_count: usize,
        #[arg(long, default_value_t = 20)]
        max_count: usize,
        #[arg(long, default_value_t = 0.1)]
        lo: f64,
        #[arg(long, default_value_t = 0.9)]
        hi: f64,
    },
    /// Print what the diagram knows about one input point
    Inspect {
        #[arg(long)]
        input: PathBuf,
        /// 0-based position in the input file
        #[arg(long)]
        index: usize,
        #[command(flatten)]
        cfg: CfgArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            out,
            seed,
            cfg,
        } => run(&input, &out, seed, cfg.to_cfg()?).map(|_| ()),
        Action::Random {
            out,
            seed,
            index,
            min_count,
            max_count,
            lo,
            hi,
        } => {
            let sample = PointSampleCfg {
                min_count,
                max_count,
                lo,
                hi,
            };
            random(&out, sample, ReplayToken::new(seed, index)).map(|_| ())
        }
        Action::Inspect { input, index, cfg } => {
            let report = inspect(&input, index, cfg.to_cfg()?)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Action::Report => report(),
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn cfg_json(cfg: GeomCfg) -> serde_json::Value {
    serde_json::json!({
        "eps_circle": cfg.eps_circle,
        "eps_collinear": cfg.eps_collinear,
        "super_scale": cfg.super_scale,
    })
}

fn run(input: &Path, out: &Path, seed: u64, cfg: GeomCfg) -> Result<Diagram> {
    tracing::info!(input = %input.display(), out = %out.display(), seed, "run");
    let points = points_io::read_points(input)?;
    let mut rng = ReplayToken::new(seed, 0).to_std_rng();
    let diagram = Diagram::recompute_with(&points, cfg, &mut rng);
    tracing::info!(
        points = points.len(),
        hull = diagram.hull.len(),
        triangles = diagram.triangles.len(),
        voronoi_edges = diagram.voronoi_edges.len(),
        bounded_cells = diagram.cells.iter().filter(|(_, c)| c.is_some()).count(),
        "diagram"
    );

    ensure_parent(out)?;
    let doc = DiagramOut::from(&diagram);
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let params = serde_json::json!({ "seed": seed, "cfg": cfg_json(cfg) });
    Provenance::new("run", params).input(input).write_next_to(out)?;
    Ok(diagram)
}

fn random(out: &Path, sample: PointSampleCfg, tok: ReplayToken) -> Result<Vec<planar::Point>> {
    tracing::info!(out = %out.display(), seed = tok.seed, index = tok.index, "random");
    let points = draw_points(sample, tok)?;
    points_io::write_points(out, &points)?;
    tracing::info!(count = points.len(), "points written");

    let params = serde_json::json!({
        "seed": tok.seed,
        "index": tok.index,
        "min_count": sample.min_count,
        "max_count": sample.max_count,
        "lo": sample.lo,
        "hi": sample.hi,
    });
    Provenance::new("random", params).write_next_to(out)?;
    Ok(points)
}

fn inspect(input: &Path, index: usize, cfg: GeomCfg) -> Result<PointReportOut> {
    tracing::info!(input = %input.display(), index, "inspect");
    let points = points_io::read_points(input)?;
    // The enclosing circle is not part of the report; any RNG will do.
    let diagram = Diagram::recompute_with(&points, cfg, &mut ReplayToken::new(0, 0).to_std_rng());
    let Some(report) = diagram.inspect(index) else {
        bail!("index {index} out of range ({} points)", points.len());
    };
    tracing::info!(
        point = %report.point,
        on_hull = report.on_hull,
        triangles = report.triangles_with_vertex.len(),
        voronoi_edges = report.voronoi_edges.len(),
        "point"
    );
    Ok(PointReportOut::new(index, &report))
}

fn report() -> Result<()> {
    let defaults = GeomCfg::default();
    let obj = serde_json::json!({
        "code_rev": provenance::code_rev(),
        "planar_version": planar::VERSION,
        "params": { "cfg": cfg_json(defaults) },
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
