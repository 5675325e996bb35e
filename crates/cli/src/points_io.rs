//! Point files: `.csv` / `.parquet` with `x`,`y` columns (polars) or `(x,y)` text lines.

use anyhow::{bail, Context, Result};
use planar::api::{format_points, parse_points, Point};
use polars::prelude::*;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Csv,
    Parquet,
    Text,
}

fn format_of(path: &Path) -> Format {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("csv") => Format::Csv,
        Some("parquet") => Format::Parquet,
        _ => Format::Text,
    }
}

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    match format_of(path) {
        Format::Csv => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("opening {}", path.display()))?;
            collect_xy(lf).with_context(|| format!("reading x,y from {}", path.display()))
        }
        Format::Parquet => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("opening {}", path.display()))?;
            collect_xy(lf).with_context(|| format!("reading x,y from {}", path.display()))
        }
        Format::Text => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_points(&text).with_context(|| format!("parsing {}", path.display()))
        }
    }
}

fn collect_xy(lf: LazyFrame) -> Result<Vec<Point>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => out.push(Point::new(x, y)),
            _ => bail!("row {row}: missing or non-finite coordinate"),
        }
    }
    Ok(out)
}

pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    match format_of(path) {
        Format::Text => {
            let mut text = format_points(points);
            text.push('\n');
            fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        }
        fmt => {
            let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
            let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
            let mut df = df!("x" => xs, "y" => ys)?;
            let file = fs::File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            if fmt == Format::Csv {
                CsvWriter::new(file).include_header(true).finish(&mut df)?;
            } else {
                ParquetWriter::new(file).finish(&mut df)?;
            }
        }
    }
    Ok(())
}
