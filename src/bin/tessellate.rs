//! CLI tool for tessellating outlines into GPU-ready triangle buffers
//!
//! Usage:
//!   cargo run --release --bin tessellate -- <input.svg|input.json> [options]
//!
//! Options:
//!   --resolution <n>    Segments per Bezier curve (default 8)
//!   --simplify <tol>    Douglas-Peucker tolerance applied to each contour
//!   --config <file>     JSON options file (flags override it)
//!   --format <fmt>      json | json-base64 | msgpack | binary (default json)
//!   --output <path>     Write to a file instead of stdout
//!   --summary           Print per-shape statistics

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;
use indexmap::IndexMap;
use outline_tess::draw::geometry::{write_mesh_binary, PackedMeshGeometry};
use outline_tess::draw::generation::{generate_batch_geometry, BatchGeometry, ShapeFailure, ShapeRange};
use outline_tess::draw::parsing::{parse_svg_file, PathCommand};
use outline_tess::draw::tessellation::TessellationOptions;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq)]
enum OutputFormat {
    Json,
    JsonBase64,
    MsgPack,
    Binary,
}

impl OutputFormat {
    fn parse(name: &str) -> anyhow::Result<Self> {
        match name {
            "json" => Ok(OutputFormat::Json),
            "json-base64" => Ok(OutputFormat::JsonBase64),
            "msgpack" => Ok(OutputFormat::MsgPack),
            "binary" => Ok(OutputFormat::Binary),
            other => anyhow::bail!("unknown output format '{}'", other),
        }
    }
}

/// Batch output with base64-packed buffers
#[derive(Serialize)]
struct PackedBatch<'a> {
    geometry: PackedMeshGeometry<'a>,
    ranges: &'a [ShapeRange],
    failures: &'a [ShapeFailure],
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <input.svg|input.json> [options]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --resolution <n>     Segments per Bezier curve (default 8)");
    eprintln!("  --simplify <tol>     Douglas-Peucker tolerance per contour (default 0, off)");
    eprintln!("  --config <file>      JSON options file; flags override its values");
    eprintln!("  --format <fmt>       json | json-base64 | msgpack | binary (default json)");
    eprintln!("  --output <path>      Write geometry to a file instead of stdout");
    eprintln!("  --summary            Print per-shape statistics");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} glyphs.svg --summary", program);
    eprintln!("  {} glyphs.svg --resolution 16 --format binary --output glyphs.bin", program);
    eprintln!("  {} shapes.json --format json-base64", program);
}

fn load_shapes(input: &str) -> anyhow::Result<IndexMap<String, Vec<PathCommand>>> {
    if input.to_lowercase().ends_with(".json") {
        let text = std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input))?;
        serde_json::from_str(&text).with_context(|| format!("Invalid shape file {}", input))
    } else {
        parse_svg_file(input)
    }
}

fn write_output<W: Write>(writer: &mut W, batch: &BatchGeometry, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => serde_json::to_writer(&mut *writer, batch)?,
        OutputFormat::JsonBase64 => {
            let packed = PackedBatch {
                geometry: batch.geometry.packed(),
                ranges: &batch.ranges,
                failures: &batch.failures,
            };
            serde_json::to_writer(&mut *writer, &packed)?;
        }
        OutputFormat::MsgPack => writer.write_all(&rmp_serde::to_vec_named(batch)?)?,
        OutputFormat::Binary => write_mesh_binary(&mut *writer, &batch.geometry)?,
    }
    writer.flush()?;
    Ok(())
}

fn print_summary(batch: &BatchGeometry) {
    for range in &batch.ranges {
        println!(
            "{}: vertices={}, triangles={}, bounds=[{:.3}, {:.3}, {:.3}, {:.3}]",
            range.id,
            range.vertex_count,
            range.index_count / 3,
            range.bounds[0],
            range.bounds[1],
            range.bounds[2],
            range.bounds[3]
        );
    }
    for failure in &batch.failures {
        println!("{}: FAILED ({})", failure.id, failure.error);
    }
    println!(
        "Total: {} shapes, {} failed, {} vertices, {} triangles",
        batch.shape_count() + batch.failures.len(),
        batch.failures.len(),
        batch.geometry.vertex_count,
        batch.triangle_count()
    );
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage(&args[0]);
        return Ok(());
    }

    let input = &args[1];
    let mut resolution: Option<u32> = None;
    let mut simplify: Option<f64> = None;
    let mut config_path: Option<String> = None;
    let mut format = OutputFormat::Json;
    let mut output_path: Option<String> = None;
    let mut summary = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--resolution" | "--simplify" | "--config" | "--format" | "--output" => {
                let flag = args[i].as_str();
                i += 1;
                let value = args
                    .get(i)
                    .with_context(|| format!("{} needs a value", flag))?;
                match flag {
                    "--resolution" => {
                        resolution = Some(value.parse().with_context(|| format!("bad --resolution '{}'", value))?)
                    }
                    "--simplify" => {
                        simplify = Some(value.parse().with_context(|| format!("bad --simplify '{}'", value))?)
                    }
                    "--config" => config_path = Some(value.clone()),
                    "--format" => format = OutputFormat::parse(value)?,
                    _ => output_path = Some(value.clone()),
                }
            }
            "--summary" => summary = true,
            other => tracing::warn!(argument = other, "ignoring unknown argument"),
        }
        i += 1;
    }

    let mut options = match &config_path {
        Some(path) => TessellationOptions::from_json_file(path)?,
        None => TessellationOptions::default(),
    };
    if let Some(n) = resolution {
        options.curve_resolution = n;
    }
    if let Some(t) = simplify {
        options.simplify_tolerance = t;
    }

    let start = std::time::Instant::now();
    let shapes = load_shapes(input)?;
    tracing::info!(
        shapes = shapes.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "loaded {}",
        input
    );

    let start = std::time::Instant::now();
    let batch = generate_batch_geometry(&shapes, &options)?;
    tracing::info!(
        shapes = batch.shape_count(),
        failed = batch.failures.len(),
        triangles = batch.triangle_count(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "tessellated"
    );

    if summary {
        print_summary(&batch);
    }

    match &output_path {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("Failed to create {}", path))?;
            write_output(&mut BufWriter::new(file), &batch, format)?;
            tracing::info!(path = %path, "wrote geometry");
        }
        None if !summary => {
            let stdout = io::stdout();
            write_output(&mut stdout.lock(), &batch, format)?;
        }
        None => {}
    }

    Ok(())
}
