use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use geomkit::prelude::*;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod demo;
mod report;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Geometry toolkit demos and figure reports")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Walk through points, arrays and figures with sample output
    Demo,
    /// Read N `x y` pairs into a polygon and print its area and center
    Area {
        #[arg(long, allow_negative_numbers = true)]
        vertices: i64,
        /// Input file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Draw a reproducible random polygon
    Random {
        #[arg(long, default_value_t = 12, allow_negative_numbers = true)]
        vertices: i64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        json: bool,
    },
    /// Summarize a figure list (one `<kind> x y ...` line per figure) as JSON
    Report {
        #[arg(long)]
        input: PathBuf,
        /// Write the report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo => demo::run(),
        Action::Area {
            vertices,
            input,
            json,
        } => area(vertices, input, json),
        Action::Random {
            vertices,
            seed,
            index,
            json,
        } => random(vertices, seed, index, json),
        Action::Report { input, out } => report::run(&input, out.as_deref()),
    }
}

/// Signed at the argument boundary so a negative value is reported, not wrapped.
fn checked_count(vertices: i64) -> Result<usize> {
    if vertices < 0 {
        bail!("vertex count must be non-negative, got {vertices}");
    }
    Ok(usize::try_from(vertices)?)
}

fn area(vertices: i64, input: Option<PathBuf>, json: bool) -> Result<()> {
    let n = checked_count(vertices)?;
    tracing::info!(vertices = n, input = ?input, "area");
    let mut polygon = Polygon::<f64>::new(n)?;
    let mut tokens = match &input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            Tokens::new(BufReader::new(file))
        }
        None => Tokens::new(io::stdin().lock()),
    };
    polygon
        .read_from(&mut tokens)
        .context("reading polygon vertices")?;
    print_polygon(&polygon, json)
}

fn random(vertices: i64, seed: u64, index: u64, json: bool) -> Result<()> {
    let n = checked_count(vertices)?;
    tracing::info!(vertices = n, seed, index, "random");
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    let polygon = draw_polygon_radial(cfg, ReplayToken { seed, index })?;
    print_polygon(&polygon, json)
}

fn print_polygon(polygon: &Polygon<f64>, json: bool) -> Result<()> {
    let center = polygon.center()?;
    if json {
        let obj = serde_json::json!({
            "kind": polygon.kind().label(),
            "vertices": polygon.vertices().iter().map(|v| [v.x, v.y]).collect::<Vec<_>>(),
            "area": polygon.area(),
            "center": [center.x, center.y],
        });
        println!("{}", serde_json::to_string_pretty(&obj)?);
    } else {
        print!("{polygon}");
        println!("Area: {:.3}", polygon.area());
        println!("Center: ({:.3}, {:.3})", center.x, center.y);
    }
    Ok(())
}
