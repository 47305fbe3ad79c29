//! building-mesh - procedural building generator
//!
//! Generates a truncated-cone building and writes it as a Wavefront OBJ file
//! named after its parameters, e.g. `building_8_6_1_0.8.obj`.
//!
//! ```bash
//! building-mesh --sides 12 --height 4 --base-radius 2 --top-radius 1.5
//! building-mesh --stdout > tower.obj
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use building_mesh::building::{SIDES_MAX, SIDES_MIN};
use building_mesh::{generate_document, BuildingParams};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "building-mesh")]
#[command(about = "Generate a truncated-cone building mesh as OBJ")]
#[command(version)]
struct Cli {
    /// Number of sides around the axis
    #[arg(short, long, default_value_t = 8)]
    sides: u32,

    /// Height of the building
    #[arg(long, default_value_t = 6.0)]
    height: f64,

    /// Radius of the base ring
    #[arg(long, default_value_t = 1.0)]
    base_radius: f64,

    /// Radius of the top ring
    #[arg(long, default_value_t = 0.8)]
    top_radius: f64,

    /// Directory the OBJ file is written to
    #[arg(short, long, env = "BUILDING_MESH_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Print the document to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
}

impl Cli {
    fn params(&self) -> BuildingParams {
        BuildingParams::new(self.sides, self.height, self.base_radius, self.top_radius)
    }
}

/// Generates the document and writes it out. Returns the written path, or
/// `None` when printing to stdout.
fn run(cli: &Cli) -> Result<Option<PathBuf>> {
    let params = cli.params();
    params.validate().with_context(|| {
        format!("Invalid parameters: sides must be in {SIDES_MIN}..={SIDES_MAX}, lengths must be > 0")
    })?;
    let document = generate_document(&params)?;

    if cli.stdout {
        print!("{document}");
        return Ok(None);
    }

    let path = cli.output_dir.join(params.file_name());
    fs::write(&path, &document)
        .with_context(|| format!("Failed to write output: {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        sides = params.sides,
        height = params.height,
        base_radius = params.base_radius,
        top_radius = params.top_radius,
        "wrote building mesh"
    );

    Ok(Some(path))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli)?;
    Ok(())
}
