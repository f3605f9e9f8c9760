//! CLI argument definitions for planetarium

use clap::{Args, Parser, Subcommand};
use planetarium_catalog::SourcePaths;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "planetarium")]
#[command(about = "Planetarium catalog compiler and sky preview")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile the source files into renderer tables, written as JSON
    Compile(CompileArgs),

    /// Show what is in view for an observer
    Sky(SkyArgs),
}

#[derive(Args)]
pub struct SourceArgs {
    /// Fixed-width Bright Star Catalog
    #[arg(long, default_value = "data/catalog")]
    pub catalog: PathBuf,

    /// Constellation stick figures (designator, count, HR numbers)
    #[arg(long, default_value = "data/constellations")]
    pub constellations: PathBuf,

    /// Deep-sky objects CSV (name, category, ra hours, dec degrees)
    #[arg(long, default_value = "data/messier_ngc_processed.csv")]
    pub objects: PathBuf,

    /// Star names CSV (name, unused, ra degrees, dec degrees)
    #[arg(long, default_value = "data/star_names")]
    pub names: PathBuf,
}

impl SourceArgs {
    pub fn paths(&self) -> SourcePaths {
        SourcePaths {
            catalog: self.catalog.clone(),
            constellations: self.constellations.clone(),
            objects: self.objects.clone(),
            named_stars: self.names.clone(),
        }
    }
}

#[derive(Args)]
pub struct CompileArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Leave stars fainter than this out of the star tables
    #[arg(long)]
    pub mag_limit: Option<f64>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args)]
pub struct SkyArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Observer latitude, e.g. 51.4778 or 51:28:40
    #[arg(long, allow_hyphen_values = true)]
    pub lat: String,

    /// Observer longitude, east positive, e.g. -0.0015 or -0:00:05
    #[arg(long, allow_hyphen_values = true)]
    pub lon: String,

    /// UTC instant (RFC 3339 or "YYYY-MM-DD HH:MM:SS"); defaults to now
    #[arg(long)]
    pub time: Option<String>,

    /// Altitude of the view centre in degrees
    #[arg(long, default_value = "90.0", allow_hyphen_values = true)]
    pub view_alt: f64,

    /// Azimuth of the view centre in degrees, north = 0, east = 90
    #[arg(long, default_value = "0.0")]
    pub view_az: f64,

    /// Field of view in degrees
    #[arg(long, default_value = "90.0")]
    pub field: f64,

    /// Faintest star plotted
    #[arg(long, default_value = "8.0", allow_hyphen_values = true)]
    pub mag_limit: f64,

    /// Display width in pixels
    #[arg(long, default_value = "320")]
    pub width: u32,

    /// Display height in pixels
    #[arg(long, default_value = "240")]
    pub height: u32,

    /// Print the whole scene as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}
