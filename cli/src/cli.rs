use std::path::PathBuf;

/// Survey parcel CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "stereoparcel", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON file overriding the Stereo 70 projection parameters
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Extract terrains from text documents, one terrain per document
    Extract(ExtractArgs),

    /// Build a terrain from manually entered coordinates
    Points(PointsArgs),
}

#[derive(clap::Args, Debug)]
pub struct ExtractArgs {
    /// Text documents (pages separated by form feeds)
    #[arg(required = true, value_hint = clap::ValueHint::FilePath)]
    pub documents: Vec<PathBuf>,

    /// Also write the terrains as a GeoJSON FeatureCollection
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub geojson: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct PointsArgs {
    /// Ring vertex in meters, e.g. `-p 241,953.403 532,269.41` (repeat for each point)
    #[arg(short, long = "point", num_args = 2, value_names = ["X", "Y"], required = true, allow_negative_numbers = true)]
    pub points: Vec<String>,

    /// Terrain name, defaults to "Teren manual #1"
    #[arg(short, long)]
    pub name: Option<String>,

    /// Also write the terrain as a GeoJSON FeatureCollection
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub geojson: Option<PathBuf>,
}
