pub mod extract;
pub mod points;

use anyhow::Result;
use stereoparcel::{Projector, ProjectionConfig, Registry};

use crate::cli::Cli;

/// Build an empty registry for the configured projection.
pub(crate) fn registry(cli: &Cli) -> Result<Registry> {
    let config = match &cli.config {
        Some(path) => ProjectionConfig::from_json_file(path)?,
        None => ProjectionConfig::default(),
    };
    tracing::debug!(proj = %config.to_proj_string(), "projection");

    Ok(Registry::new(Projector::new(&config)?))
}

/// Print every terrain card to stdout and optionally write GeoJSON.
pub(crate) fn report(registry: &Registry, geojson: Option<&std::path::Path>) -> Result<()> {
    for terrain in registry.list() {
        println!("{}", terrain.listing());
    }
    if let Some(path) = geojson {
        registry.write_geojson(path)?;
        tracing::info!(path = %path.display(), "wrote GeoJSON");
    }
    Ok(())
}
