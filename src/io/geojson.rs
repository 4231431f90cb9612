use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{Context, Result};
use serde_json::{json, Value};

use crate::terrain::{Registry, Terrain};

impl Terrain {
    /// Export the terrain as a GeoJSON Polygon feature with a closed WGS84 ring.
    pub fn to_geojson(&self) -> Value {
        let mut ring = self.geo_points().iter()
            .map(|p| json!([p.lng, p.lat]))
            .collect::<Vec<_>>();
        if let Some(first) = ring.first().cloned() { ring.push(first) }

        json!({
            "type": "Feature",
            "id": self.id(),
            "geometry": {
                "type": "Polygon",
                "coordinates": [ring],
            },
            "properties": {
                "name": self.name(),
                "color": self.color(),
                "area": self.area(),
                "perimeter": self.perimeter(),
            },
        })
    }
}

impl Registry {
    /// Export all terrains as a GeoJSON FeatureCollection, in creation order.
    pub fn to_geojson(&self) -> Value {
        json!({
            "type": "FeatureCollection",
            "features": self.list().iter().map(Terrain::to_geojson).collect::<Vec<_>>(),
        })
    }

    /// Write all terrains to a GeoJSON file at `path`.
    pub fn write_geojson(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create GeoJSON file: {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.to_geojson())?;
        Ok(())
    }
}
