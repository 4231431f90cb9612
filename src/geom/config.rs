use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Parameters of the double stereographic projection used for survey coordinates.
/// Defaults are the Stereo 70 definition (EPSG:3844).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Latitude of origin, in degrees.
    pub lat_0: f64,
    /// Longitude of origin, in degrees.
    pub lon_0: f64,
    /// Scale factor at the origin.
    pub k: f64,
    /// False easting, in meters.
    pub x_0: f64,
    /// False northing, in meters.
    pub y_0: f64,
    /// PROJ.4 ellipsoid name.
    pub ellps: String,
    /// 7-parameter datum shift to WGS84 (dx, dy, dz, rx, ry, rz, ds).
    pub towgs84: [f64; 7],
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            lat_0: 46.0,
            lon_0: 25.0,
            k: 0.99975,
            x_0: 500000.0,
            y_0: 500000.0,
            ellps: "krass".to_string(),
            towgs84: [33.4, -146.6, -76.3, -0.359, -0.053, 0.844, -0.84],
        }
    }
}

impl ProjectionConfig {
    /// Load a config from a JSON file. Missing fields keep their default values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to read projection config: {}", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid projection config: {}", path.display()))?;
        Ok(config)
    }

    /// Render the projected CRS as a PROJ.4 string.
    pub fn to_proj_string(&self) -> String {
        let towgs84 = self.towgs84.iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");

        format!(
            "+proj=sterea +lat_0={} +lon_0={} +k={} +x_0={} +y_0={} +ellps={} +towgs84={} +units=m +no_defs",
            self.lat_0, self.lon_0, self.k, self.x_0, self.y_0, self.ellps, towgs84,
        )
    }
}
