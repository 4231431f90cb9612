use anyhow::{anyhow, Context, Result};
use proj4rs::{proj::Proj as Proj4, transform::transform};

use crate::geom::{LatLng, Point2D, ProjectionConfig};

const WGS84_PROJ4: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// Projects survey coordinates from the configured stereographic CRS into WGS84 lat/lng.
pub struct Projector {
    from: Proj4,
    to: Proj4,
}

impl std::fmt::Debug for Projector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Projector").finish_non_exhaustive()
    }
}

impl Projector {
    /// Build a projector for the given projection parameters.
    pub fn new(config: &ProjectionConfig) -> Result<Self> {
        let from = {
            let proj_string = config.to_proj_string();
            Proj4::from_proj_string(&proj_string)
                .with_context(|| anyhow!("failed to build source PROJ.4: {proj_string}"))?
        };

        let to = Proj4::from_proj_string(WGS84_PROJ4)
            .with_context(|| anyhow!("failed to build target PROJ.4: {WGS84_PROJ4}"))?;

        Ok(Self { from, to })
    }

    /// Build a projector for the default Stereo 70 definition.
    pub fn stereo70() -> Result<Self> { Self::new(&ProjectionConfig::default()) }

    /// Project a single point. Non-finite input yields NaN coordinates instead of a
    /// plausible-looking position.
    pub fn project(&self, point: Point2D) -> Result<LatLng> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Ok(LatLng { lat: f64::NAN, lng: f64::NAN })
        }

        // Meters in, radians out.
        let mut coord = (point.x, point.y, 0.0);
        transform(&self.from, &self.to, &mut coord)
            .with_context(|| anyhow!("CRS transform failed for ({}, {})", point.x, point.y))?;

        Ok(LatLng { lat: coord.1.to_degrees(), lng: coord.0.to_degrees() })
    }
}
