mod config;
mod metrics;
mod proj;

use geo::Coord;

pub use config::ProjectionConfig;
pub use metrics::{compute_metrics, distance, signed_area, RingMetrics, Segment};
pub use proj::Projector;

/// A point in the projected survey CRS, in meters.
pub type Point2D = Coord<f64>;

/// A geographic position in WGS84 degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}
