use geo::{Coord, Rect};

use crate::geom::{compute_metrics, LatLng, Point2D, Segment};
use crate::terrain::TerrainError;

/// Process-unique terrain identifier.
pub type TerrainId = u32;

/// A ring vertex with its projected and geographic coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    /// 1-based position in the owning ring.
    pub index: usize,
    pub lat: f64,
    pub lng: f64,
    pub x: f64,
    pub y: f64,
}

/// A land parcel defined by an ordered ring of survey points.
#[derive(Clone, Debug)]
pub struct Terrain {
    id: TerrainId,
    name: String,
    color: String,
    points: Vec<Point2D>,
    geo_points: Vec<GeoPoint>,
    area: f64,
    perimeter: f64,
    segments: Vec<Segment>,
}

/// Check that a ring can form a terrain: at least 3 points, all coordinates finite.
pub fn validate_ring(points: &[Point2D]) -> Result<(), TerrainError> {
    if points.len() < 3 {
        return Err(TerrainError::TooFewPoints { count: points.len() })
    }
    match points.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
        Some(i) => Err(TerrainError::NonFiniteCoordinate { index: i + 1 }),
        None => Ok(()),
    }
}

impl Terrain {
    /// Assemble a terrain from a validated ring and the projection of each of its points.
    pub(crate) fn new(id: TerrainId, name: String, color: String, points: Vec<Point2D>, projected: Vec<LatLng>) -> Self {
        debug_assert_eq!(points.len(), projected.len(), "one projection per point");

        let geo_points = points.iter().zip(&projected).enumerate()
            .map(|(i, (p, ll))| GeoPoint { index: i + 1, lat: ll.lat, lng: ll.lng, x: p.x, y: p.y })
            .collect();
        let metrics = compute_metrics(&points);

        Self {
            id,
            name,
            color,
            points,
            geo_points,
            area: metrics.area,
            perimeter: metrics.perimeter,
            segments: metrics.segments,
        }
    }

    #[inline] pub fn id(&self) -> TerrainId { self.id }

    #[inline] pub fn name(&self) -> &str { &self.name }

    /// CSS color assigned from the registry palette.
    #[inline] pub fn color(&self) -> &str { &self.color }

    /// Ring vertices in the projected CRS.
    #[inline] pub fn points(&self) -> &[Point2D] { &self.points }

    /// Ring vertices with geographic coordinates, same order as `points`.
    #[inline] pub fn geo_points(&self) -> &[GeoPoint] { &self.geo_points }

    /// Area in square meters of the projected CRS.
    #[inline] pub fn area(&self) -> f64 { self.area }

    /// Perimeter in meters, including the closing edge.
    #[inline] pub fn perimeter(&self) -> f64 { self.perimeter }

    #[inline] pub fn segments(&self) -> &[Segment] { &self.segments }

    /// Geographic ring as (lat, lng) pairs, for polygon rendering.
    pub fn ring_latlngs(&self) -> Vec<(f64, f64)> {
        self.geo_points.iter().map(|p| (p.lat, p.lng)).collect()
    }

    /// Geographic bounding box, with lng as x and lat as y.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        let mut iter = self.geo_points.iter().map(|p| Coord { x: p.lng, y: p.lat });
        let first = iter.next()?;
        Some(iter.fold(Rect::new(first, first), |r, c| Rect::new(
            Coord { x: r.min().x.min(c.x), y: r.min().y.min(c.y) },
            Coord { x: r.max().x.max(c.x), y: r.max().y.max(c.y) },
        )))
    }
}
