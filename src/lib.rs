#![doc = "Survey-coordinate processing for land parcels: Stereo 70 projection, ring metrics and coordinate extraction"]
mod extract;
mod geom;
mod io;
mod terrain;

#[doc(inline)]
pub use geom::{
    compute_metrics, distance, signed_area, LatLng, Point2D, Projector, ProjectionConfig, RingMetrics, Segment,
};

#[doc(inline)]
pub use extract::{extract_numbered, extract_points, parse_locale_number, MAX_COORDINATE, MIN_COORDINATE};

#[doc(inline)]
pub use terrain::{
    parse_manual_field, parse_manual_points, validate_ring, Axis, GeoPoint, ImportFailure, ImportFailureReason,
    ImportSummary, ManualEntryError, Registry, Terrain, TerrainError, TerrainId, DEFAULT_PALETTE,
};

#[doc(inline)]
pub use io::{segment_label, terrain_name, DocumentSource, InMemoryDocument, TextFile};
