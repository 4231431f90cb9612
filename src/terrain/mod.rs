mod error;
mod import;
mod manual;
mod registry;
mod terrain;

pub use error::TerrainError;
pub use import::{ImportFailure, ImportFailureReason, ImportSummary};
pub use manual::{parse_manual_field, parse_manual_points, Axis, ManualEntryError};
pub use registry::{Registry, DEFAULT_PALETTE};
pub use terrain::{validate_ring, GeoPoint, Terrain, TerrainId};
