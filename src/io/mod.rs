mod document;
mod geojson;
mod listing;

pub use document::{terrain_name, DocumentSource, InMemoryDocument, TextFile};
pub use listing::segment_label;
