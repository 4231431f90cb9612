use std::fmt;

use crate::extract::extract_points;
use crate::io::{terrain_name, DocumentSource};
use crate::terrain::{Registry, TerrainError, TerrainId};

/// Why a document in a batch did not produce a terrain.
#[derive(Debug)]
pub enum ImportFailureReason {
    /// The document text could not be read.
    Unreadable(anyhow::Error),
    /// Fewer than 3 plausible coordinate rows were found.
    TooFewPoints(usize),
    /// The registry rejected the extracted ring.
    Rejected(TerrainError),
}

impl fmt::Display for ImportFailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable(e) => write!(f, "unreadable document: {e:#}"),
            Self::TooFewPoints(n) => write!(f, "found {n} coordinate row(s), at least 3 are required"),
            Self::Rejected(e) => write!(f, "{e}"),
        }
    }
}

#[derive(Debug)]
pub struct ImportFailure {
    pub document: String,
    pub reason: ImportFailureReason,
}

/// Outcome of importing a batch of documents.
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub added: Vec<TerrainId>,
    pub failed: Vec<ImportFailure>,
}

impl ImportSummary {
    /// One-line status for the whole batch.
    pub fn status_message(&self) -> String {
        let (ok, failed) = (self.added.len(), self.failed.len());
        match (ok, failed) {
            (0, _) => "No coordinates could be extracted from any document.".to_string(),
            (ok, 0) => format!("{ok} terrain(s) added to the map."),
            (ok, failed) => format!("{ok} succeeded, {failed} failed."),
        }
    }
}

impl Registry {
    /// Extract a terrain from each document in turn. A document that cannot be read or
    /// yields fewer than 3 points is recorded as failed and the batch continues.
    pub fn import_documents<I>(&mut self, documents: I) -> ImportSummary
    where
        I: IntoIterator,
        I::Item: DocumentSource,
    {
        let mut summary = ImportSummary::default();

        for doc in documents {
            match self.import_document(&doc) {
                Ok(id) => summary.added.push(id),
                Err(reason) => {
                    tracing::warn!(document = doc.name(), %reason, "document import failed");
                    summary.failed.push(ImportFailure { document: doc.name().to_string(), reason });
                }
            }
        }

        tracing::info!(added = summary.added.len(), failed = summary.failed.len(), "imported documents");
        summary
    }

    fn import_document(&mut self, doc: &impl DocumentSource) -> Result<TerrainId, ImportFailureReason> {
        let text = doc.read_text().map_err(ImportFailureReason::Unreadable)?;
        let points = extract_points(&text);
        if points.len() < 3 {
            return Err(ImportFailureReason::TooFewPoints(points.len()))
        }

        self.add(terrain_name(doc.name()), points)
            .map(|t| t.id())
            .map_err(ImportFailureReason::Rejected)
    }
}
