use std::fmt;

/// Reasons a ring is rejected before it becomes a terrain.
#[derive(Clone, Debug, PartialEq)]
pub enum TerrainError {
    /// Fewer than 3 points were supplied.
    TooFewPoints { count: usize },
    /// A coordinate is NaN or infinite (`index` is 1-based).
    NonFiniteCoordinate { index: usize },
    /// The projection service failed for a point.
    Projection(String),
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { count } =>
                write!(f, "at least 3 points are required to form a terrain (got {count})"),
            Self::NonFiniteCoordinate { index } =>
                write!(f, "point {index} has a non-numeric coordinate"),
            Self::Projection(msg) => write!(f, "projection failed: {msg}"),
        }
    }
}

impl std::error::Error for TerrainError {}
