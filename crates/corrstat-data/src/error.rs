//! Error types for dataset loading and queries.

use std::path::PathBuf;

/// Result type alias for dataset operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors raised while loading or querying the indicator snapshot.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The snapshot file could not be read.
    #[error("failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON or has the wrong shape.
    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required query parameter was empty.
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    /// The name does not match any indicator column.
    #[error(
        "unknown indicator '{0}' (expected one of GDP, Population, LifeExpectancy, HealthExpenditure)"
    )]
    UnknownIndicator(String),

    /// The year is outside the selectable range.
    #[error("year {year} is outside {first}..={last}")]
    YearOutOfRange { year: i32, first: i32, last: i32 },
}
