/// Error taxonomy for a census run.
///
/// Every variant is fatal: nothing is retried and no partial output is
/// cleaned up. Absent requested columns are NOT an error — the reader
/// synthesizes them as all-missing instead (see [`crate::reader`]).
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CensusError {
    /// Source file missing, unreadable, or unparsable as CSV.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Destination path unwritable.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Configuration file present but unreadable.
    #[error("failed to read config {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file present but not valid JSON for [`crate::CensusConfig`].
    #[error("invalid config {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
