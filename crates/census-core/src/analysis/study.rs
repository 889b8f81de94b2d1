/// Per-study rollups.
use crate::model::{DownloadRecord, FileRecord, FrequencyTable};

/// Download counts per study.
///
/// The missing marker is a valid key: download events with no recorded
/// study rank alongside real studies rather than being dropped, so the
/// table's total always equals the number of log rows.
pub fn downloads_by_study(downloads: &[DownloadRecord]) -> FrequencyTable {
    FrequencyTable::tally(downloads.iter().map(|d| d.study.clone()))
}

/// Catalog file counts per study. Same missing-marker handling as
/// [`downloads_by_study`].
pub fn files_by_study(files: &[FileRecord]) -> FrequencyTable {
    FrequencyTable::tally(files.iter().map(|f| f.study.clone()))
}
