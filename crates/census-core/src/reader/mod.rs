/// Projected CSV loading with missing-value normalization.
///
/// Both input tables are read the same way: the caller names the columns
/// it wants, in order, and gets back one cell vector per source row in
/// that order. Columns the source does not carry are synthesized as
/// all-[`MISSING`]; present-but-empty cells are normalized to [`MISSING`]
/// too, so downstream code never sees an absent value. Extra source
/// columns are ignored. No row is dropped or reordered.
use crate::error::CensusError;
use crate::model::record::{DOWNLOAD_COLUMNS, FILE_INFO_COLUMNS};
use crate::model::{DownloadRecord, FileRecord, MISSING};
use compact_str::CompactString;
use std::path::Path;
use tracing::debug;

/// Read `path` as headed CSV, projecting `columns` in the given order.
///
/// Fails with [`CensusError::Read`] when the file cannot be opened or a
/// row cannot be parsed (including ragged rows).
pub fn read_columns(
    path: &Path,
    columns: &[&str],
) -> Result<Vec<Vec<CompactString>>, CensusError> {
    let read_err = |source| CensusError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(read_err)?;

    // Position of each requested column in the source header; `None` for
    // columns the source does not carry.
    let headers = reader.headers().map_err(read_err)?.clone();
    let positions: Vec<Option<usize>> = columns
        .iter()
        .map(|col| headers.iter().position(|h| h == *col))
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(read_err)?;
        let row = positions
            .iter()
            .map(|pos| match pos.and_then(|i| record.get(i)) {
                Some(cell) if !cell.is_empty() => CompactString::from(cell),
                _ => CompactString::from(MISSING),
            })
            .collect();
        rows.push(row);
    }

    debug!("read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load the file-metadata catalog: one [`FileRecord`] per source row.
pub fn load_file_records(path: &Path) -> Result<Vec<FileRecord>, CensusError> {
    let rows = read_columns(path, &FILE_INFO_COLUMNS)?;
    Ok(rows.into_iter().map(FileRecord::from_row).collect())
}

/// Load the download-event log: one [`DownloadRecord`] per source row.
pub fn load_download_records(path: &Path) -> Result<Vec<DownloadRecord>, CensusError> {
    let rows = read_columns(path, &DOWNLOAD_COLUMNS)?;
    Ok(rows.into_iter().map(DownloadRecord::from_row).collect())
}
