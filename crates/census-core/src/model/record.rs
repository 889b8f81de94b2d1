/// Row records for the two census datasets.
///
/// Every field is a `CompactString`: both tables are tens of thousands of
/// rows of short identifiers, format names, and study labels, so inline
/// storage avoids one heap allocation per cell for the common case.
/// Missing source cells hold [`MISSING`] rather than an `Option`, so a
/// record is always four (or three) plain strings and absent values flow
/// through the rollups as ordinary keys.
use compact_str::CompactString;

/// Marker stored for an absent or empty source cell.
///
/// Deliberately contains no `.` so a missing filename derives the empty
/// extension (see [`crate::analysis::name_extension`]).
pub const MISSING: &str = "null";

/// Column projection the catalog loader requests, in field order.
pub const FILE_INFO_COLUMNS: [&str; 4] = ["fileFormat", "name", "id", "study"];

/// Column projection the download-log loader requests, in field order.
pub const DOWNLOAD_COLUMNS: [&str; 3] = ["id", "name", "study"];

/// One row of the file-metadata catalog. `id` is unique per file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub format: CompactString,
    pub name: CompactString,
    pub id: CompactString,
    pub study: CompactString,
}

impl FileRecord {
    /// Build a record from a projected row (cells in [`FILE_INFO_COLUMNS`]
    /// order). Short rows pad with [`MISSING`].
    pub fn from_row(row: Vec<CompactString>) -> Self {
        let mut cells = row.into_iter();
        let mut next = || cells.next().unwrap_or_else(|| MISSING.into());
        Self {
            format: next(),
            name: next(),
            id: next(),
            study: next(),
        }
    }
}

/// One download event from the log. `id` refers to a [`FileRecord::id`]
/// but is not required to resolve: the log can cover files the catalog
/// snapshot no longer (or never) listed. Repeated downloads of one file
/// appear as repeated rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRecord {
    pub id: CompactString,
    pub name: CompactString,
    pub study: CompactString,
}

impl DownloadRecord {
    /// Build a record from a projected row (cells in [`DOWNLOAD_COLUMNS`]
    /// order). Short rows pad with [`MISSING`].
    pub fn from_row(row: Vec<CompactString>) -> Self {
        let mut cells = row.into_iter();
        let mut next = || cells.next().unwrap_or_else(|| MISSING.into());
        Self {
            id: next(),
            name: next(),
            study: next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_record_maps_cells_in_column_order() {
        let row = vec!["csv".into(), "data.csv".into(), "syn123".into(), "ROSMAP".into()];
        let record = FileRecord::from_row(row);
        assert_eq!(record.format, "csv");
        assert_eq!(record.name, "data.csv");
        assert_eq!(record.id, "syn123");
        assert_eq!(record.study, "ROSMAP");
    }

    #[test]
    fn download_record_maps_cells_in_column_order() {
        let row = vec!["syn123".into(), "data.csv".into(), "MSBB".into()];
        let record = DownloadRecord::from_row(row);
        assert_eq!(record.id, "syn123");
        assert_eq!(record.name, "data.csv");
        assert_eq!(record.study, "MSBB");
    }

    /// A short row must pad the trailing fields with the missing marker
    /// rather than panic.
    #[test]
    fn short_row_pads_with_missing() {
        let record = FileRecord::from_row(vec!["csv".into()]);
        assert_eq!(record.format, "csv");
        assert_eq!(record.name, MISSING);
        assert_eq!(record.id, MISSING);
        assert_eq!(record.study, MISSING);
    }

    /// The missing marker must never contain a dot — a missing filename
    /// has to land in the empty-extension bucket.
    #[test]
    fn missing_marker_has_no_dot() {
        assert!(!MISSING.contains('.'));
    }
}
