/// Two-block ranked CSV reports.
///
/// Each report carries two rankings on one sheet: a header row of the
/// left block's labels, two blank spacer columns, and the right block's
/// labels; then the left block's rows with the right columns empty,
/// followed by the right block's rows below them with the left columns
/// empty. The blocks are written as two sequential passes, never zipped
/// side by side — rankings of different lengths simply leave the other
/// block's columns blank for the overhang.
use crate::error::CensusError;
use crate::model::FrequencyTable;
use std::path::Path;

/// Token written in place of an empty-string key (the empty-extension
/// bucket, most commonly). Reports never contain an empty value cell for
/// a ranked key.
pub const NULL_TOKEN: &str = "[NULL]";

/// One ranked block of a report: a labelled value/count column pair.
#[derive(Debug, Clone, Copy)]
pub struct ReportBlock<'a> {
    pub value_label: &'a str,
    pub count_label: &'a str,
    pub table: &'a FrequencyTable,
}

/// Write a two-block report to `path` as UTF-8 CSV.
///
/// Fails with [`CensusError::Write`] when the destination cannot be
/// created or written.
pub fn write_report(
    path: &Path,
    left: &ReportBlock,
    right: &ReportBlock,
) -> Result<(), CensusError> {
    let write_err = |source| CensusError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(write_err)?;

    writer
        .write_record([
            left.value_label,
            left.count_label,
            "",
            "",
            right.value_label,
            right.count_label,
        ])
        .map_err(write_err)?;

    for (key, count) in left.table.iter() {
        let count = count.to_string();
        writer
            .write_record([display_key(key), count.as_str(), "", "", "", ""])
            .map_err(write_err)?;
    }

    for (key, count) in right.table.iter() {
        let count = count.to_string();
        writer
            .write_record(["", "", "", "", display_key(key), count.as_str()])
            .map_err(write_err)?;
    }

    writer
        .flush()
        .map_err(|e| write_err(csv::Error::from(e)))?;
    Ok(())
}

/// Substitute the null token for an empty key.
fn display_key(key: &str) -> &str {
    if key.is_empty() {
        NULL_TOKEN
    } else {
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compact_str::CompactString;
    use tempfile::TempDir;

    fn table(keys: &[&str]) -> FrequencyTable {
        FrequencyTable::tally(keys.iter().map(|s| CompactString::from(*s)))
    }

    fn read_rows(path: &Path) -> Vec<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();
        reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect()
    }

    /// Header layout: left labels, two blank spacers, right labels.
    #[test]
    fn header_has_six_labels_with_spacers() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.csv");
        let left = table(&["csv"]);
        let right = table(&[".csv"]);

        write_report(
            &path,
            &ReportBlock {
                value_label: "fileFormat value",
                count_label: "fileFormat count",
                table: &left,
            },
            &ReportBlock {
                value_label: "fileName extension value",
                count_label: "fileName extension count",
                table: &right,
            },
        )
        .unwrap();

        let rows = read_rows(&path);
        assert_eq!(
            rows[0],
            vec![
                "fileFormat value",
                "fileFormat count",
                "",
                "",
                "fileName extension value",
                "fileName extension count"
            ]
        );
    }

    /// Blocks are appended sequentially: all left rows first (right
    /// columns empty), then all right rows (left columns empty).
    #[test]
    fn blocks_are_sequential_not_zipped() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.csv");
        let left = table(&["csv", "csv", "txt"]); // 2 entries
        let right = table(&[".gz"]); // 1 entry

        write_report(
            &path,
            &ReportBlock {
                value_label: "v",
                count_label: "c",
                table: &left,
            },
            &ReportBlock {
                value_label: "w",
                count_label: "d",
                table: &right,
            },
        )
        .unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 4, "header + 2 left rows + 1 right row");
        assert_eq!(rows[1], vec!["csv", "2", "", "", "", ""]);
        assert_eq!(rows[2], vec!["txt", "1", "", "", "", ""]);
        assert_eq!(rows[3], vec!["", "", "", "", ".gz", "1"]);
    }

    /// Empty-string keys are rendered as the null token, never as an
    /// empty field — in either block.
    #[test]
    fn empty_key_renders_as_null_token() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.csv");
        let left = table(&["", "csv"]);
        let right = table(&["", ""]);

        write_report(
            &path,
            &ReportBlock {
                value_label: "v",
                count_label: "c",
                table: &left,
            },
            &ReportBlock {
                value_label: "w",
                count_label: "d",
                table: &right,
            },
        )
        .unwrap();

        let rows = read_rows(&path);
        let left_values: Vec<&str> = rows[1..=2].iter().map(|r| r[0].as_str()).collect();
        assert!(left_values.contains(&NULL_TOKEN));
        assert!(!left_values.contains(&""));
        assert_eq!(rows[3][4], NULL_TOKEN, "right block substitutes too");
    }

    /// Round-trip: re-reading the left block recovers the same ranked
    /// pairs in the same order.
    #[test]
    fn left_block_round_trips() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.csv");
        let left = table(&["a", "b", "b", "b", "c", "c"]);
        let right = table(&[]);

        write_report(
            &path,
            &ReportBlock {
                value_label: "v",
                count_label: "c",
                table: &left,
            },
            &ReportBlock {
                value_label: "w",
                count_label: "d",
                table: &right,
            },
        )
        .unwrap();

        let rows = read_rows(&path);
        let recovered: Vec<(String, u64)> = rows[1..]
            .iter()
            .map(|r| (r[0].clone(), r[1].parse().unwrap()))
            .collect();
        let expected: Vec<(String, u64)> = left
            .iter()
            .map(|(k, c)| (k.to_owned(), c))
            .collect();
        assert_eq!(recovered, expected);
    }

    /// An unwritable destination is a `Write` error.
    #[test]
    fn unwritable_path_is_write_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("no_such_dir").join("out.csv");
        let t = table(&["x"]);

        let err = write_report(
            &path,
            &ReportBlock {
                value_label: "v",
                count_label: "c",
                table: &t,
            },
            &ReportBlock {
                value_label: "w",
                count_label: "d",
                table: &t,
            },
        )
        .unwrap_err();
        assert!(matches!(err, CensusError::Write { .. }));

        // Nothing was created at the destination.
        assert!(!path.exists());
    }
}
