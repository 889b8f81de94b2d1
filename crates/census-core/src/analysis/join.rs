/// Catalog/download-log join and the per-format download rollup.
///
/// Membership is decided through hash lookups so the join stays O(n + m).
/// Both tables run to the tens or hundreds of thousands of rows; a nested
/// scan over the pair is off the table as a hard constraint, not an
/// optimisation to revisit.
use crate::model::{DownloadRecord, FileRecord, FrequencyTable};
use compact_str::CompactString;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

/// A catalog record whose id also appears in the download log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub format: CompactString,
    pub id: CompactString,
}

/// One `(format, id)` entry per catalog record whose id was downloaded at
/// least once, in catalog order.
///
/// Download ids with no catalog record produce nothing here. That is why
/// [`downloads_by_format`] totals below the per-identifier download total
/// whenever the log mentions files the catalog does not list — an
/// expected property of the assessment, preserved deliberately.
pub fn intersect_formats(
    files: &[FileRecord],
    downloads: &[DownloadRecord],
) -> Vec<IntersectionEntry> {
    let downloaded: HashSet<&str> = downloads.iter().map(|d| d.id.as_str()).collect();

    files
        .iter()
        .filter(|f| downloaded.contains(f.id.as_str()))
        .map(|f| IntersectionEntry {
            format: f.format.clone(),
            id: f.id.clone(),
        })
        .collect()
}

/// Download counts rolled up by file format.
///
/// Each id of the per-identifier ranking is resolved to its format
/// through `entries`, and its download count is added to that format's
/// bucket. Ids absent from `entries` contribute nothing. Buckets are
/// seeded in entry order, so equal totals rank by first appearance in
/// the catalog.
pub fn downloads_by_format(
    entries: &[IntersectionEntry],
    by_identifier: &FrequencyTable,
) -> FrequencyTable {
    let mut buckets: IndexMap<CompactString, u64> = IndexMap::new();
    let mut format_of: HashMap<&str, &CompactString> = HashMap::with_capacity(entries.len());
    for entry in entries {
        buckets.entry(entry.format.clone()).or_insert(0);
        format_of.insert(entry.id.as_str(), &entry.format);
    }

    for (id, count) in by_identifier.iter() {
        if let Some(format) = format_of.get(id) {
            if let Some(bucket) = buckets.get_mut(format.as_str()) {
                *bucket += count;
            }
        }
    }

    FrequencyTable::from_counts(buckets)
}
