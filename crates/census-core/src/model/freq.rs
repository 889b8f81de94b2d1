/// Ordered frequency tally.
///
/// Accumulation happens in an `IndexMap`, so distinct keys remember their
/// first-seen order; the final ranking sort is stable, so equal counts
/// keep that order. This makes the tie-break contract explicit and
/// testable instead of an accident of hash iteration.
use compact_str::CompactString;
use indexmap::IndexMap;

/// A single ranked entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqEntry {
    pub key: CompactString,
    pub count: u64,
}

/// Frequency-ranked `(key, count)` pairs.
///
/// Keys are unique, counts come from [`FrequencyTable::tally`] and are at
/// least 1, and entries are sorted by count descending with first-seen
/// order breaking ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<FreqEntry>,
}

impl FrequencyTable {
    /// Tally a sequence of keys into a ranked table.
    ///
    /// Single pass; the sum of all counts equals the number of input keys.
    pub fn tally<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = CompactString>,
    {
        let mut counts: IndexMap<CompactString, u64> = IndexMap::new();
        for key in keys {
            *counts.entry(key).or_insert(0) += 1;
        }
        Self::from_counts(counts)
    }

    /// Rank an already-accumulated map, keeping its insertion order for
    /// equal counts.
    pub(crate) fn from_counts(counts: IndexMap<CompactString, u64>) -> Self {
        let mut entries: Vec<FreqEntry> = counts
            .into_iter()
            .map(|(key, count)| FreqEntry { key, count })
            .collect();
        // Stable sort: ties stay in first-seen order.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    /// Ranked entries, highest count first.
    pub fn entries(&self) -> &[FreqEntry] {
        &self.entries
    }

    /// Iterate `(key, count)` in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|e| (e.key.as_str(), e.count))
    }

    /// Count for `key`, if present.
    pub fn get(&self, key: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.key.as_str() == key)
            .map(|e| e.count)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no keys were tallied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
