/// Data model for the census datasets.
///
/// Re-exports the row record types and the ordered frequency tally.
pub mod freq;
pub mod record;

pub use freq::{FreqEntry, FrequencyTable};
pub use record::{DownloadRecord, FileRecord, MISSING};
