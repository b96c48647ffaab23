//! Detection-record source port.

use crate::domain::DetectionRecord;

/// A detection record tagged with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcedRecord {
    /// Source tag (file path or similar).
    pub source: String,
    /// Zero-based index of the record within its source.
    pub frame_index: usize,
    /// The detection record itself.
    pub record: DetectionRecord,
}

/// Port for loading detection records from a source.
pub trait DetectionSource: Send + Sync {
    /// Returns an iterator over records from this source.
    ///
    /// # Errors
    ///
    /// Individual items may be errors if a record fails to load or parse.
    fn records(&self) -> Box<dyn Iterator<Item = anyhow::Result<SourcedRecord>> + Send + '_>;

    /// Returns the total number of record files, if known.
    fn count_hint(&self) -> Option<usize>;
}
