//! Progress reporting port for UI integration.

use crate::domain::AnalysisReport;

/// Events emitted during a batch analysis for progress tracking.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Analysis started for a record.
    Started {
        /// Source of the record.
        source: String,
        /// Index in the batch (0-based).
        index: usize,
        /// Total records in the batch, if known.
        total: Option<usize>,
    },
    /// Analysis completed for a record.
    Completed {
        /// The analysis report.
        report: AnalysisReport,
    },
    /// A record was skipped due to an error.
    Skipped {
        /// Source of the record.
        source: String,
        /// Reason for skipping.
        reason: String,
    },
    /// All records have been processed.
    Finished {
        /// Total records processed successfully.
        processed: usize,
        /// Total records skipped.
        skipped: usize,
    },
}

/// Port for receiving progress events.
pub trait ProgressSink: Send + Sync {
    /// Called when a progress event occurs.
    fn on_event(&self, event: ProgressEvent);
}
