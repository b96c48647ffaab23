//! Result output port for writing analysis reports.

use crate::domain::AnalysisReport;

/// Port for outputting analysis reports.
pub trait ResultOutput: Send + Sync {
    /// Writes a single analysis report.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write(&self, report: &AnalysisReport) -> anyhow::Result<()>;

    /// Flushes any buffered output.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    fn flush(&self) -> anyhow::Result<()>;
}
