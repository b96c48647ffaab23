//! JSON output adapter.

use std::io::{self, Write};
use std::sync::Mutex;

use anyhow::Result;
use face_insight_core::{AnalysisReport, ResultOutput};

/// Output layout for the JSON adapter.
enum Layout {
    /// One report per line, written as each arrives.
    Lines,
    /// All reports buffered and written as one array on flush.
    Array,
}

/// JSON output adapter for analysis reports.
pub struct JsonOutput {
    writer: Mutex<Box<dyn Write + Send>>,
    layout: Layout,
    pretty: bool,
    buffer: Mutex<Vec<AnalysisReport>>,
}

impl JsonOutput {
    /// Creates a JSON Lines output writing to stdout.
    #[must_use]
    pub fn stdout_lines(pretty: bool) -> Self {
        Self::new(Box::new(io::stdout()), Layout::Lines, pretty)
    }

    /// Creates a JSON array output writing to stdout.
    ///
    /// Reports are buffered and emitted as one array when `flush()` is
    /// called.
    #[must_use]
    pub fn stdout_array(pretty: bool) -> Self {
        Self::new(Box::new(io::stdout()), Layout::Array, pretty)
    }

    fn new(writer: Box<dyn Write + Send>, layout: Layout, pretty: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            layout,
            pretty,
            buffer: Mutex::new(Vec::new()),
        }
    }

    fn serialize<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl ResultOutput for JsonOutput {
    #[allow(clippy::significant_drop_tightening)]
    fn write(&self, report: &AnalysisReport) -> Result<()> {
        match self.layout {
            Layout::Lines => {
                let json = self.serialize(report)?;
                let mut writer = self
                    .writer
                    .lock()
                    .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
                writeln!(writer, "{json}")?;
            }
            Layout::Array => {
                self.buffer
                    .lock()
                    .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?
                    .push(report.clone());
            }
        }
        Ok(())
    }

    #[allow(clippy::significant_drop_tightening)]
    fn flush(&self) -> Result<()> {
        if matches!(self.layout, Layout::Array) {
            let buffer = self
                .buffer
                .lock()
                .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?
                .clone();
            let json = self.serialize(&buffer)?;
            let mut writer = self
                .writer
                .lock()
                .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
            writeln!(writer, "{json}")?;
            writer.flush()?;
            return Ok(());
        }

        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writer.flush()?;
        Ok(())
    }
}
