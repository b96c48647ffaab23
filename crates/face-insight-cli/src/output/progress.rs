//! Progress bar adapter using indicatif.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};

use face_insight_core::domain::HealthLevel;
use face_insight_core::{ProgressEvent, ProgressSink};

/// Progress bar adapter for CLI output.
pub struct ProgressBar {
    bar: IndicatifBar,
}

impl ProgressBar {
    /// Creates a new progress bar.
    ///
    /// # Arguments
    ///
    /// * `total` - Total number of record files, if known
    #[must_use]
    pub fn new(total: Option<usize>) -> Self {
        let bar = total.map_or_else(IndicatifBar::new_spinner, |t| IndicatifBar::new(t as u64));

        if let Ok(style) = ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        ) {
            bar.set_style(style.progress_chars("#>-"));
        }

        Self { bar }
    }
}

impl ProgressSink for ProgressBar {
    fn on_event(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::Started { source, index, total } => {
                if let Some(t) = total {
                    self.bar.set_length(t as u64);
                }
                self.bar.set_position(index as u64);
                self.bar.set_message(source);
            }
            ProgressEvent::Completed { report } => {
                self.bar.inc(1);
                if report.result.face_detected {
                    let level =
                        HealthLevel::from_score(report.result.face_condition.overall_score);
                    self.bar.set_message(format!(
                        "{}: {} ({})",
                        report.source,
                        report.result.emotion.label(),
                        level.label()
                    ));
                } else {
                    self.bar
                        .set_message(format!("{}: no face", report.source));
                }
            }
            ProgressEvent::Skipped { source, reason } => {
                self.bar.inc(1);
                self.bar.println(format!("WARN: Skipping {source}: {reason}"));
            }
            ProgressEvent::Finished { processed, skipped } => {
                self.bar.finish_with_message(format!(
                    "Done: {processed} processed, {skipped} skipped"
                ));
            }
        }
    }
}
