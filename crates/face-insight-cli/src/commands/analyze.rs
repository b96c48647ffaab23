//! Analyze command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::{debug, info, warn};

use face_insight_adapters::FsDetectionSource;
use face_insight_core::analyzer::{AnalyzerConfig, EmotionThresholds, SuggestionThresholds};
use face_insight_core::domain::{AnalysisReport, HealthLevel};
use face_insight_core::ports::{DetectionSource, ProgressEvent, ProgressSink, ResultOutput};
use face_insight_core::FaceAnalyzer;

use crate::config::AppConfig;
use crate::output::{JsonOutput, ProgressBar};

use super::ExitCode;

/// Output format for analysis results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON array of all reports.
    Json,
    /// One JSON report per line.
    Jsonl,
}

/// Arguments for the analyze command
#[derive(Args, Clone)]
pub struct AnalyzeArgs {
    /// Record files or directories to analyze
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Symmetry score below which a centering suggestion is issued (0-100)
    #[arg(long, value_name = "SCORE", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub symmetry_threshold: Option<u8>,

    /// Eye-health score below which a rest suggestion is issued (0-100)
    #[arg(long, value_name = "SCORE", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub eye_health_threshold: Option<u8>,

    /// Smile probability below which a smile suggestion is issued (0.0-1.0)
    #[arg(long, value_name = "PROB", value_parser = parse_probability)]
    pub smile_threshold: Option<f32>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Show a progress bar on stderr
    #[arg(long)]
    pub progress: bool,

    /// Suppress result output, only set the exit code
    #[arg(short, long)]
    pub quiet: bool,

    /// Loaded configuration (populated by `with_config`, not a CLI flag)
    #[arg(skip)]
    pub config: Option<AppConfig>,
}

/// Parses a probability argument, enforcing the 0.0-1.0 range.
fn parse_probability(s: &str) -> std::result::Result<f32, String> {
    let value: f32 = s.parse().map_err(|_| format!("invalid number: {s}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("must be between 0.0 and 1.0, got {value}"))
    }
}

impl AnalyzeArgs {
    /// Applies configuration file values to unset CLI arguments.
    ///
    /// CLI flags take priority; config values fill the gaps.
    #[must_use]
    pub fn with_config(mut self, config: AppConfig) -> Self {
        if !self.recursive {
            self.recursive = config.general.recursive.unwrap_or(false);
        }
        if self.symmetry_threshold.is_none() {
            self.symmetry_threshold = config.suggestions.symmetry;
        }
        if self.eye_health_threshold.is_none() {
            self.eye_health_threshold = config.suggestions.eye_health;
        }
        if self.smile_threshold.is_none() {
            self.smile_threshold = config.suggestions.smile;
        }
        if self.format.is_none() {
            self.format = config.output.format.as_deref().and_then(|f| match f {
                "json" => Some(OutputFormat::Json),
                "jsonl" => Some(OutputFormat::Jsonl),
                _ => None,
            });
        }
        if !self.pretty {
            self.pretty = config.output.pretty.unwrap_or(false);
        }
        if !self.progress {
            self.progress = config.output.progress.unwrap_or(false);
        }
        self.config = Some(config);
        self
    }

    /// Builds the analyzer configuration from resolved arguments.
    fn analyzer_config(&self) -> AnalyzerConfig {
        let mut emotion = EmotionThresholds::default();
        let mut suggestions = SuggestionThresholds::default();

        if let Some(config) = &self.config {
            if let Some(t) = config.emotion.happy_smile {
                emotion.happy_smile = t;
            }
            if let Some(t) = config.emotion.wink_eye_gap {
                emotion.wink_eye_gap = t;
            }
            if let Some(t) = config.emotion.wink_closed_eye {
                emotion.wink_closed_eye = t;
            }
            if let Some(t) = config.suggestions.yaw {
                suggestions.yaw = t;
            }
            if let Some(t) = config.suggestions.pitch {
                suggestions.pitch = t;
            }
        }

        if let Some(t) = self.symmetry_threshold {
            suggestions.symmetry = t;
        }
        if let Some(t) = self.eye_health_threshold {
            suggestions.eye_health = t;
        }
        if let Some(t) = self.smile_threshold {
            suggestions.smile = t;
        }

        AnalyzerConfig {
            emotion,
            suggestions,
        }
    }
}

/// Result of an analyze run.
pub struct AnalyzeResult {
    /// Records analyzed successfully.
    pub processed: usize,
    /// Records skipped due to errors.
    pub skipped: usize,
    /// Records whose overall condition needs attention.
    pub needs_attention: usize,
    /// Process exit code for this run.
    pub exit_code: ExitCode,
}

/// Runs the analyze command.
pub fn run(args: &AnalyzeArgs) -> Result<AnalyzeResult> {
    let args = args.clone().with_config(AppConfig::load());

    anyhow::ensure!(!args.paths.is_empty(), "No paths specified");

    let source = FsDetectionSource::new(args.paths.clone(), args.recursive);
    let analyzer = FaceAnalyzer::new(args.analyzer_config());

    let format = args.format.unwrap_or(OutputFormat::Jsonl);
    let output: Option<JsonOutput> = if args.quiet {
        None
    } else {
        Some(match format {
            OutputFormat::Json => JsonOutput::stdout_array(args.pretty),
            OutputFormat::Jsonl => JsonOutput::stdout_lines(args.pretty),
        })
    };

    let progress: Option<Arc<dyn ProgressSink>> = if args.progress {
        Some(Arc::new(ProgressBar::new(source.count_hint())))
    } else {
        None
    };

    let emit = |event: ProgressEvent| {
        if let Some(sink) = &progress {
            sink.on_event(event);
        }
    };

    let mut processed = 0usize;
    let mut skipped = 0usize;
    let mut needs_attention = 0usize;
    let total = source.count_hint();

    for (index, item) in source.records().enumerate() {
        let sourced = match item {
            Ok(s) => s,
            Err(e) => {
                warn!("Skipping record: {e:#}");
                emit(ProgressEvent::Skipped {
                    source: "<unknown>".to_string(),
                    reason: format!("{e:#}"),
                });
                skipped += 1;
                continue;
            }
        };

        emit(ProgressEvent::Started {
            source: sourced.source.clone(),
            index,
            total,
        });
        debug!("Analyzing {} frame {}", sourced.source, sourced.frame_index);

        let result = analyzer.analyze(&sourced.record);
        if result.face_detected
            && HealthLevel::from_score(result.face_condition.overall_score)
                == HealthLevel::NeedsAttention
        {
            needs_attention += 1;
        }

        let report = AnalysisReport {
            source: sourced.source,
            frame_index: sourced.frame_index,
            result,
        };

        if let Some(out) = &output {
            out.write(&report)
                .with_context(|| format!("Failed to write report for {}", report.source))?;
        }
        emit(ProgressEvent::Completed { report });
        processed += 1;
    }

    if let Some(out) = &output {
        out.flush().context("Failed to flush output")?;
    }
    emit(ProgressEvent::Finished { processed, skipped });

    info!("Processed {processed} records, skipped {skipped}, {needs_attention} need attention");

    let exit_code = if needs_attention > 0 {
        ExitCode::NeedsAttention
    } else {
        ExitCode::Success
    };

    Ok(AnalyzeResult {
        processed,
        skipped,
        needs_attention,
        exit_code,
    })
}
