//! Filesystem adapter for loading detection records.
//!
//! Records arrive as JSON produced by the detector harness: a `.json`
//! file holds one record or an array of records, a `.jsonl` file holds
//! one record per line.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use face_insight_core::{DetectionRecord, DetectionSource, SourcedRecord};
use tracing::{debug, warn};

/// Supported record file extensions.
const RECORD_EXTENSIONS: &[&str] = &["json", "jsonl"];

/// Filesystem detection-record source adapter.
pub struct FsDetectionSource {
    paths: Vec<PathBuf>,
    recursive: bool,
}

impl FsDetectionSource {
    /// Creates a new filesystem record source.
    ///
    /// # Arguments
    ///
    /// * `paths` - Files or directories to scan
    /// * `recursive` - Whether to recurse into subdirectories
    #[must_use]
    pub const fn new(paths: Vec<PathBuf>, recursive: bool) -> Self {
        Self { paths, recursive }
    }

    /// Collects all record files from the configured paths.
    fn collect_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for path in &self.paths {
            if path.is_file() {
                if is_record_file(path) {
                    files.push(path.clone());
                } else {
                    warn!("Unsupported file type: {}", path.display());
                }
            } else if path.is_dir() {
                self.collect_from_dir(path, &mut files);
            } else {
                warn!("Path does not exist: {}", path.display());
            }
        }

        files
    }

    fn collect_from_dir(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        let entries = match std::fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                warn!("Failed to read directory {}: {e}", dir.display());
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() && is_record_file(&path) {
                files.push(path);
            } else if path.is_dir() && self.recursive {
                self.collect_from_dir(&path, files);
            }
        }
    }
}

impl DetectionSource for FsDetectionSource {
    fn records(&self) -> Box<dyn Iterator<Item = Result<SourcedRecord>> + Send + '_> {
        let files = self.collect_files();
        debug!("Found {} record files", files.len());

        Box::new(files.into_iter().flat_map(|path| match load_records(&path) {
            Ok(records) => records.into_iter().map(Ok).collect::<Vec<_>>(),
            Err(e) => vec![Err(e)],
        }))
    }

    fn count_hint(&self) -> Option<usize> {
        Some(self.collect_files().len())
    }
}

/// Checks if a path has a supported record extension.
fn is_record_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .is_some_and(|e| RECORD_EXTENSIONS.contains(&e.as_str()))
}

/// Loads all detection records from one file.
fn load_records(path: &Path) -> Result<Vec<SourcedRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read record file: {}", path.display()))?;
    let source = path.to_string_lossy().into_owned();

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let records = if ext == "jsonl" {
        parse_jsonl(&content, path)?
    } else {
        parse_json(&content, path)?
    };

    Ok(records
        .into_iter()
        .enumerate()
        .map(|(frame_index, record)| SourcedRecord {
            source: source.clone(),
            frame_index,
            record,
        })
        .collect())
}

/// Parses a `.json` file: a single record or an array of records.
fn parse_json(content: &str, path: &Path) -> Result<Vec<DetectionRecord>> {
    if content.trim_start().starts_with('[') {
        serde_json::from_str(content)
            .with_context(|| format!("Failed to parse record array: {}", path.display()))
    } else {
        let record = serde_json::from_str(content)
            .with_context(|| format!("Failed to parse record: {}", path.display()))?;
        Ok(vec![record])
    }
}

/// Parses a `.jsonl` file: one record per non-blank line.
fn parse_jsonl(content: &str, path: &Path) -> Result<Vec<DetectionRecord>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_no, line)| {
            serde_json::from_str(line).with_context(|| {
                format!("Failed to parse record at {}:{}", path.display(), line_no + 1)
            })
        })
        .collect()
}
