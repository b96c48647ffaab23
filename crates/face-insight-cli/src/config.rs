//! Configuration file support for face-insight.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/face-insight/config.toml` (lowest priority)
//! - Project-local: `.face-insight.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General options.
    pub general: GeneralConfig,
    /// Emotion classifier thresholds.
    pub emotion: EmotionConfig,
    /// Suggestion check thresholds.
    pub suggestions: SuggestionsConfig,
    /// Output formatting settings.
    pub output: OutputConfig,
}

/// General configuration options.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Recurse into subdirectories by default.
    pub recursive: Option<bool>,
}

/// Emotion classifier configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct EmotionConfig {
    /// Minimum smile probability for happy (0.0-1.0).
    pub happy_smile: Option<f32>,
    /// Minimum eye-openness gap for a wink (0.0-1.0).
    pub wink_eye_gap: Option<f32>,
    /// One eye must be below this openness for a wink (0.0-1.0).
    pub wink_closed_eye: Option<f32>,
}

/// Suggestion check configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SuggestionsConfig {
    /// Symmetry score threshold (0-100).
    pub symmetry: Option<u8>,
    /// Eye-health score threshold (0-100).
    pub eye_health: Option<u8>,
    /// Head yaw threshold in degrees.
    pub yaw: Option<f32>,
    /// Head pitch threshold in degrees.
    pub pitch: Option<f32>,
    /// Smile probability threshold (0.0-1.0).
    pub smile: Option<f32>,
}

/// Output formatting configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "json" or "jsonl".
    pub format: Option<String>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
    /// Show progress bar.
    pub progress: Option<bool>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Priority (lowest to highest):
    /// 1. XDG config: `~/.config/face-insight/config.toml`
    /// 2. Project-local: `.face-insight.toml` (searched up from cwd)
    ///
    /// Missing files are silently ignored. Invalid values are logged as warnings.
    pub fn load() -> Self {
        let mut config = Self::default();

        // Load XDG config (lowest priority)
        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        // Load project-local config (higher priority, merged)
        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        // Validate merged config
        if let Err(e) = config.validate() {
            eprintln!("warning: {e}");
        }

        config
    }

    /// Validate configuration values are within acceptable ranges.
    fn validate(&self) -> Result<(), String> {
        // Probability validations (0.0-1.0 range)
        if let Some(t) = self.emotion.happy_smile {
            if !(0.0..=1.0).contains(&t) {
                return Err(format!("emotion.happy_smile must be 0.0-1.0, got {t}"));
            }
        }
        if let Some(t) = self.emotion.wink_eye_gap {
            if !(0.0..=1.0).contains(&t) {
                return Err(format!("emotion.wink_eye_gap must be 0.0-1.0, got {t}"));
            }
        }
        if let Some(t) = self.emotion.wink_closed_eye {
            if !(0.0..=1.0).contains(&t) {
                return Err(format!("emotion.wink_closed_eye must be 0.0-1.0, got {t}"));
            }
        }
        if let Some(t) = self.suggestions.smile {
            if !(0.0..=1.0).contains(&t) {
                return Err(format!("suggestions.smile must be 0.0-1.0, got {t}"));
            }
        }

        // Score thresholds (0-100)
        if let Some(t) = self.suggestions.symmetry {
            if t > 100 {
                return Err(format!("suggestions.symmetry must be 0-100, got {t}"));
            }
        }
        if let Some(t) = self.suggestions.eye_health {
            if t > 100 {
                return Err(format!("suggestions.eye_health must be 0-100, got {t}"));
            }
        }

        // Angle thresholds must be non-negative magnitudes
        if let Some(t) = self.suggestions.yaw {
            if t < 0.0 {
                return Err(format!("suggestions.yaw must be non-negative, got {t}"));
            }
        }
        if let Some(t) = self.suggestions.pitch {
            if t < 0.0 {
                return Err(format!("suggestions.pitch must be non-negative, got {t}"));
            }
        }

        // Output format validation
        if let Some(ref f) = self.output.format {
            if f != "json" && f != "jsonl" {
                return Err(format!("output.format must be 'json' or 'jsonl', got '{f}'"));
            }
        }

        Ok(())
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        // General
        self.general.recursive = other.general.recursive.or(self.general.recursive);

        // Emotion
        self.emotion.happy_smile = other.emotion.happy_smile.or(self.emotion.happy_smile);
        self.emotion.wink_eye_gap = other.emotion.wink_eye_gap.or(self.emotion.wink_eye_gap);
        self.emotion.wink_closed_eye = other
            .emotion
            .wink_closed_eye
            .or(self.emotion.wink_closed_eye);

        // Suggestions
        self.suggestions.symmetry = other.suggestions.symmetry.or(self.suggestions.symmetry);
        self.suggestions.eye_health = other.suggestions.eye_health.or(self.suggestions.eye_health);
        self.suggestions.yaw = other.suggestions.yaw.or(self.suggestions.yaw);
        self.suggestions.pitch = other.suggestions.pitch.or(self.suggestions.pitch);
        self.suggestions.smile = other.suggestions.smile.or(self.suggestions.smile);

        // Output
        self.output.format = other.output.format.or_else(|| self.output.format.take());
        self.output.pretty = other.output.pretty.or(self.output.pretty);
        self.output.progress = other.output.progress.or(self.output.progress);
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("face-insight").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for `.face-insight.toml` in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let config_path = dir.join(".face-insight.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    None
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}
