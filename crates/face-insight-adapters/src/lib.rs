//! Face Insight Adapters - External adapters for face-insight.
//!
//! Provides the filesystem detection-record source (JSON and JSON Lines
//! files).

pub mod fs;

pub use fs::FsDetectionSource;
