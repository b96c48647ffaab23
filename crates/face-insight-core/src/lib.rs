//! Face Insight Core - Domain types and analysis logic
//!
//! This crate contains the domain types, the landmark/contour feature
//! extractor, and the rule-based emotion classifier and face-condition
//! scorer. It performs no I/O and holds no state: every analysis is a
//! pure function of one detection record.

pub mod analyzer;
pub mod domain;
pub mod extract;
pub mod ports;

pub use analyzer::{AnalyzerConfig, EmotionThresholds, FaceAnalyzer, SuggestionThresholds};
pub use domain::{
    AnalysisReport, AnalysisResult, BoundingBox, Contour, ContourType, DetectionRecord, Emotion,
    FaceCondition, FaceObservation, HealthLevel, Landmark, LandmarkType, MeshTriangle, Point,
};
pub use extract::{extract_contours, extract_landmarks};
pub use ports::{DetectionSource, ProgressEvent, ProgressSink, ResultOutput, SourcedRecord};
