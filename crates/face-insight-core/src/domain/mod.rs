//! Core domain types for face analysis.

mod condition;
mod detection;
mod emotion;
mod geometry;
mod landmark;
mod result;

pub use condition::{FaceCondition, HealthLevel};
pub use detection::{DetectionRecord, FaceObservation};
pub use emotion::Emotion;
pub use geometry::{BoundingBox, Point};
pub use landmark::{Contour, ContourType, Landmark, LandmarkType, MeshTriangle};
pub use result::{AnalysisReport, AnalysisResult};
