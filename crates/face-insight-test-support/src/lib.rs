//! Test support utilities for face-insight.
//!
//! Provides mocks and face-observation builders for testing the
//! analysis pipeline.
//!
//! # Example
//!
//! ```
//! use face_insight_test_support::{FaceObservationBuilder, MockDetectionSource};
//!
//! // Build canned observations
//! let happy = FaceObservationBuilder::smiling().record();
//! let wink = FaceObservationBuilder::winking().record();
//!
//! // Create a mock record source
//! let source = MockDetectionSource::new(vec![happy, wink]);
//! ```

mod builders;
mod mocks;

pub use builders::FaceObservationBuilder;
pub use mocks::{MockDetectionSource, MockProgressSink, MockResultOutput};
