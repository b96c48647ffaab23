//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the analysis core and
//! external adapters.

mod detection_source;
mod progress;
mod result_output;

pub use detection_source::{DetectionSource, SourcedRecord};
pub use progress::{ProgressEvent, ProgressSink};
pub use result_output::ResultOutput;
