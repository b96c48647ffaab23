//! Detection records, the input boundary of the analysis core.
//!
//! One [`DetectionRecord`] per analyzed frame, produced by an external
//! face detector. Probabilities are independently optional; landmark and
//! contour maps carry the detector's own identifiers and are remapped by
//! `extract` into the system vocabulary. The core never validates shapes
//! here: absent fields are normal, out-of-range values are clamped at the
//! scoring boundary.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{BoundingBox, MeshTriangle, Point};

/// Everything the detector reports about one frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetectionRecord {
    /// Detected faces, in the detector's result ordering. The analyzer
    /// consumes only the first entry (single-subject design).
    #[serde(default)]
    pub faces: Vec<FaceObservation>,
}

impl DetectionRecord {
    /// A record with a single face.
    #[must_use]
    pub fn single(face: FaceObservation) -> Self {
        Self { faces: vec![face] }
    }
}

/// Raw signals for one detected face.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceObservation {
    /// Face bounding box in image-pixel coordinates.
    pub bounding_box: BoundingBox,
    /// Probability the subject is smiling, in `[0, 1]` when present.
    pub smiling_probability: Option<f32>,
    /// Probability the left eye is open, in `[0, 1]` when present.
    pub left_eye_open_probability: Option<f32>,
    /// Probability the right eye is open, in `[0, 1]` when present.
    pub right_eye_open_probability: Option<f32>,
    /// Head pitch in degrees.
    pub head_rotation_x: f32,
    /// Head yaw in degrees.
    pub head_rotation_y: f32,
    /// Head roll in degrees.
    pub head_rotation_z: f32,
    /// Detector landmark identifiers to pixel positions. Keys are present
    /// only for landmarks the detector found.
    pub landmarks: HashMap<String, Point>,
    /// Detector contour identifiers to ordered point sequences.
    pub contours: HashMap<String, Vec<Point>>,
    /// Optional face-mesh points, passed through unmodified.
    pub mesh_points: Vec<Point>,
    /// Optional face-mesh triangles, passed through unmodified.
    pub mesh_triangles: Vec<MeshTriangle>,
}
