//! Analysis result types, the output boundary of the core.

use serde::{Deserialize, Serialize};

use super::{BoundingBox, Contour, Emotion, FaceCondition, Landmark, MeshTriangle, Point};

/// Complete analysis of one detection record.
///
/// The `Default` value is the documented no-face result: `face_detected`
/// false, `Neutral` emotion at zero confidence, zeroed condition, empty
/// lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Whether a face was present in the record.
    pub face_detected: bool,
    /// Face bounding box; absent when no face was detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    /// Classified emotion.
    pub emotion: Emotion,
    /// Heuristic strength of the emotion label, in `[0, 1]`. Not a
    /// statistical probability.
    pub emotion_confidence: f32,
    /// Raw smiling probability, zero when the detector omitted it.
    pub smiling_probability: f32,
    /// Raw left-eye-open probability, zero when omitted.
    pub left_eye_open_probability: f32,
    /// Raw right-eye-open probability, zero when omitted.
    pub right_eye_open_probability: f32,
    /// Head pitch in degrees.
    pub head_rotation_x: f32,
    /// Head yaw in degrees.
    pub head_rotation_y: f32,
    /// Head roll in degrees.
    pub head_rotation_z: f32,
    /// Multi-factor condition summary.
    pub face_condition: FaceCondition,
    /// Extracted landmarks, in fixed enumeration order.
    pub landmarks: Vec<Landmark>,
    /// Extracted contours, in fixed enumeration order.
    pub contours: Vec<Contour>,
    /// Mesh points passed through from the detector.
    pub mesh_points: Vec<Point>,
    /// Mesh triangles passed through from the detector.
    pub mesh_triangles: Vec<MeshTriangle>,
}

/// One analyzed frame tagged with its origin, as emitted by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Where the record came from (file path or other source tag).
    pub source: String,
    /// Zero-based index of the record within its source.
    pub frame_index: usize,
    /// The analysis result.
    pub result: AnalysisResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_no_face() {
        let result = AnalysisResult::default();
        assert!(!result.face_detected);
        assert!(result.bounding_box.is_none());
        assert_eq!(result.emotion, Emotion::Neutral);
        assert_eq!(result.emotion_confidence, 0.0);
        assert_eq!(result.face_condition, FaceCondition::default());
        assert!(result.landmarks.is_empty());
        assert!(result.contours.is_empty());
        assert!(result.mesh_points.is_empty());
        assert!(result.mesh_triangles.is_empty());
    }

    #[test]
    fn test_result_serializes_without_bbox_when_absent() {
        let json = serde_json::to_string(&AnalysisResult::default()).expect("serialize");
        assert!(!json.contains("bounding_box"));
    }
}
