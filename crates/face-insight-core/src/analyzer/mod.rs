//! The per-frame analysis entry point.
//!
//! [`FaceAnalyzer::analyze`] is a pure function of its input record: no
//! state survives between calls, and identical records yield identical
//! results. Rescaling for overlay drawing and any "latest result" holder
//! are caller concerns.

mod emotion;
mod scores;
mod suggestions;

pub use emotion::{detect_emotion, emotion_confidence, EmotionThresholds};
pub use scores::{
    eye_health_score, proportion_score, skin_health_estimate, symmetry_score, FALLBACK_SCORE,
    IDEAL_PROPORTION_RATIO,
};
pub use suggestions::{
    generate_suggestions, SuggestionThresholds, SUGGEST_CENTERED, SUGGEST_DEFAULT,
    SUGGEST_FACE_CAMERA, SUGGEST_HEAD_LEVEL, SUGGEST_SMILE, SUGGEST_TIRED_EYES,
};

use tracing::debug;

use crate::domain::{AnalysisResult, DetectionRecord, FaceCondition, FaceObservation, Landmark};
use crate::extract::{extract_contours, extract_landmarks};

/// Sub-score weights for the overall condition aggregate. Sum to 1.0.
const SYMMETRY_WEIGHT: f32 = 0.30;
const EYE_HEALTH_WEIGHT: f32 = 0.25;
const PROPORTION_WEIGHT: f32 = 0.25;
const SKIN_HEALTH_WEIGHT: f32 = 0.20;

/// Analyzer configuration. Defaults carry the documented thresholds.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    /// Emotion decision-list thresholds.
    pub emotion: EmotionThresholds,
    /// Suggestion check thresholds.
    pub suggestions: SuggestionThresholds,
}

/// Stateless per-frame analyzer.
pub struct FaceAnalyzer {
    config: AnalyzerConfig,
}

impl FaceAnalyzer {
    /// Creates an analyzer with the given configuration.
    #[must_use]
    pub const fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Analyzes one detection record.
    ///
    /// A record with zero faces short-circuits to the all-default
    /// no-face result. With multiple faces, only the first entry in the
    /// detector's ordering is analyzed (single-subject design).
    #[must_use]
    pub fn analyze(&self, record: &DetectionRecord) -> AnalysisResult {
        match record.faces.first() {
            Some(face) => self.analyze_face(face),
            None => {
                debug!("no face in record, returning default result");
                AnalysisResult::default()
            }
        }
    }

    /// Analyzes a single face observation.
    #[must_use]
    pub fn analyze_face(&self, face: &FaceObservation) -> AnalysisResult {
        // Upstream probabilities are not range-validated; clamp before
        // every consumer. Absent probabilities read as 0 everywhere
        // except eye-health scoring, which substitutes 0.5.
        let smiling = face.smiling_probability.unwrap_or(0.0).clamp(0.0, 1.0);
        let left_eye_open = face
            .left_eye_open_probability
            .unwrap_or(0.0)
            .clamp(0.0, 1.0);
        let right_eye_open = face
            .right_eye_open_probability
            .unwrap_or(0.0)
            .clamp(0.0, 1.0);

        let emotion = detect_emotion(
            smiling,
            left_eye_open,
            right_eye_open,
            face.head_rotation_x,
            face.head_rotation_y,
            &self.config.emotion,
        );
        let confidence = emotion_confidence(emotion, smiling, left_eye_open, right_eye_open);

        let landmarks = extract_landmarks(&face.landmarks);
        let contours = extract_contours(&face.contours);
        let face_condition = self.face_condition(face, &landmarks);

        AnalysisResult {
            face_detected: true,
            bounding_box: Some(face.bounding_box.normalized()),
            emotion,
            emotion_confidence: confidence,
            smiling_probability: smiling,
            left_eye_open_probability: left_eye_open,
            right_eye_open_probability: right_eye_open,
            head_rotation_x: face.head_rotation_x,
            head_rotation_y: face.head_rotation_y,
            head_rotation_z: face.head_rotation_z,
            face_condition,
            landmarks,
            contours,
            mesh_points: face.mesh_points.clone(),
            mesh_triangles: face.mesh_triangles.clone(),
        }
    }

    /// Computes the condition score tree for one face.
    ///
    /// Sub-scores round; the overall aggregate truncates (`as` cast).
    /// The mixed semantics are intentional, do not unify them.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn face_condition(&self, face: &FaceObservation, landmarks: &[Landmark]) -> FaceCondition {
        let symmetry = symmetry_score(landmarks);
        let eye_health = eye_health_score(
            face.left_eye_open_probability,
            face.right_eye_open_probability,
        );
        let proportion = proportion_score(landmarks);
        let skin_health = skin_health_estimate(
            face.smiling_probability,
            face.left_eye_open_probability,
            face.right_eye_open_probability,
        );

        let overall = (f32::from(symmetry) * SYMMETRY_WEIGHT
            + f32::from(eye_health) * EYE_HEALTH_WEIGHT
            + f32::from(proportion) * PROPORTION_WEIGHT
            + f32::from(skin_health) * SKIN_HEALTH_WEIGHT)
            .clamp(0.0, 100.0) as u8;

        let smiling = face.smiling_probability.unwrap_or(0.0).clamp(0.0, 1.0);
        let suggestions = generate_suggestions(
            symmetry,
            eye_health,
            face.head_rotation_x,
            face.head_rotation_y,
            smiling,
            &self.config.suggestions,
        );

        FaceCondition {
            overall_score: overall,
            symmetry_score: symmetry,
            skin_health_estimate: skin_health,
            eye_health_score: eye_health,
            facial_proportion_score: proportion,
            suggestions,
        }
    }
}

impl Default for FaceAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}
