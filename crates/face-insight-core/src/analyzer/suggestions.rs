//! Suggestion generation.
//!
//! Checks run in a fixed order and are independent booleans, so several
//! suggestions can fire together; each appears at most once. When none
//! fire, a single positive affirmation is emitted instead.

/// Suggestion emitted when the symmetry score is low.
pub const SUGGEST_CENTERED: &str = "Try to keep your face centered in the frame";
/// Suggestion emitted when the eye-health score is low.
pub const SUGGEST_TIRED_EYES: &str = "Your eyes appear tired - consider taking breaks from screens";
/// Suggestion emitted when head yaw is large.
pub const SUGGEST_FACE_CAMERA: &str = "Face the camera directly for better analysis";
/// Suggestion emitted when head pitch is large.
pub const SUGGEST_HEAD_LEVEL: &str = "Keep your head level for accurate results";
/// Suggestion emitted when the subject is not smiling.
pub const SUGGEST_SMILE: &str = "Smiling can enhance your facial features";
/// Affirmation emitted when no other suggestion fired.
pub const SUGGEST_DEFAULT: &str = "Your face looks great! Keep smiling!";

/// Thresholds for the suggestion checks.
#[derive(Debug, Clone)]
pub struct SuggestionThresholds {
    /// Symmetry scores below this trigger the centering suggestion.
    pub symmetry: u8,
    /// Eye-health scores below this trigger the tired-eyes suggestion.
    pub eye_health: u8,
    /// Yaw magnitudes (degrees) above this trigger the face-camera
    /// suggestion.
    pub yaw: f32,
    /// Pitch magnitudes (degrees) above this trigger the head-level
    /// suggestion.
    pub pitch: f32,
    /// Smile probabilities below this trigger the smiling suggestion.
    pub smile: f32,
}

impl Default for SuggestionThresholds {
    fn default() -> Self {
        Self {
            symmetry: 70,
            eye_health: 60,
            yaw: 10.0,
            pitch: 15.0,
            smile: 0.3,
        }
    }
}

/// Generates suggestions in the fixed check order.
#[must_use]
pub fn generate_suggestions(
    symmetry_score: u8,
    eye_health_score: u8,
    head_rotation_x: f32,
    head_rotation_y: f32,
    smiling: f32,
    thresholds: &SuggestionThresholds,
) -> Vec<String> {
    let checks = [
        (symmetry_score < thresholds.symmetry, SUGGEST_CENTERED),
        (eye_health_score < thresholds.eye_health, SUGGEST_TIRED_EYES),
        (head_rotation_y.abs() > thresholds.yaw, SUGGEST_FACE_CAMERA),
        (head_rotation_x.abs() > thresholds.pitch, SUGGEST_HEAD_LEVEL),
        (smiling < thresholds.smile, SUGGEST_SMILE),
    ];

    let mut suggestions: Vec<String> = checks
        .iter()
        .filter(|(fired, _)| *fired)
        .map(|&(_, message)| message.to_string())
        .collect();

    if suggestions.is_empty() {
        suggestions.push(SUGGEST_DEFAULT.to_string());
    }

    suggestions
}
