//! Rule-based emotion classification.
//!
//! The classifier is an ordered decision list; the first matching rule
//! wins and later rules are never consulted. Keeping the rules as an
//! explicit array keeps the precedence auditable and testable.

use crate::domain::Emotion;

/// Thresholds for the emotion decision list.
#[derive(Debug, Clone)]
pub struct EmotionThresholds {
    /// Minimum open-probability gap between the eyes for a wink.
    pub wink_eye_gap: f32,
    /// One eye must be below this open-probability for a wink.
    pub wink_closed_eye: f32,
    /// Head pitch magnitude (degrees) treated as a tilt.
    pub tilt_pitch: f32,
    /// Minimum smile for tilt-induced surprise.
    pub tilt_smile: f32,
    /// Minimum smile for happy.
    pub happy_smile: f32,
    /// Maximum smile for sad.
    pub sad_smile: f32,
    /// Both eyes must be below this open-probability for sad.
    pub sad_eye_open: f32,
    /// Maximum smile for angry.
    pub angry_smile: f32,
    /// Head yaw magnitude (degrees) required for angry.
    pub angry_yaw: f32,
    /// Maximum smile for direct surprise.
    pub surprised_smile: f32,
    /// Both eyes must exceed this open-probability for direct surprise.
    pub surprised_eye_open: f32,
}

impl Default for EmotionThresholds {
    fn default() -> Self {
        Self {
            wink_eye_gap: 0.5,
            wink_closed_eye: 0.3,
            tilt_pitch: 20.0,
            tilt_smile: 0.3,
            happy_smile: 0.5,
            sad_smile: 0.1,
            sad_eye_open: 0.5,
            angry_smile: 0.2,
            angry_yaw: 15.0,
            surprised_smile: 0.3,
            surprised_eye_open: 0.8,
        }
    }
}

/// Classifies an emotion from expression probabilities and head pose.
///
/// Inputs are expected pre-clamped to `[0, 1]`; angles are degrees. Rules
/// are evaluated in order, first match wins, `Neutral` when none match.
/// `Fear` and `Disgust` have no triggering rule by design.
#[must_use]
pub fn detect_emotion(
    smiling: f32,
    left_eye_open: f32,
    right_eye_open: f32,
    head_rotation_x: f32,
    head_rotation_y: f32,
    thresholds: &EmotionThresholds,
) -> Emotion {
    let t = thresholds;
    let eye_gap = (left_eye_open - right_eye_open).abs();

    let rules = [
        (
            eye_gap > t.wink_eye_gap
                && (left_eye_open < t.wink_closed_eye || right_eye_open < t.wink_closed_eye),
            Emotion::Wink,
        ),
        (
            head_rotation_x.abs() > t.tilt_pitch && smiling > t.tilt_smile,
            Emotion::Surprised,
        ),
        (smiling > t.happy_smile, Emotion::Happy),
        (
            smiling < t.sad_smile
                && left_eye_open < t.sad_eye_open
                && right_eye_open < t.sad_eye_open,
            Emotion::Sad,
        ),
        (
            smiling < t.angry_smile && head_rotation_y.abs() > t.angry_yaw,
            Emotion::Angry,
        ),
        (
            smiling < t.surprised_smile
                && left_eye_open > t.surprised_eye_open
                && right_eye_open > t.surprised_eye_open,
            Emotion::Surprised,
        ),
    ];

    rules
        .iter()
        .find(|(matched, _)| *matched)
        .map_or(Emotion::Neutral, |&(_, emotion)| emotion)
}

/// Heuristic confidence for a classified emotion, clamped to `[0, 1]`.
///
/// The formulas can only leave the unit interval when upstream
/// probabilities do, but those are not range-validated, so the clamp is
/// mandatory.
#[must_use]
pub fn emotion_confidence(
    emotion: Emotion,
    smiling: f32,
    left_eye_open: f32,
    right_eye_open: f32,
) -> f32 {
    let raw = match emotion {
        Emotion::Happy => smiling,
        Emotion::Sad => 1.0 - smiling,
        Emotion::Surprised => (left_eye_open + right_eye_open) / 2.0,
        Emotion::Neutral => 0.7,
        Emotion::Wink => (left_eye_open - right_eye_open).abs(),
        Emotion::Angry | Emotion::Fear | Emotion::Disgust => 0.5,
    };
    raw.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(smiling: f32, left: f32, right: f32, pitch: f32, yaw: f32) -> Emotion {
        detect_emotion(
            smiling,
            left,
            right,
            pitch,
            yaw,
            &EmotionThresholds::default(),
        )
    }

    #[test]
    fn test_wink_requires_gap_and_one_closed_eye() {
        assert_eq!(classify(0.0, 0.1, 0.9, 0.0, 0.0), Emotion::Wink);
        // Gap without a closed-enough eye is not a wink.
        assert_ne!(classify(0.0, 0.4, 0.95, 0.0, 0.0), Emotion::Wink);
    }

    #[test]
    fn test_wink_takes_precedence_over_happy() {
        // Strong smile plus wink geometry must still classify as Wink.
        assert_eq!(classify(0.9, 0.1, 0.9, 0.0, 0.0), Emotion::Wink);
    }

    #[test]
    fn test_tilt_surprise_takes_precedence_over_happy() {
        assert_eq!(classify(0.9, 0.9, 0.9, 25.0, 0.0), Emotion::Surprised);
    }

    #[test]
    fn test_tilt_without_smile_is_not_surprise() {
        // Pitch over threshold but smile at 0.2 falls through the tilt rule.
        assert_eq!(classify(0.2, 0.7, 0.7, 25.0, 0.0), Emotion::Neutral);
    }

    #[test]
    fn test_happy() {
        assert_eq!(classify(0.6, 0.9, 0.9, 0.0, 0.0), Emotion::Happy);
        assert_eq!(classify(0.95, 0.9, 0.9, 0.0, 0.0), Emotion::Happy);
    }

    #[test]
    fn test_happy_threshold_is_exclusive() {
        assert_ne!(classify(0.5, 0.9, 0.9, 0.0, 0.0), Emotion::Happy);
    }

    #[test]
    fn test_sad() {
        assert_eq!(classify(0.05, 0.3, 0.4, 0.0, 0.0), Emotion::Sad);
    }

    #[test]
    fn test_sad_requires_both_eyes_drooping() {
        assert_ne!(classify(0.05, 0.3, 0.9, 0.0, 0.0), Emotion::Sad);
    }

    #[test]
    fn test_angry() {
        assert_eq!(classify(0.1, 0.7, 0.7, 0.0, 20.0), Emotion::Angry);
        assert_eq!(classify(0.1, 0.7, 0.7, 0.0, -20.0), Emotion::Angry);
    }

    #[test]
    fn test_direct_surprise() {
        assert_eq!(classify(0.2, 0.9, 0.9, 0.0, 0.0), Emotion::Surprised);
    }

    #[test]
    fn test_neutral_default() {
        assert_eq!(classify(0.4, 0.7, 0.7, 0.0, 0.0), Emotion::Neutral);
    }

    #[test]
    fn test_fear_and_disgust_are_unreachable() {
        // Sweep a coarse input grid; no combination may produce the
        // structurally unreachable variants.
        let probs = [0.0, 0.1, 0.3, 0.5, 0.7, 0.9, 1.0];
        let angles = [-30.0, -10.0, 0.0, 10.0, 30.0];
        for &smiling in &probs {
            for &left in &probs {
                for &right in &probs {
                    for &pitch in &angles {
                        for &yaw in &angles {
                            let emotion = classify(smiling, left, right, pitch, yaw);
                            assert_ne!(emotion, Emotion::Fear);
                            assert_ne!(emotion, Emotion::Disgust);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_confidence_table() {
        assert!((emotion_confidence(Emotion::Happy, 0.8, 0.0, 0.0) - 0.8).abs() < f32::EPSILON);
        assert!((emotion_confidence(Emotion::Sad, 0.1, 0.0, 0.0) - 0.9).abs() < f32::EPSILON);
        assert!(
            (emotion_confidence(Emotion::Surprised, 0.0, 0.9, 0.7) - 0.8).abs() < f32::EPSILON
        );
        assert!((emotion_confidence(Emotion::Neutral, 0.0, 0.0, 0.0) - 0.7).abs() < f32::EPSILON);
        assert!((emotion_confidence(Emotion::Wink, 0.0, 0.1, 0.9) - 0.8).abs() < 1e-6);
        assert!((emotion_confidence(Emotion::Angry, 0.0, 0.0, 0.0) - 0.5).abs() < f32::EPSILON);
        assert!((emotion_confidence(Emotion::Fear, 0.0, 0.0, 0.0) - 0.5).abs() < f32::EPSILON);
        assert!((emotion_confidence(Emotion::Disgust, 0.0, 0.0, 0.0) - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_confidence_is_clamped_for_out_of_range_inputs() {
        assert!((emotion_confidence(Emotion::Happy, 1.7, 0.0, 0.0) - 1.0).abs() < f32::EPSILON);
        assert!((emotion_confidence(Emotion::Sad, 1.7, 0.0, 0.0) - 0.0).abs() < f32::EPSILON);
        assert!((emotion_confidence(Emotion::Wink, 0.0, -1.0, 1.5) - 1.0).abs() < f32::EPSILON);
    }
}
