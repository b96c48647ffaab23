//! Geometric and probabilistic condition sub-scores.
//!
//! Every function clamps its result to `[0, 100]` and resolves absent or
//! degenerate input to a documented fallback instead of erroring.
//! Sub-scores round to the nearest integer; only the overall aggregate
//! (see `analyzer::face_condition`) truncates.

use crate::domain::{Landmark, LandmarkType, Point};

/// Neutral fallback when required landmarks are missing or geometry is
/// degenerate.
pub const FALLBACK_SCORE: u8 = 75;

/// Ideal eye-distance to nose-to-mouth ratio (golden ratio).
pub const IDEAL_PROPORTION_RATIO: f32 = 1.618;

/// Finds the position of one landmark type, if present.
fn find_landmark(landmarks: &[Landmark], landmark_type: LandmarkType) -> Option<Point> {
    landmarks
        .iter()
        .find(|l| l.landmark_type == landmark_type)
        .map(|l| l.position)
}

/// Rounds a unit-interval value to a `[0, 100]` score.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_score(unit: f32) -> u8 {
    (unit * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Clamps an optional probability into `[0, 1]`, substituting `default`
/// when absent.
fn clamped_or(probability: Option<f32>, default: f32) -> f32 {
    probability.unwrap_or(default).clamp(0.0, 1.0)
}

/// Eye-to-nose distance symmetry.
///
/// Requires the left-eye, right-eye and nose-base landmarks; returns
/// [`FALLBACK_SCORE`] when any is missing. A nose base coincident with
/// an eye yields ratio 0, not an error.
#[must_use]
pub fn symmetry_score(landmarks: &[Landmark]) -> u8 {
    let (Some(left_eye), Some(right_eye), Some(nose)) = (
        find_landmark(landmarks, LandmarkType::LeftEye),
        find_landmark(landmarks, LandmarkType::RightEye),
        find_landmark(landmarks, LandmarkType::NoseBase),
    ) else {
        return FALLBACK_SCORE;
    };

    let left_dist = left_eye.distance_to(nose);
    let right_dist = right_eye.distance_to(nose);
    let max = left_dist.max(right_dist);
    if max <= 0.0 {
        // Both eyes coincident with the nose base; fully degenerate.
        return 0;
    }

    let ratio = left_dist.min(right_dist) / max;
    to_score(ratio)
}

/// Eye openness and left/right balance.
///
/// Missing probabilities default to 0.5 here, unlike the raw result
/// fields which default to 0.
#[must_use]
pub fn eye_health_score(left_eye_open: Option<f32>, right_eye_open: Option<f32>) -> u8 {
    let left = clamped_or(left_eye_open, 0.5);
    let right = clamped_or(right_eye_open, 0.5);

    let avg_openness = (left + right) / 2.0;
    let eye_balance = 1.0 - (left - right).abs();

    to_score(avg_openness * 0.6 + eye_balance * 0.4)
}

/// Golden-ratio facial proportion score.
///
/// Requires left-eye, right-eye, nose-base and mouth-bottom landmarks;
/// returns [`FALLBACK_SCORE`] when any is missing or when the
/// nose-to-mouth vertical distance is zero (the source left this
/// division unguarded; we treat it as the landmark-missing case).
#[must_use]
pub fn proportion_score(landmarks: &[Landmark]) -> u8 {
    let (Some(left_eye), Some(right_eye), Some(nose), Some(mouth_bottom)) = (
        find_landmark(landmarks, LandmarkType::LeftEye),
        find_landmark(landmarks, LandmarkType::RightEye),
        find_landmark(landmarks, LandmarkType::NoseBase),
        find_landmark(landmarks, LandmarkType::MouthBottom),
    ) else {
        return FALLBACK_SCORE;
    };

    let eye_distance = (right_eye.x - left_eye.x).abs();
    let nose_to_mouth = (mouth_bottom.y - nose.y).abs();
    if nose_to_mouth <= 0.0 {
        return FALLBACK_SCORE;
    }

    let actual_ratio = eye_distance / nose_to_mouth;
    let ratio_score = (1.0
        - (actual_ratio - IDEAL_PROPORTION_RATIO).abs() / IDEAL_PROPORTION_RATIO)
        .clamp(0.0, 1.0);
    to_score(ratio_score)
}

/// Expression-based skin-health proxy.
///
/// This is not a skin measurement: detection confidence stands in for
/// it. Base 75 plus small smile and eye-openness bonuses; missing
/// probabilities default to 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn skin_health_estimate(
    smiling: Option<f32>,
    left_eye_open: Option<f32>,
    right_eye_open: Option<f32>,
) -> u8 {
    let smiling = clamped_or(smiling, 0.0);
    let left = clamped_or(left_eye_open, 0.0);
    let right = clamped_or(right_eye_open, 0.0);

    let base = f32::from(FALLBACK_SCORE);
    let smile_bonus = (smiling * 10.0).round();
    let eye_bonus = ((left + right) * 5.0).round();

    (base + smile_bonus + eye_bonus).clamp(0.0, 100.0) as u8
}
