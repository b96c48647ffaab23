//! Landmark and contour vocabulary.
//!
//! The detector reports landmarks and contours under its own string
//! identifiers; these enums are the system's stable vocabulary. Each
//! variant knows the detector key it maps from, and `ALL` fixes the
//! enumeration order used for deterministic extraction output.

use serde::{Deserialize, Serialize};

use super::Point;

/// Named anatomical points the system recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkType {
    /// Left eye center.
    LeftEye,
    /// Right eye center.
    RightEye,
    /// Base of the nose.
    NoseBase,
    /// Left ear.
    LeftEar,
    /// Right ear.
    RightEar,
    /// Left mouth corner.
    LeftMouth,
    /// Right mouth corner.
    RightMouth,
    /// Bottom of the mouth.
    MouthBottom,
    /// Left cheek.
    LeftCheek,
    /// Right cheek.
    RightCheek,
}

impl LandmarkType {
    /// All landmark types, in the fixed enumeration order used for
    /// extraction output.
    pub const ALL: [Self; 10] = [
        Self::LeftEye,
        Self::RightEye,
        Self::NoseBase,
        Self::LeftEar,
        Self::RightEar,
        Self::LeftMouth,
        Self::RightMouth,
        Self::MouthBottom,
        Self::LeftCheek,
        Self::RightCheek,
    ];

    /// The detector-side identifier this type maps from.
    #[must_use]
    pub const fn detector_key(self) -> &'static str {
        match self {
            Self::LeftEye => "LEFT_EYE",
            Self::RightEye => "RIGHT_EYE",
            Self::NoseBase => "NOSE_BASE",
            Self::LeftEar => "LEFT_EAR",
            Self::RightEar => "RIGHT_EAR",
            Self::LeftMouth => "MOUTH_LEFT",
            Self::RightMouth => "MOUTH_RIGHT",
            Self::MouthBottom => "MOUTH_BOTTOM",
            Self::LeftCheek => "LEFT_CHEEK",
            Self::RightCheek => "RIGHT_CHEEK",
        }
    }
}

/// A single named anatomical point with its pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Which anatomical point this is.
    #[serde(rename = "type")]
    pub landmark_type: LandmarkType,
    /// Position in image-pixel coordinates.
    pub position: Point,
}

/// Anatomical boundaries the system recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContourType {
    /// Whole-face outline.
    Face,
    /// Upper band of the left eyebrow.
    LeftEyebrowTop,
    /// Lower band of the left eyebrow.
    LeftEyebrowBottom,
    /// Upper band of the right eyebrow.
    RightEyebrowTop,
    /// Lower band of the right eyebrow.
    RightEyebrowBottom,
    /// Left eye outline.
    LeftEye,
    /// Right eye outline.
    RightEye,
    /// Top edge of the upper lip.
    UpperLipTop,
    /// Bottom edge of the upper lip.
    UpperLipBottom,
    /// Top edge of the lower lip.
    LowerLipTop,
    /// Bottom edge of the lower lip.
    LowerLipBottom,
    /// Nose bridge.
    NoseBridge,
    /// Bottom of the nose.
    NoseBottom,
}

impl ContourType {
    /// All contour types, in the fixed enumeration order used for
    /// extraction output.
    pub const ALL: [Self; 13] = [
        Self::Face,
        Self::LeftEyebrowTop,
        Self::LeftEyebrowBottom,
        Self::RightEyebrowTop,
        Self::RightEyebrowBottom,
        Self::LeftEye,
        Self::RightEye,
        Self::UpperLipTop,
        Self::UpperLipBottom,
        Self::LowerLipTop,
        Self::LowerLipBottom,
        Self::NoseBridge,
        Self::NoseBottom,
    ];

    /// The detector-side identifier this type maps from.
    #[must_use]
    pub const fn detector_key(self) -> &'static str {
        match self {
            Self::Face => "FACE",
            Self::LeftEyebrowTop => "LEFT_EYEBROW_TOP",
            Self::LeftEyebrowBottom => "LEFT_EYEBROW_BOTTOM",
            Self::RightEyebrowTop => "RIGHT_EYEBROW_TOP",
            Self::RightEyebrowBottom => "RIGHT_EYEBROW_BOTTOM",
            Self::LeftEye => "LEFT_EYE",
            Self::RightEye => "RIGHT_EYE",
            Self::UpperLipTop => "UPPER_LIP_TOP",
            Self::UpperLipBottom => "UPPER_LIP_BOTTOM",
            Self::LowerLipTop => "LOWER_LIP_TOP",
            Self::LowerLipBottom => "LOWER_LIP_BOTTOM",
            Self::NoseBridge => "NOSE_BRIDGE",
            Self::NoseBottom => "NOSE_BOTTOM",
        }
    }
}

/// An ordered polyline tracing an anatomical boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    /// Which boundary this traces.
    #[serde(rename = "type")]
    pub contour_type: ContourType,
    /// Ordered points in image-pixel coordinates.
    pub points: Vec<Point>,
}

impl Contour {
    /// A contour with fewer than two points cannot be drawn as a
    /// polyline; consumers must skip degenerate contours.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }
}

/// One triangle of the optional face mesh, passed through from the
/// detector unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshTriangle {
    /// The three triangle corners in image-pixel coordinates.
    pub points: [Point; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_detector_keys_are_unique() {
        let mut keys: Vec<_> = LandmarkType::ALL
            .iter()
            .map(|t| t.detector_key())
            .collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), LandmarkType::ALL.len());
    }

    #[test]
    fn test_contour_detector_keys_are_unique() {
        let mut keys: Vec<_> = ContourType::ALL.iter().map(|t| t.detector_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ContourType::ALL.len());
    }

    #[test]
    fn test_degenerate_contour() {
        let empty = Contour {
            contour_type: ContourType::Face,
            points: vec![],
        };
        let single = Contour {
            contour_type: ContourType::Face,
            points: vec![Point::new(1.0, 1.0)],
        };
        let line = Contour {
            contour_type: ContourType::Face,
            points: vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)],
        };

        assert!(empty.is_degenerate());
        assert!(single.is_degenerate());
        assert!(!line.is_degenerate());
    }
}
