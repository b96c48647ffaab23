//! Canned detection-record builders for testing.

use face_insight_core::{
    BoundingBox, ContourType, DetectionRecord, FaceObservation, LandmarkType, Point,
};

/// Builder for face observations with specific characteristics.
///
/// Starts from a frontal face centered in a nominal 640x480 frame with
/// the standard landmark set, then layers expression and pose on top.
#[derive(Debug, Clone)]
pub struct FaceObservationBuilder {
    face: FaceObservation,
}

impl FaceObservationBuilder {
    /// Starts from a neutral frontal face with standard landmarks.
    #[must_use]
    pub fn frontal() -> Self {
        let mut face = FaceObservation {
            bounding_box: BoundingBox::new(220.0, 120.0, 420.0, 360.0),
            smiling_probability: Some(0.4),
            left_eye_open_probability: Some(0.9),
            right_eye_open_probability: Some(0.9),
            ..FaceObservation::default()
        };

        let landmarks = [
            (LandmarkType::LeftEye, Point::new(270.0, 200.0)),
            (LandmarkType::RightEye, Point::new(370.0, 200.0)),
            (LandmarkType::NoseBase, Point::new(320.0, 250.0)),
            (LandmarkType::LeftMouth, Point::new(285.0, 300.0)),
            (LandmarkType::RightMouth, Point::new(355.0, 300.0)),
            (LandmarkType::MouthBottom, Point::new(320.0, 311.8)),
        ];
        for (landmark_type, position) in landmarks {
            face.landmarks
                .insert(landmark_type.detector_key().to_string(), position);
        }

        Self { face }
    }

    /// Starts from a face with no landmarks and no probabilities.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            face: FaceObservation {
                bounding_box: BoundingBox::new(220.0, 120.0, 420.0, 360.0),
                ..FaceObservation::default()
            },
        }
    }

    // === Expression presets ===

    /// A strongly smiling face.
    #[must_use]
    pub fn smiling() -> Self {
        Self::frontal().with_smile(0.95)
    }

    /// A face winking with the left eye.
    #[must_use]
    pub fn winking() -> Self {
        Self::frontal().with_smile(0.2).with_eyes(0.1, 0.95)
    }

    /// A sad face: no smile, drooping eyes.
    #[must_use]
    pub fn sad() -> Self {
        Self::frontal().with_smile(0.05).with_eyes(0.3, 0.35)
    }

    /// A surprised face: wide eyes, no smile.
    #[must_use]
    pub fn surprised() -> Self {
        Self::frontal().with_smile(0.1).with_eyes(0.95, 0.95)
    }

    /// An angry face: no smile, head turned away.
    #[must_use]
    pub fn angry() -> Self {
        Self::frontal().with_smile(0.1).with_head_rotation(0.0, 25.0, 0.0)
    }

    // === Mutators ===

    /// Sets the smiling probability.
    #[must_use]
    pub fn with_smile(mut self, probability: f32) -> Self {
        self.face.smiling_probability = Some(probability);
        self
    }

    /// Sets both eye-open probabilities.
    #[must_use]
    pub fn with_eyes(mut self, left_open: f32, right_open: f32) -> Self {
        self.face.left_eye_open_probability = Some(left_open);
        self.face.right_eye_open_probability = Some(right_open);
        self
    }

    /// Clears all three expression probabilities.
    #[must_use]
    pub fn without_probabilities(mut self) -> Self {
        self.face.smiling_probability = None;
        self.face.left_eye_open_probability = None;
        self.face.right_eye_open_probability = None;
        self
    }

    /// Sets the head pose angles (pitch, yaw, roll; degrees).
    #[must_use]
    pub fn with_head_rotation(mut self, pitch: f32, yaw: f32, roll: f32) -> Self {
        self.face.head_rotation_x = pitch;
        self.face.head_rotation_y = yaw;
        self.face.head_rotation_z = roll;
        self
    }

    /// Sets the bounding box.
    #[must_use]
    pub fn with_bounding_box(mut self, bounding_box: BoundingBox) -> Self {
        self.face.bounding_box = bounding_box;
        self
    }

    /// Places one landmark under its detector key.
    #[must_use]
    pub fn with_landmark(mut self, landmark_type: LandmarkType, position: Point) -> Self {
        self.face
            .landmarks
            .insert(landmark_type.detector_key().to_string(), position);
        self
    }

    /// Removes one landmark.
    #[must_use]
    pub fn without_landmark(mut self, landmark_type: LandmarkType) -> Self {
        self.face.landmarks.remove(landmark_type.detector_key());
        self
    }

    /// Places one contour under its detector key.
    #[must_use]
    pub fn with_contour(mut self, contour_type: ContourType, points: Vec<Point>) -> Self {
        self.face
            .contours
            .insert(contour_type.detector_key().to_string(), points);
        self
    }

    /// Inserts a raw detector landmark key, recognized or not.
    #[must_use]
    pub fn with_raw_landmark(mut self, key: impl Into<String>, position: Point) -> Self {
        self.face.landmarks.insert(key.into(), position);
        self
    }

    // === Finishers ===

    /// Returns the built observation.
    #[must_use]
    pub fn build(self) -> FaceObservation {
        self.face
    }

    /// Wraps the observation in a single-face record.
    #[must_use]
    pub fn record(self) -> DetectionRecord {
        DetectionRecord::single(self.face)
    }

    /// Serializes the single-face record to a JSON string.
    ///
    /// # Panics
    ///
    /// Panics if serialization fails, which it cannot for these types.
    #[must_use]
    pub fn record_json(self) -> String {
        serde_json::to_string(&self.record()).expect("record serializes")
    }
}
