//! Feature extraction: remaps detector-vocabulary landmark and contour
//! identifiers into the system vocabulary.
//!
//! Both functions are pure remaps: positions are copied verbatim in pixel
//! coordinates, unrecognized detector identifiers are silently dropped,
//! and output order is the fixed enumeration order of the system types,
//! independent of the input map's iteration order.

use std::collections::HashMap;

use crate::domain::{Contour, ContourType, Landmark, LandmarkType, Point};

/// Extracts recognized landmarks from a detector landmark map.
///
/// Absence of a key is a normal case, not a failure; missing landmark
/// types are simply absent from the output.
#[must_use]
pub fn extract_landmarks(raw: &HashMap<String, Point>) -> Vec<Landmark> {
    LandmarkType::ALL
        .iter()
        .filter_map(|&landmark_type| {
            raw.get(landmark_type.detector_key()).map(|&position| Landmark {
                landmark_type,
                position,
            })
        })
        .collect()
}

/// Extracts recognized contours from a detector contour map.
///
/// Degenerate contours (fewer than two points) are kept in the data;
/// drawing-side consumers are responsible for skipping them.
#[must_use]
pub fn extract_contours(raw: &HashMap<String, Vec<Point>>) -> Vec<Contour> {
    ContourType::ALL
        .iter()
        .filter_map(|&contour_type| {
            raw.get(contour_type.detector_key()).map(|points| Contour {
                contour_type,
                points: points.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landmark_map(entries: &[(&str, Point)]) -> HashMap<String, Point> {
        entries
            .iter()
            .map(|&(key, point)| (key.to_string(), point))
            .collect()
    }

    #[test]
    fn test_extracts_only_present_landmarks_in_enumeration_order() {
        // NOSE_BASE inserted before LEFT_EYE; output order must not care.
        let raw = landmark_map(&[
            ("NOSE_BASE", Point::new(50.0, 80.0)),
            ("LEFT_EYE", Point::new(30.0, 40.0)),
        ]);

        let landmarks = extract_landmarks(&raw);

        assert_eq!(landmarks.len(), 2);
        assert_eq!(landmarks[0].landmark_type, LandmarkType::LeftEye);
        assert_eq!(landmarks[0].position, Point::new(30.0, 40.0));
        assert_eq!(landmarks[1].landmark_type, LandmarkType::NoseBase);
        assert_eq!(landmarks[1].position, Point::new(50.0, 80.0));
    }

    #[test]
    fn test_unknown_landmark_keys_are_dropped() {
        let raw = landmark_map(&[
            ("LEFT_EYE", Point::new(1.0, 2.0)),
            ("THIRD_EYE", Point::new(3.0, 4.0)),
            ("", Point::new(5.0, 6.0)),
        ]);

        let landmarks = extract_landmarks(&raw);

        assert_eq!(landmarks.len(), 1);
        assert_eq!(landmarks[0].landmark_type, LandmarkType::LeftEye);
    }

    #[test]
    fn test_empty_landmark_map_yields_empty_list() {
        assert!(extract_landmarks(&HashMap::new()).is_empty());
    }

    #[test]
    fn test_full_landmark_map_yields_all_types_in_order() {
        let raw: HashMap<String, Point> = LandmarkType::ALL
            .iter()
            .enumerate()
            .map(|(i, t)| {
                #[allow(clippy::cast_precision_loss)]
                let coord = i as f32;
                (t.detector_key().to_string(), Point::new(coord, coord))
            })
            .collect();

        let landmarks = extract_landmarks(&raw);

        assert_eq!(landmarks.len(), LandmarkType::ALL.len());
        for (landmark, expected) in landmarks.iter().zip(LandmarkType::ALL) {
            assert_eq!(landmark.landmark_type, expected);
        }
    }

    #[test]
    fn test_extracts_contours_in_enumeration_order() {
        let mut raw = HashMap::new();
        raw.insert(
            "LOWER_LIP_TOP".to_string(),
            vec![Point::new(5.0, 6.0), Point::new(7.0, 8.0)],
        );
        raw.insert(
            "FACE".to_string(),
            vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
        );

        let contours = extract_contours(&raw);

        assert_eq!(contours.len(), 2);
        assert_eq!(contours[0].contour_type, ContourType::Face);
        assert_eq!(contours[1].contour_type, ContourType::LowerLipTop);
    }

    #[test]
    fn test_unknown_contour_keys_are_dropped() {
        let mut raw = HashMap::new();
        raw.insert("CHIN_DIMPLE".to_string(), vec![Point::new(0.0, 0.0)]);

        assert!(extract_contours(&raw).is_empty());
    }

    #[test]
    fn test_contour_points_copied_verbatim() {
        let points = vec![Point::new(9.5, -1.25), Point::new(0.0, 3.5)];
        let mut raw = HashMap::new();
        raw.insert("NOSE_BRIDGE".to_string(), points.clone());

        let contours = extract_contours(&raw);

        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].points, points);
    }

    #[test]
    fn test_degenerate_contour_is_kept_in_data() {
        let mut raw = HashMap::new();
        raw.insert("LEFT_EYE".to_string(), vec![Point::new(1.0, 1.0)]);

        let contours = extract_contours(&raw);

        assert_eq!(contours.len(), 1);
        assert!(contours[0].is_degenerate());
    }
}
