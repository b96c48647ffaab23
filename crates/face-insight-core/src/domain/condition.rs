//! Face-condition scores and their presentation tiers.

use serde::{Deserialize, Serialize};

/// Multi-factor face condition summary.
///
/// All scores are in `[0, 100]`. The skin-health value is an explicit
/// proxy derived from expression probabilities, not a measurement of
/// actual skin condition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaceCondition {
    /// Weighted aggregate of the four sub-scores.
    pub overall_score: u8,
    /// Eye-to-nose distance symmetry.
    pub symmetry_score: u8,
    /// Expression-based skin-health proxy.
    pub skin_health_estimate: u8,
    /// Eye openness and balance.
    pub eye_health_score: u8,
    /// Golden-ratio facial proportion score.
    pub facial_proportion_score: u8,
    /// Human-readable suggestions, in generation order, never duplicated.
    pub suggestions: Vec<String>,
}

/// Presentation tier for a condition score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthLevel {
    /// Score 85 and above.
    Excellent,
    /// Score 70 to 84.
    Good,
    /// Score 50 to 69.
    Fair,
    /// Score below 50.
    NeedsAttention,
}

impl HealthLevel {
    /// Maps a score to its tier. Boundary values map to the higher tier.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            85.. => Self::Excellent,
            70..=84 => Self::Good,
            50..=69 => Self::Fair,
            _ => Self::NeedsAttention,
        }
    }

    /// Human-readable display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsAttention => "Needs Attention",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_condition_is_zeroed() {
        let condition = FaceCondition::default();
        assert_eq!(condition.overall_score, 0);
        assert_eq!(condition.symmetry_score, 0);
        assert!(condition.suggestions.is_empty());
    }

    #[test]
    fn test_level_boundaries_map_upward() {
        assert_eq!(HealthLevel::from_score(85), HealthLevel::Excellent);
        assert_eq!(HealthLevel::from_score(70), HealthLevel::Good);
        assert_eq!(HealthLevel::from_score(50), HealthLevel::Fair);
        assert_eq!(HealthLevel::from_score(49), HealthLevel::NeedsAttention);
    }

    #[test]
    fn test_level_interior_values() {
        assert_eq!(HealthLevel::from_score(100), HealthLevel::Excellent);
        assert_eq!(HealthLevel::from_score(75), HealthLevel::Good);
        assert_eq!(HealthLevel::from_score(60), HealthLevel::Fair);
        assert_eq!(HealthLevel::from_score(0), HealthLevel::NeedsAttention);
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(HealthLevel::Excellent.label(), "Excellent");
        assert_eq!(HealthLevel::NeedsAttention.label(), "Needs Attention");
    }
}
