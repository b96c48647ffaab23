//! Emotion label vocabulary.

use serde::{Deserialize, Serialize};

/// Discrete emotion labels.
///
/// `Fear` and `Disgust` exist for presentation completeness but are not
/// produced by the current rule set (see `analyzer::emotion`); whether to
/// extend the rules or retire the variants is an open product decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    /// Smiling.
    Happy,
    /// Low smile, eyes drooping.
    Sad,
    /// Low smile with the head turned away.
    Angry,
    /// Eyes wide open or head tilted while smiling.
    Surprised,
    /// No other rule matched.
    #[default]
    Neutral,
    /// Currently unreachable.
    Fear,
    /// Currently unreachable.
    Disgust,
    /// One eye markedly more closed than the other.
    Wink,
}

impl Emotion {
    /// Human-readable display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Angry => "Angry",
            Self::Surprised => "Surprised",
            Self::Neutral => "Neutral",
            Self::Fear => "Fearful",
            Self::Disgust => "Disgusted",
            Self::Wink => "Winking",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_neutral() {
        assert_eq!(Emotion::default(), Emotion::Neutral);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Emotion::Happy.label(), "Happy");
        assert_eq!(Emotion::Wink.label(), "Winking");
        assert_eq!(Emotion::Fear.label(), "Fearful");
    }
}
