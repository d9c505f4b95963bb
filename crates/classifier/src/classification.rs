//! Benign / malignant decision policy

use serde::{Deserialize, Serialize};
use std::fmt;

/// Probability above which a sample is labelled malignant
///
/// The comparison is strict: exactly 0.5 is benign.
pub const MALIGNANT_THRESHOLD: f32 = 0.5;

/// Verdict label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Benign,
    Malignant,
}

impl Label {
    /// Apply the decision threshold to P(malignant)
    pub fn from_probability(probability: f32) -> Self {
        if probability > MALIGNANT_THRESHOLD {
            Label::Malignant
        } else {
            Label::Benign
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Benign => "Benign",
            Label::Malignant => "Malignant",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub label: Label,
    /// P(malignant) as produced by the graph
    pub probability: f32,
}

impl Diagnosis {
    pub fn from_probability(probability: f32) -> Self {
        Self {
            label: Label::from_probability(probability),
            probability,
        }
    }

    pub fn is_malignant(&self) -> bool {
        self.label == Label::Malignant
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Probability: {:.3})", self.label, self.probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(Label::from_probability(0.5), Label::Benign);
        assert_eq!(Label::from_probability(0.500_000_1), Label::Malignant);
        assert_eq!(Label::from_probability(0.499_999_9), Label::Benign);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(Label::from_probability(0.0), Label::Benign);
        assert_eq!(Label::from_probability(1.0), Label::Malignant);
    }

    #[test]
    fn test_display() {
        let diagnosis = Diagnosis::from_probability(0.87345);
        assert!(diagnosis.is_malignant());
        assert_eq!(diagnosis.to_string(), "Malignant (Probability: 0.873)");
        assert_eq!(
            Diagnosis::from_probability(0.5).to_string(),
            "Benign (Probability: 0.500)"
        );
    }
}
