//! Qualitative bands for the aggregate audit score.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::Tone;

/// Qualitative band for an aggregate 0-100 score.
///
/// Ordering is ascending quality: `Poor < Fair < Good < Excellent`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ScoreBand {
    /// Create a band from a score.
    ///
    /// Total over all inputs: values outside `[0, 100]` degrade to the
    /// nearest band (negative scores are `Poor`, scores above 100 are
    /// `Excellent`), and NaN fails every comparison and lands in `Poor`.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Band label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }

    /// Display tone for this band
    #[must_use]
    pub const fn tone(&self) -> Tone {
        match self {
            Self::Poor => Tone::Red,
            Self::Fair => Tone::Yellow,
            Self::Good => Tone::Blue,
            Self::Excellent => Tone::Green,
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_from_score() {
        assert_eq!(ScoreBand::from_score(85.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(60.0), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(59.9), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(40.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(39.9), ScoreBand::Poor);
    }

    #[test]
    fn test_band_boundaries_inclusive() {
        assert_eq!(ScoreBand::from_score(80.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79.9), ScoreBand::Good);
    }

    #[test]
    fn test_out_of_range_degrades_to_nearest_band() {
        assert_eq!(ScoreBand::from_score(-10.0), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(150.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(f64::NAN), ScoreBand::Poor);
    }

    #[test]
    fn test_band_ordering() {
        assert!(ScoreBand::Poor < ScoreBand::Fair);
        assert!(ScoreBand::Fair < ScoreBand::Good);
        assert!(ScoreBand::Good < ScoreBand::Excellent);
    }
}
