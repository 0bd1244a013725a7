//! Audit findings and their severity tiers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Tone;

/// One audit finding.
///
/// Tier membership is assigned by the producer of the payload (findings
/// arrive pre-partitioned); it is not inferred from the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    /// Short title
    pub title: String,
    /// Longer explanation
    #[serde(default)]
    pub description: String,
    /// Optional supporting detail lines
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl Finding {
    /// Create a finding with a title and description
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            details: Vec::new(),
        }
    }
}

/// Severity tier of a finding.
///
/// This vocabulary describes observed state and is distinct from the
/// `high`/`medium`/`low` priority vocabulary used for recommendations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum FindingTier {
    Critical,
    Recommended,
    Good,
}

impl FindingTier {
    /// All tiers in display order (worst first)
    pub const ALL: [Self; 3] = [Self::Critical, Self::Recommended, Self::Good];

    /// Section heading for this tier
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical Issues",
            Self::Recommended => "Recommended Improvements",
            Self::Good => "Good Results",
        }
    }

    /// Explicit empty-state message, so an empty section is distinguishable
    /// from one that was never computed.
    #[must_use]
    pub const fn empty_message(&self) -> &'static str {
        match self {
            Self::Critical => "No critical issues found.",
            Self::Recommended => "No recommended improvements at this time.",
            Self::Good => "No good results recorded.",
        }
    }

    /// Display tone for this tier
    #[must_use]
    pub const fn tone(&self) -> Tone {
        match self {
            Self::Critical => Tone::Red,
            Self::Recommended => Tone::Yellow,
            Self::Good => Tone::Green,
        }
    }
}

impl std::fmt::Display for FindingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::Recommended => write!(f, "recommended"),
            Self::Good => write!(f, "good"),
        }
    }
}

/// Findings partitioned into severity tiers, preserving input order.
///
/// An absent tier and an empty tier are the same thing: an empty sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TieredFindings {
    pub critical: Vec<Finding>,
    pub recommended: Vec<Finding>,
    pub good: Vec<Finding>,
}

impl TieredFindings {
    /// Findings in one tier
    #[must_use]
    pub fn tier(&self, tier: FindingTier) -> &[Finding] {
        match tier {
            FindingTier::Critical => &self.critical,
            FindingTier::Recommended => &self.recommended,
            FindingTier::Good => &self.good,
        }
    }

    /// Per-tier counts
    #[must_use]
    pub fn counts(&self) -> FindingCounts {
        FindingCounts {
            critical: self.critical.len(),
            recommended: self.recommended.len(),
            good: self.good.len(),
        }
    }

    /// Total findings across all tiers
    #[must_use]
    pub fn total(&self) -> usize {
        self.critical.len() + self.recommended.len() + self.good.len()
    }

    /// True when every tier is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Finding counts per tier
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
pub struct FindingCounts {
    pub critical: usize,
    pub recommended: usize,
    pub good: usize,
}

impl FindingCounts {
    /// Total across all tiers
    #[must_use]
    pub const fn total(&self) -> usize {
        self.critical + self.recommended + self.good
    }
}
