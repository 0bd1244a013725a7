//! Strategic recommendations, priority tiers, and the derived action plan.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Tone;

/// Priority tier of a recommendation.
///
/// Ordering is by urgency: `High < Medium < Low`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities in display order (most urgent first)
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Parse a priority from a payload string. Returns None for
    /// unrecognized values.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// Capitalized badge label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Section heading used when grouping the action plan
    #[must_use]
    pub const fn section_heading(&self) -> &'static str {
        match self {
            Self::High => "High Priority (Critical Fixes)",
            Self::Medium => "Medium Priority (Optimization)",
            Self::Low => "Low Priority (Maintenance)",
        }
    }

    /// Display tone for this priority
    #[must_use]
    pub const fn tone(&self) -> Tone {
        match self {
            Self::High => Tone::Red,
            Self::Medium => Tone::Yellow,
            Self::Low => Tone::Blue,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Category of a recommendation
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum RecommendationCategory {
    Technical,
    #[serde(rename = "On-Page")]
    OnPage,
    Content,
}

impl RecommendationCategory {
    /// Parse a category from a payload string. Returns None for
    /// unrecognized values; callers fall back to `Technical`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "technical" => Some(Self::Technical),
            "on-page" | "onpage" | "on page" => Some(Self::OnPage),
            "content" => Some(Self::Content),
            _ => None,
        }
    }

    /// Display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::OnPage => "On-Page",
            Self::Content => "Content",
        }
    }

    /// Display tone for this category
    #[must_use]
    pub const fn tone(&self) -> Tone {
        match self {
            Self::Technical => Tone::Purple,
            Self::OnPage => Tone::Blue,
            Self::Content => Tone::Green,
        }
    }
}

impl std::fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One strategic recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// The recommendation itself
    pub recommendation: String,
    /// Category the recommendation falls under
    pub category: RecommendationCategory,
    /// Why this matters
    #[serde(default)]
    pub justification: String,
    /// Concrete steps, if any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action_items: Vec<String>,
    /// Assigned priority
    pub priority: Priority,
}

/// A recommendation annotated with its global position in the action plan.
///
/// Indices are 1-based and contiguous across tiers in priority order: for
/// counts `h`, `m`, `l`, high items take `1..=h`, medium `h+1..=h+m`, and
/// low `h+m+1..=h+m+l`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActionItem {
    /// Global 1-based display index
    pub index: usize,
    /// The underlying recommendation
    #[serde(flatten)]
    pub recommendation: Recommendation,
}

/// Recommendations partitioned into priority tiers, preserving input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TieredRecommendations {
    pub high: Vec<Recommendation>,
    pub medium: Vec<Recommendation>,
    pub low: Vec<Recommendation>,
}

impl TieredRecommendations {
    /// Recommendations in one tier
    #[must_use]
    pub fn tier(&self, priority: Priority) -> &[Recommendation] {
        match priority {
            Priority::High => &self.high,
            Priority::Medium => &self.medium,
            Priority::Low => &self.low,
        }
    }

    /// Append a recommendation to its tier
    pub fn push(&mut self, recommendation: Recommendation) {
        match recommendation.priority {
            Priority::High => self.high.push(recommendation),
            Priority::Medium => self.medium.push(recommendation),
            Priority::Low => self.low.push(recommendation),
        }
    }

    /// Total recommendations across all tiers
    #[must_use]
    pub fn total(&self) -> usize {
        self.high.len() + self.medium.len() + self.low.len()
    }

    /// True when every tier is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::parse("high"), Some(Priority::High));
        assert_eq!(Priority::parse("HIGH"), Some(Priority::High));
        assert_eq!(Priority::parse("Medium"), Some(Priority::Medium));
        assert_eq!(Priority::parse("low"), Some(Priority::Low));
        assert_eq!(Priority::parse("urgent"), None);
        assert_eq!(Priority::parse(""), None);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);
    }

    #[test]
    fn test_category_parse_variants() {
        assert_eq!(
            RecommendationCategory::parse("Technical"),
            Some(RecommendationCategory::Technical)
        );
        assert_eq!(
            RecommendationCategory::parse("On-Page"),
            Some(RecommendationCategory::OnPage)
        );
        assert_eq!(
            RecommendationCategory::parse("content"),
            Some(RecommendationCategory::Content)
        );
        assert_eq!(RecommendationCategory::parse("Social"), None);
    }

    #[test]
    fn test_category_serde_uses_display_names() {
        let json = serde_json::to_string(&RecommendationCategory::OnPage).unwrap();
        assert_eq!(json, "\"On-Page\"");
    }

    #[test]
    fn test_push_routes_by_priority() {
        let mut tiers = TieredRecommendations::default();
        tiers.push(Recommendation {
            recommendation: "Fix broken links".to_string(),
            category: RecommendationCategory::Technical,
            justification: String::new(),
            action_items: Vec::new(),
            priority: Priority::Medium,
        });
        assert_eq!(tiers.high.len(), 0);
        assert_eq!(tiers.medium.len(), 1);
        assert_eq!(tiers.total(), 1);
    }
}
