//! Ordering and counting of pre-partitioned findings and recommendations.
//!
//! Input order within each tier is preserved; there is no secondary sort.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{
    ActionItem, Finding, FindingCounts, FindingTier, TieredFindings, TieredRecommendations,
};

/// A finding tagged with the tier it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClassifiedFinding {
    /// Severity tier
    pub tier: FindingTier,
    /// The finding itself
    #[serde(flatten)]
    pub finding: Finding,
}

/// Findings flattened into display order with per-tier counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FindingsBreakdown {
    /// Per-tier counts
    pub counts: FindingCounts,
    /// All findings in tier order (critical, recommended, good), input
    /// order preserved within each tier
    pub ordered: Vec<ClassifiedFinding>,
}

/// Flatten tiered findings into a single ordered list with counts.
///
/// Empty tiers contribute nothing; they never appear as placeholder entries.
#[must_use]
pub fn bucketize(findings: &TieredFindings) -> FindingsBreakdown {
    let counts = findings.counts();
    let mut ordered = Vec::with_capacity(counts.total());

    for tier in FindingTier::ALL {
        ordered.extend(findings.tier(tier).iter().cloned().map(|finding| {
            ClassifiedFinding { tier, finding }
        }));
    }

    FindingsBreakdown { counts, ordered }
}

/// Flatten tiered recommendations into the action plan.
///
/// Items are concatenated in priority order (high, medium, low) and assigned
/// a contiguous 1-based index: for tier counts `h`, `m`, `l`, high items take
/// `1..=h`, medium `h+1..=h+m`, and low `h+m+1..=h+m+l`. Each item's
/// priority is normalized to the tier it was supplied in.
#[must_use]
pub fn build_action_plan(recommendations: &TieredRecommendations) -> Vec<ActionItem> {
    let mut plan = Vec::with_capacity(recommendations.total());

    for priority in crate::model::Priority::ALL {
        for rec in recommendations.tier(priority) {
            let mut recommendation = rec.clone();
            recommendation.priority = priority;
            plan.push(ActionItem {
                index: plan.len() + 1,
                recommendation,
            });
        }
    }

    plan
}
