//! Report aggregation.
//!
//! [`ReportBuilder`] composes threshold evaluation, score classification,
//! and bucketization into a single immutable [`Report`] view-model. The
//! build is a pure structural transform of one payload: no I/O, no caching,
//! no mutation of the input.

use chrono::{NaiveDate, Utc};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{
    ActionItem, FindingCounts, MetricKind, MetricSample, Recommendation, RecommendationCategory,
    TieredFindings, TieredRecommendations,
};
use crate::payload::{RawAuditPayload, RawRecommendation};

use super::bucketize::{bucketize, build_action_plan};
use super::score::ScoreBand;
use super::thresholds::classify;

/// Fallback health assessment used when the payload carries none.
pub const DEFAULT_ASSESSMENT: &str =
    "requires attention regarding critical technical SEO factors and content optimization.";

/// Explicit default resolution for the executive summary.
///
/// Defaults are applied at build time, never persisted, and are injectable
/// so defaulting is testable without touching the clock.
#[derive(Debug, Clone)]
pub struct SummaryDefaults {
    /// Audit date used when the payload carries none. `None` means
    /// "today", formatted as "Month D, YYYY".
    pub audit_date: Option<String>,
    /// Assessment sentence used when the payload carries none.
    pub assessment: String,
}

impl Default for SummaryDefaults {
    fn default() -> Self {
        Self {
            audit_date: None,
            assessment: DEFAULT_ASSESSMENT.to_string(),
        }
    }
}

impl SummaryDefaults {
    /// Resolve the audit date: payload value, then the configured default,
    /// then today's date.
    #[must_use]
    pub fn resolve_audit_date(&self, raw: Option<&str>) -> String {
        raw.map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .or_else(|| self.audit_date.clone())
            .unwrap_or_else(|| format_audit_date(Utc::now().date_naive()))
    }

    /// Resolve the assessment sentence: payload value, then the configured
    /// fallback.
    #[must_use]
    pub fn resolve_assessment(&self, raw: Option<&str>) -> String {
        raw.map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.assessment.clone())
    }
}

/// Format a date the way reports display it, e.g. "March 4, 2026".
#[must_use]
pub fn format_audit_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Executive summary of one audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExecutiveSummary {
    /// Target website
    pub url: String,
    /// Audit date, already resolved for display
    pub audit_date: String,
    /// Aggregate score (0-100)
    pub score: f64,
    /// Qualitative band for the score
    pub band: ScoreBand,
    /// Health assessment sentence
    pub assessment: String,
    /// Findings counted per severity tier (recomputed, never trusted from
    /// the payload)
    pub findings_count: FindingCounts,
    /// Total findings across all tiers
    pub total_findings: usize,
}

/// Classified, display-ready audit report.
///
/// Built fresh per audit payload and immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Report {
    /// Executive summary
    pub summary: ExecutiveSummary,
    /// Measured metrics in display order; unmeasured metrics are omitted
    pub metrics: IndexMap<MetricKind, MetricSample>,
    /// Findings partitioned by severity tier
    pub findings: TieredFindings,
    /// Recommendations partitioned by priority tier
    pub recommendations: TieredRecommendations,
    /// Recommendations flattened across tiers with contiguous display
    /// indices
    pub action_plan: Vec<ActionItem>,
    /// Malformed recommendation records that were skipped during the build
    pub skipped_recommendations: usize,
}

impl Report {
    /// Get the sample for one metric, if it was measured
    #[must_use]
    pub fn metric(&self, kind: MetricKind) -> Option<&MetricSample> {
        self.metrics.get(&kind)
    }

    /// True when at least one critical finding was recorded
    #[must_use]
    pub fn has_critical_findings(&self) -> bool {
        self.summary.findings_count.critical > 0
    }

    /// Log a single summary line if any recommendation records were skipped
    /// during the build.
    pub fn log_skip_summary(&self) {
        if self.skipped_recommendations > 0 {
            tracing::info!(
                skipped = self.skipped_recommendations,
                "Malformed recommendation records: {} record(s) could not be \
                 classified and were skipped.",
                self.skipped_recommendations
            );
        }
    }
}

/// Builds a [`Report`] from a raw audit payload.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    defaults: SummaryDefaults,
}

impl ReportBuilder {
    /// Create a builder with the standard defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole default set
    #[must_use]
    pub fn with_defaults(mut self, defaults: SummaryDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Use a fixed audit date instead of today's
    #[must_use]
    pub fn with_audit_date(mut self, audit_date: impl Into<String>) -> Self {
        self.defaults.audit_date = Some(audit_date.into());
        self
    }

    /// Use a custom fallback assessment sentence
    #[must_use]
    pub fn with_assessment(mut self, assessment: impl Into<String>) -> Self {
        self.defaults.assessment = assessment.into();
        self
    }

    /// Build a report from a raw audit payload.
    ///
    /// Malformed recommendation records are skipped and counted rather than
    /// failing the build, so one bad record cannot blank the whole report.
    #[must_use]
    pub fn build(&self, raw: &RawAuditPayload) -> Report {
        let findings = raw.findings.clone();
        let breakdown = bucketize(&findings);

        let mut recommendations = TieredRecommendations::default();
        let mut skipped = 0usize;
        for (position, value) in raw.recommendations.iter().enumerate() {
            match resolve_recommendation(position, value) {
                Some(rec) => recommendations.push(rec),
                None => skipped += 1,
            }
        }
        let action_plan = build_action_plan(&recommendations);

        let mut metrics = IndexMap::new();
        for kind in MetricKind::ALL {
            if let Some(value) = raw.metrics.value(kind) {
                metrics.insert(kind, MetricSample::new(kind, value, classify(kind, value)));
            }
        }

        let score = raw.summary.score.unwrap_or(0.0);
        let summary = ExecutiveSummary {
            url: raw
                .summary
                .url
                .as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| "N/A".to_string()),
            audit_date: self
                .defaults
                .resolve_audit_date(raw.summary.audit_date.as_deref()),
            score,
            band: ScoreBand::from_score(score),
            assessment: self
                .defaults
                .resolve_assessment(raw.summary.assessment.as_deref()),
            findings_count: breakdown.counts,
            total_findings: breakdown.counts.total(),
        };

        let report = Report {
            summary,
            metrics,
            findings,
            recommendations,
            action_plan,
            skipped_recommendations: skipped,
        };
        report.log_skip_summary();
        report
    }
}

/// Build a report with the standard defaults.
#[must_use]
pub fn build_report(raw: &RawAuditPayload) -> Report {
    ReportBuilder::new().build(raw)
}

/// Resolve one raw recommendation record.
///
/// Returns None when the record is structurally unusable: not an object,
/// missing its text, or carrying a missing or unrecognized priority. An
/// unrecognized category is not structural and falls back to `Technical`.
fn resolve_recommendation(position: usize, value: &serde_json::Value) -> Option<Recommendation> {
    let raw: RawRecommendation = match serde_json::from_value(value.clone()) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(position, error = %err, "skipping malformed recommendation record");
            return None;
        }
    };

    let text = match raw
        .recommendation
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        Some(text) => text.to_string(),
        None => {
            tracing::warn!(position, "skipping recommendation record without text");
            return None;
        }
    };

    let priority = match raw.priority.as_deref().and_then(crate::model::Priority::parse) {
        Some(priority) => priority,
        None => {
            tracing::warn!(
                position,
                priority = raw.priority.as_deref().unwrap_or("<missing>"),
                "skipping recommendation record with unusable priority"
            );
            return None;
        }
    };

    let category = match raw.category.as_deref() {
        Some(s) => RecommendationCategory::parse(s).unwrap_or_else(|| {
            tracing::debug!(position, category = s, "unrecognized category, using Technical");
            RecommendationCategory::Technical
        }),
        None => RecommendationCategory::Technical,
    };

    Some(Recommendation {
        recommendation: text,
        category,
        justification: raw.justification.unwrap_or_default(),
        action_items: raw.action_items.unwrap_or_default(),
        priority,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Finding, Priority, Status};
    use serde_json::json;

    fn payload(value: serde_json::Value) -> RawAuditPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_build_full_payload() {
        let raw = payload(json!({
            "summary": {
                "url": "https://example.com",
                "auditDate": "January 5, 2026",
                "score": 72,
                "assessment": "is in decent shape overall."
            },
            "metrics": {
                "lcp": 1.8,
                "fid": 50,
                "cls": 0.05,
                "performanceScore": 85
            },
            "findings": {
                "critical": [{"title": "Missing meta description", "description": "d"}],
                "recommended": [{"title": "Add alt text", "description": "d"}],
                "good": [{"title": "HTTPS enabled", "description": "d"}]
            },
            "recommendations": [
                {"recommendation": "Fix meta tags", "category": "On-Page",
                 "justification": "j", "priority": "high"},
                {"recommendation": "Refresh old content", "category": "Content",
                 "justification": "j", "priority": "low"}
            ]
        }));

        let report = build_report(&raw);

        assert_eq!(report.summary.url, "https://example.com");
        assert_eq!(report.summary.audit_date, "January 5, 2026");
        assert_eq!(report.summary.band, ScoreBand::Good);
        assert_eq!(report.summary.total_findings, 3);
        assert_eq!(report.metrics.len(), 4);
        assert_eq!(report.metric(MetricKind::Lcp).unwrap().status, Status::Good);
        assert!(report.metric(MetricKind::ResponseTime).is_none());
        assert_eq!(report.action_plan.len(), 2);
        assert_eq!(report.action_plan[0].recommendation.priority, Priority::High);
        assert_eq!(report.skipped_recommendations, 0);
    }

    #[test]
    fn test_empty_payload_builds_without_error() {
        let report = build_report(&payload(json!({})));

        assert_eq!(report.summary.url, "N/A");
        assert_eq!(report.summary.score, 0.0);
        assert_eq!(report.summary.band, ScoreBand::Poor);
        assert_eq!(report.summary.assessment, DEFAULT_ASSESSMENT);
        assert_eq!(report.summary.total_findings, 0);
        assert!(report.metrics.is_empty());
        assert!(report.action_plan.is_empty());
    }

    #[test]
    fn test_malformed_recommendations_are_skipped_and_counted() {
        let raw = payload(json!({
            "recommendations": [
                {"recommendation": "Keep me", "category": "Technical",
                 "justification": "j", "priority": "medium"},
                {"recommendation": "No priority", "category": "Technical"},
                {"recommendation": "Bad priority", "priority": "urgent"},
                {"priority": "high"},
                "not an object"
            ]
        }));

        let report = build_report(&raw);

        assert_eq!(report.recommendations.total(), 1);
        assert_eq!(report.skipped_recommendations, 4);
        assert_eq!(report.action_plan.len(), 1);
        assert_eq!(report.action_plan[0].index, 1);
    }

    #[test]
    fn test_unrecognized_category_falls_back_to_technical() {
        let raw = payload(json!({
            "recommendations": [
                {"recommendation": "r", "category": "Social", "priority": "low"}
            ]
        }));

        let report = build_report(&raw);
        assert_eq!(
            report.recommendations.low[0].category,
            RecommendationCategory::Technical
        );
        assert_eq!(report.skipped_recommendations, 0);
    }

    #[test]
    fn test_findings_counts_recomputed_not_trusted() {
        let raw = payload(json!({
            "summary": {"findingsCount": {"good": 99, "recommended": 99, "critical": 99}},
            "findings": {"good": [{"title": "g", "description": ""}]}
        }));

        let report = build_report(&raw);
        assert_eq!(report.summary.findings_count.good, 1);
        assert_eq!(report.summary.findings_count.critical, 0);
        assert_eq!(report.summary.total_findings, 1);
    }

    #[test]
    fn test_audit_date_default_is_injectable() {
        let report = ReportBuilder::new()
            .with_audit_date("February 1, 2026")
            .build(&payload(json!({})));
        assert_eq!(report.summary.audit_date, "February 1, 2026");

        // Payload value still wins over the injected default
        let report = ReportBuilder::new()
            .with_audit_date("February 1, 2026")
            .build(&payload(json!({"summary": {"auditDate": "March 2, 2026"}})));
        assert_eq!(report.summary.audit_date, "March 2, 2026");
    }

    #[test]
    fn test_format_audit_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        assert_eq!(format_audit_date(date), "March 4, 2026");
    }

    #[test]
    fn test_input_payload_not_mutated() {
        let raw = payload(json!({
            "findings": {"critical": [{"title": "c", "description": ""}]}
        }));
        let before = raw.clone();
        let _ = build_report(&raw);
        assert_eq!(raw, before);
    }

    #[test]
    fn test_preserves_input_order_within_priority_tier() {
        let raw = payload(json!({
            "recommendations": [
                {"recommendation": "first", "category": "Technical", "priority": "high"},
                {"recommendation": "skip-me", "priority": "bogus"},
                {"recommendation": "second", "category": "Technical", "priority": "high"}
            ]
        }));

        let report = build_report(&raw);
        let order: Vec<_> = report
            .recommendations
            .high
            .iter()
            .map(|r| r.recommendation.as_str())
            .collect();
        assert_eq!(order, vec!["first", "second"]);
    }

    #[test]
    fn test_has_critical_findings() {
        let raw = payload(json!({
            "findings": {"critical": [{"title": "c", "description": ""}]}
        }));
        assert!(build_report(&raw).has_critical_findings());

        let raw = payload(json!({
            "findings": {"good": [{"title": "g", "description": ""}]}
        }));
        assert!(!build_report(&raw).has_critical_findings());
    }

    #[test]
    fn test_findings_survive_into_report_unchanged() {
        let raw = payload(json!({
            "findings": {
                "recommended": [
                    {"title": "t", "description": "d", "details": ["a", "b"]}
                ]
            }
        }));
        let report = build_report(&raw);
        assert_eq!(
            report.findings.recommended[0],
            Finding {
                title: "t".to_string(),
                description: "d".to_string(),
                details: vec!["a".to_string(), "b".to_string()],
            }
        );
    }
}
