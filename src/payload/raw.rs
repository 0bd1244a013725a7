//! Wire-format structures for raw audit payloads.
//!
//! Field names follow the JSON produced by the audit backend (camelCase).
//! Every field is optional; absent sections default to empty so a sparse
//! payload still builds a report.

use serde::{Deserialize, Serialize};

use crate::model::{MetricKind, TieredFindings};

/// The raw JSON result of one SEO/performance analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawAuditPayload {
    /// Document-level summary fields
    pub summary: RawSummary,
    /// Measured performance metrics; `null`/absent means "not measured"
    pub metrics: RawMetrics,
    /// Findings pre-partitioned into severity tiers
    pub findings: TieredFindings,
    /// Recommendation records, kept as raw JSON so one malformed record
    /// cannot fail the whole payload. Records are resolved individually
    /// during report building.
    pub recommendations: Vec<serde_json::Value>,
}

/// Raw summary section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSummary {
    pub url: Option<String>,
    pub audit_date: Option<String>,
    pub score: Option<f64>,
    pub assessment: Option<String>,
}

/// Raw performance metrics.
///
/// Page size is carried in bytes; LCP and response time in seconds; FID in
/// milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawMetrics {
    pub lcp: Option<f64>,
    pub fid: Option<f64>,
    pub cls: Option<f64>,
    pub response_time: Option<f64>,
    pub page_size: Option<f64>,
    pub performance_score: Option<f64>,
}

impl RawMetrics {
    /// Look up the raw value for one metric kind
    #[must_use]
    pub const fn value(&self, kind: MetricKind) -> Option<f64> {
        match kind {
            MetricKind::Lcp => self.lcp,
            MetricKind::Fid => self.fid,
            MetricKind::Cls => self.cls,
            MetricKind::ResponseTime => self.response_time,
            MetricKind::PageSize => self.page_size,
            MetricKind::PerformanceScore => self.performance_score,
        }
    }
}

/// One raw recommendation record before resolution.
///
/// Everything is optional here; the builder decides which absences make a
/// record unusable (text, priority) and which have safe fallbacks
/// (category, justification, action items).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawRecommendation {
    pub recommendation: Option<String>,
    pub category: Option<String>,
    pub justification: Option<String>,
    pub action_items: Option<Vec<String>>,
    pub priority: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes() {
        let payload: RawAuditPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.summary.url.is_none());
        assert!(payload.findings.is_empty());
        assert!(payload.recommendations.is_empty());
    }

    #[test]
    fn test_null_metric_is_unmeasured() {
        let payload: RawAuditPayload =
            serde_json::from_str(r#"{"metrics": {"lcp": null, "fid": 50}}"#).unwrap();
        assert_eq!(payload.metrics.value(MetricKind::Lcp), None);
        assert_eq!(payload.metrics.value(MetricKind::Fid), Some(50.0));
    }

    #[test]
    fn test_camel_case_field_names() {
        let payload: RawAuditPayload = serde_json::from_str(
            r#"{
                "summary": {"auditDate": "May 1, 2026"},
                "metrics": {"responseTime": 0.8, "pageSize": 1048576, "performanceScore": 91}
            }"#,
        )
        .unwrap();
        assert_eq!(payload.summary.audit_date.as_deref(), Some("May 1, 2026"));
        assert_eq!(payload.metrics.response_time, Some(0.8));
        assert_eq!(payload.metrics.page_size, Some(1_048_576.0));
        assert_eq!(payload.metrics.performance_score, Some(91.0));
    }

    #[test]
    fn test_malformed_recommendation_record_does_not_fail_envelope() {
        let payload: RawAuditPayload = serde_json::from_str(
            r#"{"recommendations": [{"priority": 5}, "garbage", {"recommendation": "ok", "priority": "high"}]}"#,
        )
        .unwrap();
        assert_eq!(payload.recommendations.len(), 3);
    }
}
