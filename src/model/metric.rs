//! Performance metric kinds and samples.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Status;

/// The performance metrics an audit payload can carry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    /// Largest Contentful Paint, seconds
    Lcp,
    /// First Input Delay, milliseconds
    Fid,
    /// Cumulative Layout Shift, unitless
    Cls,
    /// Server response time, seconds
    ResponseTime,
    /// Total page weight, bytes
    PageSize,
    /// Aggregate performance score, 0-100
    PerformanceScore,
}

impl MetricKind {
    /// All metric kinds in display order
    pub const ALL: [Self; 6] = [
        Self::Lcp,
        Self::Fid,
        Self::Cls,
        Self::ResponseTime,
        Self::PageSize,
        Self::PerformanceScore,
    ];

    /// Full metric name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Lcp => "Largest Contentful Paint",
            Self::Fid => "First Input Delay",
            Self::Cls => "Cumulative Layout Shift",
            Self::ResponseTime => "Response Time",
            Self::PageSize => "Page Size",
            Self::PerformanceScore => "Overall Performance Score",
        }
    }

    /// Short acronym or label
    #[must_use]
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::Lcp => "LCP",
            Self::Fid => "FID",
            Self::Cls => "CLS",
            Self::ResponseTime => "Response Time",
            Self::PageSize => "Page Size",
            Self::PerformanceScore => "Score",
        }
    }

    /// Display unit. Page size values are carried in bytes but displayed in KB.
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Lcp | Self::ResponseTime => "s",
            Self::Fid => "ms",
            Self::Cls => "",
            Self::PageSize => "KB",
            Self::PerformanceScore => "/100",
        }
    }

    /// Industry benchmark shown next to the metric
    #[must_use]
    pub const fn benchmark(&self) -> &'static str {
        match self {
            Self::Lcp => "< 2.5s",
            Self::Fid => "< 100ms",
            Self::Cls => "< 0.1",
            Self::ResponseTime => "varies",
            Self::PageSize => "< 3000 KB",
            Self::PerformanceScore => "> 90",
        }
    }

    /// One-line description of what the metric measures
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Lcp => "Measures loading performance",
            Self::Fid => "Measures interactivity",
            Self::Cls => "Measures visual stability",
            Self::ResponseTime => "Time to first byte from the server",
            Self::PageSize => "Total transferred page weight",
            Self::PerformanceScore => "General health indicator",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// One measured quantity with its classification.
///
/// The `name`, `unit`, and `benchmark` strings are denormalized from the
/// kind's lookup tables so the serialized report is self-describing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MetricSample {
    /// Which metric this sample measures
    pub kind: MetricKind,
    /// Full metric name
    pub name: String,
    /// Raw measured value (bytes for page size, not KB)
    pub value: f64,
    /// Display unit
    pub unit: String,
    /// Industry benchmark
    pub benchmark: String,
    /// Classified status
    pub status: Status,
}

impl MetricSample {
    /// Create a sample, filling the display fields from the kind's tables.
    #[must_use]
    pub fn new(kind: MetricKind, value: f64, status: Status) -> Self {
        Self {
            kind,
            name: kind.name().to_string(),
            value,
            unit: kind.unit().to_string(),
            benchmark: kind.benchmark().to_string(),
            status,
        }
    }

    /// Format the value for display: page size in KB with one decimal,
    /// layout shift with three decimals, everything else as-is.
    #[must_use]
    pub fn display_value(&self) -> String {
        match self.kind {
            MetricKind::PageSize => format!("{:.1}", self.value / 1024.0),
            MetricKind::Cls => format!("{:.3}", self.value),
            MetricKind::PerformanceScore => format!("{:.0}", self.value),
            _ => format_trimmed(self.value),
        }
    }
}

/// Format a float without trailing zeros ("1.8", "50", "0.25").
fn format_trimmed(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}
