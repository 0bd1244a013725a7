//! Fixed benchmark thresholds for performance metrics.
//!
//! Boundaries are half-open on the good side: a value exactly at a boundary
//! falls into the worse band for lower-is-better metrics (an LCP of exactly
//! 2.5s is `warning`, not `good`). The performance score is the one
//! higher-is-better metric and uses inclusive `>=` comparisons instead.

use crate::model::{MetricKind, Status};

/// Classify a measured metric value.
///
/// Total over all inputs: out-of-range and non-finite values are classified
/// into the nearest band rather than rejected (NaN fails every comparison
/// and lands in the worst band).
#[must_use]
pub fn classify(kind: MetricKind, value: f64) -> Status {
    match kind {
        MetricKind::Lcp => lower_is_better(value, 2.5, 4.0),
        MetricKind::Fid => lower_is_better(value, 100.0, 300.0),
        MetricKind::Cls => lower_is_better(value, 0.1, 0.25),
        MetricKind::ResponseTime => lower_is_better(value, 1.0, 2.0),
        MetricKind::PageSize => lower_is_better(value, 3_000.0 * 1024.0, 5_000.0 * 1024.0),
        MetricKind::PerformanceScore => {
            if value >= 90.0 {
                Status::Good
            } else if value >= 50.0 {
                Status::Warning
            } else {
                Status::Critical
            }
        }
    }
}

/// Classify an optional metric value, mapping an unmeasured sample to the
/// distinct [`Status::Unavailable`] state.
#[must_use]
pub fn evaluate(kind: MetricKind, value: Option<f64>) -> Status {
    match value {
        Some(v) => classify(kind, v),
        None => Status::Unavailable,
    }
}

fn lower_is_better(value: f64, good_below: f64, warning_below: f64) -> Status {
    if value < good_below {
        Status::Good
    } else if value < warning_below {
        Status::Warning
    } else {
        Status::Critical
    }
}
