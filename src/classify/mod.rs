//! Report classification core.
//!
//! Four pure transforms compose a raw audit payload into a display-ready
//! report:
//!
//! - **Threshold evaluation** ([`classify`], [`evaluate`]): maps a raw metric
//!   value to a qualitative [`Status`](crate::model::Status) against a fixed
//!   benchmark table.
//! - **Score classification** ([`ScoreBand`]): maps the aggregate 0-100
//!   score to a qualitative band.
//! - **Bucketization** ([`bucketize`], [`build_action_plan`]): orders and
//!   counts pre-partitioned findings and recommendations, assigning the
//!   action plan its tier-spanning display index.
//! - **Aggregation** ([`ReportBuilder`]): composes the above into a
//!   [`Report`].
//!
//! Everything here is synchronous and allocation-local; `build_report` may
//! be called concurrently with no coordination.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use seo_audit_tools::{build_report, parse_payload};
//!
//! let payload = parse_payload(Path::new("audit.json")).unwrap();
//! let report = build_report(&payload);
//!
//! println!("Score: {}/100 ({})", report.summary.score, report.summary.band.label());
//! for item in &report.action_plan {
//!     println!("{}. {}", item.index, item.recommendation.recommendation);
//! }
//! ```

mod bucketize;
mod builder;
mod score;
mod thresholds;

pub use bucketize::{build_action_plan, bucketize, ClassifiedFinding, FindingsBreakdown};
pub use builder::{
    build_report, format_audit_date, ExecutiveSummary, Report, ReportBuilder, SummaryDefaults,
    DEFAULT_ASSESSMENT,
};
pub use score::ScoreBand;
pub use thresholds::{classify, evaluate};
