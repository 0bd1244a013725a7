//! **A library for classifying raw SEO audit payloads into display-ready reports.**
//!
//! `seo-audit-tools` takes the JSON result of an SEO/performance analysis run
//! and applies a deterministic classification model: per-metric threshold
//! evaluation against Core Web Vitals benchmarks, severity bucketization of
//! findings, priority bucketization of recommendations with a cross-tier
//! action-plan index, and qualitative banding of the overall score. The
//! output is a single immutable [`Report`] view-model, ready for rendering.
//! It powers both a command-line interface (CLI) and a Rust library for
//! programmatic integration.
//!
//! ## Key Features
//!
//! - **Threshold Evaluation**: Maps raw metric values (LCP, FID, CLS,
//!   response time, page size, performance score) to `good`/`warning`/
//!   `critical` against a fixed benchmark table. Unmeasured metrics are a
//!   distinct `unavailable` state, never an error.
//! - **Finding Bucketization**: Stable, order-preserving grouping into
//!   `critical`/`recommended`/`good` tiers with per-tier counts.
//! - **Action Plan**: Recommendations flattened across `high`/`medium`/`low`
//!   tiers with contiguous 1-based display indices.
//! - **Score Classification**: Aggregate 0-100 score mapped to
//!   `Poor`/`Fair`/`Good`/`Excellent` bands, total over out-of-range input.
//! - **Lenient Ingestion**: A malformed recommendation record is skipped and
//!   counted rather than failing the whole report.
//! - **Flexible Reporting**: JSON, Markdown, and compact terminal summary
//!   renderers.
//!
//! ## Core Concepts & Modules
//!
//! - **[`payload`]**: Ingests the raw audit payload JSON into
//!   [`RawAuditPayload`].
//! - **[`classify`]**: The classification core; [`build_report`] turns a raw
//!   payload into a [`Report`].
//! - **[`model`]**: The domain vocabulary: metric kinds, statuses, finding
//!   tiers, priorities. Findings and recommendations use two deliberately
//!   distinct tier vocabularies.
//! - **[`reports`]**: Report generators for the supported output formats.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use seo_audit_tools::{build_report, parse_payload};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let payload = parse_payload(Path::new("audit.json"))?;
//!     let report = build_report(&payload);
//!
//!     println!(
//!         "{} scored {}/100 ({}) with {} findings",
//!         report.summary.url,
//!         report.summary.score,
//!         report.summary.band.label(),
//!         report.summary.total_findings,
//!     );
//!
//!     for item in &report.action_plan {
//!         println!("{}. {}", item.index, item.recommendation.recommendation);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the library crate. If you are looking for the
//! command-line tool, please refer to the project's README or install it via
//! `cargo install seo-audit-tools`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod classify;
pub mod cli;
pub mod error;
pub mod model;
pub mod payload;
pub mod reports;

// Re-export main types for convenience
pub use classify::{
    build_action_plan, build_report, bucketize, classify, evaluate, ExecutiveSummary,
    FindingsBreakdown, Report, ReportBuilder, ScoreBand, SummaryDefaults,
};
pub use error::{Result, SeoAuditError};
pub use model::{
    ActionItem, Finding, FindingCounts, FindingTier, MetricKind, MetricSample, Priority,
    Recommendation, RecommendationCategory, Status, TieredFindings, TieredRecommendations, Tone,
};
pub use payload::{parse_payload, parse_payload_str, RawAuditPayload};
pub use reports::{create_reporter, ReportFormat, ReportGenerator};
