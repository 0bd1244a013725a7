//! Report rendering.
//!
//! This module provides the output formats for classified audit reports:
//! - JSON: structured data for programmatic integration
//! - Markdown: human-readable documentation
//! - Summary: compact shell-friendly output
//!
//! Every section renders an explicit "no items" state when empty, so an
//! empty tier is distinguishable from one that was never computed.

mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::ReportFormat;

use thiserror::Error;

use crate::classify::Report;

/// Errors that can occur during report rendering
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a classified report to a string
    fn generate(&self, report: &Report) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_formats() {
        assert_eq!(
            create_reporter(ReportFormat::Json).format(),
            ReportFormat::Json
        );
        assert_eq!(
            create_reporter(ReportFormat::Markdown).format(),
            ReportFormat::Markdown
        );
        assert_eq!(
            create_reporter(ReportFormat::Summary).format(),
            ReportFormat::Summary
        );
        // Auto resolves to the summary reporter
        assert_eq!(
            create_reporter(ReportFormat::Auto).format(),
            ReportFormat::Summary
        );
    }
}
