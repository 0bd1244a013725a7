//! Unified error types for seo-audit-tools.
//!
//! The classification core itself is a total transform and produces no
//! errors; everything here belongs to the edges of the library: reading and
//! decoding payloads, and rendering output. Per-record problems inside a
//! payload are deliberately not errors (they are skipped and counted during
//! report building).

use std::path::PathBuf;
use thiserror::Error;

/// Convenient Result type for seo-audit-tools operations
pub type Result<T> = std::result::Result<T, SeoAuditError>;

/// Main error type for seo-audit-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SeoAuditError {
    /// Errors during audit payload ingestion
    #[error("Failed to read audit payload: {context}")]
    Payload {
        context: String,
        #[source]
        source: PayloadErrorKind,
    },

    /// Errors during report rendering
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with path context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific payload error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PayloadErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Missing required field: {field} in {context}")]
    MissingField { field: String, context: String },

    #[error("Invalid field value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    #[error("Payload is {size_mb} MB, exceeding the {limit_mb} MB limit")]
    OversizedInput { size_mb: u64, limit_mb: u64 },
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Formatting failed: {0}")]
    FormatError(String),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),
}

impl SeoAuditError {
    /// Create a payload error with context
    pub fn payload(context: impl Into<String>, source: PayloadErrorKind) -> Self {
        Self::Payload {
            context: context.into(),
            source,
        }
    }

    /// Create a payload error for a missing field
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::payload(
            "missing required field",
            PayloadErrorKind::MissingField {
                field: field.into(),
                context: context.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: source.to_string(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }
}

impl From<std::io::Error> for SeoAuditError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SeoAuditError {
    fn from(err: serde_json::Error) -> Self {
        Self::payload(
            "JSON deserialization",
            PayloadErrorKind::InvalidJson(err.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_mentions_field() {
        let err = SeoAuditError::missing_field("priority", "recommendation");
        let display = format!("{err}");
        assert!(display.contains("payload"), "unexpected display: {display}");

        // The kind carries the field detail
        let source = std::error::Error::source(&err).expect("has source");
        let source = format!("{source}");
        assert!(source.contains("priority"), "unexpected source: {source}");
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SeoAuditError::io("/path/to/audit.json", io_err);
        assert!(format!("{err}").contains("/path/to/audit.json"));
    }

    #[test]
    fn test_serde_error_converts_to_payload_kind() {
        let bad: std::result::Result<serde_json::Value, _> = serde_json::from_str("{oops");
        let err: SeoAuditError = bad.unwrap_err().into();
        assert!(matches!(
            err,
            SeoAuditError::Payload {
                source: PayloadErrorKind::InvalidJson(_),
                ..
            }
        ));
    }

    #[test]
    fn test_oversized_kind_reports_sizes() {
        let err = SeoAuditError::payload(
            "at audit.json",
            PayloadErrorKind::OversizedInput {
                size_mb: 64,
                limit_mb: 16,
            },
        );
        let source = format!("{}", std::error::Error::source(&err).expect("has source"));
        assert!(source.contains("64"));
        assert!(source.contains("16"));
    }
}
