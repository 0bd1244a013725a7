//! Audit payload ingestion.
//!
//! Reads the raw JSON result of an analysis run into [`RawAuditPayload`].
//! The envelope is parsed strictly enough to catch broken JSON, while
//! individual recommendation records stay raw until report building so a
//! single malformed record is skipped, not fatal.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use seo_audit_tools::payload::parse_payload;
//!
//! let payload = parse_payload(Path::new("audit.json")).unwrap();
//! println!("{} recommendation records", payload.recommendations.len());
//! ```

mod raw;

pub use raw::{RawAuditPayload, RawMetrics, RawRecommendation, RawSummary};

use std::path::Path;

use crate::error::{PayloadErrorKind, Result, SeoAuditError};

/// Maximum payload file size (16 MB). Audit payloads are small; anything
/// bigger is almost certainly the wrong file.
pub const MAX_PAYLOAD_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Read and parse an audit payload from a file.
///
/// Returns an error if the file exceeds [`MAX_PAYLOAD_FILE_SIZE`].
pub fn parse_payload(path: &Path) -> Result<RawAuditPayload> {
    let metadata = std::fs::metadata(path).map_err(|e| SeoAuditError::io(path, e))?;
    if metadata.len() > MAX_PAYLOAD_FILE_SIZE {
        return Err(SeoAuditError::payload(
            format!("at {}", path.display()),
            PayloadErrorKind::OversizedInput {
                size_mb: metadata.len() / (1024 * 1024),
                limit_mb: MAX_PAYLOAD_FILE_SIZE / (1024 * 1024),
            },
        ));
    }
    let content = std::fs::read_to_string(path).map_err(|e| SeoAuditError::io(path, e))?;
    parse_payload_str(&content)
}

/// Parse an audit payload from string content.
pub fn parse_payload_str(content: &str) -> Result<RawAuditPayload> {
    serde_json::from_str(content).map_err(|e| {
        SeoAuditError::payload(
            "parsing audit payload",
            PayloadErrorKind::InvalidJson(e.to_string()),
        )
    })
}
