#![no_main]
use libfuzzer_sys::fuzz_target;
use seo_audit_tools::{build_report, parse_payload_str};

const MAX_WRAPPED_INPUT_LEN: usize = 10_000;

/// Fuzz the payload parser and report builder.
///
/// Wraps input as a recommendation record inside a minimal payload envelope
/// to exercise the per-record skip-and-count path in addition to top-level
/// parsing.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Try raw input first
        if let Ok(payload) = parse_payload_str(s) {
            let _ = build_report(&payload);
        }

        // Also try wrapping as a recommendation record
        if s.len() < MAX_WRAPPED_INPUT_LEN {
            let wrapped = format!(r#"{{"recommendations":[{s}]}}"#);
            if let Ok(payload) = parse_payload_str(&wrapped) {
                let _ = build_report(&payload);
            }
        }
    }
});
