//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use unicode_width::UnicodeWidthStr;

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::classify::Report;
use crate::model::{FindingTier, Tone};

/// Text styles used by the summary layout, alongside the domain tones.
#[derive(Debug, Clone, Copy)]
enum Style {
    Header,
    Label,
    Muted,
    Toned(Tone),
}

/// ANSI SGR code for a style. Tones map onto the terminal's color families.
const fn sgr(style: Style) -> &'static str {
    match style {
        Style::Header => "1",
        Style::Label => "36",
        Style::Muted => "2",
        Style::Toned(Tone::Green) => "32",
        Style::Toned(Tone::Yellow) => "33",
        Style::Toned(Tone::Red) => "31",
        Style::Toned(Tone::Blue) => "36",
        Style::Toned(Tone::Purple) => "35",
        Style::Toned(Tone::Slate) => "2",
    }
}

/// Pad a string to a display width, accounting for wide characters.
fn pad(text: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(text);
    if current >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - current))
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.colored {
            format!("\x1b[{}m{text}\x1b[0m", sgr(style))
        } else {
            text.to_string()
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, report: &Report) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let summary = &report.summary;

        // Header
        lines.push(self.paint("SEO Audit Summary", Style::Header));
        lines.push(self.paint("─".repeat(40).as_str(), Style::Muted));

        lines.push(format!(
            "{}  {}",
            self.paint("URL:", Style::Label),
            summary.url
        ));
        lines.push(format!(
            "{}  {}",
            self.paint("Date:", Style::Label),
            summary.audit_date
        ));

        let band_label = format!("({})", summary.band.label());
        lines.push(format!(
            "{}  {}/100 {}",
            self.paint("Score:", Style::Label),
            summary.score,
            self.paint(&band_label, Style::Toned(summary.band.tone()))
        ));

        // Findings
        lines.push(String::new());
        lines.push(self.paint("Findings:", Style::Header));
        let counts = &summary.findings_count;
        if counts.total() == 0 {
            lines.push(format!(
                "  {}",
                self.paint("No findings recorded", Style::Muted)
            ));
        } else {
            for (count, tier) in [
                (counts.critical, FindingTier::Critical),
                (counts.recommended, FindingTier::Recommended),
                (counts.good, FindingTier::Good),
            ] {
                if count > 0 {
                    let marker = format!("{count} {tier}");
                    lines.push(format!(
                        "  {}",
                        self.paint(&marker, Style::Toned(tier.tone()))
                    ));
                }
            }
        }

        // Metrics
        lines.push(String::new());
        lines.push(self.paint("Metrics:", Style::Header));
        if report.metrics.is_empty() {
            lines.push(format!(
                "  {}",
                self.paint("No metrics measured", Style::Muted)
            ));
        } else {
            let name_width = report
                .metrics
                .values()
                .map(|s| UnicodeWidthStr::width(s.name.as_str()))
                .max()
                .unwrap_or(0);
            for sample in report.metrics.values() {
                let value = format!("{}{}", sample.display_value(), sample.unit);
                lines.push(format!(
                    "  {}  {}  {}",
                    pad(&sample.name, name_width),
                    pad(&value, 10),
                    self.paint(sample.status.label(), Style::Toned(sample.status.tone()))
                ));
            }
        }

        // Action plan
        lines.push(String::new());
        lines.push(self.paint("Action Plan:", Style::Header));
        if report.action_plan.is_empty() {
            lines.push(format!(
                "  {}",
                self.paint("No action plan available", Style::Muted)
            ));
        } else {
            for item in &report.action_plan {
                let badge = format!("[{}]", item.recommendation.priority.label());
                lines.push(format!(
                    "  {}. {} {}",
                    item.index,
                    self.paint(&badge, Style::Toned(item.recommendation.priority.tone())),
                    item.recommendation.recommendation
                ));
            }
        }

        if report.skipped_recommendations > 0 {
            lines.push(String::new());
            lines.push(self.paint(
                &format!(
                    "{} malformed recommendation record(s) skipped",
                    report.skipped_recommendations
                ),
                Style::Muted,
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::build_report;
    use crate::payload::parse_payload_str;

    fn render(payload: &str) -> String {
        let payload = parse_payload_str(payload).unwrap();
        let report = build_report(&payload);
        SummaryReporter::new().no_color().generate(&report).unwrap()
    }

    #[test]
    fn test_summary_contains_score_and_band() {
        let out = render(r#"{"summary": {"url": "https://example.com", "score": 85}}"#);
        assert!(out.contains("SEO Audit Summary"));
        assert!(out.contains("https://example.com"));
        assert!(out.contains("85/100 (Excellent)"));
    }

    #[test]
    fn test_empty_report_renders_explicit_states() {
        let out = render("{}");
        assert!(out.contains("No findings recorded"));
        assert!(out.contains("No metrics measured"));
        assert!(out.contains("No action plan available"));
    }

    #[test]
    fn test_metrics_lines_show_status_label() {
        let out = render(r#"{"metrics": {"lcp": 4.5, "fid": 50}}"#);
        assert!(out.contains("Largest Contentful Paint"));
        assert!(out.contains("Critical"));
        assert!(out.contains("First Input Delay"));
        assert!(out.contains("Good"));
    }

    #[test]
    fn test_action_plan_lines_numbered() {
        let out = render(
            r#"{"recommendations": [
                {"recommendation": "A", "category": "Technical", "priority": "high"},
                {"recommendation": "B", "category": "Content", "priority": "low"}
            ]}"#,
        );
        assert!(out.contains("1. [High] A"));
        assert!(out.contains("2. [Low] B"));
    }

    #[test]
    fn test_no_color_output_has_no_escape_codes() {
        let out = render(r#"{"metrics": {"lcp": 1.0}}"#);
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_pad_accounts_for_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcd", 2), "abcd");
    }
}
