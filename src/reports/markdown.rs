//! Markdown report generator.

use std::fmt::Write;

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::classify::Report;
use crate::model::{FindingTier, Priority};

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, report: &Report) -> Result<String, ReportError> {
        let mut out = String::new();

        writeln!(out, "# SEO Audit Report")?;
        writeln!(out)?;

        write_executive_summary(&mut out, report)?;
        write_metrics(&mut out, report)?;
        write_findings(&mut out, report)?;
        write_recommendations(&mut out, report)?;
        write_action_plan(&mut out, report)?;

        if report.skipped_recommendations > 0 {
            writeln!(
                out,
                "*{} malformed recommendation record(s) were skipped.*",
                report.skipped_recommendations
            )?;
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

fn write_executive_summary(out: &mut String, report: &Report) -> Result<(), ReportError> {
    let summary = &report.summary;

    writeln!(out, "## Executive Summary")?;
    writeln!(out)?;
    writeln!(out, "- **Target Website:** {}", escape(&summary.url))?;
    writeln!(out, "- **Audit Date:** {}", escape(&summary.audit_date))?;
    writeln!(
        out,
        "- **Overall Score:** {}/100 ({})",
        fmt_score(summary.score),
        summary.band.label()
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "The website is currently performing at a score of **{}/100** and {}",
        fmt_score(summary.score),
        escape(&summary.assessment)
    )?;
    writeln!(out)?;

    let counts = &summary.findings_count;
    writeln!(out, "| Good Results | Recommended | Critical Issues |")?;
    writeln!(out, "|---|---|---|")?;
    writeln!(
        out,
        "| {} | {} | {} |",
        counts.good, counts.recommended, counts.critical
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "**Total Findings:** {} items identified during this audit.",
        summary.total_findings
    )?;
    writeln!(out)?;
    Ok(())
}

fn write_metrics(out: &mut String, report: &Report) -> Result<(), ReportError> {
    writeln!(out, "## Site Performance & Core Web Vitals")?;
    writeln!(out)?;

    if report.metrics.is_empty() {
        writeln!(out, "No metrics were measured.")?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "| Metric | Value | Benchmark | Assessment |")?;
    writeln!(out, "|---|---|---|---|")?;
    for sample in report.metrics.values() {
        writeln!(
            out,
            "| {} | {}{} | {} | {} |",
            sample.name,
            sample.display_value(),
            sample.unit,
            sample.benchmark,
            sample.status.label()
        )?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_findings(out: &mut String, report: &Report) -> Result<(), ReportError> {
    writeln!(out, "## Audit Findings")?;
    writeln!(out)?;

    for tier in FindingTier::ALL {
        let findings = report.findings.tier(tier);
        writeln!(out, "### {} ({})", tier.label(), findings.len())?;
        writeln!(out)?;

        if findings.is_empty() {
            writeln!(out, "{}", tier.empty_message())?;
            writeln!(out)?;
            continue;
        }

        for finding in findings {
            writeln!(
                out,
                "- **{}**: {}",
                escape(&finding.title),
                escape(&finding.description)
            )?;
            for detail in &finding.details {
                writeln!(out, "  - {}", escape(detail))?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_recommendations(out: &mut String, report: &Report) -> Result<(), ReportError> {
    writeln!(out, "## Strategic Recommendations")?;
    writeln!(out)?;

    if report.recommendations.is_empty() {
        writeln!(out, "No recommendations available.")?;
        writeln!(out)?;
        return Ok(());
    }

    for priority in Priority::ALL {
        let group = report.recommendations.tier(priority);
        if group.is_empty() {
            continue;
        }

        writeln!(out, "### {} Priority ({})", priority.label(), group.len())?;
        writeln!(out)?;
        for rec in group {
            writeln!(
                out,
                "- **{}** ({})",
                escape(&rec.recommendation),
                rec.category.name()
            )?;
            if !rec.justification.is_empty() {
                writeln!(out, "  - Impact: {}", escape(&rec.justification))?;
            }
            for item in &rec.action_items {
                writeln!(out, "  - {}", escape(item))?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_action_plan(out: &mut String, report: &Report) -> Result<(), ReportError> {
    writeln!(out, "## Strategic Action Plan")?;
    writeln!(out)?;

    if report.action_plan.is_empty() {
        writeln!(out, "No action plan available.")?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "Prioritized roadmap based on impact (High to Low). Executing the \
         High Priority items will yield the fastest results."
    )?;
    writeln!(out)?;

    for item in &report.action_plan {
        let rec = &item.recommendation;
        writeln!(
            out,
            "{}. **{}** [{} Priority, {}]",
            item.index,
            escape(&rec.recommendation),
            rec.priority.label(),
            rec.category.name()
        )?;
        if !rec.justification.is_empty() {
            writeln!(out, "   {}", escape(&rec.justification))?;
        }
        for action in &rec.action_items {
            writeln!(out, "   - {}", escape(action))?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Format a score without a spurious fraction ("72", "59.9").
fn fmt_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.1}")
    }
}

/// Escape characters that would break Markdown structure. Payload text is
/// user-controlled and ends up inside tables and emphasis spans.
fn escape(text: &str) -> String {
    text.replace('|', "\\|").replace('*', "\\*")
}
