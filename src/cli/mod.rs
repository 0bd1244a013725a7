//! CLI command handlers and output plumbing.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::classify::{build_report, ReportBuilder};
use crate::payload::parse_payload;
use crate::reports::{create_reporter_with_options, ReportFormat};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Critical findings present (with --fail-on-critical)
    pub const CRITICAL_FINDINGS: i32 = 1;
    /// Overall score below --min-score
    pub const SCORE_BELOW_THRESHOLD: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Where a rendered report goes
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Build a target from an optional `--output-file` argument
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(OutputTarget::Stdout, OutputTarget::File)
    }

    /// Whether the target is an interactive terminal
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, OutputTarget::Stdout) && std::io::stdout().is_terminal()
    }
}

/// Resolve the `Auto` format. The compact summary is the default for every
/// context; explicit formats pass through untouched.
#[must_use]
pub fn auto_detect_format(format: ReportFormat, _target: &OutputTarget) -> ReportFormat {
    match format {
        ReportFormat::Auto => ReportFormat::Summary,
        other => other,
    }
}

/// Determine if color should be used based on flags and environment
#[must_use]
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err()
}

/// Write rendered output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => println!("{content}"),
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("writing report to {}", path.display()))?;
            if !quiet {
                tracing::info!(path = %path.display(), "report written");
            }
        }
    }
    Ok(())
}

/// Options for the `report` command
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Path to the audit payload file
    pub payload_path: PathBuf,
    /// Requested output format
    pub format: ReportFormat,
    /// Output file path (stdout if not specified)
    pub output_file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit with code 1 when critical findings are present
    pub fail_on_critical: bool,
    /// Fixed audit date override for payloads that carry none
    pub audit_date: Option<String>,
}

/// Handle the `report` command: parse, classify, render, write.
pub fn run_report(options: ReportOptions) -> Result<i32> {
    let payload = parse_payload(&options.payload_path)
        .with_context(|| format!("reading {}", options.payload_path.display()))?;

    let mut builder = ReportBuilder::new();
    if let Some(audit_date) = options.audit_date {
        builder = builder.with_audit_date(audit_date);
    }
    let report = builder.build(&payload);

    let target = OutputTarget::from_option(options.output_file);
    let format = auto_detect_format(options.format, &target);
    let use_color = should_use_color(options.no_color) && target.is_terminal();

    let reporter = create_reporter_with_options(format, use_color);
    let content = reporter
        .generate(&report)
        .context("rendering audit report")?;
    write_output(&content, &target, options.quiet)?;

    if options.fail_on_critical && report.has_critical_findings() {
        tracing::warn!(
            critical = report.summary.findings_count.critical,
            "critical findings present"
        );
        return Ok(exit_codes::CRITICAL_FINDINGS);
    }
    Ok(exit_codes::SUCCESS)
}

/// Handle the `score` command: print the overall score and band, with an
/// optional CI threshold.
pub fn run_score(payload_path: &Path, min_score: Option<f64>) -> Result<i32> {
    let payload = parse_payload(payload_path)
        .with_context(|| format!("reading {}", payload_path.display()))?;
    let report = build_report(&payload);

    println!(
        "{}/100 ({})",
        report.summary.score,
        report.summary.band.label()
    );

    if let Some(min) = min_score {
        if report.summary.score < min {
            tracing::warn!(
                score = report.summary.score,
                min_score = min,
                "overall score below threshold"
            );
            return Ok(exit_codes::SCORE_BELOW_THRESHOLD);
        }
    }
    Ok(exit_codes::SUCCESS)
}
