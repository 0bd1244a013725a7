//! seo-audit-tools: SEO audit report classification and reporting tool
//!
//! Turns raw SEO audit payloads into classified, display-ready reports.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use seo_audit_tools::{
    cli::{self, exit_codes, ReportOptions},
    classify::Report,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput:",
        "\n  Raw SEO audit payload (JSON)",
        "\n\nOutput Formats:",
        "\n  json, markdown, summary",
        "\n\nFeatures:",
        "\n  Core Web Vitals thresholds, finding bucketization, score bands, action plan"
    )
}

#[derive(Parser)]
#[command(name = "seo-audit-tools")]
#[command(version, long_version = build_long_version())]
#[command(about = "SEO audit report classification and reporting tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Critical findings present (with --fail-on-critical)
    2  Score below --min-score
    3  Error occurred

EXAMPLES:
    # Compact terminal summary
    seo-audit-tools report audit.json

    # Markdown report written to a file
    seo-audit-tools report audit.json -o markdown -O report.md

    # CI gate on the overall score
    seo-audit-tools score audit.json --min-score 60

    # JSON Schema of the report output
    seo-audit-tools schema")]
struct Cli {
    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress informational output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored terminal output (`NO_COLOR` is also honored)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `report` subcommand
#[derive(Parser)]
struct ReportArgs {
    /// Path to the audit payload JSON file
    payload: PathBuf,

    /// Output format for the rendered report
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Write the report to this file instead of stdout
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if critical findings are present
    #[arg(long)]
    fail_on_critical: bool,

    /// Audit date to use when the payload carries none (defaults to today)
    #[arg(long, env = "SEO_AUDIT_DATE")]
    audit_date: Option<String>,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Path to the audit payload JSON file
    payload: PathBuf,

    /// Fail with exit code 2 if the overall score is below this threshold (0-100)
    #[arg(long)]
    min_score: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and render a classified report from an audit payload
    Report(ReportArgs),

    /// Print the overall score and band
    Score(ScoreArgs),

    /// Generate JSON Schema for the report output
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Emit completion scripts for a shell
    Completions {
        /// Shell to emit completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging: RUST_LOG wins, then --verbose, then info
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Report(args) => {
            let options = ReportOptions {
                payload_path: args.payload,
                format: args.output,
                output_file: args.output_file,
                no_color: cli.no_color,
                quiet: cli.quiet,
                fail_on_critical: args.fail_on_critical,
                audit_date: args.audit_date,
            };
            let exit_code = cli::run_report(options)?;
            if exit_code != exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Score(args) => {
            let exit_code = cli::run_score(&args.payload, args.min_score)?;
            if exit_code != exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Schema { output } => {
            let schema = schemars::schema_for!(Report);
            let schema = serde_json::to_string_pretty(&schema)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)?;
                    eprintln!("Wrote schema to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(
                shell,
                &mut Cli::command(),
                "seo-audit-tools",
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}
