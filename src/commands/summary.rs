//! Summary command implementation.
//!
//! The summary command:
//! 1. Reads a weaving report from disk
//! 2. Renders the text summary
//! 3. Prints it to stdout

use crate::output::{generate_text_summary, read_report};
use crate::utils::config::{DEFAULT_MAX_FAILURES, DEFAULT_REPORT_PATH};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::PathBuf;

/// Arguments for the summary command
#[derive(Debug, Clone)]
pub struct SummaryArgs {
    /// Path to the JSON report
    pub report: PathBuf,

    /// Maximum number of failed join points to list
    pub max_failures: usize,
}

impl Default for SummaryArgs {
    fn default() -> Self {
        Self {
            report: PathBuf::from(DEFAULT_REPORT_PATH),
            max_failures: DEFAULT_MAX_FAILURES,
        }
    }
}

/// Validate summary arguments before touching the filesystem
pub fn validate_args(args: &SummaryArgs) -> Result<()> {
    if args.report.as_os_str().is_empty() {
        anyhow::bail!("Report path cannot be empty");
    }

    if args.max_failures > 10_000 {
        anyhow::bail!("max_failures is too large (max 10000)");
    }

    Ok(())
}

/// Load a report and render its text summary
pub fn render_summary(args: &SummaryArgs) -> Result<String> {
    validate_args(args)?;

    let report = read_report(&args.report)
        .with_context(|| format!("Failed to read report {}", args.report.display()))?;
    debug!("Report schema version {}", report.version);

    let stats = &report.statistics;
    if !stats.is_complete() {
        warn!("Weaving pass for {} did not complete", stats.name());
    }

    Ok(generate_text_summary(stats, args.max_failures))
}

/// Execute the summary command
///
/// **Public** - main entry point called from main.rs
pub fn execute_summary(args: SummaryArgs) -> Result<()> {
    info!("Summarizing report: {}", args.report.display());

    let summary = render_summary(&args)?;
    println!("{}", summary);

    Ok(())
}
