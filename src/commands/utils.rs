use crate::output::read_report;
use crate::statistics::WeavingSummary;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)
        .with_context(|| format!("Invalid report {}", file_path.display()))?;
    let stats = &report.statistics;
    let totals = stats.totals();

    println!("✓ Valid weaving report");
    println!("  Version: {}", report.version);
    println!("  Generated: {}", report.generated_at);
    println!("  Assembly: {}", stats.name());
    println!("  Modules: {}", stats.module_count());
    println!("  Attempts: {} ({} failed)", totals.attempts, totals.failures);
    println!("  Complete: {}", stats.is_complete());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Weaving Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string              - Schema version (e.g., '1.0.0')");
        println!("  generated_at: string         - ISO 8601 timestamp");
        println!("  statistics: object           - Assembly statistics");
        println!("    name: string               - Assembly name");
        println!("    fatal_exception: object?   - Cause that aborted the pass");
        println!("    modules: array             - Modules in weaving order");
        println!("      name: string             - Module name");
        println!("      classes: array           - Classes in weaving order");
        println!("        name: string           - Fully qualified class name");
        println!("        methods: array         - Method statistics");
        println!("        properties: array      - Property statistics (getter, setter)");
        println!("          records: array       - Weaving attempts");
        println!("            target: string     - Method or accessor touched");
        println!("            advice: array      - Advice names in application order");
        println!("            outcome: object    - status: succeeded | failed, cause?");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Weave Stats v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Weaving statistics aggregation and reporting.");
}
