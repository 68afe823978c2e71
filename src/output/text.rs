//! Plain-text summary of a frozen weaving report.

use crate::statistics::{AssemblyStatistics, WeavingSummary, WeavingTotals};

/// Render a human-readable summary
///
/// **Public** - used by the summary command
///
/// # Arguments
/// * `stats` - Frozen assembly statistics
/// * `max_failures` - Maximum number of failed records to list
pub fn generate_text_summary(stats: &AssemblyStatistics, max_failures: usize) -> String {
    let mut lines = Vec::new();
    let totals = stats.totals();

    lines.push(format!("  WEAVING REPORT: {}", stats.name()));
    lines.push(format!(
        "  Modules: {} | Classes: {} | Methods: {} | Properties: {}",
        stats.module_count(),
        stats.class_count(),
        stats.method_count(),
        stats.property_count()
    ));
    lines.push(format!("  Attempts: {}", format_totals(&totals)));

    if let Some(cause) = stats.fatal_exception() {
        lines.push(format!("  FATAL: {}", cause));
    }

    lines.push(String::new());
    lines.push(format!(
        "  {:<48} {:>9} {:>9} {:>9}",
        "Module / Class", "ATTEMPTS", "OK", "FAILED"
    ));
    for module in stats.modules() {
        lines.push(table_row(module.name(), &module.totals(), 0));
        for class in module.classes() {
            lines.push(table_row(class.name(), &class.totals(), 2));
        }
    }

    let failures = collect_failures(stats);
    if !failures.is_empty() {
        lines.push(String::new());
        lines.push("  FAILED JOIN POINTS".to_string());
        for (target, cause) in failures.iter().take(max_failures) {
            lines.push(format!("  - {}: {}", target, cause));
        }
        if failures.len() > max_failures {
            lines.push(format!(
                "   (Showing {} of {} failures)",
                max_failures,
                failures.len()
            ));
        }
    }

    lines.join("\n")
}

fn format_totals(totals: &WeavingTotals) -> String {
    format!(
        "{} total, {} succeeded, {} failed ({:.1}% success)",
        totals.attempts,
        totals.successes,
        totals.failures,
        totals.success_rate()
    )
}

fn table_row(name: &str, totals: &WeavingTotals, indent: usize) -> String {
    let label = format!("{}{}", " ".repeat(indent), name);
    // Keep the table aligned for long qualified names
    let width = label.chars().count();
    let label = if width > 48 {
        let tail: String = label.chars().skip(width - 45).collect();
        format!("...{}", tail)
    } else {
        label
    };
    format!(
        "  {:<48} {:>9} {:>9} {:>9}",
        label, totals.attempts, totals.successes, totals.failures
    )
}

/// Every failed record as (target, cause), in tree order
fn collect_failures(stats: &AssemblyStatistics) -> Vec<(String, String)> {
    let mut failures = Vec::new();
    for class in stats.modules().iter().flat_map(|m| m.classes()) {
        let accessors = class
            .properties()
            .iter()
            .flat_map(|p| [p.getter(), p.setter()]);
        for method in class.methods().iter().chain(accessors) {
            for record in method.failures() {
                let cause = record
                    .outcome()
                    .cause()
                    .map(|c| c.to_string())
                    .unwrap_or_default();
                failures.push((record.target().to_string(), cause));
            }
        }
    }
    failures
}
