//! Shared CLI helpers — report formatting and status markers.

use colored::Colorize;

use courier_channels::DispatchReport;

/// One-line human summary of a dispatch report.
pub fn format_report(report: &DispatchReport) -> String {
    let marker = if report.is_success() {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    };
    let verdict = if report.is_success() {
        "delivered"
    } else {
        "failed"
    };
    format!(
        "{marker} [{}] {} → {} ({verdict})",
        report.channel, report.from_address, report.recipient
    )
}

/// Print a report, followed by the rendered body (dimmed).
pub fn print_report(report: &DispatchReport) {
    println!("  {}", format_report(report));
    println!("    {}", report.rendered.dimmed());
}

/// Green check or dimmed cross for a yes/no column.
pub fn flag(enabled: bool) -> String {
    if enabled {
        "✓".green().to_string()
    } else {
        "✗".dimmed().to_string()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
