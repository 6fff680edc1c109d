//! Console rendering for scan reports

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::scan::ScanReport;

/// Progress banner printed before the walk starts.
pub fn print_banner(root: &Path) {
    println!("Scanning directory: {}", root.display().to_string().cyan());
    println!("This may take a while...\n");
}

/// Human-readable completion report.
pub fn print_report(report: &ScanReport) {
    println!("\n{}", "Scan complete!".bold());
    println!("Total files scanned: {}", report.total_files);
    println!("Text files checked: {}", report.checked_files);

    let issue_count = report.issues.len().to_string();
    if report.issues.is_empty() {
        println!("Potential issues found: {}", issue_count.green());
        println!("\n{}", "No encoding problems found.".green());
    } else {
        println!("Potential issues found: {}", issue_count.red());
        println!("\nThe following files may have encoding problems:");
        for (index, issue) in report.issues.iter().enumerate() {
            println!("{}. {} - {}", index + 1, issue.path, issue.status.yellow());
        }
    }
}

/// The report as pretty-printed JSON, for piping into other tools.
pub fn render_json(report: &ScanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
