//! Human-readable console report.
//!
//! One status-glyph line per file, indented error and warning lines beneath
//! it, and a trailing `N/M files valid` count.

use crate::report::{RunSummary, ValidationResult};
use colored::Colorize;

/// Formats the per-file report plus the trailing summary line.
pub fn format(results: &[ValidationResult]) -> String {
    let mut out = String::new();

    for result in results {
        let glyph = if result.is_valid() { "✅" } else { "❌" };
        out.push_str(&format!("{glyph} {}\n", result.file.display()));

        for error in &result.errors {
            out.push_str(&format!("    {} {}\n", "❌".red(), error.red()));
        }
        for warning in &result.warnings {
            out.push_str(&format!("    {}  {}\n", "⚠️".yellow(), warning.yellow()));
        }
    }

    let summary = RunSummary::from_results(results);
    out.push_str(&format!(
        "\n{}/{} files valid\n",
        summary.valid, summary.total
    ));

    out
}
