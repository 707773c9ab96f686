//! Machine-readable CI output block.
//!
//! When the workflow provides an output file (resolved once at process start
//! from `GITHUB_OUTPUT`), [`append`] adds counters plus a delimited multiline
//! markdown summary to it:
//!
//! ```text
//! error_count=2
//! warning_count=1
//! has_errors=true
//! summary<<EOF
//! ### Errors
//! - **settings.json**: Invalid JSON: …
//! …
//! EOF
//! ```

use crate::report::ValidationResult;
use std::io::Write;
use std::path::Path;

/// Appends the CI block for `results` to the output file at `path`.
pub fn append(path: &Path, results: &[ValidationResult]) -> std::io::Result<()> {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for result in results {
        let file = result.file.display();
        for error in &result.errors {
            errors.push(format!("**{file}**: {error}"));
        }
        for warning in &result.warnings {
            warnings.push(format!("**{file}**: {warning}"));
        }
    }

    let mut summary_lines: Vec<String> = Vec::new();
    if !errors.is_empty() {
        summary_lines.push("### Errors".to_string());
        summary_lines.extend(errors.iter().map(|e| format!("- {e}")));
    }
    if !warnings.is_empty() {
        if !summary_lines.is_empty() {
            summary_lines.push(String::new());
        }
        summary_lines.push("### Warnings".to_string());
        summary_lines.extend(warnings.iter().map(|w| format!("- {w}")));
    }
    if errors.is_empty() && warnings.is_empty() {
        summary_lines.push("All configuration files are valid!".to_string());
    }

    // The block is assembled fully before a single append, so the output file
    // never holds a half-written entry.
    let mut block = String::new();
    block.push_str(&format!("error_count={}\n", errors.len()));
    block.push_str(&format!("warning_count={}\n", warnings.len()));
    block.push_str(&format!(
        "has_errors={}\n",
        if errors.is_empty() { "false" } else { "true" }
    ));
    // The delimiter must sit on its own line with nothing after it.
    block.push_str("summary<<EOF\n");
    block.push_str(&summary_lines.join("\n"));
    block.push_str("\nEOF\n");

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    file.write_all(block.as_bytes())
}
