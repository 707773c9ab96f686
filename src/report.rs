//! Core result types.
//!
//! Every validated file produces exactly one [`ValidationResult`]; a batch run
//! reduces its results into a [`RunSummary`]. A file is valid iff it collected
//! no errors — warnings flag issues without affecting validity.

use std::path::PathBuf;

/// The outcome of validating a single file.
///
/// Produced once per file by the matching rule set and immutable afterwards.
/// Errors and warnings keep their insertion order so reports read in the
/// order the checks ran.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ValidationResult {
    /// The file (or manifest path, for skill directories) that was validated.
    pub file: PathBuf,
    /// Fatal findings. Any entry makes the file invalid.
    pub errors: Vec<String>,
    /// Non-fatal findings. Never affect validity or exit status.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        ValidationResult {
            file: file.into(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// `true` iff no error was recorded. Warnings do not count.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Aggregate counts over a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub valid: usize,
    pub error_count: usize,
    pub warning_count: usize,
    /// `false` iff any file has at least one error.
    pub passed: bool,
}

impl RunSummary {
    /// Reduces a sequence of per-file results in a single pass.
    pub fn from_results(results: &[ValidationResult]) -> Self {
        let (valid, errors, warnings) = results.iter().fold((0, 0, 0), |(v, e, w), r| {
            (
                v + usize::from(r.is_valid()),
                e + r.errors.len(),
                w + r.warnings.len(),
            )
        });

        RunSummary {
            total: results.len(),
            valid,
            error_count: errors,
            warning_count: warnings,
            passed: errors == 0,
        }
    }
}
