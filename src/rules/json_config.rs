//! Schema-backed JSON configuration checks.
//!
//! The settings and MCP configuration files are validated against
//! externally-authored JSON Schema documents. Each schema is loaded and
//! compiled at most once per batch run; an absent schema silently disables
//! its check. A missing *target* file is only a warning — optional files are
//! not failures — while unparsable JSON and schema violations are errors.
//! Only the first schema violation is reported per file.

use crate::report::ValidationResult;
use jsonschema::Validator;
use std::path::Path;

/// The outcome of loading one schema document.
pub enum SchemaLoad {
    /// The schema file does not exist; the corresponding check is disabled.
    Absent,
    /// The schema compiled successfully.
    Loaded(Box<Validator>),
    /// The schema file exists but could not be read, parsed, or compiled.
    Failed(String),
}

/// Loads and compiles a JSON Schema document.
pub fn load_schema(path: &Path) -> SchemaLoad {
    if !path.exists() {
        return SchemaLoad::Absent;
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => return SchemaLoad::Failed(format!("Failed to read schema: {e}")),
    };

    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => return SchemaLoad::Failed(format!("Invalid schema JSON: {e}")),
    };

    match jsonschema::validator_for(&value) {
        Ok(validator) => SchemaLoad::Loaded(Box::new(validator)),
        Err(e) => SchemaLoad::Failed(format!("Failed to compile schema: {e}")),
    }
}

/// Validates one JSON file against a compiled schema.
pub fn validate_file(path: &Path, schema: &Validator) -> ValidationResult {
    let mut result = ValidationResult::new(path);

    if !path.exists() {
        result.warning(format!("File not found: {}", path.display()));
        return result;
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            result.error(format!("Failed to read file: {e}"));
            return result;
        }
    };

    // serde_json's Display includes the line and column of the parse failure.
    let data: serde_json::Value = match serde_json::from_str(&content) {
        Ok(d) => d,
        Err(e) => {
            result.error(format!("Invalid JSON: {e}"));
            return result;
        }
    };

    // validate() yields the first violation only; one representative message
    // per invocation is the contract here.
    if let Err(violation) = schema.validate(&data) {
        let mut message = format!("Schema validation: {violation}");
        let pointer = violation.instance_path.to_string();
        if !pointer.is_empty() {
            let dotted = pointer.trim_start_matches('/').replace('/', ".");
            message.push_str(&format!(" (at: {dotted})"));
        }
        result.error(message);
    }

    result
}
