//! Agent file rules.
//!
//! An agent is a single markdown document with required-field frontmatter,
//! validated independently of any directory structure.
//!
//! | Check | Outcome |
//! |-------|---------|
//! | `name` present | error when missing |
//! | `description` present | error when missing |
//! | description length ≥ `agent_description_min` | warning when shorter |
//! | `model` in the recognized set | warning otherwise |

use crate::config::Policy;
use crate::frontmatter;
use crate::report::ValidationResult;
use crate::rules::{scalar_display, str_field, VALID_MODELS};
use std::path::Path;

/// Validates one agent markdown file.
pub fn validate(path: &Path, policy: &Policy) -> ValidationResult {
    let mut result = ValidationResult::new(path);

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            result.error(format!("Failed to read file: {e}"));
            return result;
        }
    };

    // A frontmatter failure is terminal — no field checks are attempted.
    let fm = match frontmatter::extract(&content) {
        Ok(fm) => fm,
        Err(e) => {
            result.error(e.to_string());
            return result;
        }
    };

    if !fm.contains_key("name") {
        result.error("Missing required field: name");
    }

    if !fm.contains_key("description") {
        result.error("Missing required field: description");
    } else if let Some(desc) = str_field(&fm, "description") {
        let min = policy.thresholds.agent_description_min;
        if desc.len() < min {
            result.warning(format!("Description is very short (< {min} chars)"));
        }
    }

    if let Some(value) = fm.get("model") {
        let known = value
            .as_str()
            .is_some_and(|m| VALID_MODELS.contains(&m));
        if !known {
            result.warning(format!("Unknown model: {}", scalar_display(value)));
        }
    }

    result
}
