//! Skill directory rules (batch path).
//!
//! A skill is a directory bundling one manifest (`SKILL.md` by default) plus
//! optional `scripts/`, `references/`, and `assets/` subdirectories, validated
//! as a unit.
//!
//! | Check | Outcome |
//! |-------|---------|
//! | manifest exists | error when missing |
//! | `name` present | error when missing |
//! | `name` equals directory basename | warning on mismatch, naming both |
//! | `description` present | error when missing |
//! | description length ≥ `skill_description_min` | warning when shorter |
//! | body references resolve | delegated to [`references`](crate::rules::references) |
//! | bundled scripts are sound | delegated to [`scripts`](crate::rules::scripts) |
//!
//! The hook gate re-validates skill manifests with a stricter, separately
//! configured rule set; see [`hook`](crate::hook).

use crate::config::Policy;
use crate::frontmatter;
use crate::report::ValidationResult;
use crate::rules::{references, scripts, str_field};
use std::path::Path;

/// Validates one skill directory.
pub fn validate(skill_dir: &Path, policy: &Policy) -> ValidationResult {
    let manifest = skill_dir.join(&policy.layout.manifest_file);
    let mut result = ValidationResult::new(&manifest);

    if !manifest.exists() {
        result.error(format!("Missing {}", policy.layout.manifest_file));
        return result;
    }

    let content = match std::fs::read_to_string(&manifest) {
        Ok(c) => c,
        Err(e) => {
            result.error(format!("Failed to read file: {e}"));
            return result;
        }
    };

    let fm = match frontmatter::extract(&content) {
        Ok(fm) => fm,
        Err(e) => {
            result.error(e.to_string());
            return result;
        }
    };

    let dir_name = skill_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if !fm.contains_key("name") {
        result.error("Missing required field: name");
    } else if let Some(name) = str_field(&fm, "name") {
        if name != dir_name {
            result.warning(format!(
                "name '{name}' doesn't match directory '{dir_name}'"
            ));
        }
    }

    if !fm.contains_key("description") {
        result.error("Missing required field: description");
    } else if let Some(desc) = str_field(&fm, "description") {
        let min = policy.thresholds.skill_description_min;
        if desc.len() < min {
            result.warning(format!("Description is very short (< {min} chars)"));
        }
    }

    references::check(skill_dir, frontmatter::body(&content), policy, &mut result);
    scripts::lint(skill_dir, &mut result);

    result
}
