//! Post-write hook decision engine.
//!
//! A host automation harness invokes the hook synchronously after every
//! file-write action, piping one JSON event on stdin:
//!
//! ```json
//! {"tool_input": {"file_path": "skills/my-skill/SKILL.md"}}
//! ```
//!
//! The engine is strictly single-shot: it parses the event, validates the
//! written file when (and only when) it is a skill manifest, emits exactly
//! one decision, and terminates. No retries, no caching between invocations,
//! and no filesystem writes — the only I/O is stdin plus the target
//! file/directory.
//!
//! Decision wire format (each built fully before emission):
//!
//! - allow: `{"continue": true, "systemMessage": "✅ Skill validation passed: …"}`,
//!   exit 0;
//! - block: `{"decision": "block", "reason": "…", "hookSpecificOutput":
//!   {"hookEventName": "PostToolUse", "additionalContext": "…bulleted fixes…"}}`,
//!   exit 2;
//! - malformed input: a block object on **stderr**, exit 2, before any
//!   validation runs.
//!
//! The hook rule set is deliberately stricter than the batch one: required
//! fields must be non-empty, the description minimum is 50 characters rather
//! than 30, and a fixed list of forbidden auxiliary files (README.md and
//! friends) must not exist next to the manifest. All of it reads from the
//! named [`Policy`] fields, not from literals.

use crate::config::Policy;
use crate::frontmatter;
use crate::rules::{str_field, REQUIRED_FIELDS};
use serde_yaml::Value;
use std::path::{Path, PathBuf};

/// Hook event as received on stdin.
#[derive(Debug, serde::Deserialize)]
struct HookInput {
    tool_input: ToolInput,
}

#[derive(Debug, serde::Deserialize)]
struct ToolInput {
    file_path: PathBuf,
}

/// The allow/continue decision.
#[derive(Debug, serde::Serialize)]
pub struct AllowDecision {
    #[serde(rename = "continue")]
    pub continue_: bool,
    #[serde(rename = "systemMessage")]
    pub system_message: String,
}

/// The block decision, with structured fix guidance for the writer.
#[derive(Debug, serde::Serialize)]
pub struct BlockDecision {
    pub decision: &'static str,
    pub reason: String,
    #[serde(rename = "hookSpecificOutput", skip_serializing_if = "Option::is_none")]
    pub hook_specific_output: Option<HookSpecificOutput>,
}

#[derive(Debug, serde::Serialize)]
pub struct HookSpecificOutput {
    #[serde(rename = "hookEventName")]
    pub hook_event_name: &'static str,
    #[serde(rename = "additionalContext")]
    pub additional_context: String,
}

/// Terminal outcome of one hook invocation.
#[derive(Debug)]
pub enum HookOutcome {
    /// Emit on stdout, exit 0.
    Allow(AllowDecision),
    /// Emit on stdout, exit 2.
    Block(BlockDecision),
    /// The event itself was malformed. Emit on stderr, exit 2.
    InputError(BlockDecision),
}

/// Runs the engine over one raw stdin event.
pub fn run(input: &str, policy: &Policy) -> HookOutcome {
    let event: HookInput = match serde_json::from_str(input) {
        Ok(event) => event,
        Err(e) => {
            return HookOutcome::InputError(BlockDecision {
                decision: "block",
                reason: format!("Validator error: Failed to parse hook input: {e}"),
                hook_specific_output: None,
            });
        }
    };

    decide(&event.tool_input.file_path, policy)
}

/// Converts one written file's validation outcome into a decision.
///
/// Writes to anything other than the skill manifest filename skip validation
/// entirely and are allowed through.
pub fn decide(path: &Path, policy: &Policy) -> HookOutcome {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if file_name != policy.layout.manifest_file {
        return HookOutcome::Allow(AllowDecision {
            continue_: true,
            system_message: format!("✅ Skill validation passed: {file_name}"),
        });
    }

    let errors = validate_manifest(path, policy);
    if errors.is_empty() {
        return HookOutcome::Allow(AllowDecision {
            continue_: true,
            system_message: format!("✅ Skill validation passed: {file_name}"),
        });
    }

    let fixes: Vec<String> = errors.iter().map(|e| format!("  • {e}")).collect();
    HookOutcome::Block(BlockDecision {
        decision: "block",
        reason: format!("Skill validation failed for {file_name}"),
        hook_specific_output: Some(HookSpecificOutput {
            hook_event_name: "PostToolUse",
            additional_context: format!(
                "Fix these skill structure issues in {}:\n\n{}\n\nSee skill-creator guidelines for proper structure.",
                path.display(),
                fixes.join("\n"),
            ),
        }),
    })
}

/// The hook-path skill manifest rule set. Returns accumulated errors; empty
/// means the write is allowed.
pub fn validate_manifest(path: &Path, policy: &Policy) -> Vec<String> {
    let skill_dir = path.parent().unwrap_or_else(|| Path::new("."));

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => return vec![format!("Failed to read file: {e}")],
    };

    let fm = match frontmatter::extract(&content) {
        Ok(fm) => fm,
        Err(e) => return vec![e.to_string()],
    };

    let mut errors = Vec::new();

    for field in REQUIRED_FIELDS {
        match fm.get(*field) {
            None => errors.push(format!("Missing required field: '{field}'")),
            Some(value) if policy.hook.require_nonempty_fields && is_empty_value(value) => {
                errors.push(format!("Field '{field}' cannot be empty"));
            }
            Some(_) => {}
        }
    }

    if let Some(desc) = str_field(&fm, "description") {
        let min = policy.thresholds.hook_description_min;
        if desc.len() < min {
            errors.push(format!(
                "Description too short ({} chars) - should be comprehensive ({min}+ chars). \
                 Include what the skill does AND when to use it.",
                desc.len(),
            ));
        }
    }

    for forbidden in &policy.hook.forbidden_files {
        if skill_dir.join(forbidden).exists() {
            errors.push(format!(
                "Forbidden file found: {forbidden} - Skills should only contain \
                 essential files (SKILL.md, scripts/, references/, assets/)"
            ));
        }
    }

    errors
}

/// Emptiness as the hook defines it: null, empty string, or an empty
/// collection.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Sequence(s) => s.is_empty(),
        Value::Mapping(m) => m.is_empty(),
        _ => false,
    }
}
