//! Per-kind validation rules.
//!
//! Each kind of file the batch validator can encounter is one variant of the
//! closed [`FileKind`] set. The variant is chosen by discovery context — the
//! directory or filename a candidate was found under — never by inspecting
//! the parsed value's shape. [`agent`] and [`skill`] implement the
//! frontmatter rule sets, [`json_config`] the schema-backed JSON checks, and
//! [`references`] / [`scripts`] the body and script checks a skill delegates
//! to.

pub mod agent;
pub mod json_config;
pub mod references;
pub mod scripts;
pub mod skill;

use serde_yaml::{Mapping, Value};

/// Fields every agent file and skill manifest must carry.
pub const REQUIRED_FIELDS: &[&str] = &["name", "description"];

/// Recognized values for an agent's optional `model` field. Anything else is
/// a warning, never an error — unknown future model names must not break
/// validation.
pub const VALID_MODELS: &[&str] = &["opus", "sonnet", "haiku", "inherit"];

/// The closed set of file kinds the batch validator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Top-level `settings.json`, validated against its JSON Schema.
    Settings,
    /// Top-level `.mcp.json`, validated against its JSON Schema.
    McpConfig,
    /// A markdown file under the agents directory.
    Agent,
    /// A skill directory (validated as a unit through its manifest).
    Skill,
}

/// Looks up a frontmatter field's value as a string.
///
/// Returns `None` when the field is absent or not a string scalar.
pub(crate) fn str_field<'m>(fm: &'m Mapping, key: &str) -> Option<&'m str> {
    fm.get(key).and_then(Value::as_str)
}

/// Renders a frontmatter scalar for inclusion in a message. Non-string
/// scalars fall back to their YAML rendering.
pub(crate) fn scalar_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .unwrap_or_default()
            .trim_end()
            .to_string(),
    }
}
