//! YAML frontmatter extraction.
//!
//! Markdown documents in an agent configuration repo (agent files, skill
//! manifests) carry their metadata in a leading `---`-delimited YAML block.
//! [`extract`] pulls that block out and parses it into a mapping; every way
//! the block can be malformed maps to one [`FrontmatterError`] variant so that
//! callers can report a single, actionable message and stop — a frontmatter
//! failure is terminal for the file, no field-level checks run after it.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// Targeted hint for the most common authoring mistake: an unquoted colon
/// inside a scalar value, which YAML rejects with a cryptic parser message.
const COLON_HINT: &str = "Invalid YAML: Colon in value breaks parsing. \
Quote the description or use multi-line syntax:\n\
    description: |\n      Your description with: colons here";

/// Why a document's frontmatter could not be extracted.
///
/// All variants are fatal: the caller records the message as the file's only
/// error and skips the remaining checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontmatterError {
    /// The document does not begin with the `---` delimiter.
    #[error("Missing YAML frontmatter (must start with ---)")]
    Missing,
    /// The opening delimiter is present but never closed.
    #[error("Invalid frontmatter format (missing closing ---)")]
    Unterminated,
    /// The block is delimited but is not valid YAML. The payload is either
    /// the quoting hint or the underlying parser message.
    #[error("{0}")]
    Unparsable(String),
    /// The block parsed to nothing, or to something other than a mapping.
    #[error("Empty frontmatter")]
    Empty,
}

/// Extracts the frontmatter mapping from `content`.
///
/// The document is split on the `---` delimiter into at most three segments;
/// the middle segment is parsed as YAML. See [`FrontmatterError`] for the
/// failure taxonomy.
pub fn extract(content: &str) -> Result<Mapping, FrontmatterError> {
    if !content.starts_with("---") {
        return Err(FrontmatterError::Missing);
    }

    let parts: Vec<&str> = content.splitn(3, "---").collect();
    if parts.len() < 3 {
        return Err(FrontmatterError::Unterminated);
    }

    let value: Value = serde_yaml::from_str(parts[1]).map_err(classify_yaml_error)?;
    match value {
        Value::Mapping(m) if !m.is_empty() => Ok(m),
        _ => Err(FrontmatterError::Empty),
    }
}

/// Returns the document body — everything after the frontmatter block.
///
/// Documents without an opening delimiter are returned unchanged; the body of
/// an unterminated block is empty.
pub fn body(content: &str) -> &str {
    if !content.starts_with("---") {
        return content;
    }
    content.splitn(3, "---").nth(2).unwrap_or("")
}

fn classify_yaml_error(e: serde_yaml::Error) -> FrontmatterError {
    let msg = e.to_string();
    // "mapping values are not allowed" is libyaml's way of saying a scalar
    // value contained an unquoted colon. Rewrite it into fixing instructions.
    if msg.contains("mapping values are not allowed") {
        FrontmatterError::Unparsable(COLON_HINT.to_string())
    } else {
        FrontmatterError::Unparsable(format!("Invalid YAML: {msg}"))
    }
}
