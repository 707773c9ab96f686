//! Reference resolution for skill manifest bodies.
//!
//! A skill's body text points readers (and the agent runtime) at bundled
//! files. Two reference shapes are recognized:
//!
//! - markdown hyperlink targets: `[run it](scripts/run.py)`
//! - inline code spans naming a bundled path: `` `references/api.md` ``
//!
//! External links (`http://`, `https://`) and intra-document anchors (`#…`)
//! are ignored. Every remaining reference is resolved relative to the skill
//! directory; each unresolved path is one warning — broken docs flag, they
//! never block. Skills on the policy's exemption list are skipped entirely
//! because their bodies deliberately show illustrative, non-existent paths.

use crate::config::Policy;
use crate::report::ValidationResult;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Markdown hyperlink: `[text](target)`.
static RE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Inline code span naming a bundled path. Only clean paths without spaces
/// match, so `` `scripts/run.sh --flag` `` (a command line, not a reference)
/// is not picked up.
static RE_CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`((?:scripts|references|assets)/[^`\s]+)`").unwrap());

/// Scans `body` for file references and warns on each one that does not
/// resolve under `skill_dir`.
pub fn check(skill_dir: &Path, body: &str, policy: &Policy, result: &mut ValidationResult) {
    let dir_name = skill_dir.file_name().map(|n| n.to_string_lossy());
    if let Some(name) = dir_name {
        if policy.references.exempt_skills.iter().any(|s| *s == name) {
            return;
        }
    }

    for cap in RE_LINK.captures_iter(body) {
        let target = &cap[2];
        if target.starts_with("http://") || target.starts_with("https://") {
            continue;
        }
        if target.starts_with('#') {
            continue;
        }
        if !skill_dir.join(target).exists() {
            result.warning(format!("Referenced file not found: {target}"));
        }
    }

    for cap in RE_CODE_SPAN.captures_iter(body) {
        let target = &cap[1];
        if !skill_dir.join(target).exists() {
            result.warning(format!("Referenced path not found: {target}"));
        }
    }
}
