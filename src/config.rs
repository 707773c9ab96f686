//! Policy configuration.
//!
//! Every tunable the validators consume lives here as a named value: field
//! length thresholds, the repository layout, the hook gate's forbidden-file
//! list. The batch path and the hook path deliberately disagree on two points
//! (skill description minimum 30 vs 50, presence-only vs non-empty required
//! fields); both sides of each discrepancy are explicit fields of this policy
//! rather than literals buried in the two call sites.
//!
//! The policy is loaded from a TOML file (default `agent-config-lint.toml` in
//! the working directory). Every field has a default, so the file can be
//! omitted entirely:
//!
//! ```rust,no_run
//! use agent_config_lint::config::Policy;
//!
//! let policy = Policy::load(None).expect("failed to load policy");
//! assert_eq!(policy.thresholds.skill_description_min, 30);
//! assert_eq!(policy.thresholds.hook_description_min, 50);
//! ```

use std::path::Path;

/// Full validation policy consumed by both the batch validator and the hook
/// gate.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Policy {
    /// Minimum description lengths per call site.
    pub thresholds: Thresholds,
    /// Hook-gate-only rules.
    pub hook: HookRules,
    /// Where candidate files live relative to the repository root.
    pub layout: Layout,
    /// Reference-checking exemptions.
    pub references: ReferencePolicy,
}

/// Description length minima. Lengths below a minimum produce a warning in
/// the batch path and an error in the hook path.
///
/// The batch skill check (30) and the hook skill check (50) are intentionally
/// different: CI tolerates terser manifests than the write gate does.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Thresholds {
    /// Minimum agent description length (batch path).
    pub agent_description_min: usize,
    /// Minimum skill description length (batch path).
    pub skill_description_min: usize,
    /// Minimum skill description length (hook path).
    pub hook_description_min: usize,
}

/// Rules enforced only by the hook gate.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct HookRules {
    /// Auxiliary filenames disallowed next to a skill manifest. Each present
    /// file is its own error.
    pub forbidden_files: Vec<String>,
    /// When `true` (the default), required fields must also be non-empty.
    /// The batch path only checks presence; this toggle names that
    /// discrepancy instead of unifying it.
    pub require_nonempty_fields: bool,
}

/// Directory layout of the repository being validated.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Layout {
    /// Directory holding the JSON Schema documents, relative to the root.
    pub schemas_dir: String,
    /// Directory holding agent markdown files.
    pub agents_dir: String,
    /// Directory holding skill subdirectories.
    pub skills_dir: String,
    /// Settings file at the repository root.
    pub settings_file: String,
    /// MCP server configuration file at the repository root.
    pub mcp_file: String,
    /// Schema document for the settings file. Optional on disk — absence
    /// disables the settings check.
    pub settings_schema: String,
    /// Schema document for the MCP file. Optional on disk.
    pub mcp_schema: String,
    /// The skill manifest filename. Shared by the batch skill rules and the
    /// hook gate's "is this a manifest write" test.
    pub manifest_file: String,
    /// Subdirectories of `skills_dir` that are shared resources, not skills.
    pub shared_dirs: Vec<String>,
    /// Agent files with this basename prefix are README-style documents and
    /// are skipped.
    pub agent_skip_prefix: String,
}

/// Reference-checking policy.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ReferencePolicy {
    /// Skill directory names whose bodies deliberately contain illustrative,
    /// non-existent example paths and are exempt from reference resolution.
    pub exempt_skills: Vec<String>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            agent_description_min: 20,
            skill_description_min: 30,
            hook_description_min: 50,
        }
    }
}

impl Default for HookRules {
    fn default() -> Self {
        HookRules {
            forbidden_files: vec![
                "README.md".to_string(),
                "INSTALLATION.md".to_string(),
                "CHANGELOG.md".to_string(),
                "QUICK_REFERENCE.md".to_string(),
                "INSTALLATION_GUIDE.md".to_string(),
            ],
            require_nonempty_fields: true,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            schemas_dir: ".github/schemas".to_string(),
            agents_dir: "agents".to_string(),
            skills_dir: "skills".to_string(),
            settings_file: "settings.json".to_string(),
            mcp_file: ".mcp.json".to_string(),
            settings_schema: "settings.schema.json".to_string(),
            mcp_schema: "mcp.schema.json".to_string(),
            manifest_file: "SKILL.md".to_string(),
            shared_dirs: vec![
                "references".to_string(),
                "scripts".to_string(),
                "assets".to_string(),
            ],
            agent_skip_prefix: "AGENTS-".to_string(),
        }
    }
}

impl Default for ReferencePolicy {
    fn default() -> Self {
        ReferencePolicy {
            exempt_skills: vec!["skill-creator".to_string()],
        }
    }
}

impl Policy {
    /// Loads the policy from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `agent-config-lint.toml` in the current
    ///    directory.
    /// 3. If that file does not exist either, return [`Policy::default()`].
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when the explicit path does not exist, the file
    /// cannot be read, or the TOML content fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Policy, String> {
        let policy_path = if let Some(p) = path {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                return Err(format!("Policy file not found: {}", p.display()));
            }
        } else {
            let default_path = Path::new("agent-config-lint.toml");
            if default_path.exists() {
                Some(default_path.to_path_buf())
            } else {
                None
            }
        };

        match policy_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read policy {}: {}", path.display(), e))?;
                toml::from_str(&content)
                    .map_err(|e| format!("Failed to parse policy {}: {}", path.display(), e))
            }
            None => Ok(Policy::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds_diverge_by_call_site() {
        let policy = Policy::default();
        assert_eq!(policy.thresholds.agent_description_min, 20);
        assert_eq!(policy.thresholds.skill_description_min, 30);
        assert_eq!(policy.thresholds.hook_description_min, 50);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let policy: Policy = toml::from_str("[thresholds]\nhook_description_min = 80\n").unwrap();
        assert_eq!(policy.thresholds.hook_description_min, 80);
        assert_eq!(policy.thresholds.skill_description_min, 30);
        assert!(policy.hook.require_nonempty_fields);
        assert_eq!(policy.layout.manifest_file, "SKILL.md");
    }

    #[test]
    fn forbidden_files_default_list() {
        let policy = Policy::default();
        assert!(policy.hook.forbidden_files.iter().any(|f| f == "README.md"));
        assert_eq!(policy.hook.forbidden_files.len(), 5);
    }
}
