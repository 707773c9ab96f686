//! Batch validation driver.
//!
//! [`run`] discovers every candidate file under a repository root using the
//! policy's layout — the two schema-backed JSON files, markdown files under
//! the agents directory, skill subdirectories under the skills directory —
//! and produces one [`ValidationResult`] per candidate. Files are validated
//! strictly in sequence and in isolation: a failure inside one file becomes
//! that file's own error entry and never aborts the rest of the run.

use crate::config::Policy;
use crate::report::ValidationResult;
use crate::rules::json_config::{self, SchemaLoad};
use crate::rules::{agent, skill, FileKind};
use jsonschema::Validator;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A discovered file plus the rule-set variant its discovery context selects.
struct Candidate {
    kind: FileKind,
    path: PathBuf,
}

/// Compiled schema documents for the current run. Each is loaded at most
/// once; `None` disables the corresponding check.
struct Schemas {
    settings: Option<Box<Validator>>,
    mcp: Option<Box<Validator>>,
}

/// Validates everything discoverable under `root`.
///
/// Results are ordered: settings, MCP config, agents (sorted), skills
/// (sorted). Schema files that exist but fail to load contribute their own
/// error result rather than aborting the run.
pub fn run(root: &Path, policy: &Policy) -> Vec<ValidationResult> {
    let mut results = Vec::new();
    let schemas = load_schemas(root, policy, &mut results);

    for candidate in discover(root, policy, &schemas) {
        if let Some(result) = validate_candidate(&candidate, policy, &schemas) {
            results.push(result);
        }
    }

    results
}

fn load_schemas(root: &Path, policy: &Policy, results: &mut Vec<ValidationResult>) -> Schemas {
    let schemas_dir = root.join(&policy.layout.schemas_dir);

    let mut load = |name: &str| -> Option<Box<Validator>> {
        let path = schemas_dir.join(name);
        match json_config::load_schema(&path) {
            SchemaLoad::Absent => None,
            SchemaLoad::Loaded(validator) => Some(validator),
            SchemaLoad::Failed(msg) => {
                let mut result = ValidationResult::new(path);
                result.error(msg);
                results.push(result);
                None
            }
        }
    };

    Schemas {
        settings: load(&policy.layout.settings_schema),
        mcp: load(&policy.layout.mcp_schema),
    }
}

/// Selects the rule-set variant for each discovered file by where it was
/// found, never by its contents.
fn discover(root: &Path, policy: &Policy, schemas: &Schemas) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    if schemas.settings.is_some() {
        candidates.push(Candidate {
            kind: FileKind::Settings,
            path: root.join(&policy.layout.settings_file),
        });
    }
    if schemas.mcp.is_some() {
        candidates.push(Candidate {
            kind: FileKind::McpConfig,
            path: root.join(&policy.layout.mcp_file),
        });
    }

    for path in markdown_files(&root.join(&policy.layout.agents_dir)) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        // README-style agent index files are not agents.
        if name.starts_with(&policy.layout.agent_skip_prefix) {
            continue;
        }
        candidates.push(Candidate {
            kind: FileKind::Agent,
            path,
        });
    }

    for dir in child_dirs(&root.join(&policy.layout.skills_dir)) {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        // Shared resource directories live alongside skills but are not skills.
        if policy.layout.shared_dirs.iter().any(|s| *s == name) {
            continue;
        }
        candidates.push(Candidate {
            kind: FileKind::Skill,
            path: dir,
        });
    }

    candidates
}

fn validate_candidate(
    candidate: &Candidate,
    policy: &Policy,
    schemas: &Schemas,
) -> Option<ValidationResult> {
    match candidate.kind {
        FileKind::Settings => schemas
            .settings
            .as_ref()
            .map(|v| json_config::validate_file(&candidate.path, v)),
        FileKind::McpConfig => schemas
            .mcp
            .as_ref()
            .map(|v| json_config::validate_file(&candidate.path, v)),
        FileKind::Agent => Some(agent::validate(&candidate.path, policy)),
        FileKind::Skill => Some(skill::validate(&candidate.path, policy)),
    }
}

/// Markdown files directly under `dir`, sorted by path.
fn markdown_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return vec![];
    }
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .map(|ext| ext.eq_ignore_ascii_case("md"))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    files
}

/// Immediate child directories of `dir`, sorted by path.
fn child_dirs(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return vec![];
    };
    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|e| e.path())
        .collect();
    dirs.sort();
    dirs
}
