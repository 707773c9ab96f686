//! Linting for scripts bundled inside a skill.
//!
//! Only regular files directly under the skill's `scripts/` subdirectory are
//! examined:
//!
//! - `*.py` — the source is compiled (parsed, never executed) through the
//!   `python3` interpreter; a syntax error is a **fatal** error naming the
//!   script. This is an external check: when no `python3` is on `PATH` it is
//!   skipped rather than failed.
//! - `*.sh` — content must begin with a `#!` interpreter directive; a missing
//!   shebang is a warning only.

use crate::report::ValidationResult;
use std::path::Path;
use std::process::Command;

/// Parse-only syntax check. `ast.parse` mirrors what a bytecode compile
/// rejects without writing `__pycache__` artifacts into the skill.
const PY_SYNTAX_CHECK: &str =
    "import ast, sys; ast.parse(open(sys.argv[1], encoding='utf-8').read(), sys.argv[1])";

/// Lints every script directly under `skill_dir/scripts/`.
pub fn lint(skill_dir: &Path, result: &mut ValidationResult) {
    let scripts_dir = skill_dir.join("scripts");
    if !scripts_dir.is_dir() {
        return;
    }

    let entries = match std::fs::read_dir(&scripts_dir) {
        Ok(entries) => entries,
        Err(e) => {
            result.error(format!("Failed to read scripts directory: {e}"));
            return;
        }
    };

    let python = python_available();

    let mut scripts: Vec<_> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    scripts.sort();

    for script in &scripts {
        let name = script
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match script.extension().and_then(|e| e.to_str()) {
            Some("py") if python => check_python_syntax(script, &name, result),
            Some("sh") => check_shebang(script, &name, result),
            _ => {}
        }
    }
}

fn check_python_syntax(script: &Path, name: &str, result: &mut ValidationResult) {
    let output = match Command::new("python3")
        .arg("-B")
        .arg("-c")
        .arg(PY_SYNTAX_CHECK)
        .arg(script)
        .output()
    {
        Ok(o) => o,
        Err(e) => {
            // Spawn failure is an environment problem, not the script's.
            result.warning(format!("Failed to run python3 on {name}: {e}"));
            return;
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        // The last non-empty traceback line carries the SyntaxError summary.
        let detail = stderr
            .lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .unwrap_or("compilation failed")
            .trim();
        result.error(format!("Python syntax error in {name}: {detail}"));
    }
}

fn check_shebang(script: &Path, name: &str, result: &mut ValidationResult) {
    let content = match std::fs::read_to_string(script) {
        Ok(c) => c,
        Err(e) => {
            result.error(format!("Failed to read {name}: {e}"));
            return;
        }
    };
    if !content.starts_with("#!") {
        result.warning(format!("Shell script {name} missing shebang"));
    }
}

/// Returns `true` if a `python3` executable exists on `PATH`.
///
/// On Unix the file must also have an executable permission bit set.
pub fn python_available() -> bool {
    which_exists("python3")
}

fn which_exists(cmd: &str) -> bool {
    std::env::var_os("PATH")
        .map(|path| {
            std::env::split_paths(&path).any(|dir| {
                let candidate = dir.join(cmd);
                if !candidate.is_file() {
                    return false;
                }
                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    std::fs::metadata(&candidate)
                        .map(|m| m.permissions().mode() & 0o111 != 0)
                        .unwrap_or(false)
                }
                #[cfg(not(unix))]
                {
                    true
                }
            })
        })
        .unwrap_or(false)
}
