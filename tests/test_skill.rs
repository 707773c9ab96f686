use agent_config_lint::config::Policy;
use agent_config_lint::rules::{scripts, skill};
use std::path::Path;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Creates `<parent>/<dir_name>/SKILL.md` with the given content and returns
/// the skill directory path.
fn make_skill(parent: &Path, dir_name: &str, manifest: &str) -> std::path::PathBuf {
    let dir = parent.join(dir_name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("SKILL.md"), manifest).unwrap();
    dir
}

fn manifest(name: &str, description: &str) -> String {
    format!("---\nname: {name}\ndescription: {description}\n---\n\n# Skill\n")
}

/// A description long enough to clear the batch threshold (30).
const GOOD_DESC: &str = "Creates annotated release notes from merged pull requests";

// ---------------------------------------------------------------------------
// Manifest presence and required fields
// ---------------------------------------------------------------------------

#[test]
fn missing_manifest_is_error() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("release-notes");
    std::fs::create_dir_all(&dir).unwrap();
    let result = skill::validate(&dir, &Policy::default());
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e == "Missing SKILL.md"));
}

#[test]
fn missing_required_fields_are_errors() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = make_skill(tmp.path(), "release-notes", "---\nauthor: someone\n---\n");
    let result = skill::validate(&dir, &Policy::default());
    assert_eq!(result.errors.len(), 2);
}

// ---------------------------------------------------------------------------
// Name / directory agreement
// ---------------------------------------------------------------------------

#[test]
fn name_mismatch_warns_naming_both() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = make_skill(tmp.path(), "foo", &manifest("bar", GOOD_DESC));
    let result = skill::validate(&dir, &Policy::default());
    assert!(result.is_valid(), "mismatch is a warning, not an error");
    let mismatches: Vec<_> = result
        .warnings
        .iter()
        .filter(|w| w.contains("doesn't match directory"))
        .collect();
    assert_eq!(mismatches.len(), 1);
    assert!(mismatches[0].contains("'bar'") && mismatches[0].contains("'foo'"));
}

#[test]
fn matching_name_does_not_warn() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = make_skill(tmp.path(), "foo", &manifest("foo", GOOD_DESC));
    let result = skill::validate(&dir, &Policy::default());
    assert!(
        !result.warnings.iter().any(|w| w.contains("doesn't match")),
        "got: {:?}",
        result.warnings
    );
}

// ---------------------------------------------------------------------------
// Description length boundary (batch threshold 30)
// ---------------------------------------------------------------------------

#[test]
fn description_below_batch_threshold_warns() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = make_skill(tmp.path(), "s", &manifest("s", &"a".repeat(29)));
    let result = skill::validate(&dir, &Policy::default());
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("very short (< 30 chars)")));
}

#[test]
fn description_at_batch_threshold_does_not_warn() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = make_skill(tmp.path(), "s", &manifest("s", &"a".repeat(30)));
    let result = skill::validate(&dir, &Policy::default());
    assert!(result.warnings.is_empty(), "got: {:?}", result.warnings);
}

// ---------------------------------------------------------------------------
// Reference checking
// ---------------------------------------------------------------------------

#[test]
fn dangling_markdown_link_warns() {
    let tmp = tempfile::tempdir().unwrap();
    let content = format!(
        "{}\nSee [the guide](references/guide.md) for details.\n",
        manifest("docs", GOOD_DESC)
    );
    let dir = make_skill(tmp.path(), "docs", &content);
    let result = skill::validate(&dir, &Policy::default());
    assert!(result.is_valid(), "dangling references never block");
    assert!(result
        .warnings
        .iter()
        .any(|w| w == "Referenced file not found: references/guide.md"));
}

#[test]
fn resolving_link_does_not_warn() {
    let tmp = tempfile::tempdir().unwrap();
    let content = format!(
        "{}\nSee [the guide](references/guide.md).\n",
        manifest("docs", GOOD_DESC)
    );
    let dir = make_skill(tmp.path(), "docs", &content);
    std::fs::create_dir_all(dir.join("references")).unwrap();
    std::fs::write(dir.join("references/guide.md"), "# Guide\n").unwrap();
    let result = skill::validate(&dir, &Policy::default());
    assert!(result.warnings.is_empty(), "got: {:?}", result.warnings);
}

#[test]
fn external_links_and_anchors_are_ignored() {
    let tmp = tempfile::tempdir().unwrap();
    let content = format!(
        "{}\n[docs](https://example.com/missing) [site](http://example.com) [top](#usage)\n",
        manifest("docs", GOOD_DESC)
    );
    let dir = make_skill(tmp.path(), "docs", &content);
    let result = skill::validate(&dir, &Policy::default());
    assert!(result.warnings.is_empty(), "got: {:?}", result.warnings);
}

#[test]
fn dangling_code_span_path_warns() {
    let tmp = tempfile::tempdir().unwrap();
    let content = format!("{}\nRun `scripts/deploy.py` to ship.\n", manifest("docs", GOOD_DESC));
    let dir = make_skill(tmp.path(), "docs", &content);
    let result = skill::validate(&dir, &Policy::default());
    assert!(result
        .warnings
        .iter()
        .any(|w| w == "Referenced path not found: scripts/deploy.py"));
}

#[test]
fn code_span_with_arguments_is_not_a_reference() {
    // `scripts/deploy.py --dry-run` is a command line, not a path reference.
    let tmp = tempfile::tempdir().unwrap();
    let content = format!(
        "{}\nRun `scripts/deploy.py --dry-run` first.\n",
        manifest("docs", GOOD_DESC)
    );
    let dir = make_skill(tmp.path(), "docs", &content);
    let result = skill::validate(&dir, &Policy::default());
    assert!(result.warnings.is_empty(), "got: {:?}", result.warnings);
}

#[test]
fn exempt_skill_skips_reference_checks() {
    let tmp = tempfile::tempdir().unwrap();
    let content = format!(
        "{}\nExample layout: [template](references/example.md) and `scripts/example.py`.\n",
        manifest("skill-creator", GOOD_DESC)
    );
    let dir = make_skill(tmp.path(), "skill-creator", &content);
    let result = skill::validate(&dir, &Policy::default());
    assert!(result.warnings.is_empty(), "got: {:?}", result.warnings);
}

// ---------------------------------------------------------------------------
// Script linting
// ---------------------------------------------------------------------------

#[test]
fn python_syntax_error_is_fatal_and_names_the_script() {
    if !scripts::python_available() {
        return;
    }
    let tmp = tempfile::tempdir().unwrap();
    let dir = make_skill(tmp.path(), "s", &manifest("s", GOOD_DESC));
    std::fs::create_dir_all(dir.join("scripts")).unwrap();
    std::fs::write(dir.join("scripts/bad.py"), "def broken(:\n    pass\n").unwrap();

    let result = skill::validate(&dir, &Policy::default());
    assert!(!result.is_valid());
    assert!(
        result
            .errors
            .iter()
            .any(|e| e.starts_with("Python syntax error in bad.py:")),
        "got: {:?}",
        result.errors
    );
}

#[test]
fn valid_python_script_is_clean() {
    if !scripts::python_available() {
        return;
    }
    let tmp = tempfile::tempdir().unwrap();
    let dir = make_skill(tmp.path(), "s", &manifest("s", GOOD_DESC));
    std::fs::create_dir_all(dir.join("scripts")).unwrap();
    std::fs::write(dir.join("scripts/ok.py"), "print('hello')\n").unwrap();

    let result = skill::validate(&dir, &Policy::default());
    assert!(result.is_valid(), "got: {:?}", result.errors);
}

#[test]
fn shell_script_without_shebang_warns_only() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = make_skill(tmp.path(), "s", &manifest("s", GOOD_DESC));
    std::fs::create_dir_all(dir.join("scripts")).unwrap();
    std::fs::write(dir.join("scripts/run.sh"), "echo hello\n").unwrap();

    let result = skill::validate(&dir, &Policy::default());
    assert!(result.is_valid());
    assert!(result
        .warnings
        .iter()
        .any(|w| w == "Shell script run.sh missing shebang"));
}

#[test]
fn shell_script_with_shebang_is_clean() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = make_skill(tmp.path(), "s", &manifest("s", GOOD_DESC));
    std::fs::create_dir_all(dir.join("scripts")).unwrap();
    std::fs::write(dir.join("scripts/run.sh"), "#!/bin/bash\necho hello\n").unwrap();

    let result = skill::validate(&dir, &Policy::default());
    assert!(result.warnings.is_empty(), "got: {:?}", result.warnings);
}

#[test]
fn errors_and_warnings_accumulate_in_one_result() {
    // A broken script (error) plus a dangling reference (warning) in the same
    // skill: both land in the same result, independently.
    if !scripts::python_available() {
        return;
    }
    let tmp = tempfile::tempdir().unwrap();
    let content = format!(
        "{}\nSee [missing](references/nope.md).\n",
        manifest("s", GOOD_DESC)
    );
    let dir = make_skill(tmp.path(), "s", &content);
    std::fs::create_dir_all(dir.join("scripts")).unwrap();
    std::fs::write(dir.join("scripts/bad.py"), "def broken(:\n").unwrap();

    let result = skill::validate(&dir, &Policy::default());
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.contains("bad.py")));
    assert!(result.warnings.iter().any(|w| w.contains("references/nope.md")));
}
