//! # agent-config-lint
//!
//! Validation and policy gate for agent configuration repositories.
//!
//! `agent-config-lint` validates the plugin-style extension files that make up
//! an agent configuration repo: `settings.json` and `.mcp.json` against JSON
//! Schemas, agent markdown files and skill directories against frontmatter and
//! structure rules. It runs from two call sites:
//!
//! - the **batch validator** (`check` subcommand) — a CI driver that discovers
//!   every candidate file under a repository root, validates each in
//!   isolation, and exits 0/1 on the aggregate result;
//! - the **hook gate** (`hook` subcommand) — a synchronous post-write policy
//!   checkpoint that reads one event from stdin and emits a single allow/block
//!   decision, blocking the write on any error.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use agent_config_lint::{batch, config::Policy, report::RunSummary};
//!
//! let policy = Policy::load(None).expect("failed to load policy");
//! let results = batch::run(Path::new("."), &policy);
//! let summary = RunSummary::from_results(&results);
//!
//! std::process::exit(if summary.passed { 0 } else { 1 });
//! ```
//!
//! ## Architecture
//!
//! 1. **[`config`]** — named policy values (thresholds, layout, hook rules)
//!    loaded once from an optional TOML file.
//! 2. **[`frontmatter`]** — delimited-block extraction with a typed failure
//!    taxonomy.
//! 3. **[`rules`]** — per-kind validation rules behind a closed
//!    [`rules::FileKind`] variant set.
//! 4. **[`batch`]** — file discovery and the per-file validation loop.
//! 5. **[`hook`]** — the single-shot allow/block decision engine.
//! 6. **[`report`]** / **[`output`]** — result aggregation and console/CI
//!    rendering.

pub mod batch;
pub mod config;
pub mod frontmatter;
pub mod hook;
pub mod output;
pub mod report;
pub mod rules;
