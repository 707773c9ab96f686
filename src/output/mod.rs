//! Report rendering.
//!
//! Two surfaces:
//!
//! | Surface | Module | Use case |
//! |---------|--------|----------|
//! | console | [`console`] | terminal / human review |
//! | CI output file | [`github`] | machine-readable summary for the workflow |
//!
//! The CI block is written *in addition to* the console report, never instead
//! of it, and only when the caller resolved an output path at startup.

pub mod console;
pub mod github;
