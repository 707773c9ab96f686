use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agent-config-lint",
    version,
    about = "Validation and policy gate for agent configuration files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate all configuration files under a repository root
    Check {
        /// Repository root containing settings.json, .mcp.json, agents/, skills/
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Custom policy file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Run as a post-write hook: read one event from stdin, allow or block
    Hook {
        /// Custom policy file path
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
