mod cli;

use agent_config_lint::{batch, config::Policy, hook, output, report::RunSummary};
use clap::Parser;
use cli::{Cli, Commands};
use std::io::Read;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { root, config } => {
            if !root.exists() {
                eprintln!("Error: path does not exist: {}", root.display());
                std::process::exit(2);
            }

            let policy = Policy::load(config.as_deref()).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            // Environment is read exactly once, here, and passed down.
            let github_output = std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from);

            let results = batch::run(&root, &policy);
            print!("{}", output::console::format(&results));

            if let Some(out_path) = github_output {
                if let Err(e) = output::github::append(&out_path, &results) {
                    eprintln!(
                        "Warning: failed to write CI output {}: {e}",
                        out_path.display()
                    );
                }
            }

            let summary = RunSummary::from_results(&results);
            std::process::exit(if summary.passed { 0 } else { 1 });
        }

        Commands::Hook { config } => {
            let policy = Policy::load(config.as_deref()).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            let mut input = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut input) {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "decision": "block",
                        "reason": format!("Validator error: Failed to read hook input: {e}"),
                    })
                );
                std::process::exit(2);
            }

            match hook::run(&input, &policy) {
                hook::HookOutcome::Allow(decision) => {
                    println!("{}", to_json(&decision));
                    std::process::exit(0);
                }
                hook::HookOutcome::Block(decision) => {
                    println!("{}", to_json(&decision));
                    std::process::exit(2);
                }
                hook::HookOutcome::InputError(decision) => {
                    eprintln!("{}", to_json(&decision));
                    std::process::exit(2);
                }
            }
        }
    }
}

fn to_json<T: serde::Serialize>(decision: &T) -> String {
    serde_json::to_string(decision).expect("JSON serialization failed")
}
