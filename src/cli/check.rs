//! `elizasign check` — validate and lint an agent config file.

use crate::agent::{linter, parser};
use crate::cli::render;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Run the `elizasign check` command.
pub fn run_check(config_path: &Path) -> Result<()> {
    let profile = parser::parse_profile_file(config_path)?;

    println!();
    println!("  {} Config is valid!", "✓".green().bold());
    render::print_config(&profile.agent, &profile.config);

    let warnings = linter::lint_config(&profile.config);
    if warnings.is_empty() {
        println!(
            "  {} No issues found — config looks solid.",
            "✓".green()
        );
    } else {
        println!(
            "  {} {} {}:",
            "─".repeat(20).dimmed(),
            warnings.len(),
            if warnings.len() == 1 {
                "suggestion"
            } else {
                "suggestions"
            }
        );
        println!();
        for warning in &warnings {
            println!("{}", warning.display());
        }
    }
    println!();

    Ok(())
}
