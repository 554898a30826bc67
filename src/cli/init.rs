//! `elizasign init` — write a starter agent config file.
//!
//! Creates `.elizasign.yaml` in the current directory from one of the
//! built-in templates.

use crate::agent::{defaults, parser};
use crate::utils::paths::CONFIG_FILE_NAME;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// Run the `elizasign init` command.
pub fn run_init(template: Option<&str>, output_path: Option<&str>) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;

    let output_file = output_path
        .map(PathBuf::from)
        .unwrap_or_else(|| cwd.join(CONFIG_FILE_NAME));

    if output_file.exists() {
        println!(
            "{} A config file already exists at {}",
            "⚠".yellow(),
            output_file.display()
        );
        println!("  Edit it directly, or remove it and run init again.");
        return Ok(());
    }

    let template_name = template.unwrap_or("balanced");
    let yaml_content = defaults::get_default_profile(template_name).ok_or_else(|| {
        let available: Vec<String> = defaults::available_templates()
            .iter()
            .map(|(name, desc)| format!("  {} — {}", name.bold(), desc))
            .collect();
        anyhow::anyhow!(
            "Unknown template '{}'. Available templates:\n{}",
            template_name,
            available.join("\n")
        )
    })?;

    std::fs::write(&output_file, yaml_content)
        .with_context(|| format!("Failed to write config file: {}", output_file.display()))?;

    let profile = parser::parse_profile_str(yaml_content)?;

    println!();
    println!(
        "  {} Created {}",
        "✓".green().bold(),
        output_file.display().to_string().bold()
    );
    println!();
    println!("  Template: {}", profile.agent.cyan());
    println!("  {} What this agent does:", "ℹ".blue());
    if let Some(description) = profile.description {
        println!("    {}", description.trim());
    }
    println!("    {}", profile.config.describe().dimmed());

    println!();
    println!("  {} Next steps:", "→".blue());
    println!(
        "    1. Review the config: {}",
        format!("cat {}", output_file.display()).dimmed()
    );
    println!(
        "    2. Try a transaction: {}",
        "elizasign simulate --to 0xABC --amount 0.5 --risk low".dimmed()
    );
    println!("    3. Start a session: {}", "elizasign session".dimmed());
    println!();

    Ok(())
}
