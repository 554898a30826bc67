//! Terminal rendering of decisions, history and configuration.

use crate::agent::types::AgentConfiguration;
use crate::engine::types::{DecisionOutcome, DecisionRecord, DecisionType};
use crate::error::EngineError;
use crate::ledger::report::{self, LedgerSummary};
use colored::Colorize;

/// Print the agent's decision on one transaction.
pub fn print_decision(outcome: &DecisionOutcome) {
    let title = match outcome.kind {
        DecisionType::Success => outcome.decision.green().bold(),
        DecisionType::Warning => outcome.decision.yellow().bold(),
        DecisionType::Error => outcome.decision.red().bold(),
    };

    println!();
    println!("  {} {}", report::icon(outcome.kind), title);
    println!("    {}", outcome.feedback);
    if !outcome.chainlink_services_used.is_empty() {
        println!(
            "    {} {}",
            "Powered by:".blue(),
            outcome.chainlink_services_used.join(", ").dimmed()
        );
    }
    println!();
}

/// Print the decision as the JSON object the front-end consumes.
pub fn print_decision_json(outcome: &DecisionOutcome) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}

/// Print an engine error the way the user should see it.
/// An unavailable engine is shown as an error-type decision.
pub fn print_engine_error(err: &EngineError) {
    match err {
        EngineError::EngineUnavailable(_) => print_decision(&DecisionOutcome::unavailable()),
        _ => {
            println!();
            println!("  {} {}", "✗".red().bold(), err.headline());
            println!("    {}", err.to_string().dimmed());
            println!();
        }
    }
}

/// Print the ledger, newest first, followed by the summary line.
pub fn print_history(records: &[DecisionRecord], summary: &LedgerSummary) {
    println!();
    if records.is_empty() {
        println!("  {} No transactions simulated yet.", "ℹ".blue());
        println!();
        return;
    }

    println!("  {} Transaction history:", "📋".to_string().bold());
    println!();
    for record in records {
        println!("  {}", report::format_record(record));
    }
    println!();
    println!(
        "  {} {}",
        "─".repeat(40).dimmed(),
        summary.one_line().dimmed()
    );
    println!();
}

pub fn print_config(agent: &str, config: &AgentConfiguration) {
    println!();
    println!("  Agent:          {}", agent.cyan());
    println!(
        "  Auto-approve:   {}",
        if config.auto_approve_status {
            "Enabled".green()
        } else {
            "Disabled".red()
        }
    );
    println!("  Risk threshold: {}", config.risk_threshold.label().bold());
    println!("  Signing method: {}", config.signing_method);
    println!(
        "  {}",
        format!(
            "Agent will auto-approve transactions up to {} risk (if auto-approve is enabled).",
            config.risk_threshold
        )
        .dimmed()
    );
    println!();
}
