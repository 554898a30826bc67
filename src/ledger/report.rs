//! Summaries and terminal formatting for ledger records.

use crate::engine::types::{DecisionRecord, DecisionType};
use colored::Colorize;

/// Counts per decision type over a set of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSummary {
    pub total: usize,
    pub signed: usize,
    pub delegated: usize,
    pub blocked: usize,
}

impl LedgerSummary {
    /// Format as a human-readable one-liner for terminal output.
    pub fn one_line(&self) -> String {
        format!(
            "{} transactions | {} signed | {} delegated | {} blocked",
            self.total, self.signed, self.delegated, self.blocked
        )
    }
}

/// Tally a set of records.
pub fn summarize<'a>(records: impl IntoIterator<Item = &'a DecisionRecord>) -> LedgerSummary {
    let mut summary = LedgerSummary::default();
    for record in records {
        summary.total += 1;
        match record.kind {
            DecisionType::Success => summary.signed += 1,
            DecisionType::Warning => summary.delegated += 1,
            DecisionType::Error => summary.blocked += 1,
        }
    }
    summary
}

/// Status icon for a decision type.
pub fn icon(kind: DecisionType) -> String {
    match kind {
        DecisionType::Success => "✓".green().bold().to_string(),
        DecisionType::Warning => "⚠".yellow().bold().to_string(),
        DecisionType::Error => "✗".red().bold().to_string(),
    }
}

/// Pretty-print a record for terminal display.
pub fn format_record(record: &DecisionRecord) -> String {
    let timestamp = record.timestamp.format("%H:%M:%S").to_string();
    let decision = match record.kind {
        DecisionType::Success => record.decision.green().to_string(),
        DecisionType::Warning => record.decision.yellow().to_string(),
        DecisionType::Error => record.decision.red().to_string(),
    };

    let mut out = format!(
        "[{}] {} {} [{} Risk] -> {} ETH to {}",
        timestamp.dimmed(),
        icon(record.kind),
        decision,
        record.risk_level.label(),
        record.amount.normalize(),
        record.to_address
    );

    out.push_str(&format!("\n      {}", record.feedback.dimmed()));
    if !record.services_used.is_empty() {
        out.push_str(&format!(
            "\n      {} {}",
            "Powered by:".blue(),
            record.services_used.join(", ")
        ));
    }
    out
}
