//! Batch files — a list of transactions to push through one session.
//!
//! # Example batch file:
//! ```yaml
//! transactions:
//!   - to: "0xABC"
//!     amount: 0.5
//!     risk: low
//!   - to: "0xDEF"
//!     amount: "12.75"
//!     risk: high
//!     auto_approve: false
//! ```

use crate::agent::types::RiskLevel;
use crate::engine::types::TransactionRequest;
use crate::error::EngineError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawBatch {
    transactions: Vec<RawTransaction>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTransaction {
    #[serde(default)]
    to: String,
    #[serde(default)]
    amount: Option<AmountInput>,
    risk: String,
    #[serde(default)]
    auto_approve: Option<bool>,
}

/// Amounts may be written as YAML numbers or as quoted strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AmountInput {
    Text(String),
    Number(f64),
}

impl AmountInput {
    fn into_text(self) -> String {
        match self {
            AmountInput::Text(s) => s,
            AmountInput::Number(n) => n.to_string(),
        }
    }
}

/// One transaction as written in a batch file, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub to_address: String,
    pub amount: String,
    pub risk_level: RiskLevel,
    /// `None` means "use the session's toggle"
    pub auto_approve: Option<bool>,
}

impl BatchItem {
    /// Validate into a request, filling in the session's auto-approve toggle.
    pub fn to_request(&self, session_auto_approve: bool) -> Result<TransactionRequest, EngineError> {
        TransactionRequest::from_input(
            &self.to_address,
            &self.amount,
            self.risk_level,
            self.auto_approve.unwrap_or(session_auto_approve),
        )
    }
}

pub fn parse_batch_file(path: impl AsRef<Path>) -> Result<Vec<BatchItem>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file: {}", path.display()))?;
    parse_batch_str(&content)
        .with_context(|| format!("Failed to parse batch file: {}", path.display()))
}

/// Parse a batch YAML string.
///
/// Only structural problems fail here. Missing addresses or bad amounts are
/// kept so they surface as invalid requests when the batch runs.
pub fn parse_batch_str(yaml: &str) -> Result<Vec<BatchItem>> {
    let raw: RawBatch = serde_yaml::from_str(yaml).context("Invalid YAML syntax in batch file")?;

    raw.transactions
        .into_iter()
        .enumerate()
        .map(|(i, tx)| {
            let risk_level = RiskLevel::from_str_loose(&tx.risk).with_context(|| {
                format!(
                    "Transaction {} has unknown risk '{}'. Valid values: low, medium, high",
                    i + 1,
                    tx.risk
                )
            })?;
            Ok(BatchItem {
                to_address: tx.to,
                amount: tx.amount.map(AmountInput::into_text).unwrap_or_default(),
                risk_level,
                auto_approve: tx.auto_approve,
            })
        })
        .collect()
}
