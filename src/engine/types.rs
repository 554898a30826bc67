//! Types flowing through the decision engine: the transaction being
//! proposed, the outcome the agent produces, and the record that ends up in
//! the ledger.

use crate::agent::types::RiskLevel;
use crate::error::EngineError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A transaction the user wants the agent to sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    /// Destination address. Opaque to the engine.
    pub to_address: String,
    /// Amount in ETH
    pub amount: Decimal,
    pub risk_level: RiskLevel,
    pub auto_approve: bool,
}

impl TransactionRequest {
    pub fn new(
        to_address: impl Into<String>,
        amount: Decimal,
        risk_level: RiskLevel,
        auto_approve: bool,
    ) -> Self {
        Self {
            to_address: to_address.into(),
            amount,
            risk_level,
            auto_approve,
        }
    }

    /// Build a request from raw form input. The amount arrives as text.
    pub fn from_input(
        to_address: &str,
        amount: &str,
        risk_level: RiskLevel,
        auto_approve: bool,
    ) -> Result<Self, EngineError> {
        let amount_text = amount.trim();
        if amount_text.is_empty() {
            return Err(EngineError::invalid("amount is required"));
        }
        let amount = parse_amount(amount_text)?;

        let request = Self::new(to_address.trim(), amount, risk_level, auto_approve);
        request.validate()?;
        Ok(request)
    }

    /// Check the request is complete enough to be decided on.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.to_address.trim().is_empty() {
            return Err(EngineError::invalid("destination address is required"));
        }
        if self.amount <= Decimal::ZERO {
            return Err(EngineError::invalid(format!(
                "amount must be positive, got {}",
                self.amount.normalize()
            )));
        }
        Ok(())
    }
}

/// Parse an ETH amount without rounding. Values that don't fit a `Decimal`
/// are rejected rather than silently truncated.
fn parse_amount(text: &str) -> Result<Decimal, EngineError> {
    match Decimal::from_str_exact(text) {
        Ok(amount) => Ok(amount),
        Err(rust_decimal::Error::Underflow | rust_decimal::Error::ScaleExceedsMaximumPrecision(_)) => {
            Err(EngineError::invalid(format!(
                "amount '{}' has more decimal places than supported",
                text
            )))
        }
        Err(
            rust_decimal::Error::ExceedsMaximumPossibleValue
            | rust_decimal::Error::LessThanMinimumPossibleValue,
        ) => Err(EngineError::invalid(format!("amount '{}' is out of range", text))),
        Err(rust_decimal::Error::ErrorString(reason)) if reason.contains("overflow") => {
            Err(EngineError::invalid(format!("amount '{}' is out of range", text)))
        }
        Err(_) => Err(EngineError::invalid(format!(
            "amount '{}' is not a number",
            text
        ))),
    }
}

/// Classification of a decision. Drives how the ledger and the terminal
/// present a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionType {
    /// Signed by the agent
    Success,
    /// Handed off for review
    Warning,
    /// Blocked
    Error,
}

impl fmt::Display for DecisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionType::Success => write!(f, "success"),
            DecisionType::Warning => write!(f, "warning"),
            DecisionType::Error => write!(f, "error"),
        }
    }
}

/// Synthetic oracle services cited as the basis for a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceTag {
    DataFeeds,
    Functions,
    DataStreams,
    AutomationAutoSign,
    AutomationDelegate,
    AutomationBlock,
}

impl fmt::Display for ServiceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceTag::DataFeeds => "Chainlink Data Feeds",
            ServiceTag::Functions => "Chainlink Functions",
            ServiceTag::DataStreams => "Chainlink Data Streams",
            ServiceTag::AutomationAutoSign => "Chainlink Automation (Auto-Sign)",
            ServiceTag::AutomationDelegate => "Chainlink Automation (Delegate)",
            ServiceTag::AutomationBlock => "Chainlink Automation (Block)",
        };
        f.write_str(name)
    }
}

/// What a decision provider returns for one transaction.
///
/// Serializes to the object the front-end consumes:
/// `{ decision, feedback, type, chainlinkServicesUsed }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionOutcome {
    /// Short label ("Auto-Signed", "Transaction Blocked", ...)
    pub decision: String,
    /// Explanation shown under the label
    pub feedback: String,
    #[serde(rename = "type")]
    pub kind: DecisionType,
    pub chainlink_services_used: Vec<String>,
}

impl DecisionOutcome {
    /// The outcome shown when no decision could be obtained.
    pub fn unavailable() -> Self {
        Self {
            decision: "Error".to_string(),
            feedback: "Failed to get a decision from the agent.".to_string(),
            kind: DecisionType::Error,
            chainlink_services_used: Vec::new(),
        }
    }
}

/// A decided transaction as kept in the ledger. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Time-ordered unique id (`tx-<uuid v7>`)
    pub id: String,
    pub to_address: String,
    pub amount: Decimal,
    pub risk_level: RiskLevel,
    pub auto_approve: bool,
    pub decision: String,
    pub feedback: String,
    #[serde(rename = "type")]
    pub kind: DecisionType,
    pub timestamp: DateTime<Utc>,
    pub services_used: Vec<String>,
}

impl DecisionRecord {
    /// Stamp an outcome with an id and the current time.
    pub fn stamp(request: &TransactionRequest, outcome: DecisionOutcome) -> Self {
        Self {
            id: format!("tx-{}", uuid::Uuid::now_v7()),
            to_address: request.to_address.clone(),
            amount: request.amount,
            risk_level: request.risk_level,
            auto_approve: request.auto_approve,
            decision: outcome.decision,
            feedback: outcome.feedback,
            kind: outcome.kind,
            timestamp: Utc::now(),
            services_used: outcome.chainlink_services_used,
        }
    }

    /// The outcome part of the record, as a provider would have returned it.
    pub fn outcome(&self) -> DecisionOutcome {
        DecisionOutcome {
            decision: self.decision.clone(),
            feedback: self.feedback.clone(),
            kind: self.kind,
            chainlink_services_used: self.services_used.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;

    #[test]
    fn test_from_input_parses_amount() {
        let req = TransactionRequest::from_input(" 0xABC ", "0.5", RiskLevel::Low, true).unwrap();
        assert_eq!(req.to_address, "0xABC");
        assert_eq!(req.amount, Decimal::from_f64(0.5).unwrap());
    }

    #[test]
    fn test_from_input_rejects_bad_amounts() {
        for amount in ["", "  ", "abc", "0", "-1", "0.000"] {
            let err = TransactionRequest::from_input("0xABC", amount, RiskLevel::Low, true)
                .unwrap_err();
            assert!(
                matches!(err, EngineError::InvalidRequest(_)),
                "amount {:?} should be invalid",
                amount
            );
        }
    }

    #[test]
    fn test_from_input_reports_unrepresentable_amounts() {
        let err = TransactionRequest::from_input(
            "0xABC",
            "0.00000000000000000000000000001",
            RiskLevel::Low,
            true,
        )
        .unwrap_err();
        assert!(err.to_string().contains("decimal places"), "got: {}", err);

        let err = TransactionRequest::from_input(
            "0xABC",
            "99999999999999999999999999999",
            RiskLevel::Low,
            true,
        )
        .unwrap_err();
        assert!(err.to_string().contains("out of range"), "got: {}", err);

        let req = TransactionRequest::from_input(
            "0xABC",
            "0.0000000000000000000000000001",
            RiskLevel::Low,
            true,
        )
        .unwrap();
        assert!(req.amount > Decimal::ZERO);
    }

    #[test]
    fn test_validate_rejects_empty_address() {
        let req = TransactionRequest::new("   ", Decimal::ONE, RiskLevel::Low, true);
        assert!(matches!(req.validate(), Err(EngineError::InvalidRequest(_))));
    }

    #[test]
    fn test_outcome_json_shape() {
        let outcome = DecisionOutcome {
            decision: "Auto-Signed".to_string(),
            feedback: "ok".to_string(),
            kind: DecisionType::Success,
            chainlink_services_used: vec![ServiceTag::DataFeeds.to_string()],
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["type"], "success");
        assert_eq!(json["chainlinkServicesUsed"][0], "Chainlink Data Feeds");
    }

    #[test]
    fn test_stamped_ids_are_unique() {
        let req = TransactionRequest::new("0xABC", Decimal::ONE, RiskLevel::Low, true);
        let a = DecisionRecord::stamp(&req, DecisionOutcome::unavailable());
        let b = DecisionRecord::stamp(&req, DecisionOutcome::unavailable());
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("tx-"));
        assert_eq!(a.outcome(), DecisionOutcome::unavailable());
    }
}
