//! Decision engine — decides whether the agent signs, delegates or blocks a
//! transaction.
//!
//! Checks run in a fixed order, first match wins:
//!
//! 1. High-risk override: a HIGH risk transaction above the agent's
//!    threshold is blocked, whatever else is configured.
//! 2. Auto-sign: with auto-approve on, anything at or below the threshold
//!    is signed by the agent.
//! 3. Delegate: everything else goes to review. The signing method only
//!    changes who reviews it.
//!
//! Risk levels compare as LOW < MEDIUM < HIGH.

use crate::agent::types::{AgentConfiguration, RiskLevel, SigningMethod};
use crate::engine::services::services_for;
use crate::engine::types::*;
use crate::error::EngineError;

/// Stateless rule-based decision engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionEngine;

/// Why a transaction was not signed by the agent.
enum DelegateReason {
    AutoApproveOff,
    AboveThreshold,
}

enum Verdict {
    Block,
    AutoSign,
    Delegate(DelegateReason),
}

impl DecisionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Decide on a transaction and stamp the result into a ledger record.
    pub fn decide(
        &self,
        request: &TransactionRequest,
        config: &AgentConfiguration,
        recent_audit_summary: &str,
    ) -> Result<DecisionRecord, EngineError> {
        let outcome = self.evaluate(request, config, recent_audit_summary)?;
        Ok(DecisionRecord::stamp(request, outcome))
    }

    /// Compute the outcome for a transaction.
    ///
    /// Pure: the same request and configuration always give the same
    /// outcome. The audit summary is context for richer providers and is
    /// only traced here.
    pub fn evaluate(
        &self,
        request: &TransactionRequest,
        config: &AgentConfiguration,
        recent_audit_summary: &str,
    ) -> Result<DecisionOutcome, EngineError> {
        request.validate()?;

        tracing::debug!(
            to = %request.to_address,
            amount = %request.amount,
            risk = %request.risk_level,
            threshold = %config.risk_threshold,
            auto_approve = config.auto_approve_status,
            context = recent_audit_summary,
            "evaluating transaction"
        );

        let verdict = Self::verdict(request.risk_level, config);
        let kind = match verdict {
            Verdict::Block => DecisionType::Error,
            Verdict::AutoSign => DecisionType::Success,
            Verdict::Delegate(_) => DecisionType::Warning,
        };

        let (decision, feedback) = Self::describe(&verdict, request, config);

        Ok(DecisionOutcome {
            decision,
            feedback,
            kind,
            chainlink_services_used: services_for(request.risk_level, kind)
                .iter()
                .map(|tag| tag.to_string())
                .collect(),
        })
    }

    fn verdict(risk: RiskLevel, config: &AgentConfiguration) -> Verdict {
        if risk == RiskLevel::High && !config.covers(risk) {
            Verdict::Block
        } else if !config.covers(risk) {
            Verdict::Delegate(DelegateReason::AboveThreshold)
        } else if config.auto_approve_status {
            Verdict::AutoSign
        } else {
            Verdict::Delegate(DelegateReason::AutoApproveOff)
        }
    }

    /// Label and feedback text for a verdict.
    fn describe(
        verdict: &Verdict,
        request: &TransactionRequest,
        config: &AgentConfiguration,
    ) -> (String, String) {
        let amount = request.amount.normalize();
        let to = &request.to_address;

        match verdict {
            Verdict::Block => (
                "Transaction Blocked".to_string(),
                format!(
                    "High risk transfer of {} ETH to {} exceeds the agent's {} risk threshold. \
                     The transaction was blocked before signing.",
                    amount, to, config.risk_threshold
                ),
            ),
            Verdict::AutoSign => (
                "Auto-Signed".to_string(),
                format!(
                    "{} risk transfer of {} ETH to {} is within the {} risk threshold. \
                     The agent signed it automatically.",
                    capitalize(request.risk_level), amount, to, config.risk_threshold
                ),
            ),
            Verdict::Delegate(reason) => {
                let why = match reason {
                    DelegateReason::AutoApproveOff => "Auto-approve is disabled".to_string(),
                    DelegateReason::AboveThreshold => format!(
                        "{} risk exceeds the agent's {} risk threshold",
                        capitalize(request.risk_level),
                        config.risk_threshold
                    ),
                };
                match config.signing_method {
                    SigningMethod::Delegated => (
                        "Delegated for Review".to_string(),
                        format!(
                            "{}. The transfer of {} ETH to {} was handed to a delegated signer for review.",
                            why, amount, to
                        ),
                    ),
                    SigningMethod::Manual => (
                        "Manual Signature Required".to_string(),
                        format!(
                            "{}. The transfer of {} ETH to {} needs your wallet signature.",
                            why, amount, to
                        ),
                    ),
                }
            }
        }
    }
}

fn capitalize(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "Low",
        RiskLevel::Medium => "Medium",
        RiskLevel::High => "High",
    }
}
