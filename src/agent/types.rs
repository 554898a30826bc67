//! Core types for agent configuration.
//!
//! The agent configuration is the user-controlled policy the decision
//! engine consults: whether auto-approval is on, the highest risk level the
//! agent signs on its own, and how signatures are collected otherwise.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk classification of a transaction.
/// Ordered: `Low < Medium < High`, which is what threshold comparison uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    /// Parse a risk level from user input.
    /// Accepts a few aliases so the CLI and config files feel natural.
    pub fn from_str_loose(s: &str) -> Option<RiskLevel> {
        match s.to_lowercase().trim() {
            "low" | "l" | "1" => Some(RiskLevel::Low),
            "medium" | "med" | "m" | "2" => Some(RiskLevel::Medium),
            "high" | "h" | "3" => Some(RiskLevel::High),
            _ => None,
        }
    }

    /// Upper-case label used in badges ("LOW Risk").
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

/// How a transaction is signed when the agent does not auto-sign it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SigningMethod {
    /// The agent holds a delegated key and hands off to a reviewer.
    Delegated,
    /// Every signature not made by the agent needs the user's own wallet.
    Manual,
}

impl fmt::Display for SigningMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigningMethod::Delegated => write!(f, "delegated"),
            SigningMethod::Manual => write!(f, "manual"),
        }
    }
}

impl SigningMethod {
    pub fn from_str_loose(s: &str) -> Option<SigningMethod> {
        match s.to_lowercase().trim() {
            "delegated" | "delegate" | "auto" => Some(SigningMethod::Delegated),
            "manual" | "review" | "wallet" => Some(SigningMethod::Manual),
            _ => None,
        }
    }
}

/// Policy consulted by the decision engine for every transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfiguration {
    /// Mirrors the caller's auto-approve toggle.
    pub auto_approve_status: bool,
    /// Highest risk level the agent will auto-approve.
    pub risk_threshold: RiskLevel,
    pub signing_method: SigningMethod,
}

impl Default for AgentConfiguration {
    fn default() -> Self {
        Self {
            auto_approve_status: true,
            risk_threshold: RiskLevel::Medium,
            signing_method: SigningMethod::Delegated,
        }
    }
}

impl AgentConfiguration {
    /// Whether a transaction at `risk` falls inside the agent's mandate.
    pub fn covers(&self, risk: RiskLevel) -> bool {
        risk <= self.risk_threshold
    }

    /// One-line description for status output.
    pub fn describe(&self) -> String {
        format!(
            "auto-approve {} | threshold {} | signing {}",
            if self.auto_approve_status { "on" } else { "off" },
            self.risk_threshold,
            self.signing_method
        )
    }
}
