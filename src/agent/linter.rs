//! Config linter — points out agent settings that probably don't do what
//! the user expects.
//!
//! Run by `elizasign check`.

use crate::agent::types::*;
use colored::Colorize;

/// A lint warning about an agent configuration.
#[derive(Debug)]
pub struct LintWarning {
    pub severity: Severity,
    pub message: String,
    pub suggestion: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Severity {
    /// Settings that let risky transactions through
    Warning,
    /// Worth knowing, not dangerous
    Info,
}

impl LintWarning {
    fn warn_with_fix(msg: impl Into<String>, fix: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: msg.into(),
            suggestion: Some(fix.into()),
        }
    }

    fn info(msg: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: msg.into(),
            suggestion: None,
        }
    }

    /// Format for terminal output.
    pub fn display(&self) -> String {
        let icon = match self.severity {
            Severity::Warning => "⚠".yellow().to_string(),
            Severity::Info => "ℹ".blue().to_string(),
        };
        let mut out = format!("  {} {}", icon, self.message);
        if let Some(ref suggestion) = self.suggestion {
            out.push_str(&format!("\n    {}: {}", "Fix".green(), suggestion));
        }
        out
    }
}

/// Lint an agent configuration and return warnings.
pub fn lint_config(config: &AgentConfiguration) -> Vec<LintWarning> {
    let mut warnings = Vec::new();

    check_nothing_blocked(config, &mut warnings);
    check_auto_approve_disabled(config, &mut warnings);
    check_manual_with_auto_approve(config, &mut warnings);
    check_low_threshold(config, &mut warnings);

    warnings
}

/// With a HIGH threshold the high-risk override never fires.
fn check_nothing_blocked(config: &AgentConfiguration, warnings: &mut Vec<LintWarning>) {
    if config.auto_approve_status && config.risk_threshold == RiskLevel::High {
        warnings.push(LintWarning::warn_with_fix(
            "Risk threshold is HIGH with auto-approve on — high risk transactions will be signed, never blocked",
            "Set risk_threshold: medium",
        ));
    }
}

fn check_auto_approve_disabled(config: &AgentConfiguration, warnings: &mut Vec<LintWarning>) {
    if !config.auto_approve_status {
        warnings.push(LintWarning::info(
            "Auto-approve is disabled — every transaction inside the threshold is handed off for review",
        ));
    }
}

fn check_manual_with_auto_approve(config: &AgentConfiguration, warnings: &mut Vec<LintWarning>) {
    if config.auto_approve_status && config.signing_method == SigningMethod::Manual {
        warnings.push(LintWarning::info(format!(
            "Signing method is manual, but transactions up to {} risk are still auto-signed",
            config.risk_threshold
        )));
    }
}

fn check_low_threshold(config: &AgentConfiguration, warnings: &mut Vec<LintWarning>) {
    if config.auto_approve_status && config.risk_threshold == RiskLevel::Low {
        warnings.push(LintWarning::info(
            "Risk threshold is LOW — medium risk transactions will all wait for review",
        ));
    }
}
