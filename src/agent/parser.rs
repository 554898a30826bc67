//! YAML parser for agent configuration files.
//!
//! Every field except the agent name is optional and falls back to the
//! default configuration.
//!
//! # Example config file:
//! ```yaml
//! agent: balanced
//! auto_approve: true
//! risk_threshold: medium
//! signing_method: delegated
//! ```

use crate::agent::types::*;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

/// A named agent configuration as loaded from disk.
#[derive(Debug, Clone)]
pub struct AgentProfile {
    /// Profile name (e.g., "balanced")
    pub agent: String,
    pub description: Option<String>,
    pub config: AgentConfiguration,
}

/// Raw YAML representation. Enum fields stay as strings so aliases and
/// mixed case are accepted.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProfile {
    agent: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    auto_approve: Option<bool>,
    #[serde(default)]
    risk_threshold: Option<String>,
    #[serde(default)]
    signing_method: Option<String>,
}

/// Parse an agent config file from a path.
pub fn parse_profile_file(path: impl AsRef<Path>) -> Result<AgentProfile> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_profile_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse an agent config YAML string.
pub fn parse_profile_str(yaml: &str) -> Result<AgentProfile> {
    let raw: RawProfile =
        serde_yaml::from_str(yaml).context("Invalid YAML syntax in config file")?;

    if raw.agent.trim().is_empty() {
        bail!("Config must have a non-empty 'agent' name");
    }

    let defaults = AgentConfiguration::default();

    let risk_threshold = match raw.risk_threshold {
        Some(s) => RiskLevel::from_str_loose(&s).with_context(|| {
            format!("Unknown risk_threshold '{}'. Valid values: low, medium, high", s)
        })?,
        None => defaults.risk_threshold,
    };

    let signing_method = match raw.signing_method {
        Some(s) => SigningMethod::from_str_loose(&s).with_context(|| {
            format!("Unknown signing_method '{}'. Valid values: delegated, manual", s)
        })?,
        None => defaults.signing_method,
    };

    Ok(AgentProfile {
        agent: raw.agent,
        description: raw.description,
        config: AgentConfiguration {
            auto_approve_status: raw.auto_approve.unwrap_or(defaults.auto_approve_status),
            risk_threshold,
            signing_method,
        },
    })
}
