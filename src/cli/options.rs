//! Settings shared by every command that opens a session.
//!
//! The agent configuration comes from the config file (if one is found)
//! and CLI flags override individual fields.

use crate::agent::parser::{self, AgentProfile};
use crate::agent::types::{AgentConfiguration, RiskLevel, SigningMethod};
use crate::engine::provider::{DecisionProvider, RuleBasedProvider, UnavailableProvider};
use crate::session::SimulationSession;
use crate::utils::paths;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

/// Options for opening a session.
#[derive(Debug, Default, Clone)]
pub struct SessionOptions {
    /// Explicit config file (default: discovered)
    pub config_path: Option<PathBuf>,
    /// Override the config file's auto-approve setting
    pub auto_approve: Option<bool>,
    pub risk_threshold: Option<RiskLevel>,
    pub signing_method: Option<SigningMethod>,
    /// Use a provider that always fails (exercises the unavailable path)
    pub offline: bool,
}

/// Loaded profile plus where it came from.
pub struct ResolvedProfile {
    pub profile: AgentProfile,
    pub source: Option<PathBuf>,
}

impl SessionOptions {
    /// Load the config file (or defaults) and apply flag overrides.
    pub fn resolve(&self) -> Result<ResolvedProfile> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let source = paths::resolve_config(self.config_path.as_deref(), &cwd)?;

        let mut profile = match source {
            Some(ref path) => parser::parse_profile_file(path)?,
            None => AgentProfile {
                agent: "default".to_string(),
                description: None,
                config: AgentConfiguration::default(),
            },
        };

        if let Some(auto) = self.auto_approve {
            profile.config.auto_approve_status = auto;
        }
        if let Some(level) = self.risk_threshold {
            profile.config.risk_threshold = level;
        }
        if let Some(method) = self.signing_method {
            profile.config.signing_method = method;
        }

        tracing::debug!(
            agent = %profile.agent,
            source = ?source,
            config = %profile.config.describe(),
            "resolved agent profile"
        );

        Ok(ResolvedProfile { profile, source })
    }

    /// Resolve the profile and open a session on it.
    pub fn open_session(&self) -> Result<(SimulationSession, ResolvedProfile)> {
        let resolved = self.resolve()?;
        let provider: Arc<dyn DecisionProvider + Send + Sync> = if self.offline {
            Arc::new(UnavailableProvider::new("agent is offline"))
        } else {
            Arc::new(RuleBasedProvider::new())
        };
        let session = SimulationSession::new(resolved.profile.config, provider);
        Ok((session, resolved))
    }
}

/// Parse a risk level flag value (for clap).
pub fn parse_risk(s: &str) -> Result<RiskLevel, String> {
    RiskLevel::from_str_loose(s)
        .ok_or_else(|| format!("unknown risk level '{}' (expected low, medium or high)", s))
}

/// Parse a signing method flag value (for clap).
pub fn parse_signing(s: &str) -> Result<SigningMethod, String> {
    SigningMethod::from_str_loose(s)
        .ok_or_else(|| format!("unknown signing method '{}' (expected delegated or manual)", s))
}
