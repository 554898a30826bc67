//! The seam between a session and whatever produces decisions.
//!
//! The built-in provider is the rule-based [`DecisionEngine`]. A remote
//! agent can be dropped in by implementing [`DecisionProvider`]; the session
//! only looks at the `type` of what comes back.

use crate::agent::types::AgentConfiguration;
use crate::engine::decide::DecisionEngine;
use crate::engine::types::{DecisionOutcome, TransactionRequest};
use crate::error::EngineError;
use async_trait::async_trait;

/// Anything that can turn a transaction into a decision.
#[async_trait]
pub trait DecisionProvider {
    async fn decide(
        &self,
        request: &TransactionRequest,
        config: &AgentConfiguration,
        recent_audit_summary: &str,
    ) -> Result<DecisionOutcome, EngineError>;
}

/// Provider backed by the local rule-based engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedProvider {
    engine: DecisionEngine,
}

impl RuleBasedProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DecisionProvider for RuleBasedProvider {
    async fn decide(
        &self,
        request: &TransactionRequest,
        config: &AgentConfiguration,
        recent_audit_summary: &str,
    ) -> Result<DecisionOutcome, EngineError> {
        self.engine.evaluate(request, config, recent_audit_summary)
    }
}

/// Provider that never answers. Stands in for an unreachable agent
/// (`--offline` on the CLI, and tests).
#[derive(Debug, Clone, Default)]
pub struct UnavailableProvider {
    reason: String,
}

impl UnavailableProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl DecisionProvider for UnavailableProvider {
    async fn decide(
        &self,
        _request: &TransactionRequest,
        _config: &AgentConfiguration,
        _recent_audit_summary: &str,
    ) -> Result<DecisionOutcome, EngineError> {
        Err(EngineError::unavailable(self.reason.clone()))
    }
}
