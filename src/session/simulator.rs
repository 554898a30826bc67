//! Simulation session — runs transactions through a decision provider and
//! records what happened.
//!
//! A session owns everything one user interacts with: the agent
//! configuration, the transaction ledger and the audit log. Only one
//! simulation can be outstanding at a time. A second call while one is
//! in flight is rejected, not queued.

use crate::agent::store::AgentConfigStore;
use crate::agent::types::{AgentConfiguration, RiskLevel, SigningMethod};
use crate::engine::provider::{DecisionProvider, RuleBasedProvider};
use crate::engine::types::{DecisionRecord, TransactionRequest};
use crate::error::EngineError;
use crate::ledger::audit::{AuditLog, AUDIT_CONTEXT_ENTRIES};
use crate::ledger::history::TransactionLedger;
use crate::ledger::report::{self, LedgerSummary};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Mutable session state. Only touched in short critical sections, never
/// across an await.
#[derive(Debug, Default)]
struct SessionState {
    store: AgentConfigStore,
    ledger: TransactionLedger,
    audit: AuditLog,
}

pub struct SimulationSession {
    /// Session identifier (UUID v4)
    session_id: String,
    provider: Arc<dyn DecisionProvider + Send + Sync>,
    /// Held for the whole duration of a simulation.
    in_flight: tokio::sync::Mutex<()>,
    state: Mutex<SessionState>,
}

impl SimulationSession {
    /// Create a session with the given starting configuration and provider.
    pub fn new(
        config: AgentConfiguration,
        provider: Arc<dyn DecisionProvider + Send + Sync>,
    ) -> Self {
        let session_id = uuid::Uuid::new_v4().to_string();
        tracing::info!(session = %session_id, config = %config.describe(), "session started");
        Self {
            session_id,
            provider,
            in_flight: tokio::sync::Mutex::new(()),
            state: Mutex::new(SessionState {
                store: AgentConfigStore::new(config),
                ..Default::default()
            }),
        }
    }

    /// Session using the built-in rule-based engine.
    pub fn with_rule_engine(config: AgentConfiguration) -> Self {
        Self::new(config, Arc::new(RuleBasedProvider::new()))
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run one transaction through the provider.
    ///
    /// Invalid requests and overlapping calls leave the session untouched.
    /// A provider failure is written to the audit log but never reaches the
    /// ledger.
    pub async fn simulate(&self, request: TransactionRequest) -> Result<DecisionRecord, EngineError> {
        request.validate()?;

        let _guard = self
            .in_flight
            .try_lock()
            .map_err(|_| EngineError::SimulationInFlight)?;

        let (config, context) = {
            let mut state = self.state();
            // The agent's status mirrors the toggle the request was made with.
            if state.store.auto_approve() != request.auto_approve {
                state.store.set_auto_approve(request.auto_approve);
            }
            // Context is taken before this simulation's own entry is added.
            let context = state.audit.recent_summary(AUDIT_CONTEXT_ENTRIES);
            state.audit.append(format!(
                "Simulating transaction to {} for {} ETH with {} risk...",
                request.to_address,
                request.amount.normalize(),
                request.risk_level
            ));
            (state.store.snapshot(), context)
        };

        match self.provider.decide(&request, &config, &context).await {
            Ok(outcome) => {
                let record = DecisionRecord::stamp(&request, outcome);
                tracing::info!(
                    session = %self.session_id,
                    id = %record.id,
                    decision = %record.decision,
                    kind = %record.kind,
                    "transaction decided"
                );

                let mut state = self.state();
                state
                    .audit
                    .append(format!("{}: {}", record.decision, record.feedback));
                state.ledger.append(record.clone());
                Ok(record)
            }
            Err(err) => {
                let err = match err {
                    EngineError::EngineUnavailable(_) => err,
                    other => EngineError::unavailable(other.to_string()),
                };
                tracing::warn!(session = %self.session_id, error = %err, "simulation failed");
                self.state()
                    .audit
                    .append(format!("Simulation failed: {}", err));
                Err(err)
            }
        }
    }

    /// Toggle auto-approve. The agent's status mirrors the toggle.
    pub fn set_auto_approve(&self, enabled: bool) {
        let mut state = self.state();
        state.store.set_auto_approve(enabled);
        state.audit.append(format!(
            "Auto-approve {}",
            if enabled { "enabled" } else { "disabled" }
        ));
    }

    pub fn set_risk_threshold(&self, level: RiskLevel) {
        let mut state = self.state();
        state.store.set_risk_threshold(level);
        state
            .audit
            .append(format!("Risk threshold set to {}", level));
    }

    pub fn set_signing_method(&self, method: SigningMethod) {
        let mut state = self.state();
        state.store.set_signing_method(method);
        state
            .audit
            .append(format!("Signing method set to {}", method));
    }

    pub fn config(&self) -> AgentConfiguration {
        self.state().store.snapshot()
    }

    /// Ledger snapshot, newest first.
    pub fn history(&self) -> Vec<DecisionRecord> {
        self.state().ledger.history()
    }

    pub fn audit_entries(&self) -> Vec<String> {
        self.state().audit.entries().to_vec()
    }

    /// The last `n` audit entries joined with `"; "`.
    pub fn recent_audit_summary(&self, n: usize) -> String {
        self.state().audit.recent_summary(n)
    }

    pub fn summary(&self) -> LedgerSummary {
        report::summarize(self.state().ledger.iter())
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}
