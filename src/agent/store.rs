//! Session-scoped holder for the current agent configuration.

use crate::agent::types::{AgentConfiguration, RiskLevel, SigningMethod};

/// Mutable agent configuration for one session. Nothing here is persisted.
#[derive(Debug, Clone, Default)]
pub struct AgentConfigStore {
    config: AgentConfiguration,
}

impl AgentConfigStore {
    pub fn new(config: AgentConfiguration) -> Self {
        Self { config }
    }

    /// Flip the auto-approve toggle. The agent's status follows it.
    pub fn set_auto_approve(&mut self, enabled: bool) {
        tracing::debug!(enabled, "auto-approve toggled");
        self.config.auto_approve_status = enabled;
    }

    pub fn set_risk_threshold(&mut self, level: RiskLevel) {
        tracing::debug!(%level, "risk threshold changed");
        self.config.risk_threshold = level;
    }

    pub fn set_signing_method(&mut self, method: SigningMethod) {
        tracing::debug!(%method, "signing method changed");
        self.config.signing_method = method;
    }

    pub fn auto_approve(&self) -> bool {
        self.config.auto_approve_status
    }

    /// Copy of the configuration as it stands right now.
    pub fn snapshot(&self) -> AgentConfiguration {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_update_snapshot() {
        let mut store = AgentConfigStore::default();
        store.set_auto_approve(false);
        store.set_risk_threshold(RiskLevel::High);
        store.set_signing_method(SigningMethod::Manual);

        let config = store.snapshot();
        assert!(!config.auto_approve_status);
        assert!(!store.auto_approve());
        assert_eq!(config.risk_threshold, RiskLevel::High);
        assert_eq!(config.signing_method, SigningMethod::Manual);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = AgentConfigStore::default();
        let before = store.snapshot();
        store.set_risk_threshold(RiskLevel::Low);
        assert_eq!(before.risk_threshold, RiskLevel::Medium);
        assert_eq!(store.snapshot().risk_threshold, RiskLevel::Low);
    }
}
