//! Error kinds surfaced by the decision core.
//!
//! None of these are fatal: each one is reported to the user and the
//! session carries on.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Missing or malformed input. Nothing is recorded.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The decision provider could not produce a decision.
    #[error("decision engine unavailable: {0}")]
    EngineUnavailable(String),

    /// Another simulation is still outstanding on this session.
    #[error("a simulation is already in progress")]
    SimulationInFlight,
}

impl EngineError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        EngineError::InvalidRequest(reason.into())
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        EngineError::EngineUnavailable(reason.into())
    }

    /// Short headline for terminal output.
    pub fn headline(&self) -> &'static str {
        match self {
            EngineError::InvalidRequest(_) => "Please fill in a destination address and a positive amount.",
            EngineError::EngineUnavailable(_) => "Failed to get a decision from the agent.",
            EngineError::SimulationInFlight => "Wait for the current simulation to finish.",
        }
    }
}
