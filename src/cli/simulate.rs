//! `elizasign simulate` — ask the agent for a decision on one transaction.

use crate::agent::types::RiskLevel;
use crate::cli::options::SessionOptions;
use crate::cli::render;
use crate::engine::types::{DecisionOutcome, TransactionRequest};
use anyhow::Result;

/// Options for the `elizasign simulate` command.
#[derive(Debug, Clone)]
pub struct SimulateOptions {
    pub to_address: String,
    /// Amount as typed by the user
    pub amount: String,
    pub risk_level: RiskLevel,
    pub session: SessionOptions,
    /// Print the decision object as JSON instead of the terminal view
    pub json: bool,
}

/// Run the `elizasign simulate` command.
pub async fn run_simulate(options: SimulateOptions) -> Result<()> {
    let (session, _resolved) = options.session.open_session()?;

    // The request's toggle mirrors the agent's auto-approve status.
    let request = TransactionRequest::from_input(
        &options.to_address,
        &options.amount,
        options.risk_level,
        session.config().auto_approve_status,
    )?;

    match session.simulate(request).await {
        Ok(record) => {
            if options.json {
                render::print_decision_json(&record.outcome())?;
            } else {
                render::print_decision(&record.outcome());
            }
            Ok(())
        }
        Err(err) => {
            if options.json {
                render::print_decision_json(&DecisionOutcome::unavailable())?;
            } else {
                render::print_engine_error(&err);
            }
            Err(err.into())
        }
    }
}
