pub mod decide;
pub mod provider;
pub mod services;
pub mod types;

pub use decide::DecisionEngine;
pub use provider::{DecisionProvider, RuleBasedProvider, UnavailableProvider};
pub use types::*;
