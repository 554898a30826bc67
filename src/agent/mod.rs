pub mod defaults;
pub mod linter;
pub mod parser;
pub mod store;
pub mod types;

pub use store::AgentConfigStore;
pub use types::*;
