pub mod audit;
pub mod history;
pub mod report;

pub use audit::{AuditLog, AUDIT_CONTEXT_ENTRIES};
pub use history::{TransactionLedger, LEDGER_CAPACITY};
pub use report::LedgerSummary;
