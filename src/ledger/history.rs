//! Transaction ledger — the most recent decisions, newest first.
//!
//! Capped at [`LEDGER_CAPACITY`] records. Appending past the cap drops the
//! oldest record.

use crate::engine::types::DecisionRecord;
use std::collections::VecDeque;

/// Number of records the ledger keeps.
pub const LEDGER_CAPACITY: usize = 10;

/// Bounded newest-first list of decision records.
#[derive(Debug, Clone, Default)]
pub struct TransactionLedger {
    records: VecDeque<DecisionRecord>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self {
            records: VecDeque::with_capacity(LEDGER_CAPACITY + 1),
        }
    }

    /// Insert a record at the front, evicting the oldest past capacity.
    pub fn append(&mut self, record: DecisionRecord) {
        tracing::debug!(id = %record.id, kind = %record.kind, "ledger append");
        self.records.push_front(record);
        self.records.truncate(LEDGER_CAPACITY);
    }

    /// Snapshot of the ledger, newest first.
    pub fn history(&self) -> Vec<DecisionRecord> {
        self.records.iter().cloned().collect()
    }

    /// Borrowing view, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &DecisionRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&DecisionRecord> {
        self.records.front()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
