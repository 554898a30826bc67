//! Append-only audit log of human-readable events.
//!
//! The log grows without bound. Only the tail is fed back to the decision
//! provider as context.

/// Number of trailing entries passed to the provider as context.
pub const AUDIT_CONTEXT_ENTRIES: usize = 5;

/// Separator between entries in a context summary.
pub const SUMMARY_DELIMITER: &str = "; ";

#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    entries: Vec<String>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::trace!(entry = %text, "audit");
        self.entries.push(text);
    }

    /// The last `n` entries, oldest first, joined with `"; "`.
    pub fn recent_summary(&self, n: usize) -> String {
        self.recent(n).join(SUMMARY_DELIMITER)
    }

    /// The last `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        assert_eq!(AuditLog::new().recent_summary(AUDIT_CONTEXT_ENTRIES), "");
    }

    #[test]
    fn test_summary_joins_in_order() {
        let mut log = AuditLog::new();
        log.append("a");
        log.append("b");
        assert_eq!(log.recent_summary(5), "a; b");
    }

    #[test]
    fn test_summary_bounded() {
        let mut log = AuditLog::new();
        for i in 0..100 {
            log.append(format!("event {}", i));
        }
        let summary = log.recent_summary(AUDIT_CONTEXT_ENTRIES);
        assert_eq!(summary.split(SUMMARY_DELIMITER).count(), 5);
        assert!(summary.starts_with("event 95"));
        assert!(summary.ends_with("event 99"));
        assert_eq!(log.len(), 100);
    }

    #[test]
    fn test_zero_entries_requested() {
        let mut log = AuditLog::new();
        log.append("a");
        assert_eq!(log.recent_summary(0), "");
        assert!(log.recent(0).is_empty());
    }
}
