use chrono::{DateTime, Utc};

use crate::core::errors::Result;
use crate::core::models::audit_entry::AuditEntry;

/// Port for the append-only operation log.
pub trait AuditLogger {
    /// Record one entry.
    fn log_event(&self, entry: &AuditEntry) -> Result<()>;

    /// Read back entries, optionally filtered by user and start time.
    fn query(&self, user: Option<&str>, since: Option<DateTime<Utc>>) -> Result<Vec<AuditEntry>>;
}
