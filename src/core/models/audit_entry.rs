use serde::{Deserialize, Serialize};

/// Actions that get recorded in the audit log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    IdentityCreate,
    IdentityDelete,
    Sign,
    Verify,
    KeyExport,
    KeyImport,
}

/// A single entry in the audit log (JSON lines format).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// The local username the action ran under.
    pub user: String,
    pub action: AuditAction,
    /// Affected file or record name, if any.
    pub subject: Option<String>,
    pub detail: Option<String>,
}

impl AuditEntry {
    /// Build an entry stamped with the current time.
    pub fn now(user: &str, action: AuditAction) -> Self {
        Self {
            timestamp: chrono::Utc::now(),
            user: user.to_string(),
            action,
            subject: None,
            detail: None,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
