use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::core::errors::{Result, SignetError};
use crate::core::models::audit_entry::AuditEntry;
use crate::core::traits::audit::AuditLogger;

/// Audit logger that appends entries as JSON lines to a file.
///
/// Each line in the log file is a self-contained JSON object
/// representing one `AuditEntry`. The format supports efficient append
/// operations and line-by-line streaming reads.
pub struct JsonAuditLogger {
    log_path: PathBuf,
}

impl JsonAuditLogger {
    /// Create a logger that writes to `{signet_dir}/{log_file}`.
    pub fn new(signet_dir: &Path, log_file: &str) -> Self {
        Self {
            log_path: signet_dir.join(log_file),
        }
    }

    /// Create a logger from an `AppConfig`, falling back to defaults
    /// if the `[audit]` section is missing.
    pub fn from_config(
        signet_dir: &Path,
        audit_section: Option<&crate::config::app_config::AuditSection>,
    ) -> Self {
        let log_file = audit_section
            .map(|a| a.log_file.as_str())
            .unwrap_or("audit.log");
        Self::new(signet_dir, log_file)
    }

    /// Check whether auditing is enabled in the configuration.
    /// Returns `true` when the section is absent (enabled by default).
    pub fn is_enabled(audit_section: Option<&crate::config::app_config::AuditSection>) -> bool {
        audit_section.map(|a| a.enabled).unwrap_or(true)
    }
}

impl AuditLogger for JsonAuditLogger {
    fn log_event(&self, entry: &AuditEntry) -> Result<()> {
        let line = serde_json::to_string(entry).map_err(|e| SignetError::AuditError {
            detail: format!("Failed to serialize audit entry: {e}"),
        })?;

        if let Some(parent) = self.log_path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| SignetError::AuditError {
                detail: format!("Cannot open audit log at {}: {e}", self.log_path.display()),
            })?;

        writeln!(file, "{line}").map_err(|e| SignetError::AuditError {
            detail: format!("Failed to write audit entry: {e}"),
        })?;

        Ok(())
    }

    fn query(&self, user: Option<&str>, since: Option<DateTime<Utc>>) -> Result<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = fs::File::open(&self.log_path).map_err(|e| SignetError::AuditError {
            detail: format!("Cannot read audit log: {e}"),
        })?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| SignetError::AuditError {
                detail: format!("Error reading audit log line {}: {e}", line_num + 1),
            })?;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let entry: AuditEntry =
                serde_json::from_str(trimmed).map_err(|e| SignetError::AuditError {
                    detail: format!("Malformed audit entry at line {}: {e}", line_num + 1),
                })?;

            if let Some(user) = user
                && entry.user != user
            {
                continue;
            }
            if let Some(since) = since
                && entry.timestamp < since
            {
                continue;
            }

            entries.push(entry);
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::audit_entry::AuditAction;

    fn temp_logger() -> (tempfile::TempDir, JsonAuditLogger) {
        let dir = tempfile::tempdir().unwrap();
        let logger = JsonAuditLogger::new(dir.path(), "audit.log");
        (dir, logger)
    }

    #[test]
    fn log_then_query_round_trips() {
        let (_dir, logger) = temp_logger();
        let entry = AuditEntry::now("alice", AuditAction::Sign).with_subject("letter.sdoc");
        logger.log_event(&entry).unwrap();

        let read = logger.query(None, None).unwrap();
        assert_eq!(read, vec![entry]);
    }

    #[test]
    fn query_filters_by_user() {
        let (_dir, logger) = temp_logger();
        logger
            .log_event(&AuditEntry::now("alice", AuditAction::Sign))
            .unwrap();
        logger
            .log_event(&AuditEntry::now("bob", AuditAction::KeyImport))
            .unwrap();

        let read = logger.query(Some("bob"), None).unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].user, "bob");
    }

    #[test]
    fn query_missing_log_is_empty() {
        let (_dir, logger) = temp_logger();
        assert!(logger.query(None, None).unwrap().is_empty());
    }
}
