pub mod identity;
pub mod log;
pub mod sign;
pub mod trust;
pub mod verify;

use std::path::PathBuf;

use crate::adapters::audit::json_audit_logger::JsonAuditLogger;
use crate::adapters::crypto::p256_backend::P256Backend;
use crate::adapters::stores::file_identity_store::FileIdentityStore;
use crate::adapters::stores::file_trust_store::FileTrustStore;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::audit_entry::AuditEntry;
use crate::core::services::document_service::DocumentService;
use crate::core::services::identity_service::IdentityService;
use crate::core::services::trust_service::TrustService;
use crate::core::traits::audit::AuditLogger;

/// Everything a command needs, wired from the signet home directory.
pub(crate) struct Context {
    pub signet_dir: PathBuf,
    pub config: AppConfig,
    pub identities: IdentityService<P256Backend, FileIdentityStore>,
    pub trust: TrustService<P256Backend, FileTrustStore>,
    pub documents: DocumentService<P256Backend>,
}

impl Context {
    pub fn open() -> Result<Self> {
        let signet_dir = crate::cli::context::signet_dir().to_path_buf();
        let config = AppConfig::load(&signet_dir)?;
        let scheme = P256Backend::new();
        Ok(Self {
            identities: IdentityService::new(
                scheme,
                FileIdentityStore::new(config.keys_dir(&signet_dir)),
            ),
            trust: TrustService::new(scheme, FileTrustStore::new(config.trust_dir(&signet_dir))),
            documents: DocumentService::new(scheme),
            signet_dir,
            config,
        })
    }

    /// Append to the audit log unless config disables it.
    ///
    /// The log is a convenience record, not part of the operation: by
    /// the time an entry is written the real artifact already exists,
    /// so a failed append warns and never fails the command.
    pub fn record(&self, entry: AuditEntry) {
        let audit_section = self.config.audit.as_ref();
        if !JsonAuditLogger::is_enabled(audit_section) {
            return;
        }
        if let Err(e) =
            JsonAuditLogger::from_config(&self.signet_dir, audit_section).log_event(&entry)
        {
            crate::cli::output::warning(&format!("Audit log not updated: {e}"));
        }
    }
}
