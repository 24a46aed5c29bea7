use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, SignetError};

/// Top-level Signet configuration read from `{home}/config.toml`.
///
/// The file is optional; a missing file means defaults. Everything in
/// it is a tweak, never a requirement, so there is no `init` step.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageSection,
    pub audit: Option<AuditSection>,
}

impl AppConfig {
    /// Load the configuration from `{home}/config.toml`, if present.
    pub fn load(signet_dir: &Path) -> Result<Self> {
        let config_path = signet_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content).map_err(|e| SignetError::InvalidConfig {
            detail: format!("Failed to parse config.toml: {e}"),
        })?;
        Ok(config)
    }

    /// Directory holding per-user private keys.
    pub fn keys_dir(&self, signet_dir: &Path) -> PathBuf {
        resolve_dir(signet_dir, self.storage.keys_dir.as_deref(), "keys")
    }

    /// Directory holding vouched-for trust records.
    pub fn trust_dir(&self, signet_dir: &Path) -> PathBuf {
        resolve_dir(signet_dir, self.storage.trust_dir.as_deref(), "trust")
    }
}

/// Resolve an optional override against the signet home directory.
/// Relative overrides stay inside the home; absolute ones are taken as is.
fn resolve_dir(signet_dir: &Path, configured: Option<&str>, default: &str) -> PathBuf {
    match configured {
        Some(dir) => {
            let path = PathBuf::from(dir);
            if path.is_absolute() {
                path
            } else {
                signet_dir.join(path)
            }
        }
        None => signet_dir.join(default),
    }
}

/// The `[storage]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageSection {
    pub keys_dir: Option<String>,
    pub trust_dir: Option<String>,
}

/// The `[audit]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditSection {
    pub enabled: bool,
    pub log_file: String,
}
