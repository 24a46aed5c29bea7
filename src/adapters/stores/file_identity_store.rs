use std::path::{Path, PathBuf};

use crate::core::errors::{Result, SignetError};
use crate::core::traits::identity_store::IdentityStore;

/// File-based identity store: one directory per username under
/// `keys_dir`, holding the exported private key.
///
/// ```text
/// keys/
///   alice/private.pem
///   bob/private.pem
/// ```
///
/// Deleting an identity removes its whole directory; nothing in this
/// layout is shared between users.
#[derive(Clone)]
pub struct FileIdentityStore {
    keys_dir: PathBuf,
}

impl FileIdentityStore {
    /// Create a store rooted at the given directory.
    pub fn new(keys_dir: PathBuf) -> Self {
        Self { keys_dir }
    }

    pub fn keys_dir(&self) -> &Path {
        &self.keys_dir
    }

    fn private_key_path(&self, username: &str) -> PathBuf {
        self.keys_dir.join(username).join("private.pem")
    }
}

impl IdentityStore for FileIdentityStore {
    fn exists(&self, username: &str) -> bool {
        self.private_key_path(username).exists()
    }

    fn read(&self, username: &str) -> Result<Vec<u8>> {
        let path = self.private_key_path(username);
        if !path.exists() {
            return Err(SignetError::IdentityNotFound {
                username: username.to_string(),
            });
        }
        Ok(std::fs::read(path)?)
    }

    fn write(&self, username: &str, payload: &[u8]) -> Result<()> {
        let path = self.private_key_path(username);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, payload)?;
        Ok(())
    }

    fn delete(&self, username: &str) -> Result<()> {
        let dir = self.keys_dir.join(username);
        if !dir.exists() {
            return Err(SignetError::IdentityNotFound {
                username: username.to_string(),
            });
        }
        std::fs::remove_dir_all(dir)?;
        Ok(())
    }
}
