use std::path::{Path, PathBuf};

use crate::core::errors::{Result, SignetError};
use crate::core::traits::trust_store::TrustStore;

/// File-based trust store: one `{owner}.spub` record per vouched-for
/// peer under `trust_dir`.
///
/// Records are whole-file writes; import overwrites any previous record
/// for the same owner and never patches one in place.
#[derive(Clone)]
pub struct FileTrustStore {
    trust_dir: PathBuf,
}

const RECORD_EXTENSION: &str = "spub";

impl FileTrustStore {
    /// Create a store rooted at the given directory.
    pub fn new(trust_dir: PathBuf) -> Self {
        Self { trust_dir }
    }

    pub fn trust_dir(&self) -> &Path {
        &self.trust_dir
    }

    fn record_path(&self, owner: &str) -> PathBuf {
        self.trust_dir.join(format!("{owner}.{RECORD_EXTENSION}"))
    }
}

impl TrustStore for FileTrustStore {
    fn load(&self, owner: &str) -> Result<Vec<u8>> {
        let path = self.record_path(owner);
        if !path.exists() {
            return Err(SignetError::TrustRecordNotFound {
                owner: owner.to_string(),
            });
        }
        Ok(std::fs::read(path)?)
    }

    fn save(&self, owner: &str, record: &[u8]) -> Result<()> {
        std::fs::create_dir_all(&self.trust_dir)?;
        std::fs::write(self.record_path(owner), record)?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.trust_dir.exists() {
            return Ok(Vec::new());
        }

        let mut owners = Vec::new();
        for entry in std::fs::read_dir(&self.trust_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                owners.push(stem.to_string());
            }
        }
        owners.sort();
        Ok(owners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorKind;

    fn temp_store() -> (tempfile::TempDir, FileTrustStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTrustStore::new(dir.path().join("trust"));
        (dir, store)
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, store) = temp_store();
        store.save("bob", b"record bytes").unwrap();
        assert_eq!(store.load("bob").unwrap(), b"record bytes");
    }

    #[test]
    fn load_missing_record_fails_with_storage_kind() {
        let (_dir, store) = temp_store();
        let err = store.load("ghost").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }

    #[test]
    fn save_overwrites_existing_record() {
        let (_dir, store) = temp_store();
        store.save("bob", b"old").unwrap();
        store.save("bob", b"new").unwrap();
        assert_eq!(store.load("bob").unwrap(), b"new");
    }

    #[test]
    fn list_returns_sorted_owners() {
        let (_dir, store) = temp_store();
        store.save("carol", b"c").unwrap();
        store.save("bob", b"b").unwrap();
        assert_eq!(store.list().unwrap(), vec!["bob", "carol"]);
    }

    #[test]
    fn list_skips_foreign_files() {
        let (_dir, store) = temp_store();
        store.save("bob", b"b").unwrap();
        std::fs::write(store.trust_dir().join("notes.txt"), b"x").unwrap();
        assert_eq!(store.list().unwrap(), vec!["bob"]);
    }

    #[test]
    fn list_on_missing_directory_is_empty() {
        let (_dir, store) = temp_store();
        assert!(store.list().unwrap().is_empty());
    }
}
