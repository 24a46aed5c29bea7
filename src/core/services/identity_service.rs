use std::sync::LazyLock;

use regex::Regex;

use crate::core::errors::{Result, SignetError};
use crate::core::traits::identity_store::IdentityStore;
use crate::core::traits::signature_scheme::SignatureScheme;

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("username pattern compiles"));

pub const MAX_USERNAME_LENGTH: usize = 64;

/// Check a username and return its trimmed canonical form.
///
/// The name doubles as a storage directory and a trust-record file
/// name, so anything outside `[A-Za-z0-9._-]` is rejected. Every
/// operation that takes a username applies this first.
pub fn validate_username(username: &str) -> Result<String> {
    let cleaned = username.trim();
    if cleaned.is_empty() {
        return Err(SignetError::UsernameEmpty);
    }
    if cleaned.len() > MAX_USERNAME_LENGTH {
        return Err(SignetError::UsernameTooLong {
            length: cleaned.len(),
        });
    }
    if !USERNAME_PATTERN.is_match(cleaned) {
        return Err(SignetError::UsernameForbiddenChars {
            username: cleaned.to_string(),
        });
    }
    Ok(cleaned.to_string())
}

/// Maps a validated username to exactly one durable private key.
pub struct IdentityService<S: SignatureScheme, I: IdentityStore> {
    pub scheme: S,
    pub store: I,
}

impl<S: SignatureScheme, I: IdentityStore> IdentityService<S, I> {
    pub fn new(scheme: S, store: I) -> Self {
        Self { scheme, store }
    }

    /// Load the user's private key, generating and persisting a fresh
    /// one on first use.
    pub fn ensure(&self, username: &str) -> Result<S::PrivateKey> {
        let username = validate_username(username)?;
        if !self.store.exists(&username) {
            let key = self.scheme.generate_private_key();
            let exported = self.scheme.export_private_key(&key)?;
            self.store.write(&username, &exported)?;
            return Ok(key);
        }
        self.scheme.import_private_key(&self.store.read(&username)?)
    }

    /// Load an existing private key. Unlike `ensure`, a missing
    /// identity is a Storage-kind error, never a silent create.
    pub fn load(&self, username: &str) -> Result<S::PrivateKey> {
        let username = validate_username(username)?;
        self.scheme.import_private_key(&self.store.read(&username)?)
    }

    /// Whether a key pair already exists for this username.
    pub fn exists(&self, username: &str) -> Result<bool> {
        let username = validate_username(username)?;
        Ok(self.store.exists(&username))
    }

    /// Remove the user's key material as a unit.
    pub fn delete(&self, username: &str) -> Result<()> {
        let username = validate_username(username)?;
        self.store.delete(&username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::crypto::p256_backend::P256Backend;
    use crate::adapters::stores::file_identity_store::FileIdentityStore;
    use crate::core::errors::ErrorKind;

    fn temp_service() -> (tempfile::TempDir, IdentityService<P256Backend, FileIdentityStore>) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileIdentityStore::new(dir.path().join("keys"));
        (dir, IdentityService::new(P256Backend::new(), store))
    }

    #[test]
    fn accepts_simple_and_boundary_usernames() {
        for name in ["ab", "A.B-C_9", "x", &"a".repeat(64)] {
            assert_eq!(validate_username(name).unwrap(), name);
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_username("  alice \n").unwrap(), "alice");
    }

    #[test]
    fn rejects_bad_usernames_with_validation_kind() {
        for name in ["", "   ", &"a".repeat(65), "bob smith", "a/b", "ün"] {
            let err = validate_username(name).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation, "accepted {name:?}");
        }
    }

    #[test]
    fn ensure_creates_once_then_reloads_the_same_key() {
        let (_dir, service) = temp_service();

        let first = service.ensure("alice").unwrap();
        let second = service.ensure("alice").unwrap();

        let scheme = P256Backend::new();
        assert_eq!(scheme.public_key(&first), scheme.public_key(&second));
    }

    #[test]
    fn load_does_not_create() {
        let (_dir, service) = temp_service();
        let err = service.load("alice").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert!(!service.exists("alice").unwrap());
    }

    #[test]
    fn delete_removes_the_identity() {
        let (_dir, service) = temp_service();
        service.ensure("alice").unwrap();
        service.delete("alice").unwrap();

        assert!(!service.exists("alice").unwrap());
        assert_eq!(service.load("alice").unwrap_err().kind(), ErrorKind::Storage);
    }

    #[test]
    fn delete_missing_identity_fails() {
        let (_dir, service) = temp_service();
        assert_eq!(
            service.delete("ghost").unwrap_err().kind(),
            ErrorKind::Storage
        );
    }

    #[test]
    fn usernames_are_validated_before_any_storage_access() {
        let (_dir, service) = temp_service();
        assert_eq!(
            service.ensure("../escape").unwrap_err().kind(),
            ErrorKind::Validation
        );
    }
}
