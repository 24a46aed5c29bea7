use crate::core::errors::Result;

/// Port for durable private-key storage, one key pair per username.
///
/// The store moves raw exported key bytes; it never interprets them.
/// Usernames reaching this trait are already validated.
pub trait IdentityStore {
    /// Whether a key pair exists for this username.
    fn exists(&self, username: &str) -> bool;

    /// Read the exported private key. Storage-kind error if absent.
    fn read(&self, username: &str) -> Result<Vec<u8>>;

    /// Persist an exported private key, creating the identity.
    fn write(&self, username: &str, payload: &[u8]) -> Result<()>;

    /// Remove the identity as a unit. Storage-kind error if absent.
    fn delete(&self, username: &str) -> Result<()>;
}
