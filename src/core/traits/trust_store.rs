use crate::core::errors::Result;

/// Port for durable trust records, one signed public-key blob per owner.
///
/// Records are opaque encoded bytes at this level; decoding and
/// signature checks belong to `TrustService`.
pub trait TrustStore {
    /// Read the stored record. Storage-kind error if absent.
    fn load(&self, owner: &str) -> Result<Vec<u8>>;

    /// Create or overwrite the record for this owner.
    fn save(&self, owner: &str, record: &[u8]) -> Result<()>;

    /// Owner names with a stored record, sorted.
    fn list(&self) -> Result<Vec<String>>;
}
