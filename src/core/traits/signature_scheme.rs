use crate::core::errors::Result;

/// Port for the one fixed signature scheme.
///
/// The implementation lives in `adapters::crypto` (P256Backend). The
/// core layer only depends on this trait, never on a concrete curve
/// library. Key material is opaque: a private-key handle can sign and
/// export, a public-key handle can verify and export, and nothing else
/// in the crate can mix the two up.
pub trait SignatureScheme {
    type PrivateKey;
    type PublicKey;

    /// Generate a fresh key pair from a cryptographically secure source.
    fn generate_private_key(&self) -> Self::PrivateKey;

    /// Portable encoding of a private key, suitable for storage.
    fn export_private_key(&self, key: &Self::PrivateKey) -> Result<Vec<u8>>;

    /// Inverse of `export_private_key`; Crypto-kind error on bad input.
    fn import_private_key(&self, payload: &[u8]) -> Result<Self::PrivateKey>;

    /// The public half of a private key.
    fn public_key(&self, key: &Self::PrivateKey) -> Self::PublicKey;

    /// Public-key-only encoding usable for transfer.
    fn export_public_key(&self, key: &Self::PublicKey) -> Result<Vec<u8>>;

    /// Inverse of `export_public_key`; Crypto-kind error on bad input.
    fn import_public_key(&self, payload: &[u8]) -> Result<Self::PublicKey>;

    /// Sign a digest of `payload` with the private key.
    fn sign(&self, key: &Self::PrivateKey, payload: &[u8]) -> Result<Vec<u8>>;

    /// Check a signature. Invalid and malformed signatures are both
    /// simply `false` — signature validity is a business answer, not an
    /// error, unlike the import operations above.
    fn verify(&self, key: &Self::PublicKey, payload: &[u8], signature: &[u8]) -> bool;

    /// Human-readable name of this scheme (e.g. "ecdsa-p256").
    fn name(&self) -> &str;
}
