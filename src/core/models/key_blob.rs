/// A freshly exported public key: the owner's claimed name plus the
/// DER encoding of the key itself.
///
/// This is the *unsigned* transfer form. Nobody has vouched for it yet;
/// it exists only as an export/import artifact and is never the durable
/// storage form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyBlob {
    pub owner: String,
    pub key_blob: Vec<u8>,
}

/// The durable trust-store record: an owner name and DER public key,
/// signed by the *local* identity that imported it.
///
/// The signature covers the exact byte encoding of the corresponding
/// `PublicKeyBlob`, and the signer is always the importer, never the
/// original key owner. Trust is locally asserted, not chained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPublicKeyBlob {
    pub owner: String,
    pub key_blob: Vec<u8>,
    pub signature: Vec<u8>,
}

impl std::fmt::Display for PublicKeyBlob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "public key of '{}' ({} bytes)", self.owner, self.key_blob.len())
    }
}

impl std::fmt::Display for SignedPublicKeyBlob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "vouched public key of '{}' ({} bytes, {}-byte signature)",
            self.owner,
            self.key_blob.len(),
            self.signature.len()
        )
    }
}
