use crate::core::codec;
use crate::core::errors::{Result, SignetError};
use crate::core::models::key_blob::{PublicKeyBlob, SignedPublicKeyBlob};
use crate::core::services::identity_service::validate_username;
use crate::core::traits::signature_scheme::SignatureScheme;
use crate::core::traits::trust_store::TrustStore;

/// One-hop local trust over public keys.
///
/// Importing a peer's exported key re-signs it with the *local*
/// identity's private key and stores that as the trust record:
/// "I vouch that this key blob belongs to this name." Loading a record
/// back checks that vouching signature with the local identity's own
/// public key before the embedded key is ever parsed. There is no
/// chaining and no revocation; a record is only as trustworthy as the
/// local identity that imported it.
pub struct TrustService<S: SignatureScheme, T: TrustStore> {
    pub scheme: S,
    pub store: T,
}

impl<S: SignatureScheme, T: TrustStore> TrustService<S, T> {
    pub fn new(scheme: S, store: T) -> Self {
        Self { scheme, store }
    }

    /// Produce the unsigned transfer artifact for this key pair.
    ///
    /// The owner name is asserted by the exporter; nobody has vouched
    /// for it yet.
    pub fn export(&self, owner: &str, private_key: &S::PrivateKey) -> Result<Vec<u8>> {
        let public = self.scheme.public_key(private_key);
        let blob = PublicKeyBlob {
            owner: owner.to_string(),
            key_blob: self.scheme.export_public_key(&public)?,
        };
        codec::encode_public_key_blob(&blob)
    }

    /// Accept a peer's exported key file and vouch for it locally.
    ///
    /// The payload is tried as an unsigned blob first; a record exported
    /// from someone else's trust store is also accepted, but its
    /// embedded signature is discarded — only the re-signature computed
    /// here counts from now on. Returns the owner name the record was
    /// stored under.
    pub fn import(&self, payload: &[u8], local_private_key: &S::PrivateKey) -> Result<String> {
        let (owner, key_blob) = match codec::decode_public_key_blob(payload) {
            Ok(blob) => (blob.owner, blob.key_blob),
            Err(_) => {
                let signed = codec::decode_signed_public_key_blob(payload)?;
                (signed.owner, signed.key_blob)
            }
        };

        // The owner name becomes a file name; hold it to the same rules
        // as local usernames before it touches the store.
        let owner = validate_username(&owner)?;

        let canonical = codec::encode_public_key_blob(&PublicKeyBlob {
            owner: owner.clone(),
            key_blob: key_blob.clone(),
        })?;
        let signature = self.scheme.sign(local_private_key, &canonical)?;

        let record = codec::encode_signed_public_key_blob(&SignedPublicKeyBlob {
            owner: owner.clone(),
            key_blob,
            signature,
        })?;
        self.store.save(&owner, &record)?;
        Ok(owner)
    }

    /// Load the trusted public key for `owner`.
    ///
    /// Check order is fixed: the vouching signature first, then the
    /// owner-name match, and only then key import — a forged or
    /// tampered record must never reach the key parser.
    pub fn verify_and_load(
        &self,
        owner: &str,
        verifier_public_key: &S::PublicKey,
    ) -> Result<S::PublicKey> {
        let owner = validate_username(owner)?;
        let record = self.store.load(&owner)?;
        let signed = codec::decode_signed_public_key_blob(&record)?;

        let canonical = codec::encode_public_key_blob(&PublicKeyBlob {
            owner: signed.owner.clone(),
            key_blob: signed.key_blob.clone(),
        })?;
        if !self
            .scheme
            .verify(verifier_public_key, &canonical, &signed.signature)
        {
            return Err(SignetError::UntrustedRecord { owner });
        }
        if signed.owner != owner {
            return Err(SignetError::OwnerMismatch {
                requested: owner,
                found: signed.owner,
            });
        }
        self.scheme.import_public_key(&signed.key_blob)
    }

    /// Owner names currently vouched for, sorted.
    pub fn list_trusted(&self) -> Result<Vec<String>> {
        self.store.list()
    }
}
