//! Binary encoding for the three signet artifacts.
//!
//! All multi-byte integers are big-endian. A length-prefixed field is a
//! 4-byte unsigned length followed by exactly that many raw bytes. The
//! codec knows nothing about cryptographic validity; it guarantees
//! structural well-formedness and lossless round-trips, and every
//! malformed input fails with a Format-kind error instead of reading
//! out of range.

use crate::core::errors::{Result, SignetError};
use crate::core::models::key_blob::{PublicKeyBlob, SignedPublicKeyBlob};
use crate::core::models::signed_document::SignedDocument;

const LEN_PREFIX: usize = 4;

/// Append one length-prefixed field.
fn pack_part(out: &mut Vec<u8>, data: &[u8], field: &'static str) -> Result<()> {
    let len = u32::try_from(data.len()).map_err(|_| SignetError::OversizedField { field })?;
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(data);
    Ok(())
}

/// Read one length-prefixed field, advancing `offset` past it.
fn read_part<'a>(buffer: &'a [u8], offset: &mut usize) -> Result<&'a [u8]> {
    let prefix_end = offset
        .checked_add(LEN_PREFIX)
        .ok_or(SignetError::TruncatedArtifact)?;
    if prefix_end > buffer.len() {
        return Err(SignetError::TruncatedArtifact);
    }
    let mut len_bytes = [0u8; LEN_PREFIX];
    len_bytes.copy_from_slice(&buffer[*offset..prefix_end]);
    let size = u32::from_be_bytes(len_bytes) as usize;

    let end = prefix_end
        .checked_add(size)
        .ok_or(SignetError::TruncatedArtifact)?;
    if end > buffer.len() {
        return Err(SignetError::TruncatedArtifact);
    }
    *offset = end;
    Ok(&buffer[prefix_end..end])
}

fn decode_utf8(raw: &[u8], field: &'static str) -> Result<String> {
    std::str::from_utf8(raw)
        .map(str::to_owned)
        .map_err(|_| SignetError::InvalidEncoding { field })
}

/// Encode a signed document: `field(author) ++ field(signature) ++ text`.
///
/// The text is deliberately *not* length-prefixed; it is everything that
/// remains after the two fields, so appending to a document file always
/// changes the text, never slips past the signature.
pub fn encode_signed_document(document: &SignedDocument) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(
        2 * LEN_PREFIX + document.author.len() + document.signature.len() + document.text.len(),
    );
    pack_part(&mut out, document.author.as_bytes(), "author")?;
    pack_part(&mut out, &document.signature, "signature")?;
    out.extend_from_slice(document.text.as_bytes());
    Ok(out)
}

/// Decode a signed document. Purely structural, no signature check.
pub fn decode_signed_document(payload: &[u8]) -> Result<SignedDocument> {
    let mut offset = 0;
    let author_raw = read_part(payload, &mut offset)?;
    let signature = read_part(payload, &mut offset)?.to_vec();
    let author = decode_utf8(author_raw, "author")?;
    let text = decode_utf8(&payload[offset..], "text")?;
    Ok(SignedDocument { author, signature, text })
}

/// Encode an unsigned public-key blob: `field(owner) ++ field(key_blob)`.
///
/// This encoding is also the exact payload a trust-store signature
/// covers, so it must stay byte-for-byte canonical.
pub fn encode_public_key_blob(blob: &PublicKeyBlob) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(2 * LEN_PREFIX + blob.owner.len() + blob.key_blob.len());
    pack_part(&mut out, blob.owner.as_bytes(), "owner")?;
    pack_part(&mut out, &blob.key_blob, "key blob")?;
    Ok(out)
}

/// Decode an unsigned public-key blob.
///
/// Trailing bytes after the two fields are rejected: an exported key
/// file has no remainder, so extra data signals corruption or a
/// misclassified artifact.
pub fn decode_public_key_blob(payload: &[u8]) -> Result<PublicKeyBlob> {
    let mut offset = 0;
    let owner_raw = read_part(payload, &mut offset)?;
    let key_blob = read_part(payload, &mut offset)?.to_vec();
    if offset != payload.len() {
        return Err(SignetError::TrailingData);
    }
    let owner = decode_utf8(owner_raw, "owner")?;
    Ok(PublicKeyBlob { owner, key_blob })
}

/// Encode a signed public-key record:
/// `field(owner) ++ field(key_blob) ++ signature`.
pub fn encode_signed_public_key_blob(blob: &SignedPublicKeyBlob) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(
        2 * LEN_PREFIX + blob.owner.len() + blob.key_blob.len() + blob.signature.len(),
    );
    pack_part(&mut out, blob.owner.as_bytes(), "owner")?;
    pack_part(&mut out, &blob.key_blob, "key blob")?;
    out.extend_from_slice(&blob.signature);
    Ok(out)
}

/// Decode a signed public-key record. The unprefixed remainder is the
/// signature and must be non-empty; a zero-length signature is treated
/// as absent.
pub fn decode_signed_public_key_blob(payload: &[u8]) -> Result<SignedPublicKeyBlob> {
    let mut offset = 0;
    let owner_raw = read_part(payload, &mut offset)?;
    let key_blob = read_part(payload, &mut offset)?.to_vec();
    let signature = payload[offset..].to_vec();
    if signature.is_empty() {
        return Err(SignetError::MissingSignature);
    }
    let owner = decode_utf8(owner_raw, "owner")?;
    Ok(SignedPublicKeyBlob { owner, key_blob, signature })
}
