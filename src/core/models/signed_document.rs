/// A text document together with its author's detached signature.
///
/// The signature covers the UTF-8 bytes of `text` and was produced by
/// `author`'s private key at save time. The struct itself cannot prove
/// that claim; verification needs the author's public key, typically
/// recovered through the trust store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedDocument {
    pub author: String,
    pub signature: Vec<u8>,
    pub text: String,
}

impl std::fmt::Display for SignedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "document by '{}' ({} chars, {}-byte signature)",
            self.author,
            self.text.chars().count(),
            self.signature.len()
        )
    }
}
