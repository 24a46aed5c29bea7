use crate::core::codec;
use crate::core::errors::Result;
use crate::core::models::signed_document::SignedDocument;
use crate::core::traits::signature_scheme::SignatureScheme;

/// Signs, decodes and verifies text documents.
///
/// This service never decides *whose* public key is the author's; that
/// binding is the caller's job, normally through the trust store with
/// the reader's own identity as verifier.
pub struct DocumentService<S: SignatureScheme> {
    pub scheme: S,
}

impl<S: SignatureScheme> DocumentService<S> {
    pub fn new(scheme: S) -> Self {
        Self { scheme }
    }

    /// Sign the text with the author's private key and encode the
    /// resulting document for storage.
    pub fn sign_and_encode(
        &self,
        author: &str,
        private_key: &S::PrivateKey,
        text: &str,
    ) -> Result<Vec<u8>> {
        let signature = self.scheme.sign(private_key, text.as_bytes())?;
        codec::encode_signed_document(&SignedDocument {
            author: author.to_string(),
            signature,
            text: text.to_string(),
        })
    }

    /// Structural decode only; no signature is checked here.
    pub fn decode(&self, payload: &[u8]) -> Result<SignedDocument> {
        codec::decode_signed_document(payload)
    }

    /// Whether the document's signature matches its text under the
    /// given author public key. A plain business answer, never an error.
    pub fn verify(&self, document: &SignedDocument, author_public_key: &S::PublicKey) -> bool {
        self.scheme.verify(
            author_public_key,
            document.text.as_bytes(),
            &document.signature,
        )
    }
}
