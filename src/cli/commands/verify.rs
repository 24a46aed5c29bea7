use std::path::Path;

use crate::cli::commands::Context;
use crate::cli::output;
use crate::core::errors::{Result, SignetError};
use crate::core::models::audit_entry::{AuditAction, AuditEntry};
use crate::core::services::identity_service::validate_username;
use crate::core::traits::signature_scheme::SignatureScheme;

/// Execute the `signet verify` command.
///
/// Decodes the document, recovers the author's public key from the
/// reader's trust store (checking the reader's own vouching signature
/// first), then checks the document signature. An invalid signature is
/// reported and the process exits non-zero so scripts can branch; it is
/// not an error in the core's sense.
pub fn execute(file: &str, reader: &str) -> Result<()> {
    let ctx = Context::open()?;
    let reader = validate_username(reader)?;

    let path = Path::new(file);
    if !path.exists() {
        return Err(SignetError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let payload = std::fs::read(path)?;
    let document = ctx.documents.decode(&payload)?;

    let reader_key = ctx.identities.load(&reader)?;
    let verifier = ctx.documents.scheme.public_key(&reader_key);
    let author_key = ctx.trust.verify_and_load(&document.author, &verifier)?;

    let valid = ctx.documents.verify(&document, &author_key);

    ctx.record(
        AuditEntry::now(&reader, AuditAction::Verify)
            .with_subject(path.display().to_string())
            .with_detail(format!(
                "author '{}': {}",
                document.author,
                if valid { "valid" } else { "INVALID" }
            )),
    );

    if valid {
        output::success(&format!(
            "Signature of '{}' is valid ({} chars)",
            document.author,
            document.text.chars().count()
        ));
        Ok(())
    } else {
        output::error(&format!(
            "Signature of '{}' does NOT match the document text",
            document.author
        ));
        std::process::exit(1);
    }
}
