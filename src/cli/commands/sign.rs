use std::path::{Path, PathBuf};

use crate::cli::commands::Context;
use crate::cli::output;
use crate::core::errors::{Result, SignetError};
use crate::core::models::audit_entry::{AuditAction, AuditEntry};
use crate::core::services::identity_service::validate_username;

/// Execute the `signet sign` command.
///
/// Reads a UTF-8 text file, signs it with the user's private key and
/// writes the encoded signed document next to it.
pub fn execute(user: &str, input: &str, output_path: Option<&str>) -> Result<()> {
    let ctx = Context::open()?;
    let username = validate_username(user)?;

    let source = Path::new(input);
    if !source.exists() {
        return Err(SignetError::FileNotFound {
            path: source.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(source)?;

    let private_key = ctx.identities.load(&username)?;
    let payload = ctx.documents.sign_and_encode(&username, &private_key, &text)?;

    let dest = output_path
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("{input}.sdoc")));
    std::fs::write(&dest, &payload)?;

    output::success(&format!(
        "Signed {} as '{username}' → {}",
        source.display(),
        dest.display()
    ));

    ctx.record(
        AuditEntry::now(&username, AuditAction::Sign).with_subject(dest.display().to_string()),
    );
    Ok(())
}
