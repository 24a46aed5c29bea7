use std::path::PathBuf;

use crate::cli::IdentityAction;
use crate::cli::commands::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::audit_entry::{AuditAction, AuditEntry};
use crate::core::services::identity_service::validate_username;
use crate::core::traits::signature_scheme::SignatureScheme;

/// Execute the `signet identity` command.
pub fn execute(action: &IdentityAction, verbose: bool) -> Result<()> {
    match action {
        IdentityAction::Ensure { username } => execute_ensure(username, verbose),
        IdentityAction::Delete { username } => execute_delete(username),
        IdentityAction::Export { username, output } => execute_export(username, output.as_deref()),
    }
}

fn execute_ensure(username: &str, verbose: bool) -> Result<()> {
    let ctx = Context::open()?;
    let username = validate_username(username)?;

    let existed = ctx.identities.exists(&username)?;
    ctx.identities.ensure(&username)?;

    if existed {
        output::success(&format!("Identity '{username}' already exists"));
    } else {
        output::success(&format!("Created identity '{username}'"));
        ctx.record(AuditEntry::now(&username, AuditAction::IdentityCreate));
    }

    if verbose {
        println!("  scheme: {}", ctx.identities.scheme.name());
        println!(
            "  key store: {}",
            ctx.identities.store.keys_dir().join(&username).display()
        );
    }
    Ok(())
}

fn execute_delete(username: &str) -> Result<()> {
    let ctx = Context::open()?;
    let username = validate_username(username)?;

    ctx.identities.delete(&username)?;
    output::success(&format!("Deleted identity '{username}'"));
    output::warning("Documents signed with this key can no longer be re-signed");

    ctx.record(AuditEntry::now(&username, AuditAction::IdentityDelete));
    Ok(())
}

fn execute_export(username: &str, output_path: Option<&str>) -> Result<()> {
    let ctx = Context::open()?;
    let username = validate_username(username)?;

    let private_key = ctx.identities.load(&username)?;
    let payload = ctx.trust.export(&username, &private_key)?;

    let dest = output_path
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("{username}.pub")));
    std::fs::write(&dest, &payload)?;

    output::success(&format!(
        "Exported public key of '{username}' to {}",
        dest.display()
    ));
    println!("  Hand this file to a peer; they import it with:");
    println!("    signet trust import {} --signer <their-name>", dest.display());

    ctx.record(
        AuditEntry::now(&username, AuditAction::KeyExport).with_subject(dest.display().to_string()),
    );
    Ok(())
}
