use std::path::Path;

use crate::cli::TrustAction;
use crate::cli::commands::Context;
use crate::cli::output;
use crate::core::errors::{Result, SignetError};
use crate::core::models::audit_entry::{AuditAction, AuditEntry};
use crate::core::services::identity_service::validate_username;

/// Execute the `signet trust` command.
pub fn execute(action: &TrustAction) -> Result<()> {
    match action {
        TrustAction::Import { file, signer } => execute_import(file, signer),
        TrustAction::List => execute_list(),
    }
}

fn execute_import(file: &str, signer: &str) -> Result<()> {
    let ctx = Context::open()?;
    let signer = validate_username(signer)?;

    let path = Path::new(file);
    if !path.exists() {
        return Err(SignetError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let payload = std::fs::read(path)?;

    let private_key = ctx.identities.load(&signer)?;
    let owner = ctx.trust.import(&payload, &private_key)?;

    output::success(&format!("Now vouching for '{owner}' as '{signer}'"));
    println!("  Documents signed by '{owner}' will verify for you from now on.");

    ctx.record(AuditEntry::now(&signer, AuditAction::KeyImport).with_subject(owner));
    Ok(())
}

fn execute_list() -> Result<()> {
    let ctx = Context::open()?;
    let owners = ctx.trust.list_trusted()?;

    output::header("Trusted authors");
    if owners.is_empty() {
        output::warning("No trust records yet");
        println!("  Import a peer's exported key: signet trust import <file> --signer <you>");
        return Ok(());
    }
    for owner in owners {
        println!("  {owner}");
    }
    Ok(())
}
