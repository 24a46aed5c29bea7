use crate::adapters::audit::json_audit_logger::JsonAuditLogger;
use crate::cli::commands::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::audit_entry::AuditEntry;
use crate::core::traits::audit::AuditLogger;

/// Execute the `signet log` command.
pub fn execute(author: Option<&str>, last: Option<usize>) -> Result<()> {
    let ctx = Context::open()?;
    let logger = JsonAuditLogger::from_config(&ctx.signet_dir, ctx.config.audit.as_ref());

    let entries = logger.query(author, None)?;

    if entries.is_empty() {
        output::header("signet log");
        output::warning("No audit entries found");
        if author.is_some() {
            println!("  Try removing the --author filter to see all entries.");
        }
        return Ok(());
    }

    // Apply --last N (take from the end)
    let display: Vec<&AuditEntry> = match last {
        Some(n) => entries.iter().rev().take(n).rev().collect(),
        None => entries.iter().collect(),
    };

    output::header(&format!("signet log ({} entries)", display.len()));
    println!();
    for entry in &display {
        output::audit_entry(entry);
    }
    Ok(())
}
