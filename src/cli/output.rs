use colored::Colorize;

use crate::core::models::audit_entry::{AuditAction, AuditEntry};

/// Print a success message.
pub fn success(msg: &str) {
    println!("  {} {}", "✓".green(), msg);
}

/// Print a warning message.
pub fn warning(msg: &str) {
    println!("  {} {}", "⚠".yellow(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a header line.
pub fn header(msg: &str) {
    println!("\n{}", msg.bold());
}

/// Print one audit-log entry as a single aligned line.
pub fn audit_entry(entry: &AuditEntry) {
    print!(
        "  {} {} {}",
        entry
            .timestamp
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed(),
        entry.user.bold(),
        action_label(&entry.action)
    );
    if let Some(subject) = &entry.subject {
        print!(" {subject}");
    }
    if let Some(detail) = &entry.detail {
        print!(" ({detail})");
    }
    println!();
}

fn action_label(action: &AuditAction) -> &'static str {
    match action {
        AuditAction::IdentityCreate => "identity-create",
        AuditAction::IdentityDelete => "identity-delete",
        AuditAction::Sign => "sign",
        AuditAction::Verify => "verify",
        AuditAction::KeyExport => "key-export",
        AuditAction::KeyImport => "key-import",
    }
}
