use std::path::PathBuf;

/// All domain errors for Signet.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum SignetError {
    #[error("Username is empty\n\n  Provide a name like 'alice' or 'dev-laptop.2'.")]
    UsernameEmpty,

    #[error(
        "Username is too long ({length} characters, maximum is 64)\n\n  \
         Pick a shorter name; it becomes a directory name in the key store."
    )]
    UsernameTooLong { length: usize },

    #[error(
        "Username '{username}' contains forbidden characters\n\n  \
         Allowed: letters, digits, '.', '_' and '-'.\n  \
         Spaces and path separators are rejected because the name \
         doubles as a storage directory."
    )]
    UsernameForbiddenChars { username: String },

    #[error(
        "Artifact is truncated: a length-prefixed field runs past the end of the file\n\n  \
         The file is either cut short or not a signet artifact at all."
    )]
    TruncatedArtifact,

    #[error(
        "Invalid UTF-8 in the {field} field\n\n  \
         The file is corrupted or not a signet artifact."
    )]
    InvalidEncoding { field: &'static str },

    #[error(
        "Trailing bytes after an unsigned public-key blob\n\n  \
         An exported key file contains exactly two fields; extra data \
         means corruption or a misnamed file."
    )]
    TrailingData,

    #[error(
        "Signed public-key record carries no signature bytes\n\n  \
         A trust record must end with a non-empty signature."
    )]
    MissingSignature,

    #[error("The {field} field does not fit a 4-byte length prefix")]
    OversizedField { field: &'static str },

    #[error(
        "Could not read {kind} key: {detail}\n\n  \
         The key bytes are malformed or use an unsupported encoding.\n  \
         Signet only understands its own exports (P-256, PKCS#8 PEM / SPKI DER)."
    )]
    KeyImport { kind: &'static str, detail: String },

    #[error("Could not encode {kind} key for export: {detail}")]
    KeyExport { kind: &'static str, detail: String },

    #[error("Signing failed: {detail}")]
    SigningFailed { detail: String },

    #[error(
        "No key pair found for user '{username}'\n\n  \
         Run 'signet identity ensure {username}' to create one."
    )]
    IdentityNotFound { username: String },

    #[error(
        "No trusted public key stored for author '{owner}'\n\n  \
         Ask '{owner}' for their exported key file, then run:\n    \
         signet trust import <file> --signer <your-name>"
    )]
    TrustRecordNotFound { owner: String },

    #[error(
        "Trust record for '{owner}' failed signature verification\n\n  \
         The record was not vouched for by the selected local identity, \
         or it was tampered with on disk.\n  \
         Re-import the author's key file under your current identity."
    )]
    UntrustedRecord { owner: String },

    #[error(
        "Trust record owner mismatch: looked up '{requested}' but the record \
         names '{found}'\n\n  \
         The file was renamed or swapped; re-import the author's key."
    )]
    OwnerMismatch { requested: String, found: String },

    #[error("File not found: {path}\n\n  Check that the path is correct and the file exists.")]
    FileNotFound { path: PathBuf },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error("Audit log error: {detail}")]
    AuditError { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Coarse classification of errors, one kind per failure family.
///
/// Every core operation fails with exactly one of these; the CLI only
/// needs the message, but tests and embedders branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A user-supplied identifier violates syntactic constraints.
    Validation,
    /// A byte buffer is not a well-formed artifact.
    Format,
    /// The crypto primitive rejected a key encoding or failed to sign.
    Crypto,
    /// A requested identity or trust record is absent or untrusted.
    Storage,
    /// File-system or configuration failure outside the core taxonomy.
    Io,
}

impl SignetError {
    /// Classify this error into the four-kind taxonomy (plus Io).
    pub fn kind(&self) -> ErrorKind {
        use SignetError::*;
        match self {
            UsernameEmpty | UsernameTooLong { .. } | UsernameForbiddenChars { .. } => {
                ErrorKind::Validation
            }
            TruncatedArtifact
            | InvalidEncoding { .. }
            | TrailingData
            | MissingSignature
            | OversizedField { .. } => ErrorKind::Format,
            KeyImport { .. } | KeyExport { .. } | SigningFailed { .. } => ErrorKind::Crypto,
            IdentityNotFound { .. }
            | TrustRecordNotFound { .. }
            | UntrustedRecord { .. }
            | OwnerMismatch { .. } => ErrorKind::Storage,
            FileNotFound { .. } | InvalidConfig { .. } | AuditError { .. } | Io(_) => ErrorKind::Io,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SignetError>;
