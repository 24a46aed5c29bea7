pub mod audit_entry;
pub mod key_blob;
pub mod signed_document;
