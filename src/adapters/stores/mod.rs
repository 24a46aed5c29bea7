pub mod file_identity_store;
pub mod file_trust_store;
