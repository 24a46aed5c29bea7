pub mod audit;
pub mod identity_store;
pub mod signature_scheme;
pub mod trust_store;
