pub mod document_service;
pub mod identity_service;
pub mod trust_service;
