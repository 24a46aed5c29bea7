pub mod audit;
pub mod crypto;
pub mod stores;
