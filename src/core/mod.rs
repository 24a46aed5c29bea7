pub mod codec;
pub mod errors;
pub mod models;
pub mod services;
pub mod traits;
