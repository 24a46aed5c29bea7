pub mod p256_backend;
