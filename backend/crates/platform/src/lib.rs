//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the tutoring backend:
//! - Cryptographic utilities (SHA-256, HMAC, Base64, random bytes)
//! - Password hashing (Argon2id)
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
