//! Password hasher providers

pub mod argon2_hasher;
pub mod plaintext;

pub use argon2_hasher::Argon2Hasher;
pub use plaintext::PlaintextHasher;
