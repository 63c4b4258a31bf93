//! Password Hasher Capability Port

use crate::error::Result;

/// Password hashing interface
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a self-describing string
    fn hash_password(&self, password: &str) -> Result<String>;

    /// Check a plaintext password against a hash produced by `hash_password`
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool>;

    /// Provider name for diagnostics
    fn provider_name(&self) -> &str;
}
