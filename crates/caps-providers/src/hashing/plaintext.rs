//! Plaintext password hasher provider
//!
//! Stores passwords with a marker prefix and no hashing. Only for tests and
//! local demos where Argon2's cost gets in the way.

use caps_application::ErasedCapability;
use caps_application::providers::{
    CAPABILITY_PROVIDERS, CapabilityProviderConfig, CapabilityProviderEntry,
};
use caps_domain::constants::PASSWORD_HASHER_CAPABILITY;
use caps_domain::error::{Error, Result};
use caps_domain::ports::PasswordHasher;
use std::sync::Arc;

const PREFIX: &str = "plain$";

/// Hasher that keeps the password readable
#[derive(Debug, Clone, Default)]
pub struct PlaintextHasher;

impl PlaintextHasher {
    /// Create a plaintext hasher
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for PlaintextHasher {
    fn hash_password(&self, password: &str) -> Result<String> {
        Ok(format!("{PREFIX}{password}"))
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        let stored = hash
            .strip_prefix(PREFIX)
            .ok_or_else(|| Error::hashing("hash was not produced by the plaintext hasher"))?;
        Ok(stored == password)
    }

    fn provider_name(&self) -> &str {
        "plaintext"
    }
}

#[linkme::distributed_slice(CAPABILITY_PROVIDERS)]
static PLAINTEXT_HASHER: CapabilityProviderEntry = CapabilityProviderEntry {
    capability: PASSWORD_HASHER_CAPABILITY,
    name: "plaintext",
    description: "No hashing, prefixes the password (tests only)",
    factory: |_config: &CapabilityProviderConfig| {
        Ok(ErasedCapability::new::<dyn PasswordHasher>(Arc::new(
            PlaintextHasher::new(),
        )))
    },
};
