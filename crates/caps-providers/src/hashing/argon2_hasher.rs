//! Argon2 password hasher provider

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;
use caps_application::ErasedCapability;
use caps_application::providers::{
    CAPABILITY_PROVIDERS, CapabilityProviderConfig, CapabilityProviderEntry,
};
use caps_domain::constants::PASSWORD_HASHER_CAPABILITY;
use caps_domain::error::{Error, Result};
use caps_domain::ports::PasswordHasher;
use std::sync::Arc;

/// Password hasher using Argon2 with default parameters
#[derive(Clone, Default)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    /// Create a hasher with default configuration
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl std::fmt::Debug for Argon2Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Argon2Hasher").finish_non_exhaustive()
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| Error::hashing(format!("Password hashing failed: {e}")))?;

        Ok(password_hash.to_string())
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| Error::hashing(format!("Invalid password hash format: {e}")))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    fn provider_name(&self) -> &str {
        "argon2"
    }
}

#[linkme::distributed_slice(CAPABILITY_PROVIDERS)]
static ARGON2_HASHER: CapabilityProviderEntry = CapabilityProviderEntry {
    capability: PASSWORD_HASHER_CAPABILITY,
    name: "argon2",
    description: "Argon2id password hashing with random salts",
    factory: |_config: &CapabilityProviderConfig| {
        Ok(ErasedCapability::new::<dyn PasswordHasher>(Arc::new(
            Argon2Hasher::new(),
        )))
    },
};
