//! Capability Provider Registry
//!
//! Concrete capability implementations register themselves at compile time
//! through a `linkme` distributed slice. Start-up code reads the configured
//! provider name for each capability, looks the entry up here and registers
//! what the factory returns into the [`CapabilityRegistry`].
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                  Provider Registration Flow                    │
//! ├────────────────────────────────────────────────────────────────┤
//! │  1. Provider defines: #[linkme::distributed_slice(             │
//! │                           CAPABILITY_PROVIDERS)]               │
//! │                       static ENTRY: CapabilityProviderEntry    │
//! │                             ↓                                  │
//! │  2. Bootstrap reads:  persistence.provider = "memory"          │
//! │                             ↓                                  │
//! │  3. Resolver finds:   ("Persistence", "memory") → factory      │
//! │                             ↓                                  │
//! │  4. Registry binds:   register_erased("Persistence", ..)       │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a provider (in caps-providers)
//!
//! ```ignore
//! #[linkme::distributed_slice(CAPABILITY_PROVIDERS)]
//! static MEMORY_PERSISTENCE: CapabilityProviderEntry = CapabilityProviderEntry {
//!     capability: PERSISTENCE_CAPABILITY,
//!     name: "memory",
//!     description: "In-memory user store",
//!     factory: |_config| Ok(ErasedCapability::new::<dyn Persistence>(Arc::new(InMemoryPersistence::new()))),
//! };
//! ```
//!
//! [`CapabilityRegistry`]: crate::registry::CapabilityRegistry

use crate::capability::ErasedCapability;
use caps_domain::error::CapabilityError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration handed to a provider factory
///
/// Providers read what they need from `extra` and ignore the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityProviderConfig {
    /// Provider name (e.g., "memory", "tracing", "argon2")
    pub provider: String,
    /// Additional provider-specific configuration
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl CapabilityProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Look up an extra configuration value
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extra.get(key).map(String::as_str)
    }
}

/// Registry entry for a capability provider
pub struct CapabilityProviderEntry {
    /// Capability this provider implements (e.g., "Persistence")
    pub capability: &'static str,
    /// Unique provider name within the capability (e.g., "memory")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the provider instance
    pub factory: fn(&CapabilityProviderConfig) -> Result<ErasedCapability, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static CAPABILITY_PROVIDERS: [CapabilityProviderEntry] = [..];

/// Resolve and instantiate the configured provider for `capability`
///
/// # Errors
///
/// - `UnknownProvider` when no entry matches, listing the available ones
/// - `ProviderInit` when the factory rejects the configuration
pub fn resolve_capability_provider(
    capability: &str,
    config: &CapabilityProviderConfig,
) -> Result<ErasedCapability, CapabilityError> {
    let entry = CAPABILITY_PROVIDERS
        .iter()
        .find(|entry| entry.capability == capability && entry.name == config.provider)
        .ok_or_else(|| CapabilityError::UnknownProvider {
            capability: capability.to_string(),
            provider: config.provider.clone(),
            available: providers_for(capability)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })?;

    (entry.factory)(config).map_err(|message| CapabilityError::ProviderInit {
        capability: capability.to_string(),
        provider: config.provider.clone(),
        message,
    })
}

/// Provider names registered for `capability`, sorted
pub fn providers_for(capability: &str) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = CAPABILITY_PROVIDERS
        .iter()
        .filter(|entry| entry.capability == capability)
        .map(|entry| entry.name)
        .collect();
    names.sort_unstable();
    names
}

/// List all registered providers
///
/// Returns `(capability, name, description)` tuples sorted by capability and
/// name. Useful for CLI help.
pub fn list_capability_providers() -> Vec<(&'static str, &'static str, &'static str)> {
    let mut providers: Vec<_> = CAPABILITY_PROVIDERS
        .iter()
        .map(|entry| (entry.capability, entry.name, entry.description))
        .collect();
    providers.sort_unstable();
    providers
}
