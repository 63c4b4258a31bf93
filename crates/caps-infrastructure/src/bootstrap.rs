//! Capability bootstrap
//!
//! Composition root: resolves the configured provider for every capability
//! from the linkme registry, registers each into a fresh
//! [`CapabilityRegistry`] and freezes it.
//!
//! ```text
//! AppConfig.capabilities → resolve_capability_provider → register_erased → freeze
//!                                    ↑                                      ↓
//!                          CAPABILITY_PROVIDERS                   Arc<CapabilitySet>
//! ```

use crate::config::{AppConfig, CapabilitiesConfig};
use caps_application::providers::resolve_capability_provider;
use caps_application::{CapabilityRegistry, CapabilitySet, Dispatcher};
use caps_domain::error::Result;
use std::sync::Arc;
use tracing::{error, info};

/// Resolve every configured provider and freeze them into a capability set
///
/// # Errors
///
/// Any unknown provider or rejected provider configuration aborts start-up
/// with the underlying `CapabilityError`.
pub fn build_capability_set(config: &CapabilitiesConfig) -> Result<Arc<CapabilitySet>> {
    let mut registry = CapabilityRegistry::new();

    for (capability, provider_config) in config.bindings() {
        let implementation = resolve_capability_provider(capability, provider_config)
            .inspect_err(|e| error!(capability, error = %e, "Provider resolution failed"))?;
        registry.register_erased(capability, implementation)?;
        info!(
            capability,
            provider = %provider_config.provider,
            "Capability provider bound"
        );
    }

    Ok(registry.freeze())
}

/// Application context produced at start-up
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    dispatcher: Dispatcher,
}

impl AppContext {
    /// Dispatcher over the frozen capability set
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// The frozen capability set
    pub fn capabilities(&self) -> &Arc<CapabilitySet> {
        self.dispatcher.capabilities()
    }
}

/// Build the application context from configuration
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let capabilities = build_capability_set(&config.capabilities)?;
    info!(count = capabilities.len(), "Application context initialized");

    Ok(AppContext {
        config: Arc::new(config),
        dispatcher: Dispatcher::new(capabilities),
    })
}
