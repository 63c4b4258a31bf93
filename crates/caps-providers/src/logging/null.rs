//! Null logger provider
//!
//! Discards every record. Useful for tests and for silencing domain logs.

use caps_application::ErasedCapability;
use caps_application::providers::{
    CAPABILITY_PROVIDERS, CapabilityProviderConfig, CapabilityProviderEntry,
};
use caps_domain::constants::LOGGER_CAPABILITY;
use caps_domain::ports::{LogLevel, Logger};
use std::sync::Arc;

/// Logger that discards everything
#[derive(Debug, Clone, Default)]
pub struct NullLogger;

impl NullLogger {
    /// Create a null logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NullLogger {
    fn log(&self, _level: LogLevel, _message: &str) {}

    fn provider_name(&self) -> &str {
        "null"
    }
}

#[linkme::distributed_slice(CAPABILITY_PROVIDERS)]
static NULL_LOGGER: CapabilityProviderEntry = CapabilityProviderEntry {
    capability: LOGGER_CAPABILITY,
    name: "null",
    description: "Discards domain log records",
    factory: |_config: &CapabilityProviderConfig| {
        Ok(ErasedCapability::new::<dyn Logger>(Arc::new(NullLogger::new())))
    },
};
