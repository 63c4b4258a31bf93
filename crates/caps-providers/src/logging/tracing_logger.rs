//! Tracing logger provider
//!
//! Forwards domain log records to the process-wide `tracing` subscriber
//! under the `caps::domain` target.

use caps_application::ErasedCapability;
use caps_application::providers::{
    CAPABILITY_PROVIDERS, CapabilityProviderConfig, CapabilityProviderEntry,
};
use caps_domain::constants::LOGGER_CAPABILITY;
use caps_domain::ports::{LogLevel, Logger};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Logger backed by `tracing`
#[derive(Debug, Clone, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Create a tracing logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => debug!(target: "caps::domain", "{message}"),
            LogLevel::Info => info!(target: "caps::domain", "{message}"),
            LogLevel::Warn => warn!(target: "caps::domain", "{message}"),
            LogLevel::Error => error!(target: "caps::domain", "{message}"),
        }
    }

    fn provider_name(&self) -> &str {
        "tracing"
    }
}

#[linkme::distributed_slice(CAPABILITY_PROVIDERS)]
static TRACING_LOGGER: CapabilityProviderEntry = CapabilityProviderEntry {
    capability: LOGGER_CAPABILITY,
    name: "tracing",
    description: "Forwards domain logs to the tracing subscriber",
    factory: |_config: &CapabilityProviderConfig| {
        Ok(ErasedCapability::new::<dyn Logger>(Arc::new(TracingLogger::new())))
    },
};
