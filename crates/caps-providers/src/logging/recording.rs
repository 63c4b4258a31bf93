//! Recording logger provider
//!
//! Keeps every record in memory. Swap it in before freezing the registry to
//! observe what domain functions logged.

use caps_application::ErasedCapability;
use caps_application::providers::{
    CAPABILITY_PROVIDERS, CapabilityProviderConfig, CapabilityProviderEntry,
};
use caps_domain::constants::LOGGER_CAPABILITY;
use caps_domain::ports::{LogLevel, Logger};
use std::sync::{Arc, Mutex, PoisonError};

/// A captured log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Record severity
    pub level: LogLevel,
    /// Record text
    pub message: String,
}

/// Logger that stores records in memory
#[derive(Debug, Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLogger {
    /// Create an empty recording logger
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages recorded at `level`
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|record| record.level == level)
            .map(|record| record.message)
            .collect()
    }

    /// Whether any record contains `fragment`
    pub fn contains(&self, fragment: &str) -> bool {
        self.records()
            .iter()
            .any(|record| record.message.contains(fragment))
    }

    /// Drop all records
    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LogRecord {
                level,
                message: message.to_string(),
            });
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

#[linkme::distributed_slice(CAPABILITY_PROVIDERS)]
static RECORDING_LOGGER: CapabilityProviderEntry = CapabilityProviderEntry {
    capability: LOGGER_CAPABILITY,
    name: "recording",
    description: "Keeps domain log records in memory",
    factory: |_config: &CapabilityProviderConfig| {
        Ok(ErasedCapability::new::<dyn Logger>(Arc::new(
            RecordingLogger::new(),
        )))
    },
};
