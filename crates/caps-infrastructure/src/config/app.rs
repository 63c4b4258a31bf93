//! Application configuration types

use crate::constants::{
    DEFAULT_HTTP_PORT, DEFAULT_LOG_LEVEL, DEFAULT_LOGGER_PROVIDER,
    DEFAULT_PASSWORD_HASHER_PROVIDER, DEFAULT_PERSISTENCE_PROVIDER, DEFAULT_SERVER_HOST,
};
use caps_application::providers::CapabilityProviderConfig;
use caps_domain::constants::{
    LOGGER_CAPABILITY, PASSWORD_HASHER_CAPABILITY, PERSISTENCE_CAPABILITY,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Logging settings
    pub logging: LoggingConfig,
    /// Provider selected for each capability
    pub capabilities: CapabilitiesConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily-rolling file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Provider chosen for each capability
///
/// ```toml
/// [capabilities.persistence]
/// provider = "fixed"
/// extra = { user_id = "42" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapabilitiesConfig {
    /// `Persistence` provider
    pub persistence: CapabilityProviderConfig,
    /// `Logger` provider
    pub logger: CapabilityProviderConfig,
    /// `PasswordHasher` provider
    pub password_hasher: CapabilityProviderConfig,
}

impl CapabilitiesConfig {
    /// `(capability name, provider config)` pairs in registration order
    pub fn bindings(&self) -> [(&'static str, &CapabilityProviderConfig); 3] {
        [
            (PERSISTENCE_CAPABILITY, &self.persistence),
            (LOGGER_CAPABILITY, &self.logger),
            (PASSWORD_HASHER_CAPABILITY, &self.password_hasher),
        ]
    }
}

impl Default for CapabilitiesConfig {
    fn default() -> Self {
        Self {
            persistence: CapabilityProviderConfig::new(DEFAULT_PERSISTENCE_PROVIDER),
            logger: CapabilityProviderConfig::new(DEFAULT_LOGGER_PROVIDER),
            password_hasher: CapabilityProviderConfig::new(DEFAULT_PASSWORD_HASHER_PROVIDER),
        }
    }
}
