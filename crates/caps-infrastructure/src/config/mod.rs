//! Configuration management
//!
//! Layered configuration via figment: compiled-in defaults, then a TOML
//! file, then `CAPS_`-prefixed environment variables.

pub mod app;
pub mod loader;

pub use app::{AppConfig, CapabilitiesConfig, LoggingConfig, ServerConfig};
pub use loader::{ConfigBuilder, ConfigLoader};
