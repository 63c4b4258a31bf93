//! Server Initialization
//!
//! Loads configuration, installs logging, builds the frozen capability set
//! from the configured providers and serves HTTP until shutdown.
//!
//! Any configuration or provider error aborts start-up before the server
//! binds.

use crate::transport::http::{HttpTransport, HttpTransportConfig};
use caps_domain::error::Result;
use caps_infrastructure::config::loader::validate_app_config;
use caps_infrastructure::config::{AppConfig, ConfigLoader};
use caps_infrastructure::logging::init_logging;
use caps_infrastructure::init_app;
use std::path::Path;
use tracing::info;

/// Run the caps HTTP server
///
/// `port` overrides the configured port when given.
pub async fn run_server(config_path: Option<&Path>, port: Option<u16>) -> Result<()> {
    let config = load_config(config_path, port)?;
    init_logging(&config.logging)?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        persistence = %config.capabilities.persistence.provider,
        logger = %config.capabilities.logger.provider,
        password_hasher = %config.capabilities.password_hasher.provider,
        "Starting caps server"
    );

    let transport_config = HttpTransportConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    let app = init_app(config)?;

    HttpTransport::new(transport_config, app.dispatcher().clone())
        .start()
        .await
}

/// Load configuration from an optional path and apply the port override
pub fn load_config(config_path: Option<&Path>, port: Option<u16>) -> Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load()?;

    if let Some(port) = port {
        config.server.port = port;
        validate_app_config(&config)?;
    }

    Ok(config)
}
