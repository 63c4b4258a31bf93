//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `caps_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "caps.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "caps";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "CAPS";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default HTTP server host
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default HTTP server port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a full `EnvFilter` directive
pub const LOG_FILTER_ENV: &str = "CAPS_LOG";

/// File stem used for rolling log files when the path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "caps";

// ============================================================================
// DEFAULT PROVIDERS
// ============================================================================

/// Persistence provider used when none is configured
pub const DEFAULT_PERSISTENCE_PROVIDER: &str = "memory";

/// Logger provider used when none is configured
pub const DEFAULT_LOGGER_PROVIDER: &str = "tracing";

/// Password hasher provider used when none is configured
pub const DEFAULT_PASSWORD_HASHER_PROVIDER: &str = "argon2";
