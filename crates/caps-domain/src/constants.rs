//! Domain constants

// ============================================================================
// CAPABILITY NAMES
// ============================================================================

/// Capability name for user persistence
pub const PERSISTENCE_CAPABILITY: &str = "Persistence";

/// Capability name for domain logging
pub const LOGGER_CAPABILITY: &str = "Logger";

/// Capability name for password hashing
pub const PASSWORD_HASHER_CAPABILITY: &str = "PasswordHasher";

// ============================================================================
// VALIDATION LIMITS
// ============================================================================

/// Maximum accepted username length in characters
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Maximum accepted password length in bytes
pub const MAX_PASSWORD_LENGTH: usize = 1024;
