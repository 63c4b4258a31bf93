//! Error handling types
//!
//! Two families live here:
//!
//! - [`CapabilityError`]: configuration-time and programmer errors raised by
//!   the capability registry and dispatcher. Always fatal to the call, never
//!   retried.
//! - [`Error`]: the error type returned by capability ports and
//!   infrastructure code.
//!
//! Domain-level failures (bad request bodies, unknown users) are not errors
//! in this sense; they travel as data inside a `DomainResult`.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Capability registration and resolution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    /// The name is already bound in this registry
    #[error("Capability '{name}' is already registered")]
    DuplicateCapability {
        /// Capability name
        name: String,
    },

    /// Registration attempted after the registry was frozen
    #[error("Cannot register capability '{name}': registry is frozen")]
    RegistryFrozen {
        /// Capability name
        name: String,
    },

    /// No implementation is bound to the name
    #[error("Capability '{name}' is not registered")]
    MissingCapability {
        /// Capability name
        name: String,
    },

    /// The name is bound, but to a different interface type
    #[error("Capability '{name}' is bound to {actual}, expected {expected}")]
    CapabilityTypeMismatch {
        /// Capability name
        name: String,
        /// Interface type requested by the caller
        expected: &'static str,
        /// Interface type actually registered
        actual: &'static str,
    },

    /// No provider with the configured name is compiled in
    #[error("Unknown {capability} provider '{provider}'. Available providers: {available:?}")]
    UnknownProvider {
        /// Capability the provider was requested for
        capability: String,
        /// Requested provider name
        provider: String,
        /// Providers registered for this capability
        available: Vec<String>,
    },

    /// A provider factory rejected its configuration
    #[error("Failed to initialize {capability} provider '{provider}': {message}")]
    ProviderInit {
        /// Capability the provider was requested for
        capability: String,
        /// Provider name
        provider: String,
        /// Factory error message
        message: String,
    },
}

impl CapabilityError {
    /// Create a duplicate capability error
    pub fn duplicate<S: Into<String>>(name: S) -> Self {
        Self::DuplicateCapability { name: name.into() }
    }

    /// Create a frozen registry error
    pub fn frozen<S: Into<String>>(name: S) -> Self {
        Self::RegistryFrozen { name: name.into() }
    }

    /// Create a missing capability error
    pub fn missing<S: Into<String>>(name: S) -> Self {
        Self::MissingCapability { name: name.into() }
    }

    /// Capability name the error refers to
    pub fn capability_name(&self) -> &str {
        match self {
            Self::DuplicateCapability { name }
            | Self::RegistryFrozen { name }
            | Self::MissingCapability { name }
            | Self::CapabilityTypeMismatch { name, .. } => name,
            Self::UnknownProvider { capability, .. } | Self::ProviderInit { capability, .. } => {
                capability
            }
        }
    }
}

/// Main error type for caps
#[derive(Error, Debug)]
pub enum Error {
    /// Capability registration or resolution error
    #[error(transparent)]
    Capability(#[from] CapabilityError),

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A resource with the same identity already exists
    #[error("Already exists: {resource}")]
    AlreadyExists {
        /// The conflicting resource
        resource: String,
    },

    /// Persistence capability failure
    #[error("Persistence error: {message}")]
    Persistence {
        /// Description of the persistence error
        message: String,
    },

    /// Password hashing failure
    #[error("Hashing error: {message}")]
    Hashing {
        /// Description of the hashing error
        message: String,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create an already-exists error
    pub fn already_exists<S: Into<String>>(resource: S) -> Self {
        Self::AlreadyExists {
            resource: resource.into(),
        }
    }

    /// Create a persistence error
    pub fn persistence<S: Into<String>>(message: S) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    /// Create a hashing error
    pub fn hashing<S: Into<String>>(message: S) -> Self {
        Self::Hashing {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
