//! # caps
//!
//! Capability-based dependency injection for domain logic.
//!
//! Domain functions declare the capabilities they need (`Persistence`,
//! `Logger`, `PasswordHasher`) as parameters. Implementations are registered
//! once at start-up into a [`CapabilityRegistry`], frozen into an immutable
//! [`CapabilitySet`] and resolved per request by the dispatcher.
//!
//! ## Example
//!
//! ```ignore
//! use caps::{Cap, CapabilityRegistry, RequestContext, dispatch};
//! use caps::domain::ports::{Logger, PasswordHasher, Persistence};
//! use caps::application::use_cases::create_user;
//!
//! let mut registry = CapabilityRegistry::new();
//! registry.register_capability::<dyn Persistence>(Arc::new(InMemoryPersistence::new()))?;
//! registry.register_capability::<dyn Logger>(Arc::new(TracingLogger::new()))?;
//! registry.register_capability::<dyn PasswordHasher>(Arc::new(Argon2Hasher::new()))?;
//! let set = registry.freeze();
//!
//! let ctx = RequestContext::new(set, "POST", "/users", r#"{"username":"a","password":"b"}"#);
//! let user = dispatch(&ctx, |(p, l, h)| create_user(p, l, h, ctx.body())).await??;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - entities, capability ports and errors
//! - `application` - registry, dispatcher, routing and domain functions
//! - `providers` - concrete capability implementations
//! - `infrastructure` - configuration, logging and bootstrap
//! - `server` - HTTP transport

/// Domain layer - entities, capability ports and errors
pub mod domain {
    pub use caps_domain::*;
}

/// Application layer - registry, dispatcher and domain functions
pub mod application {
    pub use caps_application::*;
}

/// Provider implementations
pub mod providers {
    pub use caps_providers::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
pub mod infrastructure {
    pub use caps_infrastructure::*;
}

/// Server layer - HTTP transport
pub mod server {
    pub use caps_server::*;
}

pub use application::{
    Cap, Capability, CapabilityRegistry, CapabilitySet, Dispatcher, DomainResult, RequestContext,
    dispatch,
};
pub use domain::{CapabilityError, Error, Result, User, UserId};
pub use server::run_server;
