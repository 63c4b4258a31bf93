//! Application Layer - caps
//!
//! Hosts the capability registry and dispatcher, the compile-time provider
//! registry, and the domain functions that run against resolved
//! capabilities.
//!
//! ## Flow
//!
//! ```text
//! start-up:   CapabilityRegistry::register(..)  →  freeze()  →  Arc<CapabilitySet>
//!                                                                   │
//! per request: Dispatcher::context(method, path, body) → RequestContext
//!                                                                   │
//!              route_request(&ctx) → dispatch(&ctx, domain_fn) → DomainResult
//! ```
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `caps-domain`: entities, capability ports and errors
//! - Pure Rust libraries for serialization, logging and registration

pub mod capability;
pub mod context;
pub mod dispatch;
pub mod providers;
pub mod registry;
pub mod routing;
pub mod use_cases;

pub use capability::{Cap, Capability, ErasedCapability};
pub use context::RequestContext;
pub use dispatch::{DomainResult, Dispatcher, Requirements, dispatch, resolve, resolve_capability};
pub use registry::{CapabilityRegistry, CapabilitySet, RegistryState};
pub use routing::{DomainResponse, RouteError, route_request};
