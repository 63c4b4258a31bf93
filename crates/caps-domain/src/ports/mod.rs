//! Capability Ports
//!
//! Each trait here is one capability: a class of side effect domain logic may
//! depend on. Domain functions receive these as `Arc<dyn Trait>` resolved from
//! the frozen capability set and never construct an implementation.
//!
//! | Port | Capability name |
//! |------|-----------------|
//! | [`Persistence`] | `"Persistence"` |
//! | [`Logger`] | `"Logger"` |
//! | [`PasswordHasher`] | `"PasswordHasher"` |
//!
//! Implementations must be safe for concurrent invocation; the dispatcher
//! shares a single instance across every in-flight request.

pub mod hasher;
pub mod logger;
pub mod persistence;

pub use hasher::PasswordHasher;
pub use logger::{LogLevel, Logger};
pub use persistence::Persistence;
