//! Capability Providers - caps
//!
//! Concrete implementations of the capability ports in `caps-domain`. Each
//! provider registers itself into the `CAPABILITY_PROVIDERS` linkme slice so
//! start-up code can select it by name from configuration.
//!
//! ## Available Providers
//!
//! | Capability | Provider | Type |
//! |------------|----------|------|
//! | Persistence | `memory` | [`InMemoryPersistence`] |
//! | Persistence | `fixed` | [`FixedIdPersistence`] |
//! | Logger | `tracing` | [`TracingLogger`] |
//! | Logger | `recording` | [`RecordingLogger`] |
//! | Logger | `null` | [`NullLogger`] |
//! | PasswordHasher | `argon2` | [`Argon2Hasher`] |
//! | PasswordHasher | `plaintext` | [`PlaintextHasher`] |
//!
//! Binaries and tests that resolve providers by name must link this crate
//! (`extern crate caps_providers;`) so the registrations are included.

pub mod hashing;
pub mod logging;
pub mod persistence;

pub use hashing::{Argon2Hasher, PlaintextHasher};
pub use logging::{LogRecord, NullLogger, RecordingLogger, TracingLogger};
pub use persistence::{FixedIdPersistence, InMemoryPersistence};
