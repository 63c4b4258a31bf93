//! Domain Layer - caps
//!
//! Core business types and the capability ports domain logic is written
//! against. Nothing in this crate performs a side effect: persistence,
//! logging and password hashing are reached only through the traits in
//! [`ports`], whose implementations live in `caps-providers` and are wired
//! in by the capability registry.
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`entities`] | `User`, `UserId`, `NewUser` |
//! | [`ports`] | `Persistence`, `Logger`, `PasswordHasher` |
//! | [`error`] | `Error`, `CapabilityError`, `Result` |
//! | [`constants`] | Canonical capability names and validation limits |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;

pub use entities::{NewUser, User, UserId};
pub use error::{CapabilityError, Error, Result};
