//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for caps: configuration loading,
//! logging setup and the start-up code that turns configuration into a
//! frozen capability set.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (defaults, TOML, `CAPS_` env) |
//! | [`logging`] | Structured logging with tracing |
//! | [`bootstrap`] | Provider resolution and registry freeze |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`constants`] | Configuration defaults |

// Force linkme registration of all providers from caps-providers
extern crate caps_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{AppContext, build_capability_set, init_app};
pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use error_ext::ErrorContext;
