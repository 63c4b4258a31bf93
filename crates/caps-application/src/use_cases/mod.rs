//! Use Cases
//!
//! Domain functions. Each one names the capabilities it needs as `Cap<I>`
//! parameters and is invoked through the dispatcher; none of them construct
//! or look up an implementation on their own.

pub mod users;

pub use users::{UserError, create_user, get_user, list_users};
