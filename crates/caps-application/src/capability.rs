//! Capability keys and handles
//!
//! [`Capability`] ties a port interface (`dyn Persistence`, `dyn Logger`, ...)
//! to its canonical registry name so domain code can ask for a capability by
//! type. [`Cap`] is the handle a domain function names as a parameter, and
//! [`ErasedCapability`] is the type-erased form the registry stores.

use caps_domain::constants::{
    LOGGER_CAPABILITY, PASSWORD_HASHER_CAPABILITY, PERSISTENCE_CAPABILITY,
};
use caps_domain::ports::{Logger, PasswordHasher, Persistence};
use std::any::{Any, type_name};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A port interface with a canonical capability name
pub trait Capability: Send + Sync + 'static {
    /// Name the interface is registered under by default
    const NAME: &'static str;
}

impl Capability for dyn Persistence {
    const NAME: &'static str = PERSISTENCE_CAPABILITY;
}

impl Capability for dyn Logger {
    const NAME: &'static str = LOGGER_CAPABILITY;
}

impl Capability for dyn PasswordHasher {
    const NAME: &'static str = PASSWORD_HASHER_CAPABILITY;
}

/// Resolved capability handed to a domain function
///
/// Derefs to the interface, so `persistence.create_user(..)` works directly
/// on a `Cap<dyn Persistence>`.
pub struct Cap<I: ?Sized>(Arc<I>);

impl<I: ?Sized> Cap<I> {
    /// Wrap an implementation
    pub fn new(implementation: Arc<I>) -> Self {
        Self(implementation)
    }

    /// Shared pointer to the implementation
    pub fn as_arc(&self) -> &Arc<I> {
        &self.0
    }

    /// Unwrap into the shared pointer
    pub fn into_inner(self) -> Arc<I> {
        self.0
    }
}

impl<I: ?Sized> Clone for Cap<I> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<I: ?Sized> Deref for Cap<I> {
    type Target = I;

    fn deref(&self) -> &I {
        &self.0
    }
}

impl<I: ?Sized> From<Arc<I>> for Cap<I> {
    fn from(implementation: Arc<I>) -> Self {
        Self(implementation)
    }
}

impl<I: ?Sized> fmt::Debug for Cap<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cap").field(&type_name::<I>()).finish()
    }
}

/// Type-erased capability implementation
///
/// Holds an `Arc<I>` behind `dyn Any` together with the interface type name.
/// Downcasting back to `Arc<I>` clones the stored pointer, so every resolution
/// yields the same allocation that was registered.
#[derive(Clone)]
pub struct ErasedCapability {
    value: Arc<dyn Any + Send + Sync>,
    interface: &'static str,
}

impl ErasedCapability {
    /// Erase an implementation of interface `I`
    pub fn new<I>(implementation: Arc<I>) -> Self
    where
        I: ?Sized + Send + Sync + 'static,
    {
        Self {
            value: Arc::new(implementation),
            interface: type_name::<I>(),
        }
    }

    /// Recover the implementation if it was erased as interface `I`
    pub fn downcast<I>(&self) -> Option<Arc<I>>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        self.value.downcast_ref::<Arc<I>>().cloned()
    }

    /// Whether the stored implementation was erased as interface `I`
    pub fn is<I>(&self) -> bool
    where
        I: ?Sized + Send + Sync + 'static,
    {
        self.value.is::<Arc<I>>()
    }

    /// Interface type name, e.g. `dyn caps_domain::ports::logger::Logger`
    pub fn interface(&self) -> &'static str {
        self.interface
    }
}

impl fmt::Debug for ErasedCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedCapability")
            .field("interface", &self.interface)
            .finish_non_exhaustive()
    }
}
