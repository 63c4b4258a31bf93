//! Capability Registry
//!
//! Binds capability names to implementations during start-up and freezes them
//! into an immutable [`CapabilitySet`].
//!
//! ## State machine
//!
//! ```text
//!   Open ──freeze()──▶ Frozen
//!    │                   │
//!  register()        register() → RegistryFrozen
//! ```
//!
//! The transition is one-way for a registry instance. Reconfiguring means
//! building a new registry and swapping the resulting set wholesale.

use crate::capability::{Capability, ErasedCapability};
use caps_domain::error::CapabilityError;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Registry lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    /// Accepting registrations
    Open,
    /// Frozen into a capability set; registrations are rejected
    Frozen,
}

/// Mutable registry used while wiring the process
#[derive(Debug, Default)]
pub struct CapabilityRegistry {
    entries: BTreeMap<String, ErasedCapability>,
    frozen: Option<Arc<CapabilitySet>>,
}

impl CapabilityRegistry {
    /// Create an empty, open registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state
    pub fn state(&self) -> RegistryState {
        if self.frozen.is_some() {
            RegistryState::Frozen
        } else {
            RegistryState::Open
        }
    }

    /// Bind `implementation` to `name`
    ///
    /// # Errors
    ///
    /// - `RegistryFrozen` once [`freeze`](Self::freeze) has been called
    /// - `DuplicateCapability` if `name` is already bound
    pub fn register<I>(
        &mut self,
        name: impl Into<String>,
        implementation: Arc<I>,
    ) -> Result<(), CapabilityError>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        self.register_erased(name, ErasedCapability::new(implementation))
    }

    /// Bind `implementation` under the interface's canonical name
    pub fn register_capability<I>(&mut self, implementation: Arc<I>) -> Result<(), CapabilityError>
    where
        I: Capability + ?Sized,
    {
        self.register(I::NAME, implementation)
    }

    /// Bind an already type-erased implementation to `name`
    pub fn register_erased(
        &mut self,
        name: impl Into<String>,
        capability: ErasedCapability,
    ) -> Result<(), CapabilityError> {
        let name = name.into();

        if self.frozen.is_some() {
            warn!(capability = %name, "Registration rejected: registry is frozen");
            return Err(CapabilityError::frozen(name));
        }
        if self.entries.contains_key(&name) {
            warn!(capability = %name, "Registration rejected: name already bound");
            return Err(CapabilityError::duplicate(name));
        }

        debug!(
            capability = %name,
            interface = capability.interface(),
            "Capability registered"
        );
        self.entries.insert(name, capability);
        Ok(())
    }

    /// Freeze the registry into an immutable capability set
    ///
    /// Subsequent calls return the same set.
    pub fn freeze(&mut self) -> Arc<CapabilitySet> {
        if let Some(set) = &self.frozen {
            return Arc::clone(set);
        }

        let set = Arc::new(CapabilitySet {
            entries: std::mem::take(&mut self.entries),
        });
        info!(
            capabilities = ?set.names(),
            "Capability registry frozen"
        );
        self.frozen = Some(Arc::clone(&set));
        set
    }
}

/// Immutable name → implementation mapping shared by every request
///
/// Only obtainable from [`CapabilityRegistry::freeze`]; there is no way to
/// mutate a set once built, so it is shared across tasks without locking.
#[derive(Debug)]
pub struct CapabilitySet {
    entries: BTreeMap<String, ErasedCapability>,
}

impl CapabilitySet {
    /// Resolve `name` as interface `I`
    ///
    /// Returns the exact `Arc` that was registered.
    ///
    /// # Errors
    ///
    /// - `MissingCapability` if nothing is bound to `name`
    /// - `CapabilityTypeMismatch` if `name` is bound to another interface
    pub fn resolve<I>(&self, name: &str) -> Result<Arc<I>, CapabilityError>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| CapabilityError::missing(name))?;

        entry
            .downcast::<I>()
            .ok_or_else(|| CapabilityError::CapabilityTypeMismatch {
                name: name.to_string(),
                expected: std::any::type_name::<I>(),
                actual: entry.interface(),
            })
    }

    /// Resolve interface `I` under its canonical name
    pub fn resolve_capability<I>(&self) -> Result<Arc<I>, CapabilityError>
    where
        I: Capability + ?Sized,
    {
        self.resolve(I::NAME)
    }

    /// Type-erased entry for `name`
    pub fn get_erased(&self, name: &str) -> Option<&ErasedCapability> {
        self.entries.get(name)
    }

    /// Whether `name` is bound
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Bound names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// `(name, interface type)` pairs in sorted order
    pub fn describe(&self) -> Vec<(&str, &'static str)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.interface()))
            .collect()
    }

    /// Number of bound capabilities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no capability is bound
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
