//! In-memory persistence provider
//!
//! Stores users in concurrent maps. Suitable for development and tests; data
//! is lost when the process exits.

use async_trait::async_trait;
use caps_application::ErasedCapability;
use caps_application::providers::{
    CAPABILITY_PROVIDERS, CapabilityProviderConfig, CapabilityProviderEntry,
};
use caps_domain::constants::PERSISTENCE_CAPABILITY;
use caps_domain::entities::{User, UserId};
use caps_domain::error::{Error, Result};
use caps_domain::ports::Persistence;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    password_hash: String,
}

/// In-memory user store
///
/// Usernames are unique; identifiers are assigned sequentially from 1.
#[derive(Debug)]
pub struct InMemoryPersistence {
    users: DashMap<UserId, StoredUser>,
    names: DashMap<String, UserId>,
    next_id: AtomicU64,
}

impl InMemoryPersistence {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            names: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Stored password hash for a user
    pub fn password_hash(&self, id: UserId) -> Option<String> {
        self.users.get(&id).map(|stored| stored.password_hash.clone())
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for InMemoryPersistence {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Persistence for InMemoryPersistence {
    async fn create_user(&self, user_name: &str, password_hash: &str) -> Result<UserId> {
        match self.names.entry(user_name.to_string()) {
            Entry::Occupied(_) => Err(Error::already_exists(format!("user '{user_name}'"))),
            Entry::Vacant(slot) => {
                let id = UserId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
                self.users.insert(
                    id,
                    StoredUser {
                        user: User::new(id, user_name),
                        password_hash: password_hash.to_string(),
                    },
                );
                slot.insert(id);
                Ok(id)
            }
        }
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>> {
        Ok(self.users.get(&id).map(|stored| stored.user.clone()))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let mut users: Vec<User> = self
            .users
            .iter()
            .map(|entry| entry.value().user.clone())
            .collect();
        users.sort_by_key(|user| user.user_id);
        Ok(users)
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

#[linkme::distributed_slice(CAPABILITY_PROVIDERS)]
static MEMORY_PERSISTENCE: CapabilityProviderEntry = CapabilityProviderEntry {
    capability: PERSISTENCE_CAPABILITY,
    name: "memory",
    description: "In-memory user store backed by concurrent maps",
    factory: |_config: &CapabilityProviderConfig| {
        Ok(ErasedCapability::new::<dyn Persistence>(Arc::new(
            InMemoryPersistence::new(),
        )))
    },
};
