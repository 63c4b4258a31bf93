//! Fixed-id persistence provider
//!
//! Hands out the same identifier for every created user. Used to pin
//! identifiers in tests and demos.

use async_trait::async_trait;
use caps_application::ErasedCapability;
use caps_application::providers::{
    CAPABILITY_PROVIDERS, CapabilityProviderConfig, CapabilityProviderEntry,
};
use caps_domain::constants::PERSISTENCE_CAPABILITY;
use caps_domain::entities::{User, UserId};
use caps_domain::error::Result;
use caps_domain::ports::Persistence;
use std::sync::{Arc, PoisonError, RwLock};

/// Persistence that assigns a fixed id to every user
///
/// Remembers the most recently created user so it can be read back.
#[derive(Debug)]
pub struct FixedIdPersistence {
    id: UserId,
    last: RwLock<Option<User>>,
}

impl FixedIdPersistence {
    /// Create a store that always assigns `id`
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            last: RwLock::new(None),
        }
    }

    /// The id handed out on every create
    pub fn id(&self) -> UserId {
        self.id
    }
}

#[async_trait]
impl Persistence for FixedIdPersistence {
    async fn create_user(&self, user_name: &str, _password_hash: &str) -> Result<UserId> {
        let mut last = self.last.write().unwrap_or_else(PoisonError::into_inner);
        *last = Some(User::new(self.id, user_name));
        Ok(self.id)
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>> {
        let last = self.last.read().unwrap_or_else(PoisonError::into_inner);
        Ok(last.as_ref().filter(|user| user.user_id == id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let last = self.last.read().unwrap_or_else(PoisonError::into_inner);
        Ok(last.iter().cloned().collect())
    }

    fn provider_name(&self) -> &str {
        "fixed"
    }
}

fn fixed_persistence_factory(
    config: &CapabilityProviderConfig,
) -> std::result::Result<ErasedCapability, String> {
    let raw = config
        .extra("user_id")
        .ok_or_else(|| "missing required setting 'user_id'".to_string())?;
    let id = raw
        .parse::<u64>()
        .map_err(|e| format!("invalid user_id '{raw}': {e}"))?;
    Ok(ErasedCapability::new::<dyn Persistence>(Arc::new(
        FixedIdPersistence::new(UserId::new(id)),
    )))
}

#[linkme::distributed_slice(CAPABILITY_PROVIDERS)]
static FIXED_PERSISTENCE: CapabilityProviderEntry = CapabilityProviderEntry {
    capability: PERSISTENCE_CAPABILITY,
    name: "fixed",
    description: "Assigns the configured `user_id` to every created user",
    factory: fixed_persistence_factory,
};
