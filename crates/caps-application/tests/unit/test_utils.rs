//! Shared wiring helpers for application tests

use async_trait::async_trait;
use caps_application::{CapabilityRegistry, CapabilitySet, RequestContext};
use caps_domain::ports::{Logger, PasswordHasher, Persistence};
use caps_domain::{Error, Result, User, UserId};
use caps_providers::{PlaintextHasher, RecordingLogger};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A frozen set plus the logger that was wired into it
pub struct Wiring {
    pub set: Arc<CapabilitySet>,
    pub logger: Arc<RecordingLogger>,
}

impl Wiring {
    pub fn context(&self, method: &str, path: &str, body: &str) -> RequestContext {
        RequestContext::new(Arc::clone(&self.set), method, path, body)
    }
}

/// Wire all three capabilities with a recording logger and plaintext hasher
pub fn wire(persistence: Arc<dyn Persistence>) -> Wiring {
    let logger = Arc::new(RecordingLogger::new());
    let logger_capability: Arc<dyn Logger> = logger.clone();

    let mut registry = CapabilityRegistry::new();
    registry
        .register_capability::<dyn Persistence>(persistence)
        .unwrap();
    registry
        .register_capability::<dyn Logger>(logger_capability)
        .unwrap();
    registry
        .register_capability::<dyn PasswordHasher>(Arc::new(PlaintextHasher::new()))
        .unwrap();

    Wiring {
        set: registry.freeze(),
        logger,
    }
}

/// Persistence whose every call fails, counting how often it was reached
#[derive(Default)]
pub struct FailingPersistence {
    pub calls: AtomicUsize,
}

impl FailingPersistence {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Persistence for FailingPersistence {
    async fn create_user(&self, _user_name: &str, _password_hash: &str) -> Result<UserId> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(Error::persistence("disk full"))
    }

    async fn find_user(&self, _id: UserId) -> Result<Option<User>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(Error::persistence("disk full"))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(Error::persistence("disk full"))
    }

    fn provider_name(&self) -> &str {
        "failing"
    }
}
