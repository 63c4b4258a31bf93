//! Persistence Capability Port
//!
//! Defines the contract for storing and retrieving users.

use crate::entities::{User, UserId};
use crate::error::Result;
use async_trait::async_trait;

/// User persistence interface
///
/// Implementations own their concurrency (connection pools, concurrent maps);
/// every method may be called from many request tasks at once.
#[async_trait]
pub trait Persistence: Send + Sync {
    /// Store a new user and return the identifier assigned to it
    async fn create_user(&self, user_name: &str, password_hash: &str) -> Result<UserId>;

    /// Look up a user by identifier
    async fn find_user(&self, id: UserId) -> Result<Option<User>>;

    /// All stored users ordered by identifier
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Provider name for diagnostics
    fn provider_name(&self) -> &str;
}
