//! User Use Cases
//!
//! Registration and lookup of users against the `Persistence`, `Logger` and
//! `PasswordHasher` capabilities.

use crate::capability::Cap;
use crate::dispatch::DomainResult;
use caps_domain::constants::{MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH};
use caps_domain::entities::{NewUser, User, UserId};
use caps_domain::ports::{Logger, PasswordHasher, Persistence};
use thiserror::Error;

/// Domain errors for user operations
///
/// These are data returned inside a `DomainResult`, not faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    /// The request body is not a valid registration payload
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// The payload decoded but violates a business rule
    #[error("Invalid user data: {0}")]
    Validation(String),

    /// No user with the requested id
    #[error("User {0} not found")]
    NotFound(UserId),

    /// A user with the same name already exists
    #[error("User '{0}' already exists")]
    Conflict(String),

    /// The password could not be hashed
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// The persistence capability reported a failure
    #[error("Persistence failure: {0}")]
    Persistence(String),
}

impl UserError {
    /// Stable machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedBody(_) => "malformed_body",
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
            Self::Hashing(_) => "hashing",
            Self::Persistence(_) => "persistence",
        }
    }
}

fn validate(new_user: &NewUser) -> DomainResult<(), UserError> {
    let username = new_user.username.trim();
    if username.is_empty() {
        return Err(UserError::Validation("username must not be empty".into()));
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(UserError::Validation(format!(
            "username must be at most {MAX_USERNAME_LENGTH} characters"
        )));
    }
    if new_user.password.is_empty() {
        return Err(UserError::Validation("password must not be empty".into()));
    }
    if new_user.password.len() > MAX_PASSWORD_LENGTH {
        return Err(UserError::Validation(format!(
            "password must be at most {MAX_PASSWORD_LENGTH} bytes"
        )));
    }
    Ok(())
}

/// Register a user from a JSON body `{"username": .., "password": ..}`
///
/// The password is hashed before it reaches persistence. The stored name is
/// the username with surrounding whitespace removed.
pub async fn create_user(
    persistence: Cap<dyn Persistence>,
    logger: Cap<dyn Logger>,
    hasher: Cap<dyn PasswordHasher>,
    body: &str,
) -> DomainResult<User, UserError> {
    let new_user: NewUser = serde_json::from_str(body).map_err(|e| {
        logger.warn(&format!("Rejected registration payload: {e}"));
        UserError::MalformedBody(e.to_string())
    })?;
    validate(&new_user)?;

    let user_name = new_user.username.trim();
    let password_hash = hasher
        .hash_password(&new_user.password)
        .map_err(|e| UserError::Hashing(e.to_string()))?;

    let user_id = persistence
        .create_user(user_name, &password_hash)
        .await
        .map_err(|e| match e {
            caps_domain::Error::AlreadyExists { .. } => {
                logger.warn(&format!("Registration for existing user '{user_name}'"));
                UserError::Conflict(user_name.to_string())
            }
            other => {
                logger.error(&format!("Failed to store user '{user_name}': {other}"));
                UserError::Persistence(other.to_string())
            }
        })?;

    logger.info(&format!("Created user {user_id} ({user_name})"));
    Ok(User::new(user_id, user_name))
}

/// Fetch a user by the id segment of the request path
pub async fn get_user(
    persistence: Cap<dyn Persistence>,
    logger: Cap<dyn Logger>,
    raw_id: &str,
) -> DomainResult<User, UserError> {
    let user_id = raw_id
        .parse::<u64>()
        .map(UserId::new)
        .map_err(|_| UserError::Validation(format!("'{raw_id}' is not a valid user id")))?;

    match persistence.find_user(user_id).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => {
            logger.debug(&format!("User {user_id} not found"));
            Err(UserError::NotFound(user_id))
        }
        Err(e) => {
            logger.error(&format!("Failed to load user {user_id}: {e}"));
            Err(UserError::Persistence(e.to_string()))
        }
    }
}

/// All users ordered by id
pub async fn list_users(persistence: Cap<dyn Persistence>) -> DomainResult<Vec<User>, UserError> {
    persistence
        .list_users()
        .await
        .map_err(|e| UserError::Persistence(e.to_string()))
}
