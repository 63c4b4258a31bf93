//! Request Routing
//!
//! Maps the `(method, path)` of a [`RequestContext`] onto a domain function
//! and dispatches it.
//!
//! | Method | Path | Domain function | Status |
//! |--------|------|-----------------|--------|
//! | POST | `/users` | `create_user` | 201 |
//! | GET | `/users` | `list_users` | 200 |
//! | GET | `/users/<id>` | `get_user` | 200 |

use crate::capability::Cap;
use crate::context::RequestContext;
use crate::dispatch::{DomainResult, dispatch};
use crate::use_cases::users::{UserError, create_user, get_user, list_users};
use caps_domain::error::CapabilityError;
use caps_domain::ports::{Logger, PasswordHasher, Persistence};
use serde_json::{Value, json};
use thiserror::Error;

/// Successful domain outcome ready for the transport
#[derive(Debug, Clone, PartialEq)]
pub struct DomainResponse {
    /// HTTP status code
    pub status: u16,
    /// JSON body
    pub body: Value,
}

impl DomainResponse {
    /// 200 OK with `body`
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    /// 201 Created with `body`
    pub fn created(body: Value) -> Self {
        Self { status: 201, body }
    }
}

/// Domain errors produced while routing a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No route matches the path
    #[error("No route for {method} {path}")]
    NotFound {
        /// Request method
        method: String,
        /// Request path
        path: String,
    },

    /// The path exists but not for this method
    #[error("Method {method} not allowed for {path}")]
    MethodNotAllowed {
        /// Request method
        method: String,
        /// Request path
        path: String,
    },

    /// The domain function returned an error
    #[error(transparent)]
    User(#[from] UserError),
}

impl RouteError {
    /// Stable machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "route_not_found",
            Self::MethodNotAllowed { .. } => "method_not_allowed",
            Self::User(err) => err.kind(),
        }
    }

    /// HTTP status the error maps to
    pub fn status(&self) -> u16 {
        match self {
            Self::NotFound { .. } | Self::User(UserError::NotFound(_)) => 404,
            Self::MethodNotAllowed { .. } => 405,
            Self::User(UserError::Conflict(_)) => 409,
            Self::User(UserError::MalformedBody(_) | UserError::Validation(_)) => 400,
            Self::User(UserError::Hashing(_) | UserError::Persistence(_)) => 500,
        }
    }

    /// JSON error body: `{"error": {"kind": .., "message": ..}}`
    pub fn to_body(&self) -> Value {
        json!({
            "error": {
                "kind": self.kind(),
                "message": self.to_string(),
            }
        })
    }
}

type CreateUserCaps = (Cap<dyn Persistence>, Cap<dyn Logger>, Cap<dyn PasswordHasher>);
type GetUserCaps = (Cap<dyn Persistence>, Cap<dyn Logger>);

fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Route and dispatch one request
///
/// The outer `Err` is reserved for capability resolution failures; every
/// domain outcome, including "no such route", comes back as the inner
/// `DomainResult`.
pub async fn route_request(
    context: &RequestContext,
) -> Result<DomainResult<DomainResponse, RouteError>, CapabilityError> {
    let method = context.method();
    let segments = path_segments(context.path());

    let outcome = match (method, segments.as_slice()) {
        ("POST", ["users"]) => dispatch(context, |(p, l, h): CreateUserCaps| {
            create_user(p, l, h, context.body())
        })
        .await?
        .map(|user| DomainResponse::created(json!(user))),

        ("GET", ["users"]) => dispatch(context, |p: Cap<dyn Persistence>| list_users(p))
            .await?
            .map(|users| DomainResponse::ok(json!(users))),

        ("GET", ["users", id]) => dispatch(context, |(p, l): GetUserCaps| get_user(p, l, id))
            .await?
            .map(|user| DomainResponse::ok(json!(user))),

        (_, ["users"] | ["users", _]) => {
            return Ok(Err(RouteError::MethodNotAllowed {
                method: method.to_string(),
                path: context.path().to_string(),
            }));
        }

        _ => {
            return Ok(Err(RouteError::NotFound {
                method: method.to_string(),
                path: context.path().to_string(),
            }));
        }
    };

    Ok(outcome.map_err(RouteError::from))
}
