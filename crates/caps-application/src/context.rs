//! Per-request context

use crate::registry::CapabilitySet;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Request-scoped data plus a shared reference to the capability set
///
/// Created by the transport for each inbound request and dropped when the
/// request completes. The capability set is shared, never owned.
#[derive(Debug, Clone)]
pub struct RequestContext {
    capabilities: Arc<CapabilitySet>,
    request_id: Uuid,
    received_at: DateTime<Utc>,
    method: String,
    path: String,
    body: String,
}

impl RequestContext {
    /// Create a context for one request
    ///
    /// The method is normalized to upper case.
    pub fn new(
        capabilities: Arc<CapabilitySet>,
        method: impl AsRef<str>,
        path: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            capabilities,
            request_id: Uuid::new_v4(),
            received_at: Utc::now(),
            method: method.as_ref().to_ascii_uppercase(),
            path: path.into(),
            body: body.into(),
        }
    }

    /// Capability set this request resolves against
    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    /// Shared handle to the capability set
    pub fn capabilities_arc(&self) -> &Arc<CapabilitySet> {
        &self.capabilities
    }

    /// Unique id generated for this request
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// When the context was created
    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    /// Upper-case HTTP method
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Request path as received
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw request body
    pub fn body(&self) -> &str {
        &self.body
    }
}
