//! Capability Dispatcher
//!
//! Resolves the capabilities a domain function declares and invokes it.
//!
//! A domain function states its dependency surface in its parameter list:
//!
//! ```ignore
//! async fn create_user(
//!     persistence: Cap<dyn Persistence>,
//!     logger: Cap<dyn Logger>,
//!     hasher: Cap<dyn PasswordHasher>,
//!     body: &str,
//! ) -> DomainResult<User, UserError>;
//! ```
//!
//! and the caller lets the dispatcher fill the capability arguments:
//!
//! ```ignore
//! let outcome = dispatch(&ctx, |(p, l, h): (Cap<dyn Persistence>, Cap<dyn Logger>, Cap<dyn PasswordHasher>)| {
//!     create_user(p, l, h, ctx.body())
//! })
//! .await?;
//! ```
//!
//! Resolution happens before the function runs. A missing capability is
//! returned as the outer `Err` and the function is never invoked; the
//! function's own `DomainResult` is returned unchanged as the inner value.

use crate::capability::{Cap, Capability};
use crate::context::RequestContext;
use crate::registry::CapabilitySet;
use caps_domain::error::CapabilityError;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, error};

/// Outcome of domain logic: a value or a typed domain error
pub type DomainResult<T, E> = std::result::Result<T, E>;

/// A set of capabilities a domain function depends on
///
/// Implemented for [`Cap<I>`], for `()` and for tuples of up to four
/// requirements.
pub trait Requirements: Sized {
    /// Resolve every requirement from `capabilities`
    fn resolve_from(capabilities: &CapabilitySet) -> Result<Self, CapabilityError>;

    /// Capability names this requirement set resolves
    fn capability_names() -> Vec<&'static str>;
}

impl Requirements for () {
    fn resolve_from(_capabilities: &CapabilitySet) -> Result<Self, CapabilityError> {
        Ok(())
    }

    fn capability_names() -> Vec<&'static str> {
        Vec::new()
    }
}

impl<I> Requirements for Cap<I>
where
    I: Capability + ?Sized,
{
    fn resolve_from(capabilities: &CapabilitySet) -> Result<Self, CapabilityError> {
        capabilities.resolve_capability::<I>().map(Cap::new)
    }

    fn capability_names() -> Vec<&'static str> {
        vec![I::NAME]
    }
}

macro_rules! impl_requirements_tuple {
    ($($name:ident),+) => {
        impl<$($name: Requirements),+> Requirements for ($($name,)+) {
            fn resolve_from(capabilities: &CapabilitySet) -> Result<Self, CapabilityError> {
                Ok(($($name::resolve_from(capabilities)?,)+))
            }

            fn capability_names() -> Vec<&'static str> {
                let mut names = Vec::new();
                $(names.extend($name::capability_names());)+
                names
            }
        }
    };
}

impl_requirements_tuple!(A);
impl_requirements_tuple!(A, B);
impl_requirements_tuple!(A, B, C);
impl_requirements_tuple!(A, B, C, D);

/// Resolve `name` as interface `I` from the context's capability set
///
/// A failure here is a wiring error: it is logged and returned, never
/// retried or defaulted.
pub fn resolve<I>(context: &RequestContext, name: &str) -> Result<Arc<I>, CapabilityError>
where
    I: ?Sized + Send + Sync + 'static,
{
    context.capabilities().resolve::<I>(name).inspect_err(|err| {
        error!(
            request_id = %context.request_id(),
            capability = name,
            error = %err,
            "Capability resolution failed"
        );
    })
}

/// Resolve interface `I` under its canonical name from the context
pub fn resolve_capability<I>(context: &RequestContext) -> Result<Arc<I>, CapabilityError>
where
    I: Capability + ?Sized,
{
    resolve::<I>(context, I::NAME)
}

/// Resolve `R` from the context and run `domain_fn` with it
///
/// Only resolution errors surface as the outer `Err`; whatever the domain
/// function returns is passed through untouched.
pub async fn dispatch<R, F, Fut, T, E>(
    context: &RequestContext,
    domain_fn: F,
) -> Result<DomainResult<T, E>, CapabilityError>
where
    R: Requirements,
    F: FnOnce(R) -> Fut,
    Fut: Future<Output = DomainResult<T, E>>,
{
    let requirements = R::resolve_from(context.capabilities()).inspect_err(|err| {
        error!(
            request_id = %context.request_id(),
            required = ?R::capability_names(),
            error = %err,
            "Capability resolution failed; domain function not invoked"
        );
    })?;

    debug!(
        request_id = %context.request_id(),
        method = context.method(),
        path = context.path(),
        capabilities = ?R::capability_names(),
        "Dispatching domain function"
    );

    Ok(domain_fn(requirements).await)
}

/// Owner of the frozen capability set used by the transport layer
#[derive(Debug, Clone)]
pub struct Dispatcher {
    capabilities: Arc<CapabilitySet>,
}

impl Dispatcher {
    /// Create a dispatcher over a frozen capability set
    pub fn new(capabilities: Arc<CapabilitySet>) -> Self {
        Self { capabilities }
    }

    /// The shared capability set
    pub fn capabilities(&self) -> &Arc<CapabilitySet> {
        &self.capabilities
    }

    /// Build the context for one inbound request
    pub fn context(
        &self,
        method: impl AsRef<str>,
        path: impl Into<String>,
        body: impl Into<String>,
    ) -> RequestContext {
        RequestContext::new(Arc::clone(&self.capabilities), method, path, body)
    }

    /// See [`resolve`]
    pub fn resolve<I>(&self, context: &RequestContext, name: &str) -> Result<Arc<I>, CapabilityError>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        resolve(context, name)
    }

    /// See [`dispatch`]
    pub async fn dispatch<R, F, Fut, T, E>(
        &self,
        context: &RequestContext,
        domain_fn: F,
    ) -> Result<DomainResult<T, E>, CapabilityError>
    where
        R: Requirements,
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = DomainResult<T, E>>,
    {
        dispatch(context, domain_fn).await
    }
}
