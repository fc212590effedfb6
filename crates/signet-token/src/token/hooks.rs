//! Extension hooks for token issuance.
//!
//! Both hooks are optional. When installed, a hook failure aborts the
//! issuance call with the hook's error as the cause; no partial token is
//! produced. Hooks are invoked synchronously and must be safe for
//! concurrent use when the generator is shared across threads.

use serde_json::Value;

use crate::error::BoxError;
use crate::types::request::GenerationRequest;

/// Resolves the authority (role) list for a generation request.
///
/// Implemented for any matching closure, so a plain function value can be
/// installed directly:
///
/// ```
/// use signet_token::{AuthorityResolver, BoxError, GenerationRequest};
///
/// let resolver = |request: &GenerationRequest| -> Result<Vec<String>, BoxError> {
///     Ok(request.client.authorities.clone())
/// };
/// let _: &dyn AuthorityResolver = &resolver;
/// ```
pub trait AuthorityResolver: Send + Sync {
    /// Returns the ordered authority list for the request.
    ///
    /// # Errors
    /// Any error aborts the issuance call.
    fn resolve(&self, request: &GenerationRequest) -> Result<Vec<String>, BoxError>;
}

impl<F> AuthorityResolver for F
where
    F: Fn(&GenerationRequest) -> Result<Vec<String>, BoxError> + Send + Sync,
{
    fn resolve(&self, request: &GenerationRequest) -> Result<Vec<String>, BoxError> {
        self(request)
    }
}

/// Builds the full claim payload for a generation request, replacing the
/// default [`AccessClaims`](crate::token::claims::AccessClaims) construction.
///
/// The payload is an arbitrary JSON object; it is signed verbatim and need
/// not follow the default claim shape.
pub trait ClaimsBuilder: Send + Sync {
    /// Returns the claim payload to sign for the request.
    ///
    /// # Errors
    /// Any error aborts the issuance call.
    fn build(&self, request: &GenerationRequest) -> Result<Value, BoxError>;
}

impl<F> ClaimsBuilder for F
where
    F: Fn(&GenerationRequest) -> Result<Value, BoxError> + Send + Sync,
{
    fn build(&self, request: &GenerationRequest) -> Result<Value, BoxError> {
        self(request)
    }
}
