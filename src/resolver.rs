//! Resolver trait for determining the latest version of a tool

#[cfg(test)]
use mockall::automock;

use crate::error::ResolveError;
use crate::types::ToolSource;

/// Trait for resolving the latest released version of a tool
///
/// Tools can implement this to resolve versions differently. Each call is a
/// single stateless request against the upstream; failures are never retried
/// here.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionResolver: Send + Sync {
    /// Returns the upstream source this resolver queries
    fn source(&self) -> ToolSource;

    /// Resolves the latest version identifier
    ///
    /// # Returns
    /// * `Ok(String)` - The version string; its format depends on the source
    ///   (a release tag, a raw channel body, or a dotted number)
    /// * `Err(ResolveError)` - If the lookup fails
    async fn version(&self) -> Result<String, ResolveError>;
}
