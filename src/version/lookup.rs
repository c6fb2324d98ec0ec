//! Lookup trait for fetching the published app metadata from a store

#[cfg(test)]
use mockall::automock;

use crate::version::error::LookupError;
use crate::version::types::RemoteAppInfo;

/// Trait for querying an app store for the currently published release
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AppLookup: Send + Sync {
    /// Fetches the published release for a bundle identifier
    ///
    /// Issues exactly one request per call.
    ///
    /// # Returns
    /// * `Ok(RemoteAppInfo)` - The first result reported by the store
    /// * `Err(LookupError)` - If the request could not be built, failed, or returned nothing
    async fn lookup(&self, bundle_id: &str) -> Result<RemoteAppInfo, LookupError>;
}
