//! Token record lookup.

use async_trait::async_trait;

use warden_core::AppResult;
use warden_core::types::{GetOptions, RequestContext};
use warden_entity::AccessToken;

/// Resolves opaque token values to their stored records.
///
/// Implementations must return tombstoned records rather than hiding them,
/// and must report a missing token as `ErrorKind::NotFound`.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait TokenStore: Send + Sync + 'static {
    /// Fetch the token record stored under `name`.
    async fn get_access_token(
        &self,
        ctx: &RequestContext,
        name: &str,
        opts: &GetOptions,
    ) -> AppResult<AccessToken>;
}
