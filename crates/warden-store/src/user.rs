//! User record lookup.

use async_trait::async_trait;

use warden_core::AppResult;
use warden_core::types::{GetOptions, RequestContext};
use warden_entity::User;

/// Resolves user names to accounts.
///
/// A missing account must be reported as `ErrorKind::NotFound`.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Fetch the account named `name`.
    async fn get_user(&self, ctx: &RequestContext, name: &str, opts: &GetOptions)
    -> AppResult<User>;
}
