//! Group membership resolution.

use async_trait::async_trait;

use warden_core::AppResult;
use warden_entity::Group;

/// Maps a user name to the groups an external source places it in.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait GroupResolver: Send + Sync + 'static {
    /// Groups containing `user_name`, in the source's order.
    async fn groups_for(&self, user_name: &str) -> AppResult<Vec<Group>>;
}
