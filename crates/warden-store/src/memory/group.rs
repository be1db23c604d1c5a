//! Group resolvers without an external mapping service.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use warden_core::AppResult;
use warden_entity::Group;

use crate::group::GroupResolver;

/// Resolves memberships from a fixed list of groups.
#[derive(Debug, Clone, Default)]
pub struct StaticGroupResolver {
    groups: Arc<RwLock<Vec<Group>>>,
}

impl StaticGroupResolver {
    /// Creates a resolver over `groups`, preserving their order.
    pub fn new(groups: impl IntoIterator<Item = Group>) -> Self {
        Self {
            groups: Arc::new(RwLock::new(groups.into_iter().collect())),
        }
    }

    /// Appends a group.
    pub async fn push(&self, group: Group) {
        self.groups.write().await.push(group);
    }
}

#[async_trait]
impl GroupResolver for StaticGroupResolver {
    async fn groups_for(&self, user_name: &str) -> AppResult<Vec<Group>> {
        Ok(self
            .groups
            .read()
            .await
            .iter()
            .filter(|group| group.has_member(user_name))
            .cloned()
            .collect())
    }
}

/// Reports no external memberships for anyone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopGroupResolver;

#[async_trait]
impl GroupResolver for NoopGroupResolver {
    async fn groups_for(&self, _user_name: &str) -> AppResult<Vec<Group>> {
        Ok(Vec::new())
    }
}
