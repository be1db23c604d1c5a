//! In-memory user store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::trace;

use warden_core::AppResult;
use warden_core::error::AppError;
use warden_core::traits::{Clock, SystemClock};
use warden_core::types::{GetOptions, RequestContext};
use warden_entity::User;

use crate::user::UserStore;

/// Accounts keyed by user name.
#[derive(Debug, Clone)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
    clock: Arc<dyn Clock>,
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self {
            users: Arc::default(),
            clock: Arc::new(SystemClock),
        }
    }
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `users`.
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let map = users
            .into_iter()
            .map(|user| (user.name.clone(), user))
            .collect();
        Self {
            users: Arc::new(RwLock::new(map)),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the clock used to judge request deadlines.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Stores `user`, returning the account it replaced.
    pub async fn insert(&self, user: User) -> Option<User> {
        self.users.write().await.insert(user.name.clone(), user)
    }

    /// Removes the account named `name`.
    pub async fn remove(&self, name: &str) -> Option<User> {
        self.users.write().await.remove(name)
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_user(
        &self,
        ctx: &RequestContext,
        name: &str,
        _opts: &GetOptions,
    ) -> AppResult<User> {
        super::check_deadline(self.clock.as_ref(), ctx)?;
        trace!(request_id = %ctx.request_id, user = %name, "Looking up user");

        self.users
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("user '{name}' not found")))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration};
    use warden_core::error::ErrorKind;
    use warden_core::traits::FixedClock;
    use warden_core::types::UserUid;

    use super::*;

    #[tokio::test]
    async fn test_recreated_account_replaces_uid() {
        let store = MemoryUserStore::new();
        let ctx = RequestContext::new();
        let opts = GetOptions::default();

        let original = User {
            uid: UserUid::new("u1"),
            name: "alice".to_string(),
            full_name: None,
            groups: vec![],
        };
        store.insert(original.clone()).await;
        assert_eq!(store.get_user(&ctx, "alice", &opts).await.unwrap().uid.as_str(), "u1");

        store.remove("alice").await;
        assert!(store.get_user(&ctx, "alice", &opts).await.unwrap_err().is_not_found());

        store
            .insert(User {
                uid: UserUid::new("u2"),
                ..original
            })
            .await;
        assert_eq!(store.get_user(&ctx, "alice", &opts).await.unwrap().uid.as_str(), "u2");
    }

    #[tokio::test]
    async fn test_elapsed_deadline_is_refused() {
        let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let store = MemoryUserStore::from_users([User {
            uid: UserUid::new("u1"),
            name: "alice".to_string(),
            full_name: None,
            groups: vec![],
        }])
        .with_clock(Arc::new(FixedClock::new(start + Duration::seconds(5))));

        let ctx = RequestContext::with_timeout(start, Duration::seconds(1));
        let err = store
            .get_user(&ctx, "alice", &GetOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::DeadlineExceeded);
    }
}
