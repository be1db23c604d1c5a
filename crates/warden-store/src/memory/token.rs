//! In-memory token store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::trace;

use warden_core::AppResult;
use warden_core::error::AppError;
use warden_core::traits::{Clock, SystemClock};
use warden_core::types::{GetOptions, RequestContext};
use warden_entity::AccessToken;

use crate::token::TokenStore;

/// Token records keyed by token value.
#[derive(Debug, Clone)]
pub struct MemoryTokenStore {
    tokens: Arc<RwLock<HashMap<String, AccessToken>>>,
    clock: Arc<dyn Clock>,
}

impl Default for MemoryTokenStore {
    fn default() -> Self {
        Self {
            tokens: Arc::default(),
            clock: Arc::new(SystemClock),
        }
    }
}

impl MemoryTokenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `tokens`; later duplicates replace earlier ones.
    pub fn from_tokens(tokens: impl IntoIterator<Item = AccessToken>) -> Self {
        let map = tokens
            .into_iter()
            .map(|token| (token.name.clone(), token))
            .collect();
        Self {
            tokens: Arc::new(RwLock::new(map)),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the clock used to judge request deadlines.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Stores `token`, returning the record it replaced.
    pub async fn insert(&self, token: AccessToken) -> Option<AccessToken> {
        self.tokens.write().await.insert(token.name.clone(), token)
    }

    /// Physically removes the record stored under `name`.
    pub async fn remove(&self, name: &str) -> Option<AccessToken> {
        self.tokens.write().await.remove(name)
    }

    /// Number of stored records, tombstoned ones included.
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// Returns `true` if no records are stored.
    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get_access_token(
        &self,
        ctx: &RequestContext,
        name: &str,
        _opts: &GetOptions,
    ) -> AppResult<AccessToken> {
        super::check_deadline(self.clock.as_ref(), ctx)?;
        trace!(request_id = %ctx.request_id, "Looking up access token");

        self.tokens
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::not_found("access token not found"))
    }
}
