//! Authenticates opaque access tokens against the token and user stores.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, trace};

use warden_core::config::AuthenticatorConfig;
use warden_core::traits::{Clock, SystemClock};
use warden_core::types::{GetOptions, RequestContext};
use warden_entity::{SCOPES_EXTRA_KEY, UserInfo};
use warden_store::{GroupResolver, TokenStore, UserStore};

use super::Authenticator;
use crate::error::AuthError;

/// Validates stored access tokens and assembles the caller's identity.
///
/// Holds only shared handles to its collaborators, so one instance can
/// serve any number of concurrent requests.
#[derive(Clone)]
pub struct TokenAuthenticator {
    tokens: Arc<dyn TokenStore>,
    users: Arc<dyn UserStore>,
    groups: Arc<dyn GroupResolver>,
    clock: Arc<dyn Clock>,
    leeway: TimeDelta,
}

impl std::fmt::Debug for TokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuthenticator")
            .field("clock", &self.clock)
            .field("leeway", &self.leeway)
            .finish()
    }
}

impl TokenAuthenticator {
    /// Creates an authenticator using wall-clock time and no expiry leeway.
    pub fn new(
        tokens: Arc<dyn TokenStore>,
        users: Arc<dyn UserStore>,
        groups: Arc<dyn GroupResolver>,
    ) -> Self {
        Self {
            tokens,
            users,
            groups,
            clock: Arc::new(SystemClock),
            leeway: TimeDelta::zero(),
        }
    }

    /// Creates an authenticator configured from `config`.
    pub fn from_config(
        tokens: Arc<dyn TokenStore>,
        users: Arc<dyn UserStore>,
        groups: Arc<dyn GroupResolver>,
        config: &AuthenticatorConfig,
    ) -> Self {
        Self::new(tokens, users, groups).with_leeway(config.expiry_leeway())
    }

    /// Replaces the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Accepts tokens up to `leeway` past their computed expiry.
    pub fn with_leeway(mut self, leeway: std::time::Duration) -> Self {
        self.leeway = TimeDelta::from_std(leeway).unwrap_or(TimeDelta::MAX);
        self
    }

    /// Authenticates `value` under a fresh request context.
    pub async fn authenticate(&self, value: &str) -> Result<Option<UserInfo>, AuthError> {
        self.authenticate_token(&RequestContext::new(), value).await
    }

    fn expiry_cutoff(&self) -> DateTime<Utc> {
        self.clock
            .now()
            .checked_sub_signed(self.leeway)
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

#[async_trait]
impl Authenticator for TokenAuthenticator {
    async fn authenticate_token(
        &self,
        ctx: &RequestContext,
        value: &str,
    ) -> Result<Option<UserInfo>, AuthError> {
        let opts = GetOptions::default();

        let token = self.tokens.get_access_token(ctx, value, &opts).await?;
        trace!(request_id = %ctx.request_id, user = %token.user_name, "Token record resolved");

        if token.is_expired_at(self.expiry_cutoff()) {
            debug!(
                request_id = %ctx.request_id,
                user = %token.user_name,
                expired_at = %token.expires_at(),
                reason = "expired",
                "Rejecting token"
            );
            return Err(AuthError::Expired);
        }
        if token.is_deleted() {
            debug!(
                request_id = %ctx.request_id,
                user = %token.user_name,
                reason = "tombstoned",
                "Rejecting token"
            );
            return Err(AuthError::Expired);
        }

        let user = self.users.get_user(ctx, &token.user_name, &opts).await?;
        if user.uid != token.user_uid {
            debug!(
                request_id = %ctx.request_id,
                user = %user.name,
                user_uid = %user.uid,
                token_uid = %token.user_uid,
                "Rejecting token issued to a previous account"
            );
            return Err(AuthError::IdentityMismatch {
                user_uid: user.uid.into_string(),
                token_uid: token.user_uid.into_string(),
            });
        }

        let mut groups: Vec<String> = self
            .groups
            .groups_for(&user.name)
            .await?
            .into_iter()
            .map(|group| group.name)
            .collect();
        groups.extend(user.groups);

        let mut extra = BTreeMap::new();
        extra.insert(SCOPES_EXTRA_KEY.to_string(), token.scopes);

        debug!(request_id = %ctx.request_id, user = %user.name, "Token authenticated");

        Ok(Some(UserInfo {
            name: user.name,
            uid: user.uid.into_string(),
            groups,
            extra,
        }))
    }
}
