//! Token authentication.

pub mod token;

pub use token::TokenAuthenticator;

use async_trait::async_trait;

use warden_core::types::RequestContext;
use warden_entity::UserInfo;

use crate::error::AuthError;

/// Turns a bearer token into an identity.
///
/// `Ok(Some(_))` authenticates the request. `Ok(None)` means this
/// authenticator does not recognise the token and another one may try.
/// Any error means the request must not be authenticated.
#[async_trait]
pub trait Authenticator: Send + Sync + 'static {
    /// Authenticates `value` on behalf of the request described by `ctx`.
    async fn authenticate_token(
        &self,
        ctx: &RequestContext,
        value: &str,
    ) -> Result<Option<UserInfo>, AuthError>;
}
