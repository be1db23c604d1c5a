//! # warden-auth
//!
//! Decides whether a bearer token currently grants access and, if so,
//! who it authenticates as.
//!
//! ## Modules
//!
//! - `authenticator` — the [`Authenticator`] seam and the store-backed
//!   [`TokenAuthenticator`]
//! - `error` — rejection taxonomy ([`AuthError`], [`AuthErrorKind`])

pub mod authenticator;
pub mod error;

pub use authenticator::{Authenticator, TokenAuthenticator};
pub use error::{AuthError, AuthErrorKind};
