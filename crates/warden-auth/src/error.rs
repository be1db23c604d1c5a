//! Reasons a token is refused.

use std::fmt;

use thiserror::Error;

use warden_core::error::AppError;

/// Why [`crate::Authenticator::authenticate_token`] refused a token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token's lifetime has elapsed or the token is tombstoned.
    #[error("token is expired")]
    Expired,
    /// The account was recreated or otherwise replaced since issuance.
    #[error("user.uid ({user_uid}) does not match token.user_uid ({token_uid})")]
    IdentityMismatch {
        /// Uid currently held by the account.
        user_uid: String,
        /// Uid recorded in the token at issuance.
        token_uid: String,
    },
    /// A store or resolver failed; carried through unchanged.
    #[error(transparent)]
    Lookup(#[from] AppError),
}

/// Coarse classification of an [`AuthError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorKind {
    /// The token or the user it names does not exist.
    NotFound,
    /// See [`AuthError::Expired`].
    Expired,
    /// See [`AuthError::IdentityMismatch`].
    IdentityMismatch,
    /// Any other collaborator failure.
    CollaboratorFailure,
}

impl AuthErrorKind {
    /// Returns the kind as a lowercase snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Expired => "expired",
            Self::IdentityMismatch => "identity_mismatch",
            Self::CollaboratorFailure => "collaborator_failure",
        }
    }
}

impl fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AuthError {
    /// Classifies this error.
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            Self::Expired => AuthErrorKind::Expired,
            Self::IdentityMismatch { .. } => AuthErrorKind::IdentityMismatch,
            Self::Lookup(e) if e.is_not_found() => AuthErrorKind::NotFound,
            Self::Lookup(_) => AuthErrorKind::CollaboratorFailure,
        }
    }

    /// Returns `true` if a token or user record was missing.
    pub fn is_not_found(&self) -> bool {
        self.kind() == AuthErrorKind::NotFound
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Lookup(e) => e,
            other => AppError::authentication(other.to_string()),
        }
    }
}
