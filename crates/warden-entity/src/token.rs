//! Issued OAuth access token record.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use warden_core::types::UserUid;

/// A stored bearer token as written by the issuance flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// The opaque token value; also the store key.
    pub name: String,
    /// OAuth client the token was issued to.
    #[serde(default)]
    pub client_name: String,
    /// Name of the user the token authenticates as.
    pub user_name: String,
    /// Uid of that user at issuance time.
    pub user_uid: UserUid,
    /// Granted scopes, in issuance order.
    #[serde(default)]
    pub scopes: Vec<String>,
    /// When the token was issued.
    pub created_at: DateTime<Utc>,
    /// Lifetime in seconds, counted from `created_at`.
    pub expires_in: i64,
    /// Tombstone; set once the token is logically deleted.
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Absolute expiry instant.
    ///
    /// Saturates at the far future if the lifetime overflows the calendar.
    pub fn expires_at(&self) -> DateTime<Utc> {
        Duration::try_seconds(self.expires_in)
            .and_then(|lifetime| self.created_at.checked_add_signed(lifetime))
            .unwrap_or(if self.expires_in < 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            })
    }

    /// Whether the expiry instant lies strictly before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at() < now
    }

    /// Whether the record carries a tombstone.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
