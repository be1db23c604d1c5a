//! User account record.

use serde::{Deserialize, Serialize};

use warden_core::types::UserUid;

/// A user account as held by the user store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable account identifier; changes only if the account is recreated.
    pub uid: UserUid,
    /// Canonical user name.
    pub name: String,
    /// Human-readable name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Groups attached directly to the account.
    #[serde(default)]
    pub groups: Vec<String>,
}
