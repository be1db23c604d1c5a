//! Account identifiers.
//!
//! A [`UserUid`] is opaque: stores may hand out UUIDs or any other stable
//! string. Two uids are the same account only if the strings are equal.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable unique identifier of a user account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserUid(String);

impl UserUid {
    /// Wraps an existing uid string.
    pub fn new(uid: impl Into<String>) -> Self {
        Self(uid.into())
    }

    /// Returns the uid as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the uid, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UserUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserUid {
    fn from(uid: &str) -> Self {
        Self(uid.to_string())
    }
}

impl From<String> for UserUid {
    fn from(uid: String) -> Self {
        Self(uid)
    }
}
