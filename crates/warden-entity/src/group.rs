//! Externally managed group record.

use serde::{Deserialize, Serialize};

/// A group as reported by a group resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group name.
    pub name: String,
    /// Names of member users.
    #[serde(default)]
    pub users: Vec<String>,
}

impl Group {
    /// Returns `true` if `user_name` is listed as a member.
    pub fn has_member(&self, user_name: &str) -> bool {
        self.users.iter().any(|u| u == user_name)
    }
}
