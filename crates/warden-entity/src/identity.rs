//! Authenticated identity produced for each request.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Extra-attribute key under which a token's granted scopes are exposed.
///
/// Authorization reads scopes from this key only.
pub const SCOPES_EXTRA_KEY: &str = "scopes.authorization.warden.io";

/// Who a bearer token authenticates as.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// User name.
    pub name: String,
    /// Account uid.
    pub uid: String,
    /// Group memberships; resolver groups first, then account groups.
    pub groups: Vec<String>,
    /// Additional attributes keyed by well-known names.
    pub extra: BTreeMap<String, Vec<String>>,
}

impl UserInfo {
    /// Scopes granted to this identity, or an empty slice if none were set.
    pub fn scopes(&self) -> &[String] {
        self.extra
            .get(SCOPES_EXTRA_KEY)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns `true` if the identity belongs to `group`.
    pub fn in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scopes_read_from_well_known_key() {
        let mut info = UserInfo::default();
        assert!(info.scopes().is_empty());

        info.extra.insert(
            SCOPES_EXTRA_KEY.to_string(),
            vec!["user:info".to_string(), "user:check-access".to_string()],
        );
        assert_eq!(info.scopes(), ["user:info", "user:check-access"]);
    }

    #[test]
    fn test_in_group() {
        let info = UserInfo {
            groups: vec!["eng".to_string(), "admins".to_string()],
            ..Default::default()
        };
        assert!(info.in_group("admins"));
        assert!(!info.in_group("ops"));
    }
}
