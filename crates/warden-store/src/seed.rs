//! JSON seed files for the in-memory stores.
//!
//! ```json
//! {
//!   "tokens": [{ "name": "...", "user_name": "alice", "user_uid": "u1",
//!                "created_at": "2024-01-01T00:00:00Z", "expires_in": 3600 }],
//!   "users":  [{ "uid": "u1", "name": "alice", "groups": ["admins"] }],
//!   "groups": [{ "name": "eng", "users": ["alice"] }]
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use warden_core::AppResult;
use warden_core::error::AppError;
use warden_entity::{AccessToken, Group, User};

use crate::memory::{MemoryTokenStore, MemoryUserStore, StaticGroupResolver};

/// Records to preload into the in-memory stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    /// Token records.
    #[serde(default)]
    pub tokens: Vec<AccessToken>,
    /// User accounts.
    #[serde(default)]
    pub users: Vec<User>,
    /// Externally managed groups.
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// The three in-memory collaborators built from a [`Seed`].
#[derive(Debug, Clone)]
pub struct SeededStores {
    /// Token store.
    pub tokens: Arc<MemoryTokenStore>,
    /// User store.
    pub users: Arc<MemoryUserStore>,
    /// Group resolver.
    pub groups: Arc<StaticGroupResolver>,
}

impl Seed {
    /// Parses a seed document.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses the seed file at `path`.
    pub async fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::with_source(
                warden_core::ErrorKind::Configuration,
                format!("Failed to read seed file '{}': {e}", path.display()),
                e,
            )
        })?;

        let seed = Self::from_json(&raw)?;
        info!(
            path = %path.display(),
            tokens = seed.tokens.len(),
            users = seed.users.len(),
            groups = seed.groups.len(),
            "Seed loaded"
        );
        Ok(seed)
    }

    /// Builds the in-memory stores.
    pub fn into_stores(self) -> SeededStores {
        SeededStores {
            tokens: Arc::new(MemoryTokenStore::from_tokens(self.tokens)),
            users: Arc::new(MemoryUserStore::from_users(self.users)),
            groups: Arc::new(StaticGroupResolver::new(self.groups)),
        }
    }
}
