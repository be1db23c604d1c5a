//! Store seeding configuration.

use serde::{Deserialize, Serialize};

/// Where the probe loads its in-memory token, user, and group records from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to a JSON seed file.
    #[serde(default = "default_seed_file")]
    pub seed_file: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_file: default_seed_file(),
        }
    }
}

fn default_seed_file() -> String {
    "config/seed.json".to_string()
}
