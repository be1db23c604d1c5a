//! Token authenticator configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings applied when validating bearer tokens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthenticatorConfig {
    /// Seconds of clock skew tolerated past a token's computed expiry.
    ///
    /// Zero keeps the strict rule: a token whose expiry is before the
    /// current instant is rejected.
    #[serde(default)]
    pub expiry_leeway_seconds: u64,
}

impl AuthenticatorConfig {
    /// Returns the configured leeway as a [`Duration`].
    pub fn expiry_leeway(&self) -> Duration {
        Duration::from_secs(self.expiry_leeway_seconds)
    }
}
