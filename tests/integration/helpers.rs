//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use warden_auth::TokenAuthenticator;
use warden_core::traits::FixedClock;
use warden_core::types::UserUid;
use warden_entity::{AccessToken, Group, User};
use warden_store::{Seed, SeededStores};

/// Issuance instant used by every fixture token.
pub fn issued_at() -> DateTime<Utc> {
    DateTime::from_timestamp(1_750_000_000, 0).unwrap()
}

/// Test application context.
pub struct TestApp {
    /// Stores the authenticator reads from; mutate them to change state.
    pub stores: SeededStores,
    /// Clock driving expiry decisions.
    pub clock: Arc<FixedClock>,
    /// Authenticator under test.
    pub authenticator: TokenAuthenticator,
}

impl TestApp {
    /// Builds an app over `seed` with the clock `elapsed` after issuance.
    pub fn new(seed: Seed, elapsed: Duration) -> Self {
        let stores = seed.into_stores();
        let clock = Arc::new(FixedClock::new(issued_at() + elapsed));
        let authenticator = TokenAuthenticator::new(
            stores.tokens.clone(),
            stores.users.clone(),
            stores.groups.clone(),
        )
        .with_clock(clock.clone());

        Self {
            stores,
            clock,
            authenticator,
        }
    }
}

/// A token for `user_name`/`uid` issued at [`issued_at`].
pub fn token(name: &str, user_name: &str, uid: &str, expires_in: i64) -> AccessToken {
    AccessToken {
        name: name.to_string(),
        client_name: "browser-client".to_string(),
        user_name: user_name.to_string(),
        user_uid: UserUid::new(uid),
        scopes: vec!["user:full".to_string()],
        created_at: issued_at(),
        expires_in,
        deleted_at: None,
    }
}

/// An account with directly attached `groups`.
pub fn user(name: &str, uid: &str, groups: &[&str]) -> User {
    User {
        uid: UserUid::new(uid),
        name: name.to_string(),
        full_name: None,
        groups: groups.iter().map(|g| g.to_string()).collect(),
    }
}

/// An externally managed group.
pub fn group(name: &str, users: &[&str]) -> Group {
    Group {
        name: name.to_string(),
        users: users.iter().map(|u| u.to_string()).collect(),
    }
}
