//! # warden-store
//!
//! Narrow read interfaces the authenticator consumes, plus in-memory
//! implementations for tests, single-node deployments, and the probe.
//!
//! ## Modules
//!
//! - `token` — [`TokenStore`]: resolve a token value to its record
//! - `user` — [`UserStore`]: resolve a user name to its account
//! - `group` — [`GroupResolver`]: externally managed group memberships
//! - `memory` — `RwLock`-backed implementations of all three
//! - `seed` — JSON seed files for the in-memory stores
//!
//! Enable the `mock` feature to get `mockall` mocks of the three traits.

pub mod group;
pub mod memory;
pub mod seed;
pub mod token;
pub mod user;

pub use group::GroupResolver;
pub use memory::{MemoryTokenStore, MemoryUserStore, NoopGroupResolver, StaticGroupResolver};
pub use seed::{Seed, SeededStores};
pub use token::TokenStore;
pub use user::UserStore;

#[cfg(feature = "mock")]
pub use group::MockGroupResolver;
#[cfg(feature = "mock")]
pub use token::MockTokenStore;
#[cfg(feature = "mock")]
pub use user::MockUserStore;
