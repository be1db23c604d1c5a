//! # warden-entity
//!
//! Domain models for Warden. Token and user records are read from the
//! stores; [`identity::UserInfo`] is derived per request and never stored.
//! All models derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod group;
pub mod identity;
pub mod token;
pub mod user;

pub use group::Group;
pub use identity::{SCOPES_EXTRA_KEY, UserInfo};
pub use token::AccessToken;
pub use user::User;
