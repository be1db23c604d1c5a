//! Core type definitions used across the Warden workspace.

pub mod context;
pub mod id;

pub use context::{GetOptions, RequestContext};
pub use id::UserUid;
