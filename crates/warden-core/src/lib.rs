//! # warden-core
//!
//! Core crate for Warden. Contains the unified error system, configuration
//! schemas, typed identifiers, request context, the clock seam, and
//! logging initialisation.
//!
//! This crate has **no** internal dependencies on other Warden crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
