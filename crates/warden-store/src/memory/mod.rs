//! In-memory collaborators backed by Tokio `RwLock`s.
//!
//! Suitable for tests and single-node deployments only; state is lost on
//! restart and is never shared between processes.

pub mod group;
pub mod token;
pub mod user;

pub use group::{NoopGroupResolver, StaticGroupResolver};
pub use token::MemoryTokenStore;
pub use user::MemoryUserStore;

use warden_core::AppResult;
use warden_core::error::AppError;
use warden_core::traits::Clock;
use warden_core::types::RequestContext;

/// Fails the lookup if the caller's deadline has elapsed according to `clock`.
fn check_deadline(clock: &dyn Clock, ctx: &RequestContext) -> AppResult<()> {
    if ctx.is_past_deadline(clock.now()) {
        return Err(AppError::deadline_exceeded(format!(
            "request {} exceeded its deadline",
            ctx.request_id
        )));
    }
    Ok(())
}
