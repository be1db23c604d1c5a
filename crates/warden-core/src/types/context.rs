//! Per-request context and lookup options threaded through collaborator calls.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Carries the caller's request identity and deadline to each lookup.
///
/// The authenticator never enforces the deadline itself; it hands the
/// context to the token and user stores, which decide how to honour it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Correlation id for log lines emitted while serving the request.
    pub request_id: Uuid,
    /// Instant after which collaborators should stop working on the request.
    pub deadline: Option<DateTime<Utc>>,
}

impl RequestContext {
    /// Creates a context with a fresh request id and no deadline.
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            deadline: None,
        }
    }

    /// Creates a context that expires `timeout` after `now`.
    pub fn with_timeout(now: DateTime<Utc>, timeout: Duration) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            deadline: Some(now + timeout),
        }
    }

    /// Returns `true` if the deadline is set and `now` is past it.
    pub fn is_past_deadline(&self, now: DateTime<Utc>) -> bool {
        self.deadline.is_some_and(|deadline| now > deadline)
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Options for a single get-by-key lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetOptions {
    /// Version to read at. `None` requests the most recent state.
    pub resource_version: Option<String>,
}

impl GetOptions {
    /// Returns `true` if these options request the most recent state.
    pub fn is_latest(&self) -> bool {
        self.resource_version.is_none()
    }
}
