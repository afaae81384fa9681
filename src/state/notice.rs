//! Transient error notice.
//!
//! At most one notice is visible. Showing a new one replaces the old one
//! and restarts the expiry clock; there is no stacking. The clock is passed
//! in explicitly so expiry is deterministic under test.

use std::time::{Duration, Instant};

/// How long a notice stays visible.
pub const NOTICE_LIFETIME: Duration = Duration::from_secs(5);

/// A visible error message with its expiry deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    message: String,
    shown_at: Instant,
}

impl ErrorNotice {
    /// Create a notice shown at `now`.
    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            shown_at: now,
        }
    }

    /// Notice text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Instant after which the notice is dismissed.
    pub fn expires_at(&self) -> Instant {
        self.shown_at + NOTICE_LIFETIME
    }

    /// Whether the notice has outlived its lifetime at `now`.
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }
}
