//! Session state machine (pure).
//!
//! All state transitions are testable without a terminal or a network.

pub mod app_state;
pub mod dispatch;
pub mod examples;
pub mod notice;
pub mod request_guard;
pub mod scroll;

// Re-export for convenience
pub use app_state::{AppState, ResultPanel, BAR_FILL_DELAY};
pub use dispatch::{command_for, Command};
pub use notice::{ErrorNotice, NOTICE_LIFETIME};
pub use request_guard::{RequestGuard, RequestState, Ticket};
pub use scroll::ScrollAction;
