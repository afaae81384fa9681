//! Domain model types (pure).
//!
//! All types in this module are pure data with no I/O.

pub mod analysis;
pub mod error;
pub mod key_action;
pub mod mode;
pub mod request;
pub mod response;

// Re-export for convenience
pub use analysis::{AnalysisResult, BatchItem, BatchResult, Scores, Sentiment};
pub use error::{AppError, ServiceError, SubmitRejected, ValidationError};
pub use key_action::KeyAction;
pub use mode::{AnalysisMode, UnknownMode};
pub use request::{AnalysisRequest, BatchRequest, SingleRequest};
pub use response::{RawAnalysis, RawBatch, ServiceInfo, ServiceLimits};
