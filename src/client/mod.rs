//! Classification service client.
//!
//! The service is an external collaborator. [`Classifier`] is the seam the
//! orchestrator talks through; [`HttpClassifier`] is the production
//! implementation, and tests substitute in-memory fakes.

pub mod http;

pub use http::HttpClassifier;

use crate::model::{
    AnalysisRequest, BatchRequest, RawAnalysis, RawBatch, ServiceError, ServiceInfo,
    SingleRequest,
};
use async_trait::async_trait;

/// Remote sentiment classifier.
///
/// Implementations return the raw response shapes; normalization into
/// canonical results happens in the orchestrator.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// `POST /api/v1/sentiment/analyze`
    async fn analyze(&self, request: &SingleRequest) -> Result<RawAnalysis, ServiceError>;

    /// `POST /api/v1/sentiment/analyze/batch`
    async fn analyze_batch(&self, request: &BatchRequest) -> Result<RawBatch, ServiceError>;

    /// `GET /api/v1/sentiment/info`
    async fn service_info(&self) -> Result<ServiceInfo, ServiceError>;
}

/// Raw response for either request shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RawOutcome {
    /// Body of a single analysis.
    Single(RawAnalysis),
    /// Body of a batch analysis.
    Batch(RawBatch),
}

/// Send `request` to the endpoint matching its mode.
pub async fn classify(
    client: &dyn Classifier,
    request: &AnalysisRequest,
) -> Result<RawOutcome, ServiceError> {
    match request {
        AnalysisRequest::Single(single) => client.analyze(single).await.map(RawOutcome::Single),
        AnalysisRequest::Batch(batch) => client.analyze_batch(batch).await.map(RawOutcome::Batch),
    }
}
