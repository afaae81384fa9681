//! HTTP implementation of [`Classifier`] using reqwest.

use super::Classifier;
use crate::model::request::{BATCH_ENDPOINT, INFO_ENDPOINT, SINGLE_ENDPOINT};
use crate::model::response::error_message;
use crate::model::{
    BatchRequest, RawAnalysis, RawBatch, ServiceError, ServiceInfo, SingleRequest,
};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Classifier reached over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    client: Client,
    base_url: String,
}

impl HttpClassifier {
    /// Create a client for the service at `base_url`.
    ///
    /// `timeout` bounds each whole request; exceeding it is reported as
    /// [`ServiceError::Timeout`].
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ServiceError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        read_response(response).await
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ServiceError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await.map_err(transport_error)?;

        read_response(response).await
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn analyze(&self, request: &SingleRequest) -> Result<RawAnalysis, ServiceError> {
        self.post_json(SINGLE_ENDPOINT, request).await
    }

    async fn analyze_batch(&self, request: &BatchRequest) -> Result<RawBatch, ServiceError> {
        self.post_json(BATCH_ENDPOINT, request).await
    }

    async fn service_info(&self) -> Result<ServiceInfo, ServiceError> {
        self.get_json(INFO_ENDPOINT).await
    }
}

async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(transport_error)?;
    decode_body(status, &body)
}

/// Turn a status code and body into a decoded value or a reported error.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ServiceError> {
    if !(200..300).contains(&status) {
        return Err(ServiceError::Status {
            status,
            message: error_message(body, status),
        });
    }
    serde_json::from_str(body).map_err(|e| ServiceError::Malformed(e.to_string()))
}

fn transport_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        ServiceError::Timeout
    } else {
        ServiceError::Transport(err.to_string())
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
