//! Shared fakes for integration tests.

#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use sentiment_console::client::Classifier;
use sentiment_console::model::response::RawScores;
use sentiment_console::model::{
    AnalysisRequest, BatchRequest, RawAnalysis, RawBatch, ServiceError, ServiceInfo,
    SingleRequest,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// Raw single-analysis body with the primary field names.
pub fn raw(label: &str, confidence: f64, positive: f64, negative: f64) -> RawAnalysis {
    RawAnalysis {
        sentiment: Some(label.to_string()),
        confidence: Some(confidence),
        scores: Some(RawScores {
            positive: Some(positive),
            negative: Some(negative),
            ..RawScores::default()
        }),
        ..RawAnalysis::default()
    }
}

/// Classifier answering from a script, counting calls.
pub struct Scripted {
    single: Result<RawAnalysis, ServiceError>,
    batch: Result<RawBatch, ServiceError>,
    gate: Option<Arc<Semaphore>>,
    calls: AtomicUsize,
    sent: Mutex<Vec<AnalysisRequest>>,
}

impl Scripted {
    pub fn single(response: Result<RawAnalysis, ServiceError>) -> Self {
        Self {
            single: response,
            batch: Ok(RawBatch::default()),
            gate: None,
            calls: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn batch(response: Result<RawBatch, ServiceError>) -> Self {
        Self {
            batch: response,
            ..Self::single(Ok(RawAnalysis::default()))
        }
    }

    /// Hold every call until a permit is added to the returned semaphore.
    pub fn gated(mut self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<AnalysisRequest> {
        self.sent.lock().unwrap().clone()
    }

    async fn record(&self, request: AnalysisRequest) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(request);
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
    }
}

#[async_trait]
impl Classifier for Scripted {
    async fn analyze(&self, request: &SingleRequest) -> Result<RawAnalysis, ServiceError> {
        self.record(AnalysisRequest::Single(request.clone())).await;
        self.single.clone()
    }

    async fn analyze_batch(&self, request: &BatchRequest) -> Result<RawBatch, ServiceError> {
        self.record(AnalysisRequest::Batch(request.clone())).await;
        self.batch.clone()
    }

    async fn service_info(&self) -> Result<ServiceInfo, ServiceError> {
        Err(ServiceError::Transport("not scripted".to_string()))
    }
}

/// Answer one HTTP request on a loopback port from a background thread.
///
/// Returns the base URL. The request is read in full (headers, then the
/// body by Content-Length) before the canned response is written.
pub fn serve_once(status_line: &'static str, body: &'static str) -> String {
    use std::io::{Read, Write};

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let Ok((mut socket, _)) = listener.accept() else {
            return;
        };
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        let header_end = loop {
            let n = socket.read(&mut chunk).unwrap_or(0);
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };
        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        while buf.len() < header_end + content_length {
            match socket.read(&mut chunk) {
                Ok(0) | Err(_) => break,
                Ok(n) => buf.extend_from_slice(&chunk[..n]),
            }
        }

        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes());
    });

    format!("http://{addr}")
}
