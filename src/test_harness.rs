//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions,
//! plus an in-memory [`Classifier`] so no test needs a live service.

use crate::client::Classifier;
use crate::config::keybindings::KeyBindings;
use crate::model::response::RawScores;
use crate::model::{
    AnalysisMode, AnalysisRequest, BatchRequest, RawAnalysis, RawBatch, ServiceError, ServiceInfo,
    SingleRequest,
};
use crate::orchestrator::Orchestrator;
use crate::state::AppState;
use crate::view::{ColorConfig, Palette, TuiApp, TuiOptions};
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Semaphore;

/// How long harness waits for a fake call before giving up.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep snapshots clean.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Raw single-analysis body with the primary field names.
pub(crate) fn raw_analysis(label: &str, confidence: f64, positive: f64, negative: f64) -> RawAnalysis {
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

/// Scripted in-memory classifier.
///
/// Records every request it receives. A gated fake holds each call until
/// the test adds a permit to the returned semaphore.
pub(crate) struct FakeClassifier {
    single: Result<RawAnalysis, ServiceError>,
    batch: Option<Result<RawBatch, ServiceError>>,
    gate: Option<Arc<Semaphore>>,
    calls: AtomicUsize,
    sent: Mutex<Vec<AnalysisRequest>>,
}

#[allow(dead_code)] // Not all helpers used in every test module
impl FakeClassifier {
    /// Answers every single text as positive and echoes each batch text back
    /// as positive.
    pub(crate) fn positive() -> Self {
        Self {
            single: Ok(raw_analysis("positive", 0.92, 0.92, 0.08)),
            batch: None,
            gate: None,
            calls: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call with `err`.
    pub(crate) fn failing(err: ServiceError) -> Self {
        Self {
            single: Err(err.clone()),
            batch: Some(Err(err)),
            ..Self::positive()
        }
    }

    /// Answer batch calls with `batch` instead of echoing.
    pub(crate) fn with_batch(mut self, batch: RawBatch) -> Self {
        self.batch = Some(Ok(batch));
        self
    }

    /// Hold each call until a permit is added to the returned semaphore.
    pub(crate) fn gated(mut self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    /// Number of calls received.
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests received, in order.
    pub(crate) fn sent(&self) -> Vec<AnalysisRequest> {
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
impl Classifier for FakeClassifier {
    async fn analyze(&self, request: &SingleRequest) -> Result<RawAnalysis, ServiceError> {
        self.record(AnalysisRequest::Single(request.clone())).await;
        self.single.clone()
    }

    async fn analyze_batch(&self, request: &BatchRequest) -> Result<RawBatch, ServiceError> {
        self.record(AnalysisRequest::Batch(request.clone())).await;
        match &self.batch {
            Some(scripted) => scripted.clone(),
            None => Ok(RawBatch {
                results: request
                    .texts
                    .iter()
                    .map(|text| RawAnalysis {
                        text: Some(text.clone()),
                        ..raw_analysis("positive", 0.9, 0.9, 0.1)
                    })
                    .collect(),
            }),
        }
    }

    async fn service_info(&self) -> Result<ServiceInfo, ServiceError> {
        Ok(ServiceInfo {
            service: "fake".to_string(),
            model_loaded: true,
            supported_sentiments: vec!["positive".to_string(), "negative".to_string()],
            limits: None,
        })
    }
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests. Owns the runtime the fake calls run on,
/// so tests using it are plain `#[test]` functions.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    client: Arc<FakeClassifier>,
    // Declared after `app` so in-flight tasks are dropped before the runtime.
    runtime: tokio::runtime::Runtime,
    running: bool,
}

#[allow(dead_code)] // Not all helpers used in every test module
impl AcceptanceTestHarness {
    /// Harness in `mode` backed by `client`, with an 80x24 terminal.
    pub(crate) fn new(mode: AnalysisMode, client: FakeClassifier) -> Self {
        Self::with_size(mode, client, 80, 24)
    }

    /// Harness with a custom terminal size.
    pub(crate) fn with_size(
        mode: AnalysisMode,
        client: FakeClassifier,
        width: u16,
        height: u16,
    ) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("test runtime should build");
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("test terminal should build");
        let client = Arc::new(client);
        let shared: Arc<dyn Classifier> = client.clone();
        let options = TuiOptions {
            palette: Palette::new(ColorConfig::fixed(false)),
            server: "http://127.0.0.1:5000".to_string(),
            key_bindings: KeyBindings::default(),
        };

        let app = TuiApp::new_for_test(
            terminal,
            Orchestrator::new(mode),
            shared,
            runtime.handle().clone(),
            options,
        );

        Self {
            app,
            client,
            runtime,
            running: true,
        }
    }

    /// Send a single key event
    ///
    /// Returns true if app quit as a result of this key
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+S)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));

        if quit {
            self.running = false;
        }

        quit
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.send_key(KeyCode::Enter);
            } else if self.send_key(KeyCode::Char(ch)) {
                break; // Quit encountered
            }
        }
    }

    /// Paste text in one event.
    pub fn paste(&mut self, text: &str) {
        self.app.paste_test(text);
    }

    /// Press the submit shortcut.
    pub fn submit(&mut self) {
        self.send_key_with_mods(KeyCode::Char('s'), KeyModifiers::CONTROL);
    }

    /// Wait for the in-flight call (if any) and apply its outcome.
    ///
    /// # Panics
    /// Panics if the call does not finish in time.
    pub fn settle(&mut self) {
        if self.app.has_in_flight() {
            assert!(
                self.app.wait_for_request(SETTLE_TIMEOUT),
                "request did not finish within {SETTLE_TIMEOUT:?}"
            );
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Mutable app state, for arranging preconditions.
    pub fn state_mut(&mut self) -> &mut AppState {
        self.app.app_state_mut()
    }

    /// The fake behind the app.
    pub fn client(&self) -> &FakeClassifier {
        &self.client
    }

    /// Runtime the calls run on.
    pub fn runtime(&self) -> &tokio::runtime::Runtime {
        &self.runtime
    }

    /// Advance timers to `now`.
    pub fn tick(&mut self, now: std::time::Instant) {
        self.app.tick_test(now);
    }

    /// Check if app is still running (didn't quit)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
