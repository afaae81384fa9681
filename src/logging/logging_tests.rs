//! Tests for logging initialization and the events the orchestrator emits.

use super::*;
use crate::model::AnalysisMode;
use crate::orchestrator::Orchestrator;
use serial_test::serial;
use std::fs;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// In-memory writer so emitted lines can be inspected.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(directive: &str, f: F) -> String {
    let out = Captured::default();
    let writer = out.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    out.text()
}

// ===== init =====

#[test]
#[serial(tracing_init)]
fn init_creates_log_directory_if_missing() {
    let test_dir = std::env::temp_dir().join("senti_test_logs_create");
    let log_file = test_dir.join("test.log");
    let _ = fs::remove_dir_all(&test_dir);

    // May fail if a subscriber is already set; the directory is created first.
    let _ = init(&log_file);

    assert!(
        test_dir.exists(),
        "Log directory should be created: {:?}",
        test_dir
    );

    let _ = fs::remove_dir_all(&test_dir);
}

#[test]
#[serial(tracing_init)]
fn init_succeeds_when_directory_already_exists() {
    let test_dir = std::env::temp_dir().join("senti_test_logs_exists");
    let log_file = test_dir.join("test.log");
    let _ = fs::create_dir_all(&test_dir);

    let _ = init(&log_file);

    assert!(test_dir.exists());

    let _ = fs::remove_dir_all(&test_dir);
}

#[test]
#[serial(tracing_init)]
fn second_init_reports_subscriber_already_set() {
    let test_dir = std::env::temp_dir().join("senti_test_logs_twice");
    let log_file = test_dir.join("twice.log");

    let _ = init(&log_file);
    let second = init(&log_file);

    assert!(matches!(second, Err(LoggingError::SubscriberAlreadySet)));

    let _ = fs::remove_dir_all(&test_dir);
}

#[test]
fn path_without_file_name_is_rejected_before_touching_disk() {
    let test_dir = std::env::temp_dir().join("senti_test_logs_no_name");
    let _ = fs::remove_dir_all(&test_dir);

    let result = init(&test_dir.join(".."));

    assert!(matches!(result, Err(LoggingError::InvalidPath(_))));
    assert!(!test_dir.exists());
}

// ===== Emitted events =====

#[test]
fn accepted_submission_is_logged_at_info() {
    let output = capture("info", || {
        let mut orchestrator = Orchestrator::new(AnalysisMode::Batch);
        orchestrator
            .state_mut()
            .set_input(AnalysisMode::Batch, "one\ntwo");
        let _pending = orchestrator.prepare(Instant::now()).unwrap();
    });

    assert!(output.contains("Request started"), "got: {output}");
    assert!(output.contains("mode=batch"), "got: {output}");
    assert!(output.contains("items=2"), "got: {output}");
}

#[test]
fn validation_rejection_is_debug_only() {
    let run = || {
        let mut orchestrator = Orchestrator::new(AnalysisMode::Single);
        let _ = orchestrator.prepare(Instant::now());
    };

    assert!(!capture("info", run).contains("Input rejected"));
    assert!(capture("debug", run).contains("Input rejected"));
}

#[test]
fn stale_discard_is_logged() {
    let output = capture("info", || {
        let now = Instant::now();
        let mut orchestrator = Orchestrator::new(AnalysisMode::Single);
        orchestrator
            .state_mut()
            .set_input(AnalysisMode::Single, "hello there");
        let pending = orchestrator.prepare(now).unwrap();
        orchestrator.state_mut().clear_form();
        orchestrator.complete(pending, Err(crate::model::ServiceError::Timeout), now);
    });

    assert!(output.contains("Discarding stale response"), "got: {output}");
}
