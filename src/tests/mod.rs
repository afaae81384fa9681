//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive `TuiApp<TestBackend>` with key
//! events and a scripted classifier.
