//! Sentiment Console
//!
//! Terminal client for a remote text-sentiment classification service.
//! Collects text in single or batch mode, validates it locally, submits it
//! to the service one request at a time and renders the classification.
//!
//! Pure core (`model`, `validate`, `state`, `view_state`, `orchestrator`)
//! and impure shell (`client`, `view`, `headless`, `source`, `config`,
//! `logging`).

pub mod client;
pub mod config;
pub mod headless;
pub mod logging;
pub mod model;
pub mod orchestrator;
pub mod source;
pub mod state;
pub mod validate;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
