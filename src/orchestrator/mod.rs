//! Request orchestrator.
//!
//! Drives one submission from the active input to a rendered result or an
//! error notice. The lifecycle is split so the terminal shell can keep the
//! network call off its event loop:
//!
//! 1. [`Orchestrator::prepare`] validates and claims the request guard,
//!    returning a [`PendingRequest`].
//! 2. The caller performs the call with [`PendingRequest::run`], or sends
//!    a copy of the request through [`classify`] on another task.
//! 3. [`Orchestrator::complete`] releases the guard and renders the outcome,
//!    unless the session moved on while the call was in flight.
//!
//! [`Orchestrator::submit`] runs all three steps for callers that can await
//! inline (headless mode, tests).

use crate::client::{classify, Classifier, RawOutcome};
use crate::model::response::{normalize_batch, normalize_single};
use crate::model::{AnalysisMode, AnalysisRequest, ServiceError, SubmitRejected};
use crate::state::dispatch::allowed_during_help;
use crate::state::{AppState, Command, Ticket};
use crate::validate::{validate_batch, validate_single};
use crate::view_state::ResultView;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// A request that holds the in-flight slot.
///
/// Must be handed back to [`Orchestrator::complete`] once the call settles;
/// that is the only way the guard returns to Idle.
#[derive(Debug)]
pub struct PendingRequest {
    ticket: Ticket,
    request: AnalysisRequest,
    started_at: Instant,
}

impl PendingRequest {
    /// The validated request being sent.
    pub fn request(&self) -> &AnalysisRequest {
        &self.request
    }

    /// When the request was started.
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Perform the call. Does not touch session state.
    pub async fn run(&self, client: &dyn Classifier) -> Result<RawOutcome, ServiceError> {
        classify(client, &self.request).await
    }
}

/// How a settled call was handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The result panel now shows the response.
    Rendered,
    /// The call failed; an error notice is visible.
    Failed(ServiceError),
    /// The session moved on while the call was in flight; the outcome was
    /// discarded.
    Stale,
}

/// What the shell should do after a command.
#[derive(Debug)]
pub enum Step {
    /// Keep running.
    Continue,
    /// Perform the call for this request, then pass the outcome to
    /// [`Orchestrator::complete`].
    Start(PendingRequest),
    /// Leave the application.
    Quit,
}

/// Owns the session state and sequences submissions.
#[derive(Debug, Default)]
pub struct Orchestrator {
    state: AppState,
}

impl Orchestrator {
    /// Create an orchestrator over a fresh session in `mode`.
    pub fn new(mode: AnalysisMode) -> Self {
        Self {
            state: AppState::new(mode),
        }
    }

    /// Session state, for rendering.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Mutable session state, for input editing and timers.
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Validate the active input and claim the in-flight slot.
    ///
    /// While Busy the submission is ignored without a notice. A validation
    /// failure shows its message as an error notice and sends nothing.
    pub fn prepare(&mut self, now: Instant) -> Result<PendingRequest, SubmitRejected> {
        if self.state.is_busy() {
            debug!("Submission ignored: request already in flight");
            return Err(SubmitRejected::Busy);
        }

        let mode = self.state.mode();
        let input = self.state.active_input();
        let validated = match mode {
            AnalysisMode::Single => validate_single(input).map(AnalysisRequest::Single),
            AnalysisMode::Batch => validate_batch(input).map(AnalysisRequest::Batch),
        };

        match validated {
            Ok(request) => self.begin(request, now),
            Err(err) => {
                debug!(%mode, error = %err, "Input rejected");
                self.state.show_error(err.to_string(), now);
                Err(SubmitRejected::Validation(err))
            }
        }
    }

    /// Claim the in-flight slot for an already-validated request.
    ///
    /// Hides any visible notice and result so the busy indicator is the
    /// only output while the call runs.
    pub fn begin(
        &mut self,
        request: AnalysisRequest,
        now: Instant,
    ) -> Result<PendingRequest, SubmitRejected> {
        let Some(ticket) = self.state.request_mut().try_acquire() else {
            debug!("Submission ignored: request already in flight");
            return Err(SubmitRejected::Busy);
        };

        self.state.hide_error();
        self.state.hide_result();
        info!(
            mode = %request.mode(),
            endpoint = request.endpoint(),
            items = request.item_count(),
            generation = ticket.generation(),
            "Request started"
        );

        Ok(PendingRequest {
            ticket,
            request,
            started_at: now,
        })
    }

    /// Release the slot and render the outcome of a settled call.
    ///
    /// The guard returns to Idle whatever the outcome. When the session
    /// moved on after `pending` was issued, nothing is rendered.
    pub fn complete(
        &mut self,
        pending: PendingRequest,
        outcome: Result<RawOutcome, ServiceError>,
        now: Instant,
    ) -> Resolution {
        let PendingRequest {
            ticket,
            request,
            started_at,
        } = pending;
        let generation = ticket.generation();
        let elapsed = now.saturating_duration_since(started_at);

        if !self.state.request_mut().release(ticket) {
            info!(generation, "Discarding stale response");
            return Resolution::Stale;
        }

        let mode = request.mode();
        let rendered = outcome.and_then(|raw| render(&request, raw, elapsed));

        match rendered {
            Ok(view) => {
                info!(%mode, elapsed_ms = elapsed.as_millis() as u64, "Request completed");
                self.state.show_result(view, now);
                Resolution::Rendered
            }
            Err(err) => {
                warn!(%mode, error = %err, "Request failed");
                self.state.show_error(err.notice_text(mode), now);
                Resolution::Failed(err)
            }
        }
    }

    /// Validate, call and render in one step.
    pub async fn submit(&mut self, client: &dyn Classifier) -> Result<Resolution, SubmitRejected> {
        let pending = self.prepare(Instant::now())?;
        Ok(self.run(client, pending).await)
    }

    /// Call and render an already-validated request in one step.
    pub async fn submit_request(
        &mut self,
        client: &dyn Classifier,
        request: AnalysisRequest,
    ) -> Result<Resolution, SubmitRejected> {
        let pending = self.begin(request, Instant::now())?;
        Ok(self.run(client, pending).await)
    }

    async fn run(&mut self, client: &dyn Classifier, pending: PendingRequest) -> Resolution {
        let outcome = pending.run(client).await;
        self.complete(pending, outcome, Instant::now())
    }

    /// Execute a command against the session.
    ///
    /// While help is open only closing it and quitting have any effect.
    pub fn handle(&mut self, command: Command, now: Instant) -> Step {
        if self.state.help_visible && !allowed_during_help(command) {
            return Step::Continue;
        }

        match command {
            Command::Submit => {
                if let Ok(pending) = self.prepare(now) {
                    return Step::Start(pending);
                }
            }
            Command::Clear => self.state.clear_form(),
            Command::SwitchMode(mode) => self.switch_mode(mode),
            Command::ToggleMode => self.switch_mode(self.state.mode().toggled()),
            Command::LoadExample(number) => {
                if !self.state.load_example(number) {
                    debug!(number, "No such example");
                }
            }
            Command::Scroll(action) => self.state.scroll_result(action),
            Command::DismissError => self.state.hide_error(),
            Command::ToggleHelp => self.state.help_visible = !self.state.help_visible,
            Command::Quit => return Step::Quit,
        }
        Step::Continue
    }

    fn switch_mode(&mut self, mode: AnalysisMode) {
        if mode != self.state.mode() {
            debug!(from = %self.state.mode(), to = %mode, "Mode switched");
        }
        self.state.switch_mode(mode);
    }
}

fn render(
    request: &AnalysisRequest,
    raw: RawOutcome,
    elapsed: Duration,
) -> Result<ResultView, ServiceError> {
    match (request, raw) {
        (AnalysisRequest::Single(_), RawOutcome::Single(raw)) => Ok(ResultView::single(
            &normalize_single(&raw),
            elapsed,
            request.input_length().unwrap_or_default(),
        )),
        (AnalysisRequest::Batch(batch), RawOutcome::Batch(raw)) => Ok(ResultView::batch(
            &normalize_batch(&raw, &batch.texts),
            elapsed,
        )),
        _ => Err(ServiceError::Malformed(
            "response shape does not match request".to_string(),
        )),
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
