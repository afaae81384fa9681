//! One-shot analysis without the terminal UI.
//!
//! Runs the same orchestrator as the interactive shell and reduces the final
//! session state to a [`Report`]: rendered text for stdout, or the notice
//! the UI would have shown.

use crate::client::Classifier;
use crate::model::{AnalysisMode, ServiceInfo};
use crate::orchestrator::Orchestrator;
use tracing::debug;

/// Outcome of a headless run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Rendered output for stdout.
    Rendered(String),
    /// Notice text for stderr.
    Failed(String),
}

impl Report {
    /// True for [`Report::Rendered`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }
}

/// Validate `input` in `mode`, submit it and render the outcome.
pub async fn analyze(client: &dyn Classifier, mode: AnalysisMode, input: &str) -> Report {
    let mut orchestrator = Orchestrator::new(mode);
    orchestrator.state_mut().set_input(mode, input);

    match orchestrator.submit(client).await {
        Ok(resolution) => debug!(?resolution, "Headless request settled"),
        Err(rejected) => debug!(%rejected, "Headless request rejected"),
    }

    let state = orchestrator.state();
    if let Some(panel) = state.result() {
        Report::Rendered(panel.view().to_string())
    } else if let Some(notice) = state.notice() {
        Report::Failed(notice.message().to_string())
    } else {
        Report::Failed("No result".to_string())
    }
}

/// Query and describe the service.
pub async fn service_info(client: &dyn Classifier) -> Report {
    match client.service_info().await {
        Ok(info) => Report::Rendered(describe(&info)),
        Err(err) => Report::Failed(format!("Service info failed: {err}")),
    }
}

fn describe(info: &ServiceInfo) -> String {
    let mut lines = vec![
        format!("Service:      {}", info.service),
        format!(
            "Model loaded: {}",
            if info.model_loaded { "yes" } else { "no" }
        ),
        format!("Sentiments:   {}", info.supported_sentiments.join(", ")),
    ];
    if let Some(limits) = &info.limits {
        lines.push(format!("Max length:   {} characters", limits.max_text_length));
        lines.push(format!("Max batch:    {} texts", limits.max_batch_size));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ServiceError, ServiceLimits};
    use crate::test_harness::FakeClassifier;

    #[tokio::test]
    async fn single_text_renders_result() {
        let client = FakeClassifier::positive();

        let report = analyze(&client, AnalysisMode::Single, "  I love this product!  ").await;

        let Report::Rendered(text) = report else {
            panic!("expected rendered output, got {report:?}");
        };
        assert!(text.contains("Sentiment:   positive"), "got: {text}");
        assert!(text.contains("Length:      20 characters"), "got: {text}");
    }

    #[tokio::test]
    async fn invalid_text_fails_without_a_call() {
        let client = FakeClassifier::positive();

        let report = analyze(&client, AnalysisMode::Single, "   ").await;

        assert_eq!(
            report,
            Report::Failed("Please enter some text to analyze.".to_string())
        );
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn batch_block_renders_summary() {
        let client = FakeClassifier::positive();

        let report = analyze(&client, AnalysisMode::Batch, "great\n\nlovely\n").await;

        assert!(report.is_success());
        let Report::Rendered(text) = report else {
            unreachable!()
        };
        assert!(text.contains("great"));
        assert!(text.contains("lovely"));
    }

    #[tokio::test]
    async fn service_failure_is_reported_with_prefix() {
        let client = FakeClassifier::failing(ServiceError::Timeout);

        let report = analyze(&client, AnalysisMode::Batch, "one\ntwo").await;

        assert_eq!(
            report,
            Report::Failed("Batch analysis failed: Request timed out".to_string())
        );
    }

    #[test]
    fn describe_lists_limits_when_present() {
        let info = ServiceInfo {
            service: "sentiment-analysis".to_string(),
            model_loaded: true,
            supported_sentiments: vec!["positive".to_string(), "negative".to_string()],
            limits: Some(ServiceLimits {
                max_text_length: 5000,
                max_batch_size: 100,
            }),
        };

        assert_eq!(
            describe(&info),
            "Service:      sentiment-analysis\n\
             Model loaded: yes\n\
             Sentiments:   positive, negative\n\
             Max length:   5000 characters\n\
             Max batch:    100 texts"
        );
    }

    #[tokio::test]
    async fn service_info_uses_client() {
        let report = service_info(&FakeClassifier::positive()).await;

        assert!(matches!(report, Report::Rendered(text) if text.contains("Service:      fake")));
    }
}
