//! Fallback Orchestrator
//!
//! Tries the primary model, then the fallback model exactly once, and ends
//! every request in a single [`GenerationOutcome`].

use crate::ports::progress::RouterProgressNotifier;
use crate::ports::provider_gateway::ProviderGateway;
use chrono::Utc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use verdict_domain::{FailureKind, GenerationOutcome, GenerationRequest, Model, ModelAttempt};

/// Runs the primary → fallback attempt chain
pub struct FallbackOrchestrator<G: ProviderGateway + 'static> {
    gateway: Arc<G>,
    attempt_timeout: Option<Duration>,
}

impl<G: ProviderGateway + 'static> FallbackOrchestrator<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            attempt_timeout: None,
        }
    }

    pub fn with_attempt_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    /// Walk the attempt chain until one model produces non-empty content.
    ///
    /// Options and prompt are passed to every hop unmodified. A model is
    /// never tried twice, so at most two attempts are recorded.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        progress: &dyn RouterProgressNotifier,
    ) -> GenerationOutcome {
        let mut attempts = Vec::new();

        for (hop, model) in request.attempt_chain().into_iter().enumerate() {
            if hop > 0 {
                info!("Falling back to {}", model);
            }

            progress.on_attempt_start(model);
            let attempt = self.attempt(model, request).await;
            progress.on_attempt_complete(&attempt);

            let content = attempt.content().map(str::to_string);
            attempts.push(attempt);

            if let Some(content) = content {
                return GenerationOutcome::Succeeded {
                    content,
                    model_used: model.clone(),
                    attempts,
                };
            }
        }

        warn!("All {} attempt(s) failed", attempts.len());
        GenerationOutcome::Exhausted { attempts }
    }

    /// One timestamped attempt against one model
    async fn attempt(&self, model: &Model, request: &GenerationRequest) -> ModelAttempt {
        let started_at = Utc::now();
        let clock = Instant::now();
        debug!("Attempting {}", model);

        let call = self
            .gateway
            .invoke(model, request.prompt().content(), request.options());

        let result = match self.attempt_timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(result) => result.map_err(|e| e.to_failure_kind(elapsed_ms(clock))),
                Err(_) => Err(FailureKind::Timeout {
                    after_ms: limit.as_millis() as u64,
                }),
            },
            None => call
                .await
                .map_err(|e| e.to_failure_kind(elapsed_ms(clock))),
        };

        let finished_at = Utc::now();
        let latency_ms = elapsed_ms(clock);

        match result {
            Ok(content) if !content.trim().is_empty() => {
                info!("{} responded in {}ms", model, latency_ms);
                ModelAttempt::success(model.clone(), started_at, finished_at, content)
            }
            Ok(_) => {
                warn!("{} returned an empty response after {}ms", model, latency_ms);
                ModelAttempt::failure(
                    model.clone(),
                    started_at,
                    finished_at,
                    FailureKind::EmptyResponse,
                )
            }
            Err(kind) => {
                warn!("{} failed after {}ms: {}", model, latency_ms, kind);
                ModelAttempt::failure(model.clone(), started_at, finished_at, kind)
            }
        }
    }
}

fn elapsed_ms(clock: Instant) -> u64 {
    clock.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::ports::provider_gateway::GatewayError;
    use crate::use_cases::test_support::ScriptedGateway;
    use verdict_domain::Prompt;

    const PRIMARY: &str = "claude-sonnet-4.5";
    const FALLBACK: &str = "gpt-4.1";

    fn request() -> GenerationRequest {
        GenerationRequest::new(Prompt::try_new("Tell me about Mars").unwrap())
    }

    fn orchestrator(gateway: &Arc<ScriptedGateway>) -> FallbackOrchestrator<ScriptedGateway> {
        FallbackOrchestrator::new(Arc::clone(gateway))
    }

    #[tokio::test]
    async fn test_primary_success_never_touches_fallback() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .reply(PRIMARY, "Mars has two moons.")
                .reply(FALLBACK, "unused"),
        );

        let outcome = orchestrator(&gateway).generate(&request(), &NoProgress).await;

        match outcome {
            GenerationOutcome::Succeeded {
                content,
                model_used,
                attempts,
            } => {
                assert_eq!(content, "Mars has two moons.");
                assert_eq!(model_used, Model::ClaudeSonnet45);
                assert_eq!(attempts.len(), 1);
            }
            other => panic!("expected success, got {:?}", other),
        }
        assert_eq!(gateway.calls_to(PRIMARY), 1);
        assert_eq!(gateway.calls_to(FALLBACK), 0);
    }

    #[tokio::test]
    async fn test_primary_failure_falls_back_once() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .fail(PRIMARY, GatewayError::RateLimited("429".to_string()))
                .reply(FALLBACK, "Mars is the fourth planet."),
        );

        let outcome = orchestrator(&gateway).generate(&request(), &NoProgress).await;

        assert!(outcome.is_success());
        assert_eq!(outcome.model_used(), Some(&Model::Gpt41));
        assert_eq!(outcome.attempts().len(), 2);
        assert!(!outcome.attempts()[0].is_success());
        assert!(outcome.attempts()[1].is_success());
        assert_eq!(gateway.calls_to(PRIMARY), 1);
        assert_eq!(gateway.calls_to(FALLBACK), 1);
    }

    #[tokio::test]
    async fn test_empty_content_counts_as_failure() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .reply(PRIMARY, "   \n")
                .reply(FALLBACK, "Fallback answer."),
        );

        let outcome = orchestrator(&gateway).generate(&request(), &NoProgress).await;

        assert_eq!(outcome.model_used(), Some(&Model::Gpt41));
        assert_eq!(
            outcome.attempts()[0].failure_kind(),
            Some(&FailureKind::EmptyResponse)
        );
    }

    #[tokio::test]
    async fn test_both_fail_exhausted_with_both_reasons() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .fail(PRIMARY, GatewayError::ConnectionError("reset".to_string()))
                .fail(FALLBACK, GatewayError::RequestFailed("500".to_string())),
        );

        let outcome = orchestrator(&gateway).generate(&request(), &NoProgress).await;

        assert!(!outcome.is_success());
        assert_eq!(outcome.attempts().len(), 2);
        let summary = outcome.failure_summary();
        assert!(summary.contains("claude-sonnet-4.5: transport error: reset"));
        assert!(summary.contains("gpt-4.1: provider error: Request failed: 500"));
    }

    #[tokio::test]
    async fn test_attempt_timeout_triggers_fallback() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .reply_after(PRIMARY, "too late", Duration::from_millis(500))
                .reply(FALLBACK, "on time"),
        );

        let outcome = orchestrator(&gateway)
            .with_attempt_timeout(Some(Duration::from_millis(50)))
            .generate(&request(), &NoProgress)
            .await;

        assert_eq!(outcome.model_used(), Some(&Model::Gpt41));
        assert_eq!(
            outcome.attempts()[0].failure_kind(),
            Some(&FailureKind::Timeout { after_ms: 50 })
        );
    }

    #[tokio::test]
    async fn test_same_model_is_tried_once() {
        let gateway = Arc::new(ScriptedGateway::new().fail(PRIMARY, GatewayError::Timeout));
        let request = request().with_fallback(Model::ClaudeSonnet45);

        let outcome = orchestrator(&gateway).generate(&request, &NoProgress).await;

        assert!(!outcome.is_success());
        assert_eq!(outcome.attempts().len(), 1);
        assert_eq!(gateway.calls_to(PRIMARY), 1);
    }

    #[tokio::test]
    async fn test_attempts_are_timestamped_in_order() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .fail(PRIMARY, GatewayError::Other("boom".to_string()))
                .reply(FALLBACK, "ok"),
        );

        let outcome = orchestrator(&gateway).generate(&request(), &NoProgress).await;
        let attempts = outcome.attempts();

        assert!(attempts[0].started_at <= attempts[0].finished_at);
        assert!(attempts[0].finished_at <= attempts[1].started_at);
    }

    #[tokio::test]
    async fn test_deterministic_gateway_is_idempotent() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .fail(PRIMARY, GatewayError::EmptyResponse)
                .reply(FALLBACK, "same every time"),
        );
        let orchestrator = orchestrator(&gateway);

        let first = orchestrator.generate(&request(), &NoProgress).await;
        let second = orchestrator.generate(&request(), &NoProgress).await;

        assert_eq!(first.model_used(), second.model_used());
        match (first, second) {
            (
                GenerationOutcome::Succeeded { content: a, .. },
                GenerationOutcome::Succeeded { content: b, .. },
            ) => assert_eq!(a, b),
            _ => panic!("expected two successes"),
        }
    }
}
