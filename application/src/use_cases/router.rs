//! Router façade
//!
//! The two request modes exposed to the outside world: plain generation,
//! and generation followed by a fact-check pass.

use crate::config::RouterConfig;
use crate::ports::progress::{NoProgress, RouterProgressNotifier};
use crate::ports::provider_gateway::ProviderGateway;
use crate::use_cases::fact_check::FactCheckUseCase;
use crate::use_cases::fallback::FallbackOrchestrator;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use verdict_domain::{
    ConsensusResult, DomainError, GenerationOptions, GenerationOutcome, GenerationRequest, Model,
    ModelAttempt, Prompt,
};

/// Errors surfaced by the router
#[derive(Error, Debug)]
pub enum RouterError {
    /// Rejected before any model call
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),

    /// Every model in the attempt chain failed (retryable)
    #[error("All models failed: {summary}")]
    Exhausted {
        attempts: Vec<ModelAttempt>,
        summary: String,
    },
}

impl RouterError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, RouterError::Exhausted { .. })
    }
}

/// Raw, unvalidated input for a routed request
#[derive(Debug, Clone, Default)]
pub struct RouterInput {
    pub prompt: String,
    pub primary_model: Option<String>,
    pub fallback_model: Option<String>,
    pub options: GenerationOptions,
    /// Only read by [`RouterUseCase::generate_with_fact_check`]
    pub enable_fact_check: Option<bool>,
}

impl RouterInput {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_primary(mut self, model: impl Into<String>) -> Self {
        self.primary_model = Some(model.into());
        self
    }

    pub fn with_fallback(mut self, model: impl Into<String>) -> Self {
        self.fallback_model = Some(model.into());
        self
    }

    pub fn with_fact_check(mut self, enabled: bool) -> Self {
        self.enable_fact_check = Some(enabled);
        self
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }
}

/// Successful plain generation
#[derive(Debug, Clone)]
pub struct GenerationResponse {
    pub content: String,
    pub model_used: Model,
    pub attempts: Vec<ModelAttempt>,
    pub timestamp: DateTime<Utc>,
}

/// Successful generation with fact-check evidence
#[derive(Debug, Clone)]
pub struct FactCheckedResponse {
    /// Generated content, evidence section appended when claims were found
    pub content: String,
    pub model_used: Model,
    pub attempts: Vec<ModelAttempt>,
    /// One result per claim, in claim source order
    pub fact_checks: Vec<ConsensusResult>,
    pub timestamp: DateTime<Utc>,
}

impl FactCheckedResponse {
    pub fn fact_check_count(&self) -> usize {
        self.fact_checks.len()
    }
}

/// Use case routing requests through generation and fact-checking
pub struct RouterUseCase<G: ProviderGateway + 'static> {
    orchestrator: FallbackOrchestrator<G>,
    fact_check: FactCheckUseCase<G>,
    config: RouterConfig,
}

impl<G: ProviderGateway + 'static> RouterUseCase<G> {
    pub fn new(gateway: Arc<G>, config: RouterConfig) -> Self {
        Self {
            orchestrator: FallbackOrchestrator::new(Arc::clone(&gateway))
                .with_attempt_timeout(config.attempt_timeout),
            fact_check: FactCheckUseCase::new(gateway, &config),
            config,
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Validate raw input into an immutable request.
    ///
    /// Unset or blank model names fall back to the configured defaults.
    pub fn build_request(&self, input: &RouterInput) -> Result<GenerationRequest, RouterError> {
        let prompt = Prompt::try_new(input.prompt.as_str())?;
        let primary = resolve_model(input.primary_model.as_deref(), &self.config.default_primary);
        let fallback =
            resolve_model(input.fallback_model.as_deref(), &self.config.default_fallback);

        Ok(GenerationRequest::new(prompt)
            .with_primary(primary)
            .with_fallback(fallback)
            .with_fact_check(input.enable_fact_check.unwrap_or(true))
            .with_options(input.options.clone()))
    }

    /// Plain generation with default (no-op) progress
    pub async fn generate(&self, input: RouterInput) -> Result<GenerationResponse, RouterError> {
        self.generate_with_progress(input, &NoProgress).await
    }

    /// Plain generation: Fallback Orchestrator only
    pub async fn generate_with_progress(
        &self,
        input: RouterInput,
        progress: &dyn RouterProgressNotifier,
    ) -> Result<GenerationResponse, RouterError> {
        let request = self.build_request(&input)?;
        let (content, model_used, attempts) = self.run_generation(&request, progress).await?;

        Ok(GenerationResponse {
            content,
            model_used,
            attempts,
            timestamp: Utc::now(),
        })
    }

    /// Generation followed by a fact-check pass with default (no-op) progress
    pub async fn generate_with_fact_check(
        &self,
        input: RouterInput,
    ) -> Result<FactCheckedResponse, RouterError> {
        self.generate_with_fact_check_and_progress(input, &NoProgress)
            .await
    }

    /// Generation followed by a fact-check pass.
    ///
    /// Fact-checking is skipped when the input disables it; judge failures
    /// never fail the request.
    pub async fn generate_with_fact_check_and_progress(
        &self,
        input: RouterInput,
        progress: &dyn RouterProgressNotifier,
    ) -> Result<FactCheckedResponse, RouterError> {
        let request = self.build_request(&input)?;
        let (content, model_used, attempts) = self.run_generation(&request, progress).await?;

        let (content, fact_checks) = if request.fact_check_enabled() {
            let report = self.fact_check.execute(&content, progress).await;
            (report.content, report.results)
        } else {
            info!("Fact-check disabled for this request");
            (content, Vec::new())
        };

        Ok(FactCheckedResponse {
            content,
            model_used,
            attempts,
            fact_checks,
            timestamp: Utc::now(),
        })
    }

    async fn run_generation(
        &self,
        request: &GenerationRequest,
        progress: &dyn RouterProgressNotifier,
    ) -> Result<(String, Model, Vec<ModelAttempt>), RouterError> {
        info!(
            "Routing request (primary: {}, fallback: {})",
            request.primary_model(),
            request.fallback_model()
        );

        let outcome = self.orchestrator.generate(request, progress).await;
        let summary = outcome.failure_summary();

        match outcome {
            GenerationOutcome::Succeeded {
                content,
                model_used,
                attempts,
            } => Ok((content, model_used, attempts)),
            GenerationOutcome::Exhausted { attempts } => {
                warn!("Request exhausted: {}", summary);
                Err(RouterError::Exhausted { attempts, summary })
            }
        }
    }
}

fn resolve_model(name: Option<&str>, default: &Model) -> Model {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => Model::from(name),
        _ => default.clone(),
    }
}
