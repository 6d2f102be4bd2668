//! Fact-check pass
//!
//! Claim Extractor → Judge Panel Coordinator → Consensus Engine → Evidence
//! Assembler, run for every claim of a generated text.

use crate::config::RouterConfig;
use crate::ports::progress::RouterProgressNotifier;
use crate::ports::provider_gateway::ProviderGateway;
use crate::use_cases::judge_panel::JudgePanelCoordinator;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use verdict_domain::{
    Claim, ClaimExtractor, ConsensusEngine, ConsensusResult, EvidenceAssembler, JudgePanel,
};

/// Result of fact-checking one text
#[derive(Debug, Clone)]
pub struct FactCheckReport {
    /// Original content with the evidence section appended (unchanged when
    /// no claims were found)
    pub content: String,
    /// One result per claim, in claim source order
    pub results: Vec<ConsensusResult>,
}

impl FactCheckReport {
    pub fn count(&self) -> usize {
        self.results.len()
    }
}

/// Use case for fact-checking generated content
pub struct FactCheckUseCase<G: ProviderGateway + 'static> {
    coordinator: JudgePanelCoordinator<G>,
    extractor: ClaimExtractor,
    engine: ConsensusEngine,
    panel: JudgePanel,
    panel_deadline: Duration,
    claim_concurrency: usize,
}

impl<G: ProviderGateway + 'static> FactCheckUseCase<G> {
    pub fn new(gateway: Arc<G>, config: &RouterConfig) -> Self {
        Self {
            coordinator: JudgePanelCoordinator::new(gateway),
            extractor: ClaimExtractor::new(config.extractor.clone()),
            engine: ConsensusEngine::new(config.quorum),
            panel: config.panel.clone(),
            panel_deadline: config.panel_deadline,
            claim_concurrency: config.claim_concurrency.max(1),
        }
    }

    /// Fact-check `content`.
    ///
    /// Claims are judged concurrently (bounded by the configured claim
    /// concurrency); results keep claim source order regardless of which
    /// panel finishes first.
    pub async fn execute(
        &self,
        content: &str,
        progress: &dyn RouterProgressNotifier,
    ) -> FactCheckReport {
        let claims = self.extractor.extract(content);
        info!("Fact-checking {} claim(s)", claims.len());
        progress.on_fact_check_start(claims.len());

        if claims.is_empty() {
            progress.on_fact_check_complete();
            return FactCheckReport {
                content: content.to_string(),
                results: Vec::new(),
            };
        }

        let checks: Vec<_> = claims
            .into_iter()
            .map(|claim| self.check_claim(claim, progress))
            .collect();

        let results: Vec<ConsensusResult> = stream::iter(checks)
            .buffered(self.claim_concurrency)
            .collect()
            .await;

        progress.on_fact_check_complete();

        FactCheckReport {
            content: EvidenceAssembler::append(content, &results),
            results,
        }
    }

    async fn check_claim(
        &self,
        claim: Claim,
        progress: &dyn RouterProgressNotifier,
    ) -> ConsensusResult {
        let assessments = self
            .coordinator
            .assess(&claim, &self.panel, self.panel_deadline, progress)
            .await;

        let result = self.engine.decide(claim, assessments);
        info!(
            "{}: {} ({}) {}",
            result.claim.id,
            result.final_verdict,
            result.summary,
            result.tally.vote_summary()
        );

        let block = EvidenceAssembler::render(&result.claim, &result);
        let result = result.with_evidence_block(block);
        progress.on_claim_decided(&result);
        result
    }
}
