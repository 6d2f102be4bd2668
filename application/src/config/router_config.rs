//! Router configuration: model defaults, judge panel, deadlines.

use std::time::Duration;
use verdict_domain::{ExtractorConfig, JudgePanel, Model, QuorumRule};

/// Parameters for [`RouterUseCase`](crate::use_cases::router::RouterUseCase)
///
/// | Field | Used by |
/// |-------|---------|
/// | `default_primary` / `default_fallback` | requests without explicit models |
/// | `attempt_timeout` | Fallback Orchestrator |
/// | `panel` / `panel_deadline` | Judge Panel Coordinator |
/// | `quorum` | Consensus Engine |
/// | `extractor` | Claim Extractor |
/// | `claim_concurrency` | fact-check fan-out |
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Primary model when the request names none
    pub default_primary: Model,
    /// Resilience model when the request names none
    pub default_fallback: Model,
    /// Per-attempt timeout for generation (`None` = unbounded)
    pub attempt_timeout: Option<Duration>,
    /// The three judges
    pub panel: JudgePanel,
    /// Hard wall-clock bound per claim panel
    pub panel_deadline: Duration,
    /// Consensus threshold
    pub quorum: QuorumRule,
    /// Claim segmentation tuning
    pub extractor: ExtractorConfig,
    /// Claims fact-checked at the same time
    pub claim_concurrency: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            default_primary: Model::default_primary(),
            default_fallback: Model::default_fallback(),
            attempt_timeout: Some(Duration::from_secs(60)),
            panel: JudgePanel::default(),
            panel_deadline: Duration::from_secs(30),
            quorum: QuorumRule::default(),
            extractor: ExtractorConfig::default(),
            claim_concurrency: 4,
        }
    }
}

impl RouterConfig {
    // ==================== Builder Methods ====================

    pub fn with_default_primary(mut self, model: Model) -> Self {
        self.default_primary = model;
        self
    }

    pub fn with_default_fallback(mut self, model: Model) -> Self {
        self.default_fallback = model;
        self
    }

    pub fn with_attempt_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    pub fn with_panel(mut self, panel: JudgePanel) -> Self {
        self.panel = panel;
        self
    }

    pub fn with_panel_deadline(mut self, deadline: Duration) -> Self {
        self.panel_deadline = deadline;
        self
    }

    pub fn with_quorum(mut self, quorum: QuorumRule) -> Self {
        self.quorum = quorum;
        self
    }

    pub fn with_extractor(mut self, extractor: ExtractorConfig) -> Self {
        self.extractor = extractor;
        self
    }

    /// Zero is treated as 1
    pub fn with_claim_concurrency(mut self, concurrency: usize) -> Self {
        self.claim_concurrency = concurrency.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_domain::PanelPreset;

    #[test]
    fn test_default() {
        let config = RouterConfig::default();
        assert_eq!(config.default_primary, Model::ClaudeSonnet45);
        assert_eq!(config.default_fallback, Model::Gpt41);
        assert_eq!(config.attempt_timeout, Some(Duration::from_secs(60)));
        assert_eq!(config.panel_deadline, Duration::from_secs(30));
        assert_eq!(config.quorum.min_agreeing, 2);
        assert_eq!(config.panel.size(), 3);
        assert_eq!(config.claim_concurrency, 4);
    }

    #[test]
    fn test_builder() {
        let config = RouterConfig::default()
            .with_default_primary(Model::Gpt52)
            .with_attempt_timeout(None)
            .with_panel(JudgePanel::from_preset(PanelPreset::Council))
            .with_panel_deadline(Duration::from_millis(500))
            .with_claim_concurrency(0);

        assert_eq!(config.default_primary, Model::Gpt52);
        assert!(config.attempt_timeout.is_none());
        assert_eq!(config.panel, JudgePanel::from_preset(PanelPreset::Council));
        assert_eq!(config.panel_deadline, Duration::from_millis(500));
        assert_eq!(config.claim_concurrency, 1);
    }
}
