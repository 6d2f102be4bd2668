//! Progress notification port
//!
//! Defines the interface for reporting progress while a request is routed
//! and fact-checked.

use verdict_domain::{ConsensusResult, JudgeAssessment, Model, ModelAttempt};

/// Callback for progress updates during routing and fact-checking
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console spinner, logs, ...). All methods have
/// no-op defaults.
pub trait RouterProgressNotifier: Send + Sync {
    /// Called before a model attempt starts
    fn on_attempt_start(&self, _model: &Model) {}

    /// Called after a model attempt finishes (success or failure)
    fn on_attempt_complete(&self, _attempt: &ModelAttempt) {}

    /// Called once claims are extracted
    fn on_fact_check_start(&self, _claim_count: usize) {}

    /// Called as each judge of a claim's panel settles
    fn on_judge_complete(&self, _claim_id: &str, _assessment: &JudgeAssessment) {}

    /// Called when a claim's consensus is decided
    fn on_claim_decided(&self, _result: &ConsensusResult) {}

    /// Called when the fact-check pass finishes
    fn on_fact_check_complete(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl RouterProgressNotifier for NoProgress {}
