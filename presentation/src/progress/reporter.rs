//! Progress reporting for routing and fact-checking

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use verdict_application::RouterProgressNotifier;
use verdict_domain::{
    AssessmentOutcome, ConsensusResult, FinalVerdict, JudgeAssessment, Model, ModelAttempt,
};

/// Spinner for model attempts, bar for the fact-check pass. Draws to stderr
/// so `--output json` stays clean on stdout.
pub struct ProgressReporter {
    multi: MultiProgress,
    attempt_spinner: Mutex<Option<ProgressBar>>,
    claims_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::stderr()),
            attempt_spinner: Mutex::new(None),
            claims_bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn claims_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn verdict_mark(verdict: FinalVerdict) -> String {
        match verdict {
            FinalVerdict::FactCheckedTrue => "v".green().to_string(),
            FinalVerdict::FactCheckedFalse => "x".red().to_string(),
            FinalVerdict::Disputed => "?".yellow().to_string(),
            FinalVerdict::InsufficientEvidence => "-".dimmed().to_string(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterProgressNotifier for ProgressReporter {
    fn on_attempt_start(&self, model: &Model) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Generating");
        pb.set_message(model.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.attempt_spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_attempt_complete(&self, attempt: &ModelAttempt) {
        let Some(pb) = self.attempt_spinner.lock().ok().and_then(|mut s| s.take()) else {
            return;
        };
        let message = match attempt.failure_kind() {
            None => format!(
                "{} {} ({}ms)",
                "v".green(),
                attempt.model,
                attempt.latency().as_millis()
            ),
            Some(kind) => format!("{} {}: {}", "x".red(), attempt.model, kind),
        };
        pb.finish_with_message(message);
    }

    fn on_fact_check_start(&self, claim_count: usize) {
        let pb = self.multi.add(ProgressBar::new(claim_count as u64));
        pb.set_style(Self::claims_style());
        pb.set_prefix("Fact-checking");
        pb.set_message(format!("{} claims", claim_count));

        if let Ok(mut slot) = self.claims_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_judge_complete(&self, claim_id: &str, assessment: &JudgeAssessment) {
        if let Ok(slot) = self.claims_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            let status = match assessment.outcome {
                AssessmentOutcome::Returned => assessment.verdict.as_str().to_string(),
                AssessmentOutcome::TimedOut => "timed out".yellow().to_string(),
                AssessmentOutcome::Errored => "error".red().to_string(),
            };
            pb.set_message(format!("{} {}: {}", claim_id, assessment.role, status));
        }
    }

    fn on_claim_decided(&self, result: &ConsensusResult) {
        if let Ok(slot) = self.claims_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(format!(
                "{} {} {}",
                Self::verdict_mark(result.final_verdict),
                result.claim.id,
                result.summary
            ));
            pb.inc(1);
        }
    }

    fn on_fact_check_complete(&self) {
        if let Some(pb) = self.claims_bar.lock().ok().and_then(|mut s| s.take()) {
            pb.finish_with_message("done".green().to_string());
        }
    }
}

/// Line-per-event progress for non-interactive terminals
pub struct SimpleProgress;

impl RouterProgressNotifier for SimpleProgress {
    fn on_attempt_start(&self, model: &Model) {
        eprintln!("{} {} {}", "->".cyan(), "Generating with".bold(), model);
    }

    fn on_attempt_complete(&self, attempt: &ModelAttempt) {
        match attempt.failure_kind() {
            None => eprintln!("  {} {}", "v".green(), attempt.model),
            Some(kind) => eprintln!("  {} {} ({})", "x".red(), attempt.model, kind),
        }
    }

    fn on_fact_check_start(&self, claim_count: usize) {
        eprintln!(
            "{} {} ({} claims)",
            "->".cyan(),
            "Fact-checking".bold(),
            claim_count
        );
    }

    fn on_claim_decided(&self, result: &ConsensusResult) {
        eprintln!(
            "  {} {} {} ({})",
            ProgressReporter::verdict_mark(result.final_verdict),
            result.claim.id,
            result.final_verdict,
            result.summary
        );
    }
}
