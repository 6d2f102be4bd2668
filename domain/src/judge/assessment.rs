//! Judge assessments

use super::role::JudgeRole;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// A judge's verdict on one claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    True,
    False,
    Uncertain,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::True => "True",
            Verdict::False => "False",
            Verdict::Uncertain => "Uncertain",
        }
    }

    /// Parse a loose verdict word (`true`, `FALSE`, `unverified`, ...)
    pub fn from_word(word: &str) -> Option<Self> {
        match word.trim().to_lowercase().as_str() {
            "true" | "correct" | "accurate" | "supported" => Some(Verdict::True),
            "false" | "incorrect" | "inaccurate" | "refuted" => Some(Verdict::False),
            "uncertain" | "unknown" | "unverified" | "unverifiable" | "mixed" => {
                Some(Verdict::Uncertain)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a judge actually answered within the panel deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentOutcome {
    Returned,
    TimedOut,
    Errored,
}

/// Output of one judge for one claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeAssessment {
    pub role: JudgeRole,
    pub model: Model,
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub reasoning: String,
    pub evidence_urls: Vec<String>,
    pub outcome: AssessmentOutcome,
}

impl JudgeAssessment {
    /// A judge that answered in time
    pub fn returned(
        role: JudgeRole,
        model: Model,
        verdict: Verdict,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            role,
            model,
            verdict,
            confidence: None,
            reasoning: reasoning.into(),
            evidence_urls: Vec::new(),
            outcome: AssessmentOutcome::Returned,
        }
    }

    /// A judge that did not answer before the panel deadline
    pub fn timed_out(role: JudgeRole, model: Model) -> Self {
        Self {
            role,
            model,
            verdict: Verdict::Uncertain,
            confidence: None,
            reasoning: "no response before panel deadline".to_string(),
            evidence_urls: Vec::new(),
            outcome: AssessmentOutcome::TimedOut,
        }
    }

    /// A judge whose call failed
    pub fn errored(role: JudgeRole, model: Model, error: impl Into<String>) -> Self {
        Self {
            role,
            model,
            verdict: Verdict::Uncertain,
            confidence: None,
            reasoning: error.into(),
            evidence_urls: Vec::new(),
            outcome: AssessmentOutcome::Errored,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence.clamp(0.0, 1.0));
        self
    }

    pub fn with_evidence(mut self, urls: Vec<String>) -> Self {
        self.evidence_urls = urls;
        self
    }

    pub fn is_returned(&self) -> bool {
        self.outcome == AssessmentOutcome::Returned
    }
}
