//! Consensus engine
//!
//! Applies the [`QuorumRule`] to the assessments of one judge panel. The
//! final verdict depends only on the multiset of verdicts among *returned*
//! assessments; timed-out and errored judges only show up in the summary
//! denominator.

use super::rule::QuorumRule;
use super::vote::VoteTally;
use crate::claim::entities::Claim;
use crate::judge::assessment::JudgeAssessment;
use serde::{Deserialize, Serialize};

/// Final verdict for one claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinalVerdict {
    #[serde(rename = "Fact-Checked: True")]
    FactCheckedTrue,
    #[serde(rename = "Fact-Checked: False")]
    FactCheckedFalse,
    #[serde(rename = "Disputed")]
    Disputed,
    #[serde(rename = "Insufficient Evidence")]
    InsufficientEvidence,
}

impl FinalVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinalVerdict::FactCheckedTrue => "Fact-Checked: True",
            FinalVerdict::FactCheckedFalse => "Fact-Checked: False",
            FinalVerdict::Disputed => "Disputed",
            FinalVerdict::InsufficientEvidence => "Insufficient Evidence",
        }
    }

    /// Whether the panel reached a directional (True/False) decision
    pub fn is_directional(&self) -> bool {
        matches!(
            self,
            FinalVerdict::FactCheckedTrue | FinalVerdict::FactCheckedFalse
        )
    }
}

impl std::fmt::Display for FinalVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Consensus outcome for one claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusResult {
    pub claim: Claim,
    /// Every panel seat's assessment, in seat order (returned or not)
    pub assessments: Vec<JudgeAssessment>,
    pub tally: VoteTally,
    pub final_verdict: FinalVerdict,
    /// e.g. "2/3 judges agree"
    pub summary: String,
    /// Rendered evidence; filled in by the evidence assembler
    pub evidence_block: String,
}

impl ConsensusResult {
    /// Assessments that count toward the verdict
    pub fn returned(&self) -> impl Iterator<Item = &JudgeAssessment> {
        self.assessments.iter().filter(|a| a.is_returned())
    }

    pub fn with_evidence_block(mut self, block: impl Into<String>) -> Self {
        self.evidence_block = block.into();
        self
    }
}

/// Applies the quorum rule to judge outputs
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsensusEngine {
    rule: QuorumRule,
}

impl ConsensusEngine {
    pub fn new(rule: QuorumRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &QuorumRule {
        &self.rule
    }

    /// Decide the claim from its panel's assessments
    pub fn decide(&self, claim: Claim, assessments: Vec<JudgeAssessment>) -> ConsensusResult {
        let tally = VoteTally::from_assessments(&assessments, self.rule.panel_size);
        let (final_verdict, summary) = self.verdict(&tally);

        ConsensusResult {
            claim,
            assessments,
            tally,
            final_verdict,
            summary,
            evidence_block: String::new(),
        }
    }

    /// Pure quorum law over a tally
    pub fn verdict(&self, tally: &VoteTally) -> (FinalVerdict, String) {
        let panel = self.rule.panel_size;

        if tally.responded == 0 {
            return (
                FinalVerdict::InsufficientEvidence,
                format!("0/{} judges responded", panel),
            );
        }

        // true_votes == false_votes can never satisfy a strict majority,
        // so ties fall through to Disputed.
        if self.rule.is_satisfied(tally.true_votes, tally.responded) {
            return (
                FinalVerdict::FactCheckedTrue,
                format!("{}/{} judges agree", tally.true_votes, panel),
            );
        }
        if self.rule.is_satisfied(tally.false_votes, tally.responded) {
            return (
                FinalVerdict::FactCheckedFalse,
                format!("{}/{} judges agree", tally.false_votes, panel),
            );
        }

        (
            FinalVerdict::Disputed,
            format!("no quorum: {}/{} judges agree", tally.leading_votes(), panel),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::entities::{ClaimId, ClaimSpan};
    use crate::core::model::Model;
    use crate::judge::assessment::Verdict;
    use crate::judge::role::JudgeRole;

    enum Vote {
        Says(Verdict),
        Errored,
        TimedOut,
    }

    fn claim() -> Claim {
        Claim::new(
            ClaimId::from_index(0),
            "The Moon orbits the Earth.",
            ClaimSpan::new(0, 26),
        )
    }

    fn decide(votes: [Vote; 3]) -> ConsensusResult {
        let roles = [
            JudgeRole::FactChecker1,
            JudgeRole::FactChecker2,
            JudgeRole::Challenger,
        ];
        let assessments = votes
            .into_iter()
            .zip(roles)
            .map(|(vote, role)| match vote {
                Vote::Says(v) => JudgeAssessment::returned(role, Model::Gpt41, v, "because"),
                Vote::Errored => JudgeAssessment::errored(role, Model::Gpt41, "provider down"),
                Vote::TimedOut => JudgeAssessment::timed_out(role, Model::Gpt41),
            })
            .collect();
        ConsensusEngine::default().decide(claim(), assessments)
    }

    use Verdict::{False as F, True as T, Uncertain as U};

    #[test]
    fn test_unanimous_true() {
        let result = decide([Vote::Says(T), Vote::Says(T), Vote::Says(T)]);
        assert_eq!(result.final_verdict, FinalVerdict::FactCheckedTrue);
        assert_eq!(result.summary, "3/3 judges agree");
    }

    #[test]
    fn test_two_true_one_errored() {
        let result = decide([Vote::Says(T), Vote::Says(T), Vote::Errored]);
        assert_eq!(result.final_verdict, FinalVerdict::FactCheckedTrue);
        assert_eq!(result.summary, "2/3 judges agree");
    }

    #[test]
    fn test_two_false_one_true() {
        let result = decide([Vote::Says(F), Vote::Says(T), Vote::Says(F)]);
        assert_eq!(result.final_verdict, FinalVerdict::FactCheckedFalse);
        assert_eq!(result.summary, "2/3 judges agree");
    }

    #[test]
    fn test_split_with_uncertain_is_disputed() {
        let result = decide([Vote::Says(T), Vote::Says(F), Vote::Says(U)]);
        assert_eq!(result.final_verdict, FinalVerdict::Disputed);
        assert_eq!(result.summary, "no quorum: 1/3 judges agree");
    }

    #[test]
    fn test_split_with_error_is_disputed() {
        let result = decide([Vote::Says(T), Vote::Says(F), Vote::Errored]);
        assert_eq!(result.final_verdict, FinalVerdict::Disputed);
    }

    #[test]
    fn test_single_response_never_decides() {
        let result = decide([Vote::Says(T), Vote::TimedOut, Vote::Errored]);
        assert_eq!(result.final_verdict, FinalVerdict::Disputed);
    }

    #[test]
    fn test_all_uncertain_is_disputed() {
        let result = decide([Vote::Says(U), Vote::Says(U), Vote::Says(U)]);
        assert_eq!(result.final_verdict, FinalVerdict::Disputed);
        assert_eq!(result.summary, "no quorum: 0/3 judges agree");
    }

    #[test]
    fn test_no_responses_is_insufficient_evidence() {
        let result = decide([Vote::Errored, Vote::Errored, Vote::TimedOut]);
        assert_eq!(result.final_verdict, FinalVerdict::InsufficientEvidence);
        assert_eq!(result.summary, "0/3 judges responded");
        assert_eq!(result.returned().count(), 0);
        assert_eq!(result.assessments.len(), 3);
    }

    #[test]
    fn test_verdict_ignores_non_returned_reasoning() {
        // An errored judge's placeholder verdict must never count.
        let result = decide([Vote::Says(T), Vote::Errored, Vote::Errored]);
        assert_eq!(result.tally.uncertain_votes, 0);
        assert_eq!(result.tally.responded, 1);
    }

    #[test]
    fn test_final_verdict_serializes_as_display_string() {
        let json = serde_json::to_string(&FinalVerdict::FactCheckedFalse).unwrap();
        assert_eq!(json, "\"Fact-Checked: False\"");
        assert_eq!(
            FinalVerdict::InsufficientEvidence.to_string(),
            "Insufficient Evidence"
        );
        assert!(!FinalVerdict::Disputed.is_directional());
    }
}
