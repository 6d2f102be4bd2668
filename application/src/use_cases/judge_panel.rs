//! Judge Panel Coordinator
//!
//! Dispatches one claim to all three judges concurrently and collects
//! whatever subset answered before the shared deadline.

use crate::ports::progress::RouterProgressNotifier;
use crate::ports::provider_gateway::{GatewayError, ProviderGateway};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, info, warn};
use verdict_domain::{
    Claim, GenerationOptions, JudgeAssessment, JudgePanel, JudgePromptTemplate, PanelSeat,
    parse_judge_response,
};

/// Fans a claim out to the panel and fans the assessments back in
pub struct JudgePanelCoordinator<G: ProviderGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: ProviderGateway + 'static> JudgePanelCoordinator<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Assess `claim` with every seat of `panel`.
    ///
    /// Returns exactly one assessment per seat, in seat order. Judges get no
    /// fallback hop. Tasks still running when `deadline` elapses are aborted
    /// and recorded as timed out.
    pub async fn assess(
        &self,
        claim: &Claim,
        panel: &JudgePanel,
        deadline: Duration,
        progress: &dyn RouterProgressNotifier,
    ) -> Vec<JudgeAssessment> {
        let deadline_at = Instant::now() + deadline;
        let prompt = JudgePromptTemplate::claim_prompt(claim);

        debug!(
            "Dispatching {} to {} judges (deadline {}ms)",
            claim.id,
            panel.size(),
            deadline.as_millis()
        );

        let mut join_set = JoinSet::new();

        for (index, seat) in panel.seats().iter().enumerate() {
            let gateway = Arc::clone(&self.gateway);
            let seat = seat.clone();
            let prompt = prompt.clone();

            join_set.spawn(async move {
                let options = GenerationOptions::default()
                    .with_system_prompt(JudgePromptTemplate::system(seat.role));
                let result = gateway.invoke(&seat.model, &prompt, &options).await;
                (index, to_assessment(seat, result))
            });
        }

        let mut slots: Vec<Option<JudgeAssessment>> = vec![None; panel.size()];
        let mut expired = false;

        loop {
            match tokio::time::timeout_at(deadline_at, join_set.join_next()).await {
                Ok(Some(Ok((index, assessment)))) => {
                    debug!(
                        "{} judged {}: {} ({:?})",
                        assessment.role, claim.id, assessment.verdict, assessment.outcome
                    );
                    progress.on_judge_complete(claim.id.as_str(), &assessment);
                    slots[index] = Some(assessment);
                }
                Ok(Some(Err(e))) => {
                    warn!("Judge task join error: {}", e);
                }
                Ok(None) => break,
                Err(_) => {
                    expired = true;
                    join_set.abort_all();
                    break;
                }
            }
        }

        if expired {
            let missing = slots.iter().filter(|s| s.is_none()).count();
            info!(
                "Panel deadline expired for {}; {} judge(s) abandoned",
                claim.id, missing
            );
        }

        slots
            .into_iter()
            .zip(panel.seats())
            .map(|(slot, seat)| {
                slot.unwrap_or_else(|| {
                    let assessment = if expired {
                        JudgeAssessment::timed_out(seat.role, seat.model.clone())
                    } else {
                        JudgeAssessment::errored(seat.role, seat.model.clone(), "judge task failed")
                    };
                    progress.on_judge_complete(claim.id.as_str(), &assessment);
                    assessment
                })
            })
            .collect()
    }
}

/// Turn one raw judge reply into an assessment
fn to_assessment(seat: PanelSeat, result: Result<String, GatewayError>) -> JudgeAssessment {
    match result {
        Ok(text) if text.trim().is_empty() => {
            JudgeAssessment::errored(seat.role, seat.model, GatewayError::EmptyResponse.to_string())
        }
        Ok(text) => {
            let parsed = parse_judge_response(&text);
            let assessment =
                JudgeAssessment::returned(seat.role, seat.model, parsed.verdict, parsed.reasoning)
                    .with_evidence(parsed.evidence_urls);
            match parsed.confidence {
                Some(confidence) => assessment.with_confidence(confidence),
                None => assessment,
            }
        }
        Err(e) => JudgeAssessment::errored(seat.role, seat.model, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::test_support::{ScriptedGateway, judge_json};
    use verdict_domain::{AssessmentOutcome, ClaimId, ClaimSpan, JudgeRole, Model, Verdict};

    fn claim() -> Claim {
        Claim::new(
            ClaimId::from_index(0),
            "Water boils at 100 degrees Celsius at sea level.",
            ClaimSpan::new(0, 48),
        )
    }

    fn panel() -> JudgePanel {
        JudgePanel::try_new(vec![
            PanelSeat::new(JudgeRole::FactChecker1, Model::from("judge-a")),
            PanelSeat::new(JudgeRole::FactChecker2, Model::from("judge-b")),
            PanelSeat::new(JudgeRole::Challenger, Model::from("judge-c")),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_all_judges_return_in_seat_order() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .reply_after("judge-a", &judge_json("true"), Duration::from_millis(60))
                .reply_after("judge-b", &judge_json("false"), Duration::from_millis(30))
                .reply("judge-c", &judge_json("uncertain")),
        );
        let coordinator = JudgePanelCoordinator::new(Arc::clone(&gateway));

        let assessments = coordinator
            .assess(&claim(), &panel(), Duration::from_secs(2), &NoProgress)
            .await;

        let roles: Vec<_> = assessments.iter().map(|a| a.role).collect();
        assert_eq!(
            roles,
            vec![
                JudgeRole::FactChecker1,
                JudgeRole::FactChecker2,
                JudgeRole::Challenger
            ]
        );
        assert_eq!(assessments[0].verdict, Verdict::True);
        assert_eq!(assessments[1].verdict, Verdict::False);
        assert_eq!(assessments[2].verdict, Verdict::Uncertain);
        assert!(assessments.iter().all(|a| a.is_returned()));
        assert_eq!(assessments[0].confidence, Some(0.9));
        assert_eq!(gateway.total_calls(), 3);
    }

    #[tokio::test]
    async fn test_slow_judge_is_timed_out_at_deadline() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .reply("judge-a", &judge_json("true"))
                .reply("judge-b", &judge_json("true"))
                .reply_after("judge-c", &judge_json("false"), Duration::from_secs(5)),
        );
        let coordinator = JudgePanelCoordinator::new(gateway);

        let started = std::time::Instant::now();
        let assessments = coordinator
            .assess(&claim(), &panel(), Duration::from_millis(100), &NoProgress)
            .await;

        assert!(started.elapsed() < Duration::from_secs(2));
        assert_eq!(assessments.len(), 3);
        assert_eq!(assessments[2].outcome, AssessmentOutcome::TimedOut);
        assert_eq!(assessments[2].verdict, Verdict::Uncertain);
        assert!(assessments[0].is_returned());
        assert!(assessments[1].is_returned());
    }

    #[tokio::test]
    async fn test_failing_judge_is_errored_without_retry() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .fail("judge-a", GatewayError::RequestFailed("500".to_string()))
                .reply("judge-b", "   ")
                .reply("judge-c", &judge_json("true")),
        );
        let coordinator = JudgePanelCoordinator::new(Arc::clone(&gateway));

        let assessments = coordinator
            .assess(&claim(), &panel(), Duration::from_secs(2), &NoProgress)
            .await;

        assert_eq!(assessments[0].outcome, AssessmentOutcome::Errored);
        assert!(assessments[0].reasoning.contains("500"));
        assert_eq!(assessments[1].outcome, AssessmentOutcome::Errored);
        assert!(assessments[2].is_returned());
        assert_eq!(gateway.calls_to("judge-a"), 1);
    }

    #[tokio::test]
    async fn test_unparseable_reply_is_returned_uncertain() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .reply("judge-a", "I am not sure what to make of this.")
                .reply("judge-b", "VERDICT: TRUE see https://example.org/boiling")
                .reply("judge-c", &judge_json("true")),
        );
        let coordinator = JudgePanelCoordinator::new(gateway);

        let assessments = coordinator
            .assess(&claim(), &panel(), Duration::from_secs(2), &NoProgress)
            .await;

        assert!(assessments[0].is_returned());
        assert_eq!(assessments[0].verdict, Verdict::Uncertain);
        assert_eq!(assessments[1].verdict, Verdict::True);
        assert_eq!(
            assessments[1].evidence_urls,
            vec!["https://example.org/boiling".to_string()]
        );
    }

    #[tokio::test]
    async fn test_judges_receive_the_claim_text() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .reply_when("judge-a", "Water boils", &judge_json("false"), Duration::ZERO)
                .reply("judge-a", &judge_json("true"))
                .reply("judge-b", &judge_json("true"))
                .reply("judge-c", &judge_json("true")),
        );
        let coordinator = JudgePanelCoordinator::new(gateway);

        let assessments = coordinator
            .assess(&claim(), &panel(), Duration::from_secs(2), &NoProgress)
            .await;

        assert_eq!(assessments[0].verdict, Verdict::False);
    }
}
