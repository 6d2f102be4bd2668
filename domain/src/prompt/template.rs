//! Prompt templates for judge panel calls

use crate::claim::entities::Claim;
use crate::judge::role::JudgeRole;

/// Templates for judge system and user prompts
pub struct JudgePromptTemplate;

impl JudgePromptTemplate {
    /// System prompt for a judge seat, shaped by its role
    pub fn system(role: JudgeRole) -> String {
        format!(
            r#"You are a fact-checking judge on a panel of three independent judges.
Your role: {}. {}
Judge only the single claim you are given. Do not rewrite it.
Answer with a single JSON object and nothing else."#,
            role,
            role.perspective()
        )
    }

    /// User prompt asking for a structured verdict on one claim
    pub fn claim_prompt(claim: &Claim) -> String {
        format!(
            r#"Claim to verify:

"{}"

Respond with JSON in exactly this shape:
{{"verdict": "true" | "false" | "uncertain", "confidence": <number between 0 and 1>, "reasoning": "<one or two sentences>", "evidence_urls": ["<url>", ...]}}

Use "uncertain" when reliable evidence is missing or conflicting.
Only cite URLs you are confident exist."#,
            claim.text
        )
    }
}
