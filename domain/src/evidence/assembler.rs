//! Evidence block rendering

use crate::claim::entities::Claim;
use crate::core::string::{collapse_whitespace, truncate};
use crate::quorum::consensus::ConsensusResult;

/// Separator placed between the generated content and the evidence blocks
pub const EVIDENCE_HEADER: &str = "\n\n---\nFact-Check Evidence\n\n";

const MAX_REASONING_LEN: usize = 240;

/// Renders evidence blocks and appends them to content
pub struct EvidenceAssembler;

impl EvidenceAssembler {
    /// Render one claim's evidence block.
    ///
    /// Only returned assessments are listed; judges that timed out or errored
    /// show up in the consensus denominator alone.
    pub fn render(claim: &Claim, result: &ConsensusResult) -> String {
        let mut block = format!(
            "[{}] \"{}\"\nVerdict: {}\nConsensus: {}",
            claim.id,
            collapse_whitespace(&claim.text),
            result.final_verdict,
            result.summary
        );

        for assessment in result.returned() {
            block.push_str(&format!(
                "\n- {} ({}): {}",
                assessment.role, assessment.model, assessment.verdict
            ));
            if let Some(confidence) = assessment.confidence {
                block.push_str(&format!(" (confidence {:.2})", confidence));
            }
            let reasoning = collapse_whitespace(&assessment.reasoning);
            if !reasoning.is_empty() {
                block.push_str(&format!(
                    "\n  {}",
                    truncate(&reasoning, MAX_REASONING_LEN)
                ));
            }
            for url in &assessment.evidence_urls {
                block.push_str(&format!("\n  - {}", url));
            }
        }

        block
    }

    /// Append evidence blocks, in the given (source) order, after `content`.
    ///
    /// Returns `content` unchanged when there is nothing to append.
    pub fn append(content: &str, results: &[ConsensusResult]) -> String {
        if results.is_empty() {
            return content.to_string();
        }

        let blocks = results
            .iter()
            .map(|r| {
                if r.evidence_block.is_empty() {
                    Self::render(&r.claim, r)
                } else {
                    r.evidence_block.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("{}{}{}", content, EVIDENCE_HEADER, blocks)
    }
}
