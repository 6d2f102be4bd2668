//! Vote tallying over judge assessments

use crate::judge::assessment::{JudgeAssessment, Verdict};
use serde::{Deserialize, Serialize};

/// Per-verdict counts over the assessments that actually returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteTally {
    pub true_votes: usize,
    pub false_votes: usize,
    pub uncertain_votes: usize,
    /// Judges that returned an assessment (n)
    pub responded: usize,
    /// Configured panel size (reporting denominator)
    pub panel_size: usize,
}

impl VoteTally {
    /// Count votes; timed-out and errored assessments are ignored
    pub fn from_assessments(assessments: &[JudgeAssessment], panel_size: usize) -> Self {
        let mut tally = Self {
            panel_size,
            ..Self::default()
        };
        for assessment in assessments.iter().filter(|a| a.is_returned()) {
            tally.responded += 1;
            match assessment.verdict {
                Verdict::True => tally.true_votes += 1,
                Verdict::False => tally.false_votes += 1,
                Verdict::Uncertain => tally.uncertain_votes += 1,
            }
        }
        tally
    }

    /// Judges that did not return (timed out or errored)
    pub fn missing(&self) -> usize {
        self.panel_size.saturating_sub(self.responded)
    }

    /// Largest directional count
    pub fn leading_votes(&self) -> usize {
        self.true_votes.max(self.false_votes)
    }

    /// Visual summary, e.g. `[✓✓·]` (✓ true, ✗ false, ? uncertain, · no response)
    pub fn vote_summary(&self) -> String {
        let mut summary = String::from("[");
        summary.extend(std::iter::repeat_n('✓', self.true_votes));
        summary.extend(std::iter::repeat_n('✗', self.false_votes));
        summary.extend(std::iter::repeat_n('?', self.uncertain_votes));
        summary.extend(std::iter::repeat_n('·', self.missing()));
        summary.push(']');
        summary
    }
}
