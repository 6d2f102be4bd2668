//! Judge domain
//!
//! A judge is one panel seat: a named perspective ([`JudgeRole`]) bound to a
//! model. Each judge produces a [`JudgeAssessment`] for a claim, or is
//! recorded as timed out / errored.

pub mod assessment;
pub mod panel;
pub mod parsing;
pub mod role;

pub use assessment::{AssessmentOutcome, JudgeAssessment, Verdict};
pub use panel::{JudgePanel, PANEL_SIZE, PanelPreset, PanelSeat};
pub use parsing::{ParsedJudgment, parse_judge_response};
pub use role::JudgeRole;
