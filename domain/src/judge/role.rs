//! Judge roles

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Named perspective assigned to one panel seat, decoupled from the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JudgeRole {
    Visionary,
    Operator,
    Auditor,
    Challenger,
    FactChecker1,
    FactChecker2,
}

impl JudgeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            JudgeRole::Visionary => "Visionary",
            JudgeRole::Operator => "Operator",
            JudgeRole::Auditor => "Auditor",
            JudgeRole::Challenger => "Challenger",
            JudgeRole::FactChecker1 => "FactChecker1",
            JudgeRole::FactChecker2 => "FactChecker2",
        }
    }

    /// One-line description of the perspective, used in judge prompts
    pub fn perspective(&self) -> &'static str {
        match self {
            JudgeRole::Visionary => {
                "Consider the claim in its broad context and whether it fits the established big picture."
            }
            JudgeRole::Operator => {
                "Check concrete, practical details: numbers, dates, names and units."
            }
            JudgeRole::Auditor => {
                "Audit the claim strictly against authoritative sources and flag anything unsupported."
            }
            JudgeRole::Challenger => {
                "Actively look for counter-evidence and reasons the claim could be wrong."
            }
            JudgeRole::FactChecker1 | JudgeRole::FactChecker2 => {
                "Verify the claim independently against reliable, citable sources."
            }
        }
    }
}

impl std::fmt::Display for JudgeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for JudgeRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "visionary" => Ok(JudgeRole::Visionary),
            "operator" => Ok(JudgeRole::Operator),
            "auditor" => Ok(JudgeRole::Auditor),
            "challenger" => Ok(JudgeRole::Challenger),
            "factchecker1" => Ok(JudgeRole::FactChecker1),
            "factchecker2" => Ok(JudgeRole::FactChecker2),
            _ => Err(DomainError::UnknownJudgeRole(s.to_string())),
        }
    }
}
