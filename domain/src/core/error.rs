//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Judge panel must have exactly {expected} seats, got {actual}")]
    InvalidPanelSize { expected: usize, actual: usize },

    #[error("Invalid quorum rule: {0}")]
    InvalidQuorumRule(String),

    #[error("Unknown judge role: {0}")]
    UnknownJudgeRole(String),
}

impl DomainError {
    /// Whether this error stems from caller input (rejected before any model call)
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::EmptyPrompt | DomainError::InvalidModel(_))
    }
}
