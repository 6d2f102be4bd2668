//! Terminal state of a generation request

use super::attempt::ModelAttempt;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Terminal state of one generation request.
///
/// Exactly one of these is produced per request; `Exhausted` always carries
/// every failed attempt so callers can surface each underlying error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GenerationOutcome {
    Succeeded {
        content: String,
        model_used: Model,
        attempts: Vec<ModelAttempt>,
    },
    Exhausted {
        attempts: Vec<ModelAttempt>,
    },
}

impl GenerationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Succeeded { .. })
    }

    pub fn attempts(&self) -> &[ModelAttempt] {
        match self {
            GenerationOutcome::Succeeded { attempts, .. } => attempts,
            GenerationOutcome::Exhausted { attempts } => attempts,
        }
    }

    pub fn model_used(&self) -> Option<&Model> {
        match self {
            GenerationOutcome::Succeeded { model_used, .. } => Some(model_used),
            GenerationOutcome::Exhausted { .. } => None,
        }
    }

    /// One line per failed attempt: `model: reason`
    pub fn failure_summary(&self) -> String {
        self.attempts()
            .iter()
            .filter_map(|a| a.failure_kind().map(|k| format!("{}: {}", a.model, k)))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
