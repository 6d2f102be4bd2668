//! Model attempt records

use crate::core::model::Model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Why an attempt counted as a hard failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FailureKind {
    /// Provider answered with empty or whitespace-only content
    EmptyResponse,
    /// Provider-level error response (auth, rate limit, bad request, ...)
    Provider(String),
    /// Network/transport failure
    Transport(String),
    /// The per-attempt timeout elapsed
    Timeout { after_ms: u64 },
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::EmptyResponse => write!(f, "empty response"),
            FailureKind::Provider(msg) => write!(f, "provider error: {}", msg),
            FailureKind::Transport(msg) => write!(f, "transport error: {}", msg),
            FailureKind::Timeout { after_ms } => write!(f, "timed out after {}ms", after_ms),
        }
    }
}

/// Result of a single attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AttemptOutcome {
    Success { content: String },
    Failure { error: FailureKind },
}

/// One try against one model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelAttempt {
    pub model: Model,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcome: AttemptOutcome,
}

impl ModelAttempt {
    pub fn success(
        model: Model,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            model,
            started_at,
            finished_at,
            outcome: AttemptOutcome::Success {
                content: content.into(),
            },
        }
    }

    pub fn failure(
        model: Model,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        error: FailureKind,
    ) -> Self {
        Self {
            model,
            started_at,
            finished_at,
            outcome: AttemptOutcome::Failure { error },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, AttemptOutcome::Success { .. })
    }

    /// Generated content, if this attempt succeeded
    pub fn content(&self) -> Option<&str> {
        match &self.outcome {
            AttemptOutcome::Success { content } => Some(content),
            AttemptOutcome::Failure { .. } => None,
        }
    }

    /// Failure reason, if this attempt failed
    pub fn failure_kind(&self) -> Option<&FailureKind> {
        match &self.outcome {
            AttemptOutcome::Success { .. } => None,
            AttemptOutcome::Failure { error } => Some(error),
        }
    }

    /// Wall-clock latency of the attempt (zero if clocks went backwards)
    pub fn latency(&self) -> Duration {
        (self.finished_at - self.started_at)
            .to_std()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn test_success_accessors() {
        let now = Utc::now();
        let attempt = ModelAttempt::success(
            Model::Gpt41,
            now,
            now + TimeDelta::milliseconds(250),
            "hello",
        );
        assert!(attempt.is_success());
        assert_eq!(attempt.content(), Some("hello"));
        assert!(attempt.failure_kind().is_none());
        assert_eq!(attempt.latency(), Duration::from_millis(250));
    }

    #[test]
    fn test_failure_accessors() {
        let now = Utc::now();
        let attempt = ModelAttempt::failure(
            Model::Gpt41,
            now,
            now,
            FailureKind::Timeout { after_ms: 1500 },
        );
        assert!(!attempt.is_success());
        assert!(attempt.content().is_none());
        assert_eq!(
            attempt.failure_kind().map(|k| k.to_string()),
            Some("timed out after 1500ms".to_string())
        );
    }

    #[test]
    fn test_negative_latency_clamps_to_zero() {
        let now = Utc::now();
        let attempt = ModelAttempt::failure(
            Model::Gpt41,
            now,
            now - TimeDelta::seconds(1),
            FailureKind::EmptyResponse,
        );
        assert_eq!(attempt.latency(), Duration::ZERO);
    }
}
