//! Provider gateway port
//!
//! Defines the uniform interface for invoking a named model. Provider
//! clients, authentication and transport retries live behind it.

use async_trait::async_trait;
use thiserror::Error;
use verdict_domain::{FailureKind, GenerationOptions, Model};

/// Errors that can occur during a single model invocation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Empty response")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Map to the attempt-level failure classification.
    ///
    /// `timeout_ms` is recorded for timeouts raised by the transport itself.
    pub fn to_failure_kind(&self, timeout_ms: u64) -> FailureKind {
        match self {
            GatewayError::ConnectionError(msg) => FailureKind::Transport(msg.clone()),
            GatewayError::Timeout => FailureKind::Timeout {
                after_ms: timeout_ms,
            },
            GatewayError::EmptyResponse => FailureKind::EmptyResponse,
            GatewayError::RequestFailed(_)
            | GatewayError::ModelNotAvailable(_)
            | GatewayError::RateLimited(_)
            | GatewayError::Other(_) => FailureKind::Provider(self.to_string()),
        }
    }
}

/// Gateway for model invocation
///
/// `invoke(model, prompt, options) -> text | error`. Implementations
/// (adapters) live in the infrastructure layer; the core never sees their
/// internals.
#[async_trait]
pub trait ProviderGateway: Send + Sync {
    /// Send one prompt to one model and return its full text response
    async fn invoke(
        &self,
        model: &Model,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GatewayError>;
}

#[async_trait]
impl<G: ProviderGateway + ?Sized> ProviderGateway for std::sync::Arc<G> {
    async fn invoke(
        &self,
        model: &Model,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GatewayError> {
        (**self).invoke(model, prompt, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kind_mapping() {
        assert_eq!(
            GatewayError::ConnectionError("reset".to_string()).to_failure_kind(0),
            FailureKind::Transport("reset".to_string())
        );
        assert_eq!(
            GatewayError::Timeout.to_failure_kind(1500),
            FailureKind::Timeout { after_ms: 1500 }
        );
        assert_eq!(
            GatewayError::EmptyResponse.to_failure_kind(0),
            FailureKind::EmptyResponse
        );
        assert_eq!(
            GatewayError::RateLimited("429".to_string()).to_failure_kind(0),
            FailureKind::Provider("Rate limited: 429".to_string())
        );
    }
}
