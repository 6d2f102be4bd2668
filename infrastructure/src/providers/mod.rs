//! Model provider adapters
//!
//! Each adapter speaks one vendor API. [`RoutingGateway`](routing::RoutingGateway)
//! picks the adapter for a model and exposes them all as one
//! [`ProviderGateway`](verdict_application::ProviderGateway).

pub mod anthropic;
pub mod http;
pub mod openai;
pub mod routing;

use crate::config::FileProvidersConfig;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use verdict_application::GatewayError;
use verdict_domain::{GenerationOptions, Model};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Anthropic,
    OpenAi,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::OpenAi => "openai",
        }
    }

    /// Parse a provider name from configuration (case-insensitive)
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "anthropic" => Some(ProviderKind::Anthropic),
            "openai" => Some(ProviderKind::OpenAi),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn kind(&self) -> ProviderKind;
    fn supports_model(&self, model: &Model) -> bool;
    async fn invoke(
        &self,
        model: &Model,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GatewayError>;
}

/// Build every provider whose API key is available.
///
/// Providers without a key are skipped with a warning; the rest share one
/// request timeout.
pub fn configured_providers(
    config: &FileProvidersConfig,
) -> Result<Vec<Arc<dyn ProviderAdapter>>, GatewayError> {
    let timeout = Duration::from_secs(config.request_timeout_secs);
    let mut providers: Vec<Arc<dyn ProviderAdapter>> = Vec::new();

    match config.anthropic.resolve_api_key() {
        Some(key) => {
            info!("Anthropic provider enabled");
            providers.push(Arc::new(anthropic::AnthropicProvider::new(
                &config.anthropic,
                key,
                timeout,
            )?));
        }
        None => warn!(
            "Anthropic provider disabled: {} is not set",
            config.anthropic.api_key_env
        ),
    }

    match config.openai.resolve_api_key() {
        Some(key) => {
            info!("OpenAI provider enabled");
            providers.push(Arc::new(openai::OpenAiProvider::new(
                &config.openai,
                key,
                timeout,
            )?));
        }
        None => warn!(
            "OpenAI provider disabled: {} is not set",
            config.openai.api_key_env
        ),
    }

    Ok(providers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parse() {
        assert_eq!(ProviderKind::parse("Anthropic"), Some(ProviderKind::Anthropic));
        assert_eq!(ProviderKind::parse(" openai "), Some(ProviderKind::OpenAi));
        assert_eq!(ProviderKind::parse("mistral"), None);
    }

    #[test]
    fn test_providers_without_keys_are_skipped() {
        let mut config = FileProvidersConfig::default();
        config.anthropic.api_key_env = "VERDICT_TEST_UNSET_ANTHROPIC".to_string();
        config.openai.api_key_env = "VERDICT_TEST_UNSET_OPENAI".to_string();
        config.openai.api_key = Some("sk-test".to_string());

        let providers = configured_providers(&config).unwrap();

        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].kind(), ProviderKind::OpenAi);
    }
}
