use super::{ProviderAdapter, ProviderKind};
use crate::config::FileProvidersConfig;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};
use verdict_application::{GatewayError, ProviderGateway};
use verdict_domain::{GenerationOptions, Model};

/// Dispatches each model to one of the configured provider adapters
pub struct RoutingGateway {
    providers: Vec<Arc<dyn ProviderAdapter>>,
    /// Model name → index into `providers`, from `[providers.routing]`
    explicit_model_routing: HashMap<String, usize>,
    default_kind: Option<ProviderKind>,
}

impl RoutingGateway {
    pub fn new(providers: Vec<Arc<dyn ProviderAdapter>>, config: &FileProvidersConfig) -> Self {
        let mut explicit_model_routing = HashMap::new();

        for (model_name, provider_name) in &config.routing {
            let Some(target_kind) = ProviderKind::parse(provider_name) else {
                warn!(
                    "Ignoring routing for {}: unknown provider {}",
                    model_name, provider_name
                );
                continue;
            };

            match providers.iter().position(|p| p.kind() == target_kind) {
                Some(idx) => {
                    explicit_model_routing.insert(model_name.clone(), idx);
                }
                None => warn!(
                    "Ignoring routing for {}: provider {} is not enabled",
                    model_name, target_kind
                ),
            }
        }

        Self {
            providers,
            explicit_model_routing,
            default_kind: config.default.as_deref().and_then(ProviderKind::parse),
        }
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Resolve the adapter for a model.
    ///
    /// Priority:
    ///  1. explicit `[providers.routing]` entry for the model name
    ///  2. first enabled provider whose `supports_model` accepts the model
    ///  3. for model ids of no known family: configured default provider,
    ///     then the first enabled provider
    ///
    /// A model of a known family that no enabled provider supports (e.g. a
    /// Claude model without the Anthropic provider, or any Gemini model)
    /// fails with `GatewayError::ModelNotAvailable` instead of being sent to
    /// an API that cannot serve it.
    fn resolve_provider(&self, model: &Model) -> Result<&dyn ProviderAdapter, GatewayError> {
        // 1. Explicit routing table
        if let Some(&idx) = self.explicit_model_routing.get(model.as_str()) {
            return Ok(self.providers[idx].as_ref());
        }

        // 2. Providers that declare support for the model
        if let Some(p) = self.providers.iter().find(|p| p.supports_model(model)) {
            return Ok(p.as_ref());
        }

        if model.is_claude() || model.is_gpt() || model.is_gemini() {
            return Err(GatewayError::ModelNotAvailable(format!(
                "{} (no enabled provider serves this model)",
                model
            )));
        }

        // 3. Default provider kind, then first provider
        if let Some(kind) = self.default_kind
            && let Some(p) = self.providers.iter().find(|p| p.kind() == kind)
        {
            return Ok(p.as_ref());
        }

        self.providers
            .first()
            .map(|p| p.as_ref())
            .ok_or_else(|| {
                GatewayError::ModelNotAvailable(format!("{} (no providers available)", model))
            })
    }
}

#[async_trait]
impl ProviderGateway for RoutingGateway {
    async fn invoke(
        &self,
        model: &Model,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GatewayError> {
        let provider = self.resolve_provider(model)?;
        debug!("Routing {} to {}", model, provider.kind());
        provider.invoke(model, prompt, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_domain::{JudgePanel, PanelPreset};

    // -- Mock ProviderAdapter --------------------------------------------------

    struct MockProvider {
        kind: ProviderKind,
    }

    impl MockProvider {
        fn new(kind: ProviderKind) -> Arc<dyn ProviderAdapter> {
            Arc::new(Self { kind })
        }
    }

    #[async_trait]
    impl ProviderAdapter for MockProvider {
        fn kind(&self) -> ProviderKind {
            self.kind
        }

        fn supports_model(&self, model: &Model) -> bool {
            match self.kind {
                ProviderKind::Anthropic => model.is_claude(),
                ProviderKind::OpenAi => model.is_gpt(),
            }
        }

        async fn invoke(
            &self,
            model: &Model,
            _prompt: &str,
            _options: &GenerationOptions,
        ) -> Result<String, GatewayError> {
            Ok(format!("{} via {}", model, self.kind))
        }
    }

    // -- Helpers ---------------------------------------------------------------

    fn default_config() -> FileProvidersConfig {
        FileProvidersConfig::default()
    }

    fn config_with_default(default: &str) -> FileProvidersConfig {
        FileProvidersConfig {
            default: Some(default.to_string()),
            ..Default::default()
        }
    }

    // -- resolve_provider routing priority tests -------------------------------

    #[test]
    fn explicit_routing_takes_highest_priority() {
        // claude-sonnet-4.5 would auto-infer to Anthropic; explicit routing wins.
        let providers = vec![
            MockProvider::new(ProviderKind::OpenAi),
            MockProvider::new(ProviderKind::Anthropic),
        ];
        let mut routing = HashMap::new();
        routing.insert("claude-sonnet-4.5".to_string(), "openai".to_string());
        let config = FileProvidersConfig {
            routing,
            ..Default::default()
        };
        let gw = RoutingGateway::new(providers, &config);

        let provider = gw.resolve_provider(&Model::ClaudeSonnet45).unwrap();
        assert_eq!(provider.kind(), ProviderKind::OpenAi);
    }

    #[test]
    fn claude_model_auto_infers_to_anthropic() {
        let providers = vec![
            MockProvider::new(ProviderKind::OpenAi),
            MockProvider::new(ProviderKind::Anthropic),
        ];
        let gw = RoutingGateway::new(providers, &default_config());

        let provider = gw.resolve_provider(&Model::ClaudeOpus45).unwrap();
        assert_eq!(provider.kind(), ProviderKind::Anthropic);
    }

    #[test]
    fn gpt_model_auto_infers_to_openai() {
        let providers = vec![
            MockProvider::new(ProviderKind::Anthropic),
            MockProvider::new(ProviderKind::OpenAi),
        ];
        let gw = RoutingGateway::new(providers, &default_config());

        let provider = gw.resolve_provider(&Model::Gpt41).unwrap();
        assert_eq!(provider.kind(), ProviderKind::OpenAi);
    }

    #[test]
    fn unknown_family_uses_default_kind() {
        let providers = vec![
            MockProvider::new(ProviderKind::Anthropic),
            MockProvider::new(ProviderKind::OpenAi),
        ];
        let gw = RoutingGateway::new(providers, &config_with_default("openai"));

        let provider = gw.resolve_provider(&Model::from("llama-3.3-70b")).unwrap();
        assert_eq!(provider.kind(), ProviderKind::OpenAi);
    }

    #[test]
    fn unknown_family_falls_back_to_first_provider() {
        let providers = vec![MockProvider::new(ProviderKind::OpenAi)];
        let gw = RoutingGateway::new(providers, &config_with_default("anthropic"));

        let provider = gw.resolve_provider(&Model::from("llama-3.3-70b")).unwrap();
        assert_eq!(provider.kind(), ProviderKind::OpenAi);
    }

    #[test]
    fn claude_without_anthropic_provider_is_not_available() {
        let providers = vec![MockProvider::new(ProviderKind::OpenAi)];
        let gw = RoutingGateway::new(providers, &default_config());

        let result = gw.resolve_provider(&Model::ClaudeSonnet45);
        assert!(matches!(result, Err(GatewayError::ModelNotAvailable(_))));
    }

    #[test]
    fn gemini_is_not_sent_to_other_providers() {
        let providers = vec![
            MockProvider::new(ProviderKind::Anthropic),
            MockProvider::new(ProviderKind::OpenAi),
        ];
        let gw = RoutingGateway::new(providers, &config_with_default("anthropic"));

        let result = gw.resolve_provider(&Model::Gemini3Pro);
        assert!(matches!(result, Err(GatewayError::ModelNotAvailable(_))));
    }

    #[test]
    fn gemini_can_still_be_routed_explicitly() {
        let providers = vec![MockProvider::new(ProviderKind::OpenAi)];
        let mut routing = HashMap::new();
        routing.insert("gemini-3-pro-preview".to_string(), "openai".to_string());
        let config = FileProvidersConfig {
            routing,
            ..Default::default()
        };
        let gw = RoutingGateway::new(providers, &config);

        let provider = gw.resolve_provider(&Model::Gemini3Pro).unwrap();
        assert_eq!(provider.kind(), ProviderKind::OpenAi);
    }

    #[test]
    fn default_panel_seats_route_to_supporting_providers() {
        let providers = vec![
            MockProvider::new(ProviderKind::Anthropic),
            MockProvider::new(ProviderKind::OpenAi),
        ];
        let gw = RoutingGateway::new(providers, &default_config());

        for preset in [PanelPreset::FactCheck, PanelPreset::Council] {
            for seat in JudgePanel::from_preset(preset).seats() {
                let provider = gw
                    .resolve_provider(&seat.model)
                    .unwrap_or_else(|e| panic!("{} ({}): {}", seat.role, seat.model, e));
                assert!(provider.supports_model(&seat.model));
            }
        }
    }

    #[test]
    fn empty_providers_returns_model_not_available() {
        let gw = RoutingGateway::new(vec![], &default_config());

        let result = gw.resolve_provider(&Model::ClaudeSonnet45);
        assert!(matches!(result, Err(GatewayError::ModelNotAvailable(_))));
    }

    #[test]
    fn unknown_or_disabled_routing_provider_is_ignored() {
        let providers = vec![MockProvider::new(ProviderKind::OpenAi)];
        let mut routing = HashMap::new();
        routing.insert("claude-sonnet-4.5".to_string(), "nonexistent".to_string());
        routing.insert("claude-opus-4.5".to_string(), "anthropic".to_string());
        let config = FileProvidersConfig {
            routing,
            ..Default::default()
        };
        let gw = RoutingGateway::new(providers, &config);

        assert!(gw.explicit_model_routing.is_empty());
    }

    // -- ProviderGateway trait integration tests -------------------------------

    #[tokio::test]
    async fn invoke_delegates_to_resolved_provider() {
        let providers = vec![
            MockProvider::new(ProviderKind::Anthropic),
            MockProvider::new(ProviderKind::OpenAi),
        ];
        let gw = RoutingGateway::new(providers, &default_config());

        let text = gw
            .invoke(&Model::Gpt41, "hello", &GenerationOptions::default())
            .await
            .unwrap();
        assert_eq!(text, "gpt-4.1 via openai");
    }

    #[tokio::test]
    async fn invoke_without_providers_fails() {
        let gw = RoutingGateway::new(vec![], &default_config());

        let result = gw
            .invoke(&Model::Gpt41, "hello", &GenerationOptions::default())
            .await;
        assert!(matches!(result, Err(GatewayError::ModelNotAvailable(_))));
    }
}
