//! Anthropic provider (messages API)

use super::http::{build_client, map_status, map_transport_error, non_empty};
use super::{ProviderAdapter, ProviderKind};
use crate::config::FileAnthropicConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use verdict_application::GatewayError;
use verdict_domain::{GenerationOptions, Model};

pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    base_url: String,
    api_version: String,
    max_tokens: u32,
}

impl AnthropicProvider {
    pub fn new(
        config: &FileAnthropicConfig,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        Ok(Self {
            client: build_client(timeout)?,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            max_tokens: config.max_tokens,
        })
    }

    fn build_request(
        &self,
        model: &Model,
        prompt: &str,
        options: &GenerationOptions,
    ) -> MessagesRequest {
        MessagesRequest {
            model: model.to_string(),
            max_tokens: options.max_tokens.unwrap_or(self.max_tokens),
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            system: options.system_prompt.clone(),
            temperature: options.temperature,
        }
    }

    /// Concatenate the text blocks of a response
    fn extract_text(response: MessagesResponse) -> Result<String, GatewayError> {
        let text = response
            .content
            .into_iter()
            .filter(|block| block.content_type == "text")
            .filter_map(|block| block.text)
            .collect::<Vec<_>>()
            .join("");
        non_empty(Some(text))
    }
}

#[async_trait]
impl ProviderAdapter for AnthropicProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Anthropic
    }

    fn supports_model(&self, model: &Model) -> bool {
        model.is_claude()
    }

    async fn invoke(
        &self,
        model: &Model,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GatewayError> {
        let body = self.build_request(model, prompt, options);
        debug!("Anthropic request: model={}", body.model);

        let response = self
            .client
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .json(&body)
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(map_status("anthropic", status, &error_text));
        }

        let parsed: MessagesResponse = response.json().await.map_err(|e| {
            GatewayError::RequestFailed(format!("invalid Anthropic response: {}", e))
        })?;

        Self::extract_text(parsed)
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: Option<String>,
}
