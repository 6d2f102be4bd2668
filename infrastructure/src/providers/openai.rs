//! OpenAI provider (chat completions API)

use super::http::{build_client, map_status, map_transport_error, non_empty};
use super::{ProviderAdapter, ProviderKind};
use crate::config::FileOpenAiConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use verdict_application::GatewayError;
use verdict_domain::{GenerationOptions, Model};

pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    max_tokens: u32,
}

impl OpenAiProvider {
    pub fn new(
        config: &FileOpenAiConfig,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        Ok(Self {
            client: build_client(timeout)?,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_tokens: config.max_tokens,
        })
    }

    /// Build the request body (pure function)
    fn build_request(
        &self,
        model: &Model,
        prompt: &str,
        options: &GenerationOptions,
    ) -> ChatCompletionRequest {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &options.system_prompt {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: system.clone(),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        });

        ChatCompletionRequest {
            model: model.to_string(),
            messages,
            max_tokens: options.max_tokens.unwrap_or(self.max_tokens),
            temperature: options.temperature,
        }
    }

    /// Pull the first choice's text out of a response (pure function)
    fn extract_text(response: ChatCompletionResponse) -> Result<String, GatewayError> {
        non_empty(
            response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content),
        )
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    fn supports_model(&self, model: &Model) -> bool {
        model.is_gpt()
    }

    async fn invoke(
        &self,
        model: &Model,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GatewayError> {
        let body = self.build_request(model, prompt, options);
        debug!("OpenAI request: model={}", body.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(map_status("openai", status, &error_text));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("invalid OpenAI response: {}", e)))?;

        Self::extract_text(parsed)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
