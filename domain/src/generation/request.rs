//! Generation request value objects

use crate::core::model::Model;
use crate::core::prompt::Prompt;
use serde::{Deserialize, Serialize};

/// Per-call options passed through to the provider untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationOptions {
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum output length in tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Optional system prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

impl GenerationOptions {
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }
}

/// A content-generation request (immutable once built)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    prompt: Prompt,
    primary_model: Model,
    fallback_model: Model,
    fact_check: bool,
    options: GenerationOptions,
}

impl GenerationRequest {
    /// Create a request with the default primary and fallback models
    pub fn new(prompt: Prompt) -> Self {
        Self {
            prompt,
            primary_model: Model::default_primary(),
            fallback_model: Model::default_fallback(),
            fact_check: false,
            options: GenerationOptions::default(),
        }
    }

    pub fn with_primary(mut self, model: Model) -> Self {
        self.primary_model = model;
        self
    }

    pub fn with_fallback(mut self, model: Model) -> Self {
        self.fallback_model = model;
        self
    }

    pub fn with_fact_check(mut self, enabled: bool) -> Self {
        self.fact_check = enabled;
        self
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    pub fn primary_model(&self) -> &Model {
        &self.primary_model
    }

    pub fn fallback_model(&self) -> &Model {
        &self.fallback_model
    }

    pub fn fact_check_enabled(&self) -> bool {
        self.fact_check
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// The ordered attempt chain; a model never appears twice.
    pub fn attempt_chain(&self) -> Vec<&Model> {
        if self.primary_model == self.fallback_model {
            vec![&self.primary_model]
        } else {
            vec![&self.primary_model, &self.fallback_model]
        }
    }
}
