//! Scripted gateway shared by the use case tests

use crate::ports::provider_gateway::{GatewayError, ProviderGateway};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use verdict_domain::{GenerationOptions, Model};

#[derive(Clone)]
struct Step {
    reply: Result<String, GatewayError>,
    delay: Duration,
}

/// Mock gateway answering per model, optionally per prompt fragment.
///
/// Unscripted models answer `ModelNotAvailable`. Every call is recorded.
#[derive(Default)]
pub(crate) struct ScriptedGateway {
    by_model: HashMap<String, Step>,
    by_prompt: Vec<(String, String, Step)>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, model: &str, text: &str) -> Self {
        self.by_model.insert(
            model.to_string(),
            Step {
                reply: Ok(text.to_string()),
                delay: Duration::ZERO,
            },
        );
        self
    }

    pub fn reply_after(mut self, model: &str, text: &str, delay: Duration) -> Self {
        self.by_model.insert(
            model.to_string(),
            Step {
                reply: Ok(text.to_string()),
                delay,
            },
        );
        self
    }

    pub fn fail(mut self, model: &str, error: GatewayError) -> Self {
        self.by_model.insert(
            model.to_string(),
            Step {
                reply: Err(error),
                delay: Duration::ZERO,
            },
        );
        self
    }

    /// Override the reply of `model` when the prompt contains `needle`
    pub fn reply_when(mut self, model: &str, needle: &str, text: &str, delay: Duration) -> Self {
        self.by_prompt.push((
            model.to_string(),
            needle.to_string(),
            Step {
                reply: Ok(text.to_string()),
                delay,
            },
        ));
        self
    }

    pub fn calls_to(&self, model: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, _)| m == model)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn step_for(&self, model: &str, prompt: &str) -> Option<Step> {
        self.by_prompt
            .iter()
            .find(|(m, needle, _)| m == model && prompt.contains(needle.as_str()))
            .map(|(_, _, step)| step.clone())
            .or_else(|| self.by_model.get(model).cloned())
    }
}

#[async_trait]
impl ProviderGateway for ScriptedGateway {
    async fn invoke(
        &self,
        model: &Model,
        prompt: &str,
        _options: &GenerationOptions,
    ) -> Result<String, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), prompt.to_string()));

        let Some(step) = self.step_for(model.as_str(), prompt) else {
            return Err(GatewayError::ModelNotAvailable(model.to_string()));
        };
        if !step.delay.is_zero() {
            tokio::time::sleep(step.delay).await;
        }
        step.reply
    }
}

/// A judge reply in the JSON shape the prompt asks for
pub(crate) fn judge_json(verdict: &str) -> String {
    format!(
        r#"{{"verdict": "{}", "confidence": 0.9, "reasoning": "checked", "evidence_urls": []}}"#,
        verdict
    )
}
