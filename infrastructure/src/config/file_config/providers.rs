//! Provider configuration from TOML (`[providers]` section)
//!
//! ```toml
//! [providers]
//! default = "anthropic"
//! request_timeout_secs = 120
//!
//! [providers.routing]
//! "gemini-3-pro-preview" = "openai"
//!
//! [providers.openai]
//! base_url = "https://api.openai.com/v1"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Anthropic API provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    /// Environment variable name for the API key (default: "ANTHROPIC_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Default max tokens per response.
    pub max_tokens: u32,
    /// Anthropic API version header.
    pub api_version: String,
}

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        Self {
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.anthropic.com/v1".to_string(),
            max_tokens: 4096,
            api_version: "2023-06-01".to_string(),
        }
    }
}

impl FileAnthropicConfig {
    /// Direct key first, then the configured environment variable
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_key(self.api_key.as_deref(), &self.api_key_env)
    }
}

/// OpenAI API provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the OpenAI API (can be overridden for compatible gateways).
    pub base_url: String,
    /// Default max tokens per response.
    pub max_tokens: u32,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            max_tokens: 4096,
        }
    }
}

impl FileOpenAiConfig {
    /// Direct key first, then the configured environment variable
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_key(self.api_key.as_deref(), &self.api_key_env)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Default provider: "anthropic" or "openai".
    pub default: Option<String>,
    /// HTTP request timeout for provider calls, in seconds.
    pub request_timeout_secs: u64,
    /// Anthropic API settings.
    pub anthropic: FileAnthropicConfig,
    /// OpenAI API settings.
    pub openai: FileOpenAiConfig,
    /// Explicit model → provider routing overrides.
    pub routing: HashMap<String, String>,
}

impl Default for FileProvidersConfig {
    fn default() -> Self {
        Self {
            default: None,
            request_timeout_secs: 120,
            anthropic: FileAnthropicConfig::default(),
            openai: FileOpenAiConfig::default(),
            routing: HashMap::new(),
        }
    }
}

fn resolve_key(direct: Option<&str>, env_var: &str) -> Option<String> {
    direct
        .map(str::to_string)
        .or_else(|| std::env::var(env_var).ok())
        .filter(|key| !key.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_providers_default() {
        let config = FileProvidersConfig::default();
        assert!(config.default.is_none());
        assert_eq!(config.request_timeout_secs, 120);
        assert_eq!(config.anthropic.api_key_env, "ANTHROPIC_API_KEY");
        assert_eq!(config.openai.api_key_env, "OPENAI_API_KEY");
        assert!(config.routing.is_empty());
    }

    #[test]
    fn test_providers_deserialize() {
        let toml_str = r#"
[providers]
default = "openai"

[providers.routing]
"gemini-3-pro-preview" = "openai"

[providers.anthropic]
api_key = "sk-test"
max_tokens = 1024
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.providers.default.as_deref(), Some("openai"));
        assert_eq!(
            config.providers.routing.get("gemini-3-pro-preview"),
            Some(&"openai".to_string())
        );
        assert_eq!(config.providers.anthropic.max_tokens, 1024);
        assert_eq!(config.providers.anthropic.api_version, "2023-06-01");
    }

    #[test]
    fn test_direct_key_wins() {
        let config = FileOpenAiConfig {
            api_key: Some("sk-direct".to_string()),
            api_key_env: "VERDICT_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), Some("sk-direct".to_string()));
    }

    #[test]
    fn test_missing_key_is_none() {
        let config = FileOpenAiConfig {
            api_key: None,
            api_key_env: "VERDICT_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }
}
