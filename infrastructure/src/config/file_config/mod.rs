//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to the application-level
//! [`RouterConfig`] once validated.

mod panel;
mod providers;
mod router;
mod server;

pub use panel::{FilePanelConfig, FilePanelSeat};
pub use providers::{FileAnthropicConfig, FileOpenAiConfig, FileProvidersConfig};
pub use router::FileRouterConfig;
pub use server::{FileFactCheckConfig, FileLoggingConfig, FileServerConfig};

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use verdict_application::RouterConfig;
use verdict_domain::ExtractorConfig;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{0} cannot be 0")]
    InvalidTimeout(&'static str),

    #[error("model name cannot be empty: {0}")]
    EmptyModelName(String),

    #[error("invalid judge panel: {0}")]
    InvalidPanel(String),

    #[error("invalid quorum: {0}")]
    InvalidQuorum(String),

    #[error("unknown judge role: {0}")]
    UnknownRole(String),

    #[error("unknown panel preset: {0} (valid: fact_check, council)")]
    UnknownPreset(String),

    #[error("fact_check.claim_concurrency cannot be 0")]
    InvalidConcurrency,

    #[error("extractor.max_claims cannot be 0")]
    InvalidMaxClaims,

    #[error("invalid server host: {0}")]
    InvalidServerAddress(String),

    #[error("unknown provider: {0} (valid: anthropic, openai)")]
    UnknownProvider(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Primary / fallback models and attempt timeout
    pub router: FileRouterConfig,
    /// Judge panel, deadline and quorum threshold
    pub panel: FilePanelConfig,
    /// Claim segmentation tuning
    pub extractor: ExtractorConfig,
    /// Fact-check fan-out
    pub fact_check: FileFactCheckConfig,
    /// HTTP front door
    pub server: FileServerConfig,
    /// Provider credentials and routing
    pub providers: FileProvidersConfig,
    /// Optional file logging
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.router.attempt_timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidTimeout(
                "router.attempt_timeout_secs",
            ));
        }
        if self.panel.deadline_ms == 0 {
            return Err(ConfigValidationError::InvalidTimeout("panel.deadline_ms"));
        }
        if self.providers.request_timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidTimeout(
                "providers.request_timeout_secs",
            ));
        }

        if self.router.primary_model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName(
                "router.primary_model".to_string(),
            ));
        }
        if self.router.fallback_model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName(
                "router.fallback_model".to_string(),
            ));
        }

        self.panel.to_panel()?;
        self.panel.to_quorum_rule()?;

        if self.fact_check.claim_concurrency == 0 {
            return Err(ConfigValidationError::InvalidConcurrency);
        }
        if self.extractor.max_claims == 0 {
            return Err(ConfigValidationError::InvalidMaxClaims);
        }

        self.server.socket_addr()?;

        let provider_names = self
            .providers
            .default
            .iter()
            .chain(self.providers.routing.values());
        for name in provider_names {
            if !matches!(name.to_lowercase().as_str(), "anthropic" | "openai") {
                return Err(ConfigValidationError::UnknownProvider(name.clone()));
            }
        }

        Ok(())
    }

    /// Validate and convert to the application-level configuration
    pub fn to_router_config(&self) -> Result<RouterConfig, ConfigValidationError> {
        self.validate()?;

        Ok(RouterConfig::default()
            .with_default_primary(self.router.parse_primary())
            .with_default_fallback(self.router.parse_fallback())
            .with_attempt_timeout(Some(Duration::from_secs(
                self.router.attempt_timeout_secs,
            )))
            .with_panel(self.panel.to_panel()?)
            .with_panel_deadline(Duration::from_millis(self.panel.deadline_ms))
            .with_quorum(self.panel.to_quorum_rule()?)
            .with_extractor(self.extractor.clone())
            .with_claim_concurrency(self.fact_check.claim_concurrency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_domain::{JudgeRole, Model};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[router]
primary_model = "gpt-5.2"
fallback_model = "claude-haiku-4.5"
attempt_timeout_secs = 20

[panel]
preset = "council"
deadline_ms = 5000
min_agreeing = 3

[extractor]
min_words = 6
max_claims = 3

[fact_check]
claim_concurrency = 2

[server]
host = "0.0.0.0"
port = 9000

[logging]
dir = "/tmp/verdict-logs"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_ok());

        let router = config.to_router_config().unwrap();
        assert_eq!(router.default_primary, Model::Gpt52);
        assert_eq!(router.default_fallback, Model::ClaudeHaiku45);
        assert_eq!(router.attempt_timeout, Some(Duration::from_secs(20)));
        assert_eq!(router.panel_deadline, Duration::from_millis(5000));
        assert_eq!(router.panel.seats()[2].role, JudgeRole::Auditor);
        assert_eq!(router.quorum.min_agreeing, 3);
        assert_eq!(router.extractor.max_claims, 3);
        assert_eq!(router.claim_concurrency, 2);
        assert_eq!(config.server.socket_addr().unwrap().port(), 9000);
        assert!(config.logging.dir.is_some());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[panel]
deadline_ms = 1000
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.panel.deadline_ms, 1000);
        // Defaults should apply
        assert_eq!(config.panel.preset, "fact_check");
        assert_eq!(config.router, FileRouterConfig::default());
        assert_eq!(config.extractor.min_words, 4);
    }

    #[test]
    fn test_default_config_converts() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());

        let router = config.to_router_config().unwrap();
        assert_eq!(router.default_primary, Model::ClaudeSonnet45);
        assert_eq!(router.default_fallback, Model::Gpt41);
        assert_eq!(router.attempt_timeout, Some(Duration::from_secs(60)));
        assert_eq!(router.panel_deadline, Duration::from_secs(30));
        assert_eq!(router.claim_concurrency, 4);
    }

    #[test]
    fn test_validate_zero_timeouts() {
        let mut config = FileConfig::default();
        config.router.attempt_timeout_secs = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout(
                "router.attempt_timeout_secs"
            ))
        );

        let mut config = FileConfig::default();
        config.panel.deadline_ms = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout("panel.deadline_ms"))
        );
    }

    #[test]
    fn test_validate_empty_model_name() {
        let toml_str = r#"
[router]
fallback_model = "  "
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyModelName(_))
        ));
    }

    #[test]
    fn test_validate_unknown_provider() {
        let toml_str = r#"
[providers]
default = "mistral"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::UnknownProvider("mistral".to_string()))
        );
    }

    #[test]
    fn test_validate_zero_concurrency() {
        let mut config = FileConfig::default();
        config.fact_check.claim_concurrency = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidConcurrency)
        );
    }
}
