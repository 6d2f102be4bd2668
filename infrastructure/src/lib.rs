//! Infrastructure layer for verdict-router
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileProvidersConfig,
    FileServerConfig,
};
pub use providers::{
    ProviderAdapter, ProviderKind, anthropic::AnthropicProvider, configured_providers,
    openai::OpenAiProvider, routing::RoutingGateway,
};
