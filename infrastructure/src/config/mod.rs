//! Configuration file loading for verdict-router
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `VERDICT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./verdict.toml` or `./.verdict.toml`
//! 4. Global: `$XDG_CONFIG_HOME/verdict-router/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAnthropicConfig, FileConfig, FileFactCheckConfig,
    FileLoggingConfig, FileOpenAiConfig, FilePanelConfig, FilePanelSeat, FileProvidersConfig,
    FileRouterConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
