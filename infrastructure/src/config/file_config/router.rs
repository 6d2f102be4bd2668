//! Generation routing configuration from TOML (`[router]` section)
//!
//! ```toml
//! [router]
//! primary_model = "claude-sonnet-4.5"
//! fallback_model = "gpt-4.1"
//! attempt_timeout_secs = 60
//! ```

use serde::{Deserialize, Serialize};
use verdict_domain::Model;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRouterConfig {
    /// Model tried first when the request names none
    pub primary_model: String,
    /// Resilience model tried once when the primary fails
    pub fallback_model: String,
    /// Per-attempt timeout in seconds
    pub attempt_timeout_secs: u64,
}

impl Default for FileRouterConfig {
    fn default() -> Self {
        Self {
            primary_model: Model::default_primary().to_string(),
            fallback_model: Model::default_fallback().to_string(),
            attempt_timeout_secs: 60,
        }
    }
}

impl FileRouterConfig {
    pub fn parse_primary(&self) -> Model {
        Model::from(self.primary_model.trim())
    }

    pub fn parse_fallback(&self) -> Model {
        Model::from(self.fallback_model.trim())
    }
}
