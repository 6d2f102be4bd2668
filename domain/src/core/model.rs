//! Model value object representing an LLM model identifier

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Model identifier (Value Object)
///
/// Well-known identifiers get their own variant so that provider routing can
/// infer the model family; anything else is carried verbatim in `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Claude models
    ClaudeOpus45,
    ClaudeSonnet45,
    ClaudeHaiku45,
    // GPT models
    Gpt52,
    Gpt41,
    Gpt41Mini,
    Gpt4o,
    // Gemini models
    Gemini3Pro,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::ClaudeOpus45 => "claude-opus-4.5",
            Model::ClaudeSonnet45 => "claude-sonnet-4.5",
            Model::ClaudeHaiku45 => "claude-haiku-4.5",
            Model::Gpt52 => "gpt-5.2",
            Model::Gpt41 => "gpt-4.1",
            Model::Gpt41Mini => "gpt-4.1-mini",
            Model::Gpt4o => "gpt-4o",
            Model::Gemini3Pro => "gemini-3-pro-preview",
            Model::Custom(s) => s,
        }
    }

    /// Default primary model for generation
    pub fn default_primary() -> Model {
        Model::ClaudeSonnet45
    }

    /// Resilience model used when a request names no fallback
    pub fn default_fallback() -> Model {
        Model::Gpt41
    }

    /// Check if this is a Claude model
    pub fn is_claude(&self) -> bool {
        match self {
            Model::ClaudeOpus45 | Model::ClaudeSonnet45 | Model::ClaudeHaiku45 => true,
            Model::Custom(s) => s.starts_with("claude"),
            _ => false,
        }
    }

    /// Check if this is a GPT model
    pub fn is_gpt(&self) -> bool {
        match self {
            Model::Gpt52 | Model::Gpt41 | Model::Gpt41Mini | Model::Gpt4o => true,
            Model::Custom(s) => s.starts_with("gpt") || s.starts_with("o1") || s.starts_with("o3"),
            _ => false,
        }
    }

    /// Check if this is a Gemini model
    pub fn is_gemini(&self) -> bool {
        match self {
            Model::Gemini3Pro => true,
            Model::Custom(s) => s.starts_with("gemini"),
            _ => false,
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::default_primary()
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim() {
            "claude-opus-4.5" => Model::ClaudeOpus45,
            "claude-sonnet-4.5" => Model::ClaudeSonnet45,
            "claude-haiku-4.5" => Model::ClaudeHaiku45,
            "gpt-5.2" => Model::Gpt52,
            "gpt-4.1" => Model::Gpt41,
            "gpt-4.1-mini" => Model::Gpt41Mini,
            "gpt-4o" => Model::Gpt4o,
            "gemini-3-pro-preview" => Model::Gemini3Pro,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
