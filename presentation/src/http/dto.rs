//! JSON wire types for the HTTP API (and `--output json`)
//!
//! All field names are camelCase.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use verdict_application::{FactCheckedResponse, GenerationResponse, RouterInput};
use verdict_domain::{ConsensusResult, FinalVerdict, GenerationOptions};

/// Body of `POST /api/router`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouterRequestBody {
    /// `"generate"` or `"generate-with-fact-check"`
    pub action: Option<String>,
    pub prompt: Option<String>,
    pub primary_model: Option<String>,
    pub fallback_model: Option<String>,
    /// Fact-check action only; defaults to `true`
    pub enable_fact_check: Option<bool>,
    pub options: Option<GenerationOptions>,
}

impl RouterRequestBody {
    pub fn to_input(&self) -> RouterInput {
        RouterInput {
            prompt: self.prompt.clone().unwrap_or_default(),
            primary_model: self.primary_model.clone(),
            fallback_model: self.fallback_model.clone(),
            options: self.options.clone().unwrap_or_default(),
            enable_fact_check: self.enable_fact_check,
        }
    }
}

/// `?action=` query parameter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionQuery {
    pub action: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponseDto {
    pub success: bool,
    pub content: String,
    pub model_used: String,
    pub timestamp: String,
}

impl From<&GenerationResponse> for GenerateResponseDto {
    fn from(response: &GenerationResponse) -> Self {
        Self {
            success: true,
            content: response.content.clone(),
            model_used: response.model_used.to_string(),
            timestamp: iso8601(&response.timestamp),
        }
    }
}

/// One claim's fact-check in the response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCheckDto {
    pub claim: String,
    pub final_verdict: FinalVerdict,
    pub consensus: String,
    /// Every seat's assessment, serialized as a JSON array string
    pub judge_results: String,
    pub evidence_block: String,
}

impl From<&ConsensusResult> for FactCheckDto {
    fn from(result: &ConsensusResult) -> Self {
        Self {
            claim: result.claim.text.clone(),
            final_verdict: result.final_verdict,
            consensus: result.summary.clone(),
            judge_results: serde_json::to_string(&result.assessments)
                .unwrap_or_else(|_| "[]".to_string()),
            evidence_block: result.evidence_block.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCheckResponseDto {
    pub success: bool,
    pub content: String,
    pub model_used: String,
    pub fact_checks: Vec<FactCheckDto>,
    pub fact_check_count: usize,
    pub timestamp: String,
}

impl From<&FactCheckedResponse> for FactCheckResponseDto {
    fn from(response: &FactCheckedResponse) -> Self {
        Self {
            success: true,
            content: response.content.clone(),
            model_used: response.model_used.to_string(),
            fact_checks: response.fact_checks.iter().map(FactCheckDto::from).collect(),
            fact_check_count: response.fact_check_count(),
            timestamp: iso8601(&response.timestamp),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub success: bool,
    pub error: String,
}

impl ErrorResponseDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: String,
}

impl HealthDto {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: iso8601(&Utc::now()),
        }
    }
}

pub(crate) fn iso8601(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_request_body_camel_case() {
        let body: RouterRequestBody = serde_json::from_str(
            r#"{"action": "generate", "prompt": "Hi", "primaryModel": "gpt-4.1", "enableFactCheck": false}"#,
        )
        .unwrap();

        assert_eq!(body.action.as_deref(), Some("generate"));
        let input = body.to_input();
        assert_eq!(input.prompt, "Hi");
        assert_eq!(input.primary_model.as_deref(), Some("gpt-4.1"));
        assert!(input.fallback_model.is_none());
        assert_eq!(input.enable_fact_check, Some(false));
    }

    #[test]
    fn test_iso8601() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(iso8601(&ts), "2026-03-01T12:00:00.000Z");
    }

    #[test]
    fn test_error_dto_shape() {
        let json = serde_json::to_value(ErrorResponseDto::new("boom")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "boom"}));
    }
}
