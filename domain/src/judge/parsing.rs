//! Judge response parsing.
//!
//! Extracts a structured judgment from a free-form judge reply. Pure text
//! handling, no I/O.
//!
//! # Supported Formats
//!
//! 1. **JSON** (preferred): `{"verdict": "true", "confidence": 0.9, "reasoning": "...", "evidence_urls": ["..."]}`,
//!    optionally wrapped in a code fence or surrounded by prose
//! 2. **Keyword**: `VERDICT: FALSE`
//!
//! Anything else parses as [`Verdict::Uncertain`]. URLs are scraped from the
//! raw text when the JSON carries none.

use super::assessment::Verdict;
use regex::Regex;
use std::sync::LazyLock;

static VERDICT_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)verdict\s*[:=\-]\s*\**\s*(true|false|uncertain|unverified|unknown)\b")
        .expect("static regex")
});

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"'\)\]]+"#).expect("static regex"));

/// Structured content of one judge reply
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedJudgment {
    pub verdict: Verdict,
    pub confidence: Option<f64>,
    pub reasoning: String,
    pub evidence_urls: Vec<String>,
}

/// Parse a judge reply. Never fails; unreadable replies are `Uncertain`.
///
/// # Examples
///
/// ```
/// use verdict_domain::judge::{Verdict, parse_judge_response};
///
/// let parsed = parse_judge_response(r#"{"verdict": "false", "reasoning": "Wrong year"}"#);
/// assert_eq!(parsed.verdict, Verdict::False);
///
/// let parsed = parse_judge_response("VERDICT: TRUE - see https://example.org/a");
/// assert_eq!(parsed.verdict, Verdict::True);
/// assert_eq!(parsed.evidence_urls, vec!["https://example.org/a"]);
/// ```
pub fn parse_judge_response(response: &str) -> ParsedJudgment {
    if let Some(parsed) = parse_json(response) {
        return parsed;
    }

    let verdict = VERDICT_KEYWORD
        .captures(response)
        .and_then(|c| c.get(1))
        .and_then(|m| Verdict::from_word(m.as_str()))
        .unwrap_or(Verdict::Uncertain);

    ParsedJudgment {
        verdict,
        confidence: None,
        reasoning: response.trim().to_string(),
        evidence_urls: scrape_urls(response),
    }
}

fn parse_json(response: &str) -> Option<ParsedJudgment> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    if end <= start {
        return None;
    }
    let value: serde_json::Value = serde_json::from_str(&response[start..=end]).ok()?;
    let verdict = value
        .get("verdict")
        .and_then(|v| match v {
            serde_json::Value::String(s) => Verdict::from_word(s),
            serde_json::Value::Bool(true) => Some(Verdict::True),
            serde_json::Value::Bool(false) => Some(Verdict::False),
            _ => None,
        })
        .unwrap_or(Verdict::Uncertain);

    let confidence = value
        .get("confidence")
        .and_then(|v| v.as_f64())
        .map(|c| c.clamp(0.0, 1.0));

    let reasoning = value
        .get("reasoning")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    let mut evidence_urls: Vec<String> = value
        .get("evidence_urls")
        .or_else(|| value.get("evidenceUrls"))
        .and_then(|v| v.as_array())
        .map(|urls| {
            urls.iter()
                .filter_map(|u| u.as_str())
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty())
                .collect()
        })
        .unwrap_or_default();
    if evidence_urls.is_empty() {
        evidence_urls = scrape_urls(response);
    }

    Some(ParsedJudgment {
        verdict,
        confidence,
        reasoning,
        evidence_urls,
    })
}

/// URLs in order of first appearance, de-duplicated
fn scrape_urls(text: &str) -> Vec<String> {
    let mut urls: Vec<String> = Vec::new();
    for m in URL.find_iter(text) {
        let url = m.as_str().trim_end_matches(['.', ',', ';']).to_string();
        if !urls.contains(&url) {
            urls.push(url);
        }
    }
    urls
}
