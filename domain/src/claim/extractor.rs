//! Claim extraction from generated prose.
//!
//! The heuristic is deterministic:
//!
//! 1. Split into lines, skipping code fences and markdown headings; strip
//!    bullet / numbering markers.
//! 2. Split each line into sentences at `.`, `!` or `?` followed by
//!    whitespace or end of line (so `3.14` stays intact).
//! 3. Drop questions, exclamations, short fragments, and opinion or
//!    stylistic sentences.
//! 4. Keep what carries a factual signal: a digit, a proper noun after the
//!    first word, or a factual verb.
//!
//! Spans always index the original content, never overlap, and come out in
//! source order.

use super::entities::{Claim, ClaimId, ClaimSpan};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static OPINION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(i think|i believe|i feel|i guess|in my opinion|in my view|we believe|we feel|you should|should|might|perhaps|maybe|probably|could be|arguably|hopefully|i hope|i recommend|feel free)\b",
    )
    .expect("static regex")
});

static STYLISTIC_OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(sure|certainly|of course|absolutely|great question|here is|here's|here are|in summary|in conclusion|to summarize|overall|let's|let me|hello|hi|thanks|thank you)\b",
    )
    .expect("static regex")
});

static FACTUAL_VERB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(is|are|was|were|has|have|had|contains?|located|founded|born|invented|discovered|consists?|measures?|equals?|built|established|won|died|orbits?|covers?|produces?)\b",
    )
    .expect("static regex")
});

static PROPER_NOUN_AFTER_FIRST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s[A-Z][a-zA-Z]+").expect("static regex"));

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*+•]|\d+[.)])\s+").expect("static regex"));

/// Tunable knobs for claim extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Sentences with fewer words are not claims
    pub min_words: usize,
    /// Upper bound on claims per content (first ones in source order win)
    pub max_claims: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_words: 4,
            max_claims: 10,
        }
    }
}

/// Splits generated text into independently verifiable claims
#[derive(Debug, Clone, Default)]
pub struct ClaimExtractor {
    config: ExtractorConfig,
}

impl ClaimExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract claims in source order. Never fails; may return nothing.
    pub fn extract(&self, content: &str) -> Vec<Claim> {
        let mut claims = Vec::new();
        if self.config.max_claims == 0 {
            return claims;
        }

        for span in sentence_spans(content) {
            let Some(text) = span.slice(content) else {
                continue;
            };
            if !self.is_factual(text) {
                continue;
            }
            let id = ClaimId::from_index(claims.len());
            claims.push(Claim::new(id, text, span));
            if claims.len() >= self.config.max_claims {
                break;
            }
        }

        claims
    }

    /// Factual-statement filter applied to one sentence
    fn is_factual(&self, sentence: &str) -> bool {
        if sentence.ends_with('?') || sentence.ends_with('!') {
            return false;
        }
        if sentence.split_whitespace().count() < self.config.min_words {
            return false;
        }
        if STYLISTIC_OPENER.is_match(sentence) || OPINION.is_match(sentence) {
            return false;
        }

        sentence.chars().any(|c| c.is_ascii_digit())
            || PROPER_NOUN_AFTER_FIRST.is_match(sentence)
            || FACTUAL_VERB.is_match(sentence)
    }
}

/// Sentence spans (trimmed, in source order) over the whole content
fn sentence_spans(content: &str) -> Vec<ClaimSpan> {
    let mut spans = Vec::new();
    let mut in_code_fence = false;
    let mut line_start = 0;

    for line in content.split_inclusive('\n') {
        let offset = line_start;
        line_start += line.len();

        let trimmed = line.trim_start();
        if trimmed.starts_with("```") {
            in_code_fence = !in_code_fence;
            continue;
        }
        if in_code_fence || trimmed.starts_with('#') || trimmed.starts_with('>') {
            continue;
        }

        let mut body_start = offset + (line.len() - trimmed.len());
        if let Some(marker) = LIST_MARKER.find(trimmed) {
            body_start += marker.end();
        }
        let body_end = offset + line.trim_end().len();
        if body_start >= body_end {
            continue;
        }

        split_sentences(content, body_start, body_end, &mut spans);
    }

    spans
}

/// Split `content[start..end]` into trimmed sentence spans
fn split_sentences(content: &str, start: usize, end: usize, spans: &mut Vec<ClaimSpan>) {
    let body = &content[start..end];
    let mut sentence_start = 0;
    let mut chars = body.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let at_boundary = match chars.peek() {
            None => true,
            Some((_, next)) => next.is_whitespace(),
        };
        if at_boundary {
            let sentence_end = i + c.len_utf8();
            push_trimmed(body, start, sentence_start, sentence_end, spans);
            sentence_start = sentence_end;
        }
    }

    if sentence_start < body.len() {
        push_trimmed(body, start, sentence_start, body.len(), spans);
    }
}

fn push_trimmed(body: &str, base: usize, from: usize, to: usize, spans: &mut Vec<ClaimSpan>) {
    let raw = &body[from..to];
    let leading = raw.len() - raw.trim_start().len();
    let trimmed_len = raw.trim().len();
    if trimmed_len == 0 {
        return;
    }
    let start = base + from + leading;
    spans.push(ClaimSpan::new(start, start + trimmed_len));
}
