//! Claim entities

use serde::{Deserialize, Serialize};

/// Stable claim identifier (`claim-<n>`, 1-based in source order)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(String);

impl ClaimId {
    pub fn from_index(index: usize) -> Self {
        Self(format!("claim-{}", index + 1))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClaimId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Byte range `[start, end)` of a claim inside the source content
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClaimSpan {
    pub start: usize,
    pub end: usize,
}

impl ClaimSpan {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn overlaps(&self, other: &ClaimSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Slice the source with this span, if it is a valid substring
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

/// An atomic factual assertion extracted from generated content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub id: ClaimId,
    pub text: String,
    pub span: ClaimSpan,
}

impl Claim {
    pub fn new(id: ClaimId, text: impl Into<String>, span: ClaimSpan) -> Self {
        Self {
            id,
            text: text.into(),
            span,
        }
    }
}
