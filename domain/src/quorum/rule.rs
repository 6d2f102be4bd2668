//! Quorum rule for consensus determination

use crate::core::error::DomainError;
use crate::judge::panel::PANEL_SIZE;
use serde::{Deserialize, Serialize};

/// Threshold a verdict must reach to become directional.
///
/// # Example
///
/// ```
/// use verdict_domain::quorum::QuorumRule;
///
/// let rule = QuorumRule::default(); // 2 of 3
/// assert!(rule.is_satisfied(2, 3));  // 2 votes, strict majority of 3
/// assert!(rule.is_satisfied(2, 2));  // one judge failed
/// assert!(!rule.is_satisfied(1, 1)); // a plurality of one never decides
/// assert!(!rule.is_satisfied(1, 2)); // 1-1 split
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuorumRule {
    /// Configured panel size (the reporting denominator)
    pub panel_size: usize,
    /// Minimum absolute number of agreeing votes
    pub min_agreeing: usize,
}

impl Default for QuorumRule {
    fn default() -> Self {
        Self {
            panel_size: PANEL_SIZE,
            min_agreeing: 2,
        }
    }
}

impl QuorumRule {
    /// Build a rule, validating `1 <= min_agreeing <= panel_size`
    pub fn try_new(panel_size: usize, min_agreeing: usize) -> Result<Self, DomainError> {
        if panel_size == 0 {
            return Err(DomainError::InvalidQuorumRule(
                "panel size must be positive".to_string(),
            ));
        }
        if min_agreeing == 0 || min_agreeing > panel_size {
            return Err(DomainError::InvalidQuorumRule(format!(
                "min_agreeing must be between 1 and {}, got {}",
                panel_size, min_agreeing
            )));
        }
        Ok(Self {
            panel_size,
            min_agreeing,
        })
    }

    /// Whether `votes` agreeing judges out of `responded` decide the claim
    pub fn is_satisfied(&self, votes: usize, responded: usize) -> bool {
        if responded == 0 {
            return false;
        }
        votes * 2 > responded && votes >= self.min_agreeing
    }

    /// Get a human-readable description of this rule
    pub fn description(&self) -> String {
        format!(
            "at least {} of {} judges, and a strict majority of those responding",
            self.min_agreeing, self.panel_size
        )
    }
}

impl std::fmt::Display for QuorumRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule() {
        let rule = QuorumRule::default();

        assert!(rule.is_satisfied(3, 3));
        assert!(rule.is_satisfied(2, 3));
        assert!(rule.is_satisfied(2, 2));
        assert!(!rule.is_satisfied(1, 3));
        assert!(!rule.is_satisfied(1, 2));
        assert!(!rule.is_satisfied(1, 1));
    }

    #[test]
    fn test_zero_responded() {
        assert!(!QuorumRule::default().is_satisfied(0, 0));
    }

    #[test]
    fn test_unanimous_variant() {
        let rule = QuorumRule::try_new(3, 3).unwrap();
        assert!(!rule.is_satisfied(2, 2));
        assert!(rule.is_satisfied(3, 3));
    }

    #[test]
    fn test_try_new_validation() {
        assert!(QuorumRule::try_new(3, 0).is_err());
        assert!(QuorumRule::try_new(3, 4).is_err());
        assert!(QuorumRule::try_new(0, 0).is_err());
        assert!(QuorumRule::try_new(3, 1).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            QuorumRule::default().to_string(),
            "at least 2 of 3 judges, and a strict majority of those responding"
        );
    }
}
