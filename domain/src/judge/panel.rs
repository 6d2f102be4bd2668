//! Judge panel configuration
//!
//! The panel is an explicit, immutable value handed to the coordinator per
//! call, so that panels can be swapped (or mocked) without touching the
//! protocol.

use super::role::JudgeRole;
use crate::core::error::DomainError;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Fixed number of seats on every judge panel
pub const PANEL_SIZE: usize = 3;

/// One panel seat: a role bound to a model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSeat {
    pub role: JudgeRole,
    pub model: Model,
}

impl PanelSeat {
    pub fn new(role: JudgeRole, model: Model) -> Self {
        Self { role, model }
    }
}

/// Built-in panel compositions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelPreset {
    /// Two fact-checkers plus a cross-checking challenger
    #[default]
    FactCheck,
    /// Visionary / Operator / Auditor perspectives
    Council,
}

impl std::str::FromStr for PanelPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "fact_check" | "factcheck" => Ok(PanelPreset::FactCheck),
            "council" => Ok(PanelPreset::Council),
            _ => Err(format!(
                "Unknown panel preset: {}. Valid: fact_check, council",
                s
            )),
        }
    }
}

/// An ordered panel of exactly [`PANEL_SIZE`] judges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PanelSeat>", into = "Vec<PanelSeat>")]
pub struct JudgePanel {
    seats: Vec<PanelSeat>,
}

impl JudgePanel {
    /// Build a panel, rejecting any size other than [`PANEL_SIZE`]
    pub fn try_new(seats: Vec<PanelSeat>) -> Result<Self, DomainError> {
        if seats.len() != PANEL_SIZE {
            return Err(DomainError::InvalidPanelSize {
                expected: PANEL_SIZE,
                actual: seats.len(),
            });
        }
        Ok(Self { seats })
    }

    pub fn from_preset(preset: PanelPreset) -> Self {
        let seats = match preset {
            PanelPreset::FactCheck => vec![
                PanelSeat::new(JudgeRole::FactChecker1, Model::Gpt41),
                PanelSeat::new(JudgeRole::FactChecker2, Model::ClaudeSonnet45),
                PanelSeat::new(JudgeRole::Challenger, Model::ClaudeHaiku45),
            ],
            PanelPreset::Council => vec![
                PanelSeat::new(JudgeRole::Visionary, Model::ClaudeOpus45),
                PanelSeat::new(JudgeRole::Operator, Model::Gpt52),
                PanelSeat::new(JudgeRole::Auditor, Model::Gpt41Mini),
            ],
        };
        Self { seats }
    }

    pub fn seats(&self) -> &[PanelSeat] {
        &self.seats
    }

    /// Always [`PANEL_SIZE`]; the consensus denominator
    pub fn size(&self) -> usize {
        self.seats.len()
    }
}

impl Default for JudgePanel {
    fn default() -> Self {
        Self::from_preset(PanelPreset::default())
    }
}

impl TryFrom<Vec<PanelSeat>> for JudgePanel {
    type Error = DomainError;

    fn try_from(seats: Vec<PanelSeat>) -> Result<Self, Self::Error> {
        JudgePanel::try_new(seats)
    }
}

impl From<JudgePanel> for Vec<PanelSeat> {
    fn from(panel: JudgePanel) -> Self {
        panel.seats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_panel_is_fact_check() {
        let panel = JudgePanel::default();
        let roles: Vec<_> = panel.seats().iter().map(|s| s.role).collect();
        assert_eq!(
            roles,
            vec![
                JudgeRole::FactChecker1,
                JudgeRole::FactChecker2,
                JudgeRole::Challenger
            ]
        );
        assert_eq!(panel.size(), PANEL_SIZE);
    }

    #[test]
    fn test_presets_only_use_claude_or_gpt_models() {
        for preset in [PanelPreset::FactCheck, PanelPreset::Council] {
            for seat in JudgePanel::from_preset(preset).seats() {
                assert!(
                    seat.model.is_claude() || seat.model.is_gpt(),
                    "{} seat uses {}",
                    seat.role,
                    seat.model
                );
            }
        }
    }

    #[test]
    fn test_council_preset() {
        let panel = JudgePanel::from_preset(PanelPreset::Council);
        assert_eq!(panel.seats()[0].role, JudgeRole::Visionary);
        assert_eq!(panel.seats()[2].role, JudgeRole::Auditor);
    }

    #[test]
    fn test_rejects_wrong_size() {
        let seats = vec![PanelSeat::new(JudgeRole::Auditor, Model::Gpt41)];
        assert_eq!(
            JudgePanel::try_new(seats),
            Err(DomainError::InvalidPanelSize {
                expected: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn test_parse_preset() {
        assert_eq!("fact-check".parse::<PanelPreset>(), Ok(PanelPreset::FactCheck));
        assert_eq!("council".parse::<PanelPreset>(), Ok(PanelPreset::Council));
        assert!("jury".parse::<PanelPreset>().is_err());
    }
}
