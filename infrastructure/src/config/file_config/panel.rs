//! Judge panel configuration from TOML (`[panel]` section)
//!
//! The panel is either one of the built-in presets or three explicit seats.
//! Explicit seats win over the preset.
//!
//! ```toml
//! [panel]
//! preset = "fact_check"       # or "council"
//! deadline_ms = 30000
//! min_agreeing = 2
//!
//! [[panel.seats]]
//! role = "fact_checker_1"
//! model = "gpt-4.1"
//! ```

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use verdict_domain::{JudgePanel, JudgeRole, Model, PANEL_SIZE, PanelPreset, PanelSeat, QuorumRule};

/// One `[[panel.seats]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePanelSeat {
    pub role: String,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePanelConfig {
    /// Built-in composition: "fact_check" or "council"
    pub preset: String,
    /// Hard wall-clock bound per claim panel, in milliseconds
    pub deadline_ms: u64,
    /// Absolute votes required for a directional verdict
    pub min_agreeing: usize,
    /// Explicit seats (overrides `preset` when non-empty)
    pub seats: Vec<FilePanelSeat>,
}

impl Default for FilePanelConfig {
    fn default() -> Self {
        Self {
            preset: "fact_check".to_string(),
            deadline_ms: 30_000,
            min_agreeing: 2,
            seats: Vec::new(),
        }
    }
}

impl FilePanelConfig {
    pub fn parse_preset(&self) -> Result<PanelPreset, ConfigValidationError> {
        self.preset
            .parse()
            .map_err(|_| ConfigValidationError::UnknownPreset(self.preset.clone()))
    }

    /// Build the judge panel from explicit seats or the preset
    pub fn to_panel(&self) -> Result<JudgePanel, ConfigValidationError> {
        if self.seats.is_empty() {
            return Ok(JudgePanel::from_preset(self.parse_preset()?));
        }

        let seats = self
            .seats
            .iter()
            .map(|seat| {
                let role: JudgeRole = seat
                    .role
                    .parse()
                    .map_err(|_| ConfigValidationError::UnknownRole(seat.role.clone()))?;
                if seat.model.trim().is_empty() {
                    return Err(ConfigValidationError::EmptyModelName(format!(
                        "panel.seats[{}].model",
                        role
                    )));
                }
                Ok(PanelSeat::new(role, Model::from(seat.model.trim())))
            })
            .collect::<Result<Vec<_>, _>>()?;

        JudgePanel::try_new(seats).map_err(|e| ConfigValidationError::InvalidPanel(e.to_string()))
    }

    pub fn to_quorum_rule(&self) -> Result<QuorumRule, ConfigValidationError> {
        QuorumRule::try_new(PANEL_SIZE, self.min_agreeing)
            .map_err(|e| ConfigValidationError::InvalidQuorum(e.to_string()))
    }
}
