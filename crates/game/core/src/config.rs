use thiserror::Error;

use crate::combat::MitigationCurve;

/// Tunable parameters of the decision core.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DecisionConfig {
    /// Defense to damage-multiplier curve.
    pub mitigation: MitigationCurve,
    /// Allies below this hp ratio are healed by the attack loop.
    pub ally_heal_threshold: f64,
    /// Any party member below this hp ratio triggers the party heal.
    pub party_heal_threshold: f64,
    /// The character heals itself when missing more than
    /// `attack * self_heal_attack_factor` hp.
    pub self_heal_attack_factor: f64,
    /// Nearby allies required before an area buff fires.
    pub support_min_allies: usize,
    /// Visible monsters that would take longer than this many seconds to
    /// kill are not engaged unless they attack first.
    pub max_time_to_kill: Option<f64>,
}

impl DecisionConfig {
    pub const DEFAULT_ALLY_HEAL_THRESHOLD: f64 = 0.9;
    pub const DEFAULT_PARTY_HEAL_THRESHOLD: f64 = 0.5;
    pub const DEFAULT_SELF_HEAL_ATTACK_FACTOR: f64 = 0.9;
    pub const DEFAULT_SUPPORT_MIN_ALLIES: usize = 2;

    pub fn new() -> Self {
        Self {
            mitigation: MitigationCurve::default(),
            ally_heal_threshold: Self::DEFAULT_ALLY_HEAL_THRESHOLD,
            party_heal_threshold: Self::DEFAULT_PARTY_HEAL_THRESHOLD,
            self_heal_attack_factor: Self::DEFAULT_SELF_HEAL_ATTACK_FACTOR,
            support_min_allies: Self::DEFAULT_SUPPORT_MIN_ALLIES,
            max_time_to_kill: None,
        }
    }

    /// Rejects thresholds outside `(0, 1]` and negative factors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("ally_heal_threshold", self.ally_heal_threshold),
            ("party_heal_threshold", self.party_heal_threshold),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::Threshold { field, value });
            }
        }
        if !(self.self_heal_attack_factor >= 0.0) {
            return Err(ConfigError::Negative {
                field: "self_heal_attack_factor",
                value: self.self_heal_attack_factor,
            });
        }
        if let Some(limit) = self.max_time_to_kill
            && !(limit >= 0.0)
        {
            return Err(ConfigError::Negative {
                field: "max_time_to_kill",
                value: limit,
            });
        }
        Ok(())
    }
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be in (0, 1], got {value}")]
    Threshold { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}
