use std::time::Duration;

use crate::state::{CharacterClass, Slot};

/// Baseline actions whose mana cost falls back to the character's `mp_cost`
/// and whose cooldown follows the character's attack frequency.
pub const BASE_ACTIONS: [&str; 2] = ["attack", "heal"];

pub trait SkillOracle: Send + Sync {
    fn skill(&self, name: &str) -> Option<&SkillDescriptor>;
}

/// Static description of a skill.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SkillDescriptor {
    pub name: String,
    /// Minimum character level.
    pub level: Option<u32>,
    /// Explicit mana cost.
    pub mp: Option<f64>,
    /// Weapon family the main-hand item must belong to.
    pub weapon_type: Option<String>,
    /// Items that must be equipped, as `(slot, item name)`.
    pub required_slots: Vec<(Slot, String)>,
    /// Classes allowed to use the skill; empty means unrestricted.
    pub classes: Vec<CharacterClass>,
    pub cooldown_ms: Option<u64>,
    /// Another skill whose cooldown timer this skill consumes.
    pub shares_cooldown_with: Option<String>,
    /// Effective range for targeted or area skills.
    pub range: Option<f64>,
}

impl SkillDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn cooldown(&self) -> Option<Duration> {
        self.cooldown_ms.map(Duration::from_millis)
    }

    /// Key of the cooldown timer this skill reads and writes.
    pub fn cooldown_key(&self) -> &str {
        self.shares_cooldown_with.as_deref().unwrap_or(&self.name)
    }

    pub fn is_base_action(&self) -> bool {
        BASE_ACTIONS.contains(&self.name.as_str())
    }
}
