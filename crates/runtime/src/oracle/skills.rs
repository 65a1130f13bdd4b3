//! [`game_core::SkillOracle`] backed by an in-memory map.
use std::collections::HashMap;

use game_core::{CharacterClass, SkillDescriptor, SkillOracle};

/// SkillOracle implementation with static skill descriptors
#[derive(Debug, Default)]
pub struct SkillOracleImpl {
    skills: HashMap<String, SkillDescriptor>,
}

impl SkillOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a skill descriptor
    pub fn add_skill(&mut self, skill: SkillDescriptor) {
        self.skills.insert(skill.name.clone(), skill);
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Priest kit: baseline actions, party heal and dark blessing.
    pub fn test_skills() -> Self {
        let priest = vec![CharacterClass::Priest];
        [
            SkillDescriptor::new("attack"),
            SkillDescriptor {
                shares_cooldown_with: Some("attack".into()),
                classes: priest.clone(),
                ..SkillDescriptor::new("heal")
            },
            SkillDescriptor {
                mp: Some(400.0),
                classes: priest.clone(),
                cooldown_ms: Some(200),
                ..SkillDescriptor::new("partyheal")
            },
            SkillDescriptor {
                mp: Some(900.0),
                classes: priest,
                cooldown_ms: Some(60_000),
                range: Some(400.0),
                ..SkillDescriptor::new("darkblessing")
            },
        ]
        .into_iter()
        .collect()
    }
}

impl FromIterator<SkillDescriptor> for SkillOracleImpl {
    fn from_iter<I: IntoIterator<Item = SkillDescriptor>>(iter: I) -> Self {
        let mut oracle = Self::new();
        for skill in iter {
            oracle.add_skill(skill);
        }
        oracle
    }
}

impl SkillOracle for SkillOracleImpl {
    fn skill(&self, name: &str) -> Option<&SkillDescriptor> {
        self.skills.get(name)
    }
}
