//! Per-monster-type combat priorities.

use std::collections::HashMap;

use crate::geometry::MapPosition;
use crate::state::CharacterClass;

/// Named priority levels used by the bundled tables.
pub mod priorities {
    pub const DIFFICULT: i32 = 10;
    pub const MEDIUM: i32 = 20;
    pub const EASY: i32 = 30;
    /// Rare or event monsters that are always worth engaging.
    pub const SPECIAL: i32 = 500;
}

/// Priority and farming metadata for one monster type.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TargetPriorityEntry {
    /// Higher values win.
    pub priority: i32,
    pub farming_position: Option<MapPosition>,
    /// Classes that should be present before farming this type.
    pub coop: Vec<CharacterClass>,
    pub hold_position_farm: bool,
    pub hold_attack_while_moving: bool,
    pub hold_attack_in_entity_range: bool,
}

impl TargetPriorityEntry {
    pub fn new(priority: i32) -> Self {
        Self {
            priority,
            ..Self::default()
        }
    }

    pub fn hints(&self) -> FarmingHints {
        FarmingHints {
            farming_position: self.farming_position.clone(),
            coop: self.coop.clone(),
            hold_position_farm: self.hold_position_farm,
            hold_attack_while_moving: self.hold_attack_while_moving,
            hold_attack_in_entity_range: self.hold_attack_in_entity_range,
        }
    }
}

/// Advisory movement hints attached to a chosen target.
///
/// The selector never acts on these; they are forwarded to the action
/// executor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FarmingHints {
    pub farming_position: Option<MapPosition>,
    pub coop: Vec<CharacterClass>,
    pub hold_position_farm: bool,
    pub hold_attack_while_moving: bool,
    pub hold_attack_in_entity_range: bool,
}

/// Monster type to [`TargetPriorityEntry`], fixed after construction.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct TargetPriorityTable {
    entries: HashMap<String, TargetPriorityEntry>,
}

impl TargetPriorityTable {
    pub fn new(entries: HashMap<String, TargetPriorityEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, monster_type: &str) -> Option<&TargetPriorityEntry> {
        self.entries.get(monster_type)
    }

    pub fn contains(&self, monster_type: &str) -> bool {
        self.entries.contains_key(monster_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TargetPriorityEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, TargetPriorityEntry)> for TargetPriorityTable {
    fn from_iter<I: IntoIterator<Item = (K, TargetPriorityEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
