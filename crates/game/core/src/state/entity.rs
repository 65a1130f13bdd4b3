//! Entity snapshot and its supporting identifiers.

use std::collections::BTreeMap;
use std::fmt;

use bitflags::bitflags;

use crate::combat::DamageType;
use crate::geometry::MapPosition;

/// Stable identifier of an entity as reported by the game server.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    Player,
    #[default]
    Monster,
    Npc,
}

/// Character class of a player entity.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CharacterClass {
    Merchant,
    Priest,
    Warrior,
    Ranger,
    Mage,
    Rogue,
    Paladin,
}

/// Equipment slot names.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Slot {
    MainHand,
    OffHand,
    Helmet,
    Chest,
    Pants,
    Shoes,
    Gloves,
    Cape,
    Belt,
    Amulet,
    Orb,
    Ring1,
    Ring2,
    Earring1,
    Earring2,
    Elixir,
}

bitflags! {
    /// Status conditions reported for an entity.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
    pub struct StatusFlags: u8 {
        const STUNNED     = 1 << 0;
        /// The entity is dead ("rip").
        const DEAD        = 1 << 1;
        /// The entity is teleporting to town and cannot fight.
        const IN_TOWN     = 1 << 2;
        const PETRIFIED   = 1 << 3;
        /// Every incoming hit is reduced to exactly 1 damage.
        const ONE_HP      = 1 << 4;
    }
}

impl StatusFlags {
    /// Conditions that prevent using any skill.
    pub const INCAPACITATED: StatusFlags = StatusFlags::STUNNED
        .union(StatusFlags::DEAD)
        .union(StatusFlags::PETRIFIED);
}

/// Names of the items equipped per slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Equipment(BTreeMap<Slot, String>);

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, slot: Slot, item: impl Into<String>) -> Self {
        self.0.insert(slot, item.into());
        self
    }

    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.0.get(&slot).map(String::as_str)
    }

    pub fn main_hand(&self) -> Option<&str> {
        self.get(Slot::MainHand)
    }
}

/// One observation of an entity.
///
/// Numeric stats that the server omits are left at zero.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EntitySnapshot {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Monster type (e.g. `"goo"`); `None` for players and NPCs.
    pub monster_type: Option<String>,
    pub class: Option<CharacterClass>,
    pub level: u32,
    pub position: MapPosition,

    pub hp: f64,
    pub max_hp: f64,
    pub mp: f64,
    pub max_mp: f64,
    /// Mana spent by the baseline attack and heal actions.
    pub mp_cost: f64,

    pub attack: f64,
    pub armor: f64,
    pub resistance: f64,
    pub armor_piercing: f64,
    pub resistance_piercing: f64,
    /// Explicit damage type; resolved from the main-hand item when absent.
    pub damage_type: Option<DamageType>,
    /// Attacks per second.
    pub frequency: f64,
    /// Percent chance to avoid a physical hit.
    pub evasion: f64,
    pub range: f64,

    pub status: StatusFlags,
    pub target: Option<EntityId>,
    pub equipment: Equipment,
}

impl EntitySnapshot {
    pub fn new(id: impl Into<EntityId>, kind: EntityKind) -> Self {
        Self {
            id: id.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn monster(id: impl Into<EntityId>, monster_type: impl Into<String>) -> Self {
        Self {
            monster_type: Some(monster_type.into()),
            ..Self::new(id, EntityKind::Monster)
        }
    }

    pub fn player(id: impl Into<EntityId>, class: CharacterClass) -> Self {
        Self {
            class: Some(class),
            ..Self::new(id, EntityKind::Player)
        }
    }

    pub fn is_monster(&self) -> bool {
        self.kind == EntityKind::Monster
    }

    pub fn is_npc(&self) -> bool {
        self.kind == EntityKind::Npc
    }

    /// A player character that is not an NPC.
    pub fn is_player(&self) -> bool {
        self.kind == EntityKind::Player
    }

    pub fn is_dead(&self) -> bool {
        self.status.contains(StatusFlags::DEAD)
    }

    pub fn is_incapacitated(&self) -> bool {
        self.status.intersects(StatusFlags::INCAPACITATED)
    }

    pub fn in_safe_zone(&self) -> bool {
        self.status.contains(StatusFlags::IN_TOWN)
    }

    /// Fraction of health remaining, `0.0` when `max_hp` is unknown.
    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp <= 0.0 {
            0.0
        } else {
            self.hp / self.max_hp
        }
    }

    pub fn distance_to(&self, other: &EntitySnapshot) -> f64 {
        self.position.distance(&other.position)
    }

    pub fn is_targeting(&self, id: &EntityId) -> bool {
        self.target.as_ref() == Some(id)
    }
}
