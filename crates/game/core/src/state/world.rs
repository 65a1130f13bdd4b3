//! The full observation handed to a decision cycle.

use std::collections::{BTreeMap, BTreeSet};

use super::entity::{EntityId, EntitySnapshot};

/// Everything the character can see at one instant.
///
/// `entities` never contains the character itself. Iteration is ordered by
/// entity id so that ties in target selection resolve deterministically.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct WorldSnapshot {
    pub character: EntitySnapshot,
    pub entities: BTreeMap<EntityId, EntitySnapshot>,
    /// Party member ids, possibly including the character.
    pub party: Vec<EntityId>,
    /// Whether the current map allows player-versus-player combat.
    pub pvp: bool,
}

impl WorldSnapshot {
    pub fn new(character: EntitySnapshot) -> Self {
        Self {
            character,
            ..Self::default()
        }
    }

    pub fn with_entity(mut self, entity: EntitySnapshot) -> Self {
        self.entities.insert(entity.id.clone(), entity);
        self
    }

    pub fn with_party<I, T>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<EntityId>,
    {
        self.party = members.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_pvp(mut self, pvp: bool) -> Self {
        self.pvp = pvp;
        self
    }

    pub fn entity(&self, id: &EntityId) -> Option<&EntitySnapshot> {
        self.entities.get(id)
    }

    /// Visible party members other than the character.
    pub fn party_members(&self) -> impl Iterator<Item = &EntitySnapshot> {
        self.party
            .iter()
            .filter(|id| **id != self.character.id)
            .filter_map(|id| self.entities.get(id))
    }

    pub fn monsters(&self) -> impl Iterator<Item = &EntitySnapshot> {
        self.entities.values().filter(|e| e.is_monster())
    }

    /// Entities currently targeting the character.
    ///
    /// Players are only included on PvP maps.
    pub fn attacking_entities(&self) -> impl Iterator<Item = &EntitySnapshot> {
        self.entities.values().filter(|e| {
            e.is_targeting(&self.character.id) && (self.pvp || !e.is_player())
        })
    }

    pub fn visible_monster_types(&self) -> BTreeSet<&str> {
        self.monsters()
            .filter_map(|e| e.monster_type.as_deref())
            .collect()
    }

    /// Monsters within the character's attack range.
    pub fn in_range_monsters(&self) -> impl Iterator<Item = &EntitySnapshot> {
        self.monsters()
            .filter(|e| self.character.distance_to(e) <= self.character.range)
    }
}
