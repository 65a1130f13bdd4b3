//! Priority-weighted monster target selection.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::state::{EntityId, EntitySnapshot, WorldSnapshot};

use super::priority::{FarmingHints, TargetPriorityTable};

/// The monster picked for the next attack, with its advisory hints.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetChoice {
    pub id: EntityId,
    pub monster_type: String,
    pub priority: i32,
    pub distance: f64,
    pub hints: FarmingHints,
}

/// Picks monsters by table priority.
///
/// Monster types missing from the table are never selected. Among listed
/// types the highest priority wins and ties go to the nearest monster. Dead
/// monsters are skipped.
#[derive(Clone, Debug, Default)]
pub struct TargetSelector {
    table: Arc<TargetPriorityTable>,
}

impl TargetSelector {
    pub fn new(table: impl Into<Arc<TargetPriorityTable>>) -> Self {
        Self {
            table: table.into(),
        }
    }

    pub fn table(&self) -> &TargetPriorityTable {
        &self.table
    }

    /// Best candidate among `candidates`, measured from `from`.
    pub fn select<'w>(
        &self,
        from: &EntitySnapshot,
        candidates: impl IntoIterator<Item = &'w EntitySnapshot>,
    ) -> Option<TargetChoice> {
        let mut best: Option<(i32, f64, &'w EntitySnapshot)> = None;

        for candidate in candidates {
            if candidate.is_dead() || !candidate.is_monster() {
                continue;
            }
            let Some(entry) = candidate
                .monster_type
                .as_deref()
                .and_then(|mtype| self.table.get(mtype))
            else {
                continue;
            };

            let distance = from.distance_to(candidate);
            let better = match &best {
                None => true,
                Some((priority, nearest, _)) => match entry.priority.cmp(priority) {
                    Ordering::Greater => true,
                    Ordering::Equal => distance < *nearest,
                    Ordering::Less => false,
                },
            };
            if better {
                best = Some((entry.priority, distance, candidate));
            }
        }

        best.and_then(|(priority, distance, entity)| {
            let monster_type = entity.monster_type.clone()?;
            let hints = self.table.get(&monster_type)?.hints();
            Some(TargetChoice {
                id: entity.id.clone(),
                monster_type,
                priority,
                distance,
                hints,
            })
        })
    }

    /// Best monster among those currently attacking the character.
    pub fn best_attacking(&self, world: &WorldSnapshot) -> Option<TargetChoice> {
        self.select(&world.character, world.attacking_entities())
    }

    /// Best monster anywhere in view.
    pub fn best_visible(&self, world: &WorldSnapshot) -> Option<TargetChoice> {
        self.select(&world.character, world.monsters())
    }

    /// Best monster within the character's attack range.
    pub fn best_in_range(&self, world: &WorldSnapshot) -> Option<TargetChoice> {
        self.select(&world.character, world.in_range_monsters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MapPosition;
    use crate::state::{CharacterClass, StatusFlags};
    use crate::targeting::{TargetPriorityEntry, priorities};

    fn monster(id: &str, mtype: &str, x: f64) -> EntitySnapshot {
        EntitySnapshot {
            position: MapPosition::new("main", x, 0.0),
            target: Some("me".into()),
            ..EntitySnapshot::monster(id, mtype)
        }
    }

    fn world(monsters: Vec<EntitySnapshot>) -> WorldSnapshot {
        let mut me = EntitySnapshot::player("me", CharacterClass::Priest);
        me.position = MapPosition::new("main", 0.0, 0.0);
        me.range = 100.0;
        monsters
            .into_iter()
            .fold(WorldSnapshot::new(me), WorldSnapshot::with_entity)
    }

    fn selector(entries: &[(&str, i32)]) -> TargetSelector {
        TargetSelector::new(
            entries
                .iter()
                .map(|(k, p)| (*k, TargetPriorityEntry::new(*p)))
                .collect::<TargetPriorityTable>(),
        )
    }

    #[test]
    fn higher_priority_wins() {
        let world = world(vec![monster("m1", "a", 10.0), monster("m2", "b", 90.0)]);
        let choice = selector(&[("a", 10), ("b", 30)]).best_attacking(&world).unwrap();
        assert_eq!(choice.id.as_str(), "m2");
        assert_eq!(choice.priority, 30);
    }

    #[test]
    fn unlisted_types_are_never_chosen() {
        let world = world(vec![monster("m1", "a", 10.0), monster("m2", "b", 5.0)]);
        let choice = selector(&[("a", 10)]).best_attacking(&world).unwrap();
        assert_eq!(choice.id.as_str(), "m1");

        assert!(selector(&[]).best_attacking(&world).is_none());
    }

    #[test]
    fn zero_priority_types_are_engaged_when_alone() {
        let lone = world(vec![monster("w", "wolf", 40.0)]);
        let sel = selector(&[("wolf", 0), ("goo", priorities::EASY)]);
        assert_eq!(sel.best_attacking(&lone).unwrap().id.as_str(), "w");

        let mixed = world(vec![monster("w", "wolf", 10.0), monster("g", "goo", 90.0)]);
        assert_eq!(sel.best_attacking(&mixed).unwrap().id.as_str(), "g");
    }

    #[test]
    fn ties_go_to_the_nearest() {
        let world = world(vec![
            monster("far", "goo", 80.0),
            monster("near", "goo", 20.0),
            monster("mid", "goo", 50.0),
        ]);
        let choice = selector(&[("goo", priorities::EASY)])
            .best_attacking(&world)
            .unwrap();
        assert_eq!(choice.id.as_str(), "near");
        assert!((choice.distance - 20.0).abs() < 1e-9);
    }

    #[test]
    fn dead_and_idle_monsters_are_filtered() {
        let mut dead = monster("dead", "boss", 10.0);
        dead.status = StatusFlags::DEAD;
        let mut idle = monster("idle", "boss", 10.0);
        idle.target = None;
        let world = world(vec![dead, idle, monster("goo", "goo", 60.0)]);
        let sel = selector(&[("boss", priorities::SPECIAL), ("goo", priorities::EASY)]);

        assert_eq!(sel.best_attacking(&world).unwrap().id.as_str(), "goo");
        // The idle boss is visible and in range even though it is not attacking.
        assert_eq!(sel.best_visible(&world).unwrap().id.as_str(), "idle");
        assert_eq!(sel.best_in_range(&world).unwrap().id.as_str(), "idle");
    }

    #[test]
    fn hints_travel_with_the_choice() {
        let table: TargetPriorityTable = [(
            "crab",
            TargetPriorityEntry {
                hold_attack_while_moving: true,
                ..TargetPriorityEntry::new(priorities::MEDIUM)
            },
        )]
        .into_iter()
        .collect();
        let world = world(vec![monster("c", "crab", 30.0)]);
        let choice = TargetSelector::new(table).best_visible(&world).unwrap();
        assert!(choice.hints.hold_attack_while_moving);
    }
}
