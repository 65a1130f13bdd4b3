//! Heal candidate ranking.
//!
//! A [`HealQueue`] is built from a fresh [`WorldSnapshot`] every decision
//! cycle and discarded afterwards.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::state::{EntityId, EntitySnapshot, WorldSnapshot};

/// How badly `entity` needs healing: `max_hp / hp`, higher is worse.
pub fn urgency(entity: &EntitySnapshot) -> f64 {
    if entity.hp <= 0.0 {
        f64::INFINITY
    } else {
        entity.max_hp / entity.hp
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HealCandidate {
    pub ally_id: EntityId,
    pub urgency: f64,
}

impl Eq for HealCandidate {}

impl Ord for HealCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.urgency
            .total_cmp(&other.urgency)
            // Equal urgency pops the smaller id first.
            .then_with(|| other.ally_id.cmp(&self.ally_id))
    }
}

impl PartialOrd for HealCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Max-priority queue of allies below a health threshold.
#[derive(Clone, Debug, Default)]
pub struct HealQueue {
    heap: BinaryHeap<HealCandidate>,
}

impl HealQueue {
    /// Collects party members that are alive, within `range` of the caster
    /// (unbounded when `None`) and below `threshold` of their max hp. The
    /// caster is never a candidate.
    pub fn build(world: &WorldSnapshot, range: Option<f64>, threshold: f64) -> Self {
        let caster = &world.character;
        let heap = world
            .party_members()
            .filter(|ally| !ally.is_dead() && ally.max_hp > 0.0)
            .filter(|ally| range.is_none_or(|range| caster.distance_to(ally) < range))
            .filter(|ally| ally.hp_ratio() < threshold)
            .map(|ally| HealCandidate {
                ally_id: ally.id.clone(),
                urgency: urgency(ally),
            })
            .collect();
        Self { heap }
    }

    pub fn pop(&mut self) -> Option<HealCandidate> {
        self.heap.pop()
    }

    pub fn peek(&self) -> Option<&HealCandidate> {
        self.heap.peek()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MapPosition;
    use crate::state::{CharacterClass, StatusFlags};

    fn ally(id: &str, hp: f64, x: f64) -> EntitySnapshot {
        EntitySnapshot {
            hp,
            max_hp: 100.0,
            position: MapPosition::new("main", x, 0.0),
            ..EntitySnapshot::player(id, CharacterClass::Warrior)
        }
    }

    fn world(allies: Vec<EntitySnapshot>) -> WorldSnapshot {
        let mut me = ally("me", 10.0, 0.0);
        me.class = Some(CharacterClass::Priest);
        let ids: Vec<_> = std::iter::once("me".to_owned())
            .chain(allies.iter().map(|a| a.id.to_string()))
            .collect();
        allies
            .into_iter()
            .fold(WorldSnapshot::new(me), WorldSnapshot::with_entity)
            .with_party(ids)
    }

    #[test]
    fn lowest_ratio_is_most_urgent() {
        let world = world(vec![ally("a", 60.0, 10.0), ally("b", 30.0, 10.0)]);
        let mut queue = HealQueue::build(&world, None, 0.9);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop().unwrap().ally_id.as_str(), "b");
        assert_eq!(queue.pop().unwrap().ally_id.as_str(), "a");
        assert!(queue.pop().is_none());
    }

    #[test]
    fn caster_dead_and_healthy_allies_are_excluded() {
        let mut dead = ally("dead", 1.0, 10.0);
        dead.status = StatusFlags::DEAD;
        let world = world(vec![dead, ally("healthy", 95.0, 10.0)]);
        // The caster is at 10% but never heals itself through the queue.
        assert!(HealQueue::build(&world, None, 0.9).is_empty());
    }

    #[test]
    fn range_and_threshold_bound_the_queue() {
        let world = world(vec![ally("near", 70.0, 50.0), ally("far", 20.0, 500.0)]);

        let queue = HealQueue::build(&world, Some(100.0), 0.9);
        assert_eq!(queue.peek().unwrap().ally_id.as_str(), "near");

        let queue = HealQueue::build(&world, Some(100.0), 0.5);
        assert!(queue.is_empty());

        let queue = HealQueue::build(&world, None, 0.5);
        assert_eq!(queue.peek().unwrap().ally_id.as_str(), "far");
    }

    #[test]
    fn urgency_is_inverse_health() {
        assert!((urgency(&ally("x", 25.0, 0.0)) - 4.0).abs() < 1e-9);
        assert!(urgency(&ally("x", 0.0, 0.0)).is_infinite());
    }
}
