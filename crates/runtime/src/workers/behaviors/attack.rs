//! Attack loop, optionally interleaving heals on the shared attack timer.

use async_trait::async_trait;

use game_core::{
    DamageModel, DecisionConfig, HealCandidate, HealQueue, ItemOracle, TargetChoice,
    TargetSelector, WorldSnapshot, urgency,
};

use crate::api::Result;
use crate::workers::behavior::{CycleOutcome, LoopBehavior, SkipReason};
use crate::workers::context::Cycle;

/// Attacks the best monster, or heals first when [`with_healing`](Self::with_healing)
/// is set and someone needs it. Heal and attack share one timer.
#[derive(Debug, Clone, Default)]
pub struct AttackLoop {
    heals: bool,
}

impl AttackLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_healing() -> Self {
        Self { heals: true }
    }
}

#[async_trait]
impl LoopBehavior for AttackLoop {
    fn name(&self) -> &str {
        "attack"
    }

    fn pacing_skill(&self) -> &str {
        "attack"
    }

    async fn cycle(&self, cycle: &Cycle<'_>) -> Result<CycleOutcome> {
        let me = cycle.character();
        if me.in_safe_zone() {
            return Ok(CycleOutcome::skipped(SkipReason::SafeZone));
        }
        if me.is_incapacitated() {
            return Ok(CycleOutcome::skipped(SkipReason::Incapacitated));
        }

        if self.heals
            && let Some(candidate) = choose_heal(cycle.world(), cycle.decision())
        {
            return match cycle.check("heal") {
                Ok(_) => cycle.heal(&candidate.ally_id).await,
                Err(reason) => Ok(CycleOutcome::skipped(reason.into())),
            };
        }

        if let Err(reason) = cycle.check("attack") {
            return Ok(CycleOutcome::skipped(reason.into()));
        }

        let items = cycle.env().items()?;
        match choose_target(
            cycle.world(),
            cycle.selector(),
            cycle.damage(),
            cycle.decision(),
            items,
        ) {
            Some(choice) => cycle.attack(&choice).await,
            None => Ok(CycleOutcome::skipped(SkipReason::NoTarget)),
        }
    }
}

/// Who to heal this tick: the character when an attack's worth of hp is
/// missing, otherwise the most urgent party member in range.
pub(crate) fn choose_heal(world: &WorldSnapshot, decision: &DecisionConfig) -> Option<HealCandidate> {
    let me = &world.character;
    if me.hp < me.max_hp - me.attack * decision.self_heal_attack_factor {
        return Some(HealCandidate {
            ally_id: me.id.clone(),
            urgency: urgency(me),
        });
    }
    HealQueue::build(world, Some(me.range), decision.ally_heal_threshold).pop()
}

/// Monsters already attacking the character come first. Otherwise the best
/// monster in range, dropping any that would take longer than
/// `max_time_to_kill` seconds.
pub(crate) fn choose_target(
    world: &WorldSnapshot,
    selector: &TargetSelector,
    damage: &DamageModel,
    decision: &DecisionConfig,
    items: &dyn ItemOracle,
) -> Option<TargetChoice> {
    selector.best_attacking(world).or_else(|| {
        let me = &world.character;
        let killable = world.in_range_monsters().filter(|monster| {
            decision
                .max_time_to_kill
                .is_none_or(|limit| damage.time_to_kill(me, monster, items) <= limit)
        });
        selector.select(me, killable)
    })
}

#[cfg(test)]
mod tests {
    use game_core::{
        CharacterClass, EntitySnapshot, ItemDescriptor, MapPosition, TargetPriorityEntry,
        TargetPriorityTable,
    };

    use super::*;

    struct NoItems;

    impl ItemOracle for NoItems {
        fn item(&self, _name: &str) -> Option<&ItemDescriptor> {
            None
        }
    }

    fn at(mut entity: EntitySnapshot, x: f64) -> EntitySnapshot {
        entity.position = MapPosition::new("main", x, 0.0);
        entity
    }

    fn priest() -> EntitySnapshot {
        EntitySnapshot {
            hp: 1000.0,
            max_hp: 1000.0,
            attack: 100.0,
            frequency: 1.0,
            range: 200.0,
            ..at(EntitySnapshot::player("me", CharacterClass::Priest), 0.0)
        }
    }

    fn selector() -> TargetSelector {
        TargetSelector::new(
            [("goo", TargetPriorityEntry::new(10)), ("bee", TargetPriorityEntry::new(20))]
                .into_iter()
                .collect::<TargetPriorityTable>(),
        )
    }

    #[test]
    fn self_heal_needs_an_attack_worth_of_damage() {
        let decision = DecisionConfig::default();
        let mut me = priest();
        me.hp = 950.0;
        assert!(choose_heal(&WorldSnapshot::new(me.clone()), &decision).is_none());

        me.hp = 900.0 - 1.0;
        let heal = choose_heal(&WorldSnapshot::new(me), &decision);
        assert_eq!(heal.map(|c| c.ally_id), Some("me".into()));
    }

    #[test]
    fn most_urgent_ally_is_healed() {
        let hurt = |id: &str, hp: f64| EntitySnapshot {
            hp,
            max_hp: 1000.0,
            ..at(EntitySnapshot::player(id, CharacterClass::Warrior), 50.0)
        };
        let world = WorldSnapshot::new(priest())
            .with_entity(hurt("a", 600.0))
            .with_entity(hurt("b", 300.0))
            .with_party(["me", "a", "b"]);
        let heal = choose_heal(&world, &DecisionConfig::default());
        assert_eq!(heal.map(|c| c.ally_id), Some("b".into()));
    }

    #[test]
    fn attackers_win_over_higher_priority_bystanders() {
        let mut goo = at(EntitySnapshot::monster("goo1", "goo"), 50.0);
        goo.target = Some("me".into());
        let bee = at(EntitySnapshot::monster("bee1", "bee"), 60.0);
        let world = WorldSnapshot::new(priest()).with_entity(goo).with_entity(bee);

        let decision = DecisionConfig::default();
        let choice = choose_target(&world, &selector(), &DamageModel::default(), &decision, &NoItems);
        assert_eq!(choice.map(|c| c.id), Some("goo1".into()));
    }

    #[test]
    fn slow_kills_are_dropped_when_limited() {
        let bee = EntitySnapshot {
            hp: 5000.0,
            ..at(EntitySnapshot::monster("bee1", "bee"), 60.0)
        };
        let goo = EntitySnapshot {
            hp: 100.0,
            ..at(EntitySnapshot::monster("goo1", "goo"), 70.0)
        };
        let world = WorldSnapshot::new(priest()).with_entity(bee).with_entity(goo);
        let model = DamageModel::default();

        let unlimited = DecisionConfig::default();
        let choice = choose_target(&world, &selector(), &model, &unlimited, &NoItems);
        assert_eq!(choice.map(|c| c.id), Some("bee1".into()));

        let limited = DecisionConfig {
            max_time_to_kill: Some(10.0),
            ..DecisionConfig::default()
        };
        let choice = choose_target(&world, &selector(), &model, &limited, &NoItems);
        assert_eq!(choice.map(|c| c.id), Some("goo1".into()));
    }
}
