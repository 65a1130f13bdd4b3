//! Skill availability evaluation.
//!
//! [`check_availability`] runs a fixed sequence of gates and stops at the
//! first one that fails:
//!
//! 1. character level
//! 2. blocking status (stunned, dead, petrified)
//! 3. main-hand weapon type
//! 4. required equipped items
//! 5. class restriction
//! 6. mana cost
//! 7. cooldown, read through the shared-cooldown peer when one is declared
//!
//! The check has no side effects and is cheap enough to run every tick.

use std::time::Duration;

use thiserror::Error;

use crate::env::{Env, OracleError, SkillDescriptor};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{CharacterClass, EntitySnapshot, Slot};

/// Read access to cooldown thresholds.
pub trait CooldownGate {
    /// True when the timer `key` has expired or was never set.
    fn is_ready(&self, key: &str) -> bool;
}

/// Why a skill cannot be used right now.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Unavailable {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("requires level {required}, character is level {actual}")]
    LevelTooLow { required: u32, actual: u32 },

    #[error("character is incapacitated")]
    Incapacitated,

    #[error("requires a {required} in the main hand")]
    WrongWeapon { required: String },

    #[error("requires {item} equipped in {slot}")]
    MissingItem { slot: Slot, item: String },

    #[error("class {class:?} may not use this skill")]
    WrongClass { class: Option<CharacterClass> },

    #[error("needs {required} mp, has {available}")]
    InsufficientMana { required: f64, available: f64 },

    #[error("cooldown '{key}' has not expired")]
    OnCooldown { key: String },
}

impl GameError for Unavailable {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Unavailable::Oracle(err) => err.severity(),
            _ => ErrorSeverity::Skipped,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Unavailable::Oracle(err) => err.error_code(),
            Unavailable::LevelTooLow { .. } => "AVAILABILITY_LEVEL_TOO_LOW",
            Unavailable::Incapacitated => "AVAILABILITY_INCAPACITATED",
            Unavailable::WrongWeapon { .. } => "AVAILABILITY_WRONG_WEAPON",
            Unavailable::MissingItem { .. } => "AVAILABILITY_MISSING_ITEM",
            Unavailable::WrongClass { .. } => "AVAILABILITY_WRONG_CLASS",
            Unavailable::InsufficientMana { .. } => "AVAILABILITY_INSUFFICIENT_MANA",
            Unavailable::OnCooldown { .. } => "AVAILABILITY_ON_COOLDOWN",
        }
    }
}

/// Runs every gate for `skill` and returns its descriptor when all pass.
pub fn check_availability<'a>(
    character: &EntitySnapshot,
    skill: &str,
    env: &Env<'a>,
    cooldowns: &(impl CooldownGate + ?Sized),
) -> Result<&'a SkillDescriptor, Unavailable> {
    let descriptor = env.skill(skill)?;

    if let Some(required) = descriptor.level
        && required > character.level
    {
        return Err(Unavailable::LevelTooLow {
            required,
            actual: character.level,
        });
    }

    if character.is_incapacitated() {
        return Err(Unavailable::Incapacitated);
    }

    if let Some(required) = &descriptor.weapon_type {
        let items = env.items()?;
        let equipped = character
            .equipment
            .main_hand()
            .and_then(|name| items.item(name))
            .and_then(|item| item.weapon_type.as_deref());
        if equipped != Some(required.as_str()) {
            return Err(Unavailable::WrongWeapon {
                required: required.clone(),
            });
        }
    }

    for (slot, item) in &descriptor.required_slots {
        if character.equipment.get(*slot) != Some(item.as_str()) {
            return Err(Unavailable::MissingItem {
                slot: *slot,
                item: item.clone(),
            });
        }
    }

    if !descriptor.classes.is_empty()
        && !character
            .class
            .is_some_and(|class| descriptor.classes.contains(&class))
    {
        return Err(Unavailable::WrongClass {
            class: character.class,
        });
    }

    let required = mana_cost(descriptor, character);
    if character.mp < required {
        return Err(Unavailable::InsufficientMana {
            required,
            available: character.mp,
        });
    }

    let key = descriptor.cooldown_key();
    if !cooldowns.is_ready(key) {
        return Err(Unavailable::OnCooldown {
            key: key.to_owned(),
        });
    }

    Ok(descriptor)
}

pub fn is_available(
    character: &EntitySnapshot,
    skill: &str,
    env: &Env<'_>,
    cooldowns: &(impl CooldownGate + ?Sized),
) -> bool {
    check_availability(character, skill, env, cooldowns).is_ok()
}

/// Mana spent by one use of `skill`.
pub fn mana_cost(skill: &SkillDescriptor, character: &EntitySnapshot) -> f64 {
    match skill.mp {
        Some(mp) => mp,
        None if skill.is_base_action() => character.mp_cost,
        None => 0.0,
    }
}

/// Cooldown started by one use of `skill`.
///
/// Base actions without a declared cooldown are paced by attack frequency.
pub fn cooldown_for(skill: &SkillDescriptor, character: &EntitySnapshot) -> Duration {
    match skill.cooldown() {
        Some(cooldown) => cooldown,
        None if skill.is_base_action() && character.frequency > 0.0 => {
            Duration::try_from_secs_f64(1.0 / character.frequency).unwrap_or(Duration::ZERO)
        }
        None => Duration::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;
    use crate::combat::DamageType;
    use crate::env::{ItemDescriptor, ItemOracle, MapOracle, MapTemplate, SkillOracle};
    use crate::state::{Equipment, StatusFlags};

    struct Oracles {
        skills: HashMap<String, SkillDescriptor>,
        items: HashMap<String, ItemDescriptor>,
    }

    impl SkillOracle for Oracles {
        fn skill(&self, name: &str) -> Option<&SkillDescriptor> {
            self.skills.get(name)
        }
    }

    impl ItemOracle for Oracles {
        fn item(&self, name: &str) -> Option<&ItemDescriptor> {
            self.items.get(name)
        }
    }

    impl MapOracle for Oracles {
        fn maps(&self) -> &[MapTemplate] {
            &[]
        }
    }

    #[derive(Default)]
    struct Cooling(HashSet<&'static str>);

    impl CooldownGate for Cooling {
        fn is_ready(&self, key: &str) -> bool {
            !self.0.contains(key)
        }
    }

    fn oracles() -> Oracles {
        let smash = SkillDescriptor {
            level: Some(60),
            mp: Some(300.0),
            weapon_type: Some("mace".into()),
            required_slots: vec![(Slot::OffHand, "shield".into())],
            classes: vec![CharacterClass::Priest, CharacterClass::Paladin],
            cooldown_ms: Some(1000),
            ..SkillDescriptor::new("smash")
        };
        let heal = SkillDescriptor {
            shares_cooldown_with: Some("attack".into()),
            ..SkillDescriptor::new("heal")
        };
        let skills = [SkillDescriptor::new("attack"), heal, smash]
            .into_iter()
            .map(|s| (s.name.clone(), s))
            .collect();
        let items = [
            ItemDescriptor::weapon("pmace", "mace", DamageType::Magical),
            ItemDescriptor::weapon("bow", "bow", DamageType::Physical),
        ]
        .into_iter()
        .map(|i| (i.name.clone(), i))
        .collect();
        Oracles { skills, items }
    }

    /// A priest that satisfies every gate of `smash`.
    fn ready_priest() -> EntitySnapshot {
        EntitySnapshot {
            level: 70,
            mp: 1000.0,
            mp_cost: 50.0,
            frequency: 2.0,
            equipment: Equipment::new()
                .with(Slot::MainHand, "pmace")
                .with(Slot::OffHand, "shield"),
            ..EntitySnapshot::player("me", CharacterClass::Priest)
        }
    }

    fn check(character: &EntitySnapshot, skill: &str, cooling: &Cooling) -> Result<(), Unavailable> {
        let oracles = oracles();
        let env = Env::with_all(&oracles, &oracles, &oracles);
        check_availability(character, skill, &env, cooling).map(|_| ())
    }

    #[test]
    fn all_gates_pass() {
        assert_eq!(check(&ready_priest(), "smash", &Cooling::default()), Ok(()));
    }

    #[test]
    fn each_gate_fails_independently() {
        let none = Cooling::default();

        let mut low = ready_priest();
        low.level = 10;
        assert!(matches!(check(&low, "smash", &none), Err(Unavailable::LevelTooLow { .. })));

        for status in [StatusFlags::STUNNED, StatusFlags::DEAD, StatusFlags::PETRIFIED] {
            let mut blocked = ready_priest();
            blocked.status = status;
            assert_eq!(check(&blocked, "smash", &none), Err(Unavailable::Incapacitated));
        }

        let mut bow = ready_priest();
        bow.equipment = bow.equipment.clone().with(Slot::MainHand, "bow");
        assert!(matches!(check(&bow, "smash", &none), Err(Unavailable::WrongWeapon { .. })));

        let mut unarmed = ready_priest();
        unarmed.equipment = Equipment::new().with(Slot::OffHand, "shield");
        assert!(matches!(check(&unarmed, "smash", &none), Err(Unavailable::WrongWeapon { .. })));

        let mut no_shield = ready_priest();
        no_shield.equipment = Equipment::new().with(Slot::MainHand, "pmace");
        assert_eq!(
            check(&no_shield, "smash", &none),
            Err(Unavailable::MissingItem {
                slot: Slot::OffHand,
                item: "shield".into()
            })
        );

        let mut ranger = ready_priest();
        ranger.class = Some(CharacterClass::Ranger);
        assert!(matches!(check(&ranger, "smash", &none), Err(Unavailable::WrongClass { .. })));

        let mut drained = ready_priest();
        drained.mp = 299.0;
        assert!(matches!(
            check(&drained, "smash", &none),
            Err(Unavailable::InsufficientMana { .. })
        ));

        let cooling = Cooling(HashSet::from(["smash"]));
        assert!(matches!(
            check(&ready_priest(), "smash", &cooling),
            Err(Unavailable::OnCooldown { .. })
        ));
    }

    #[test]
    fn base_actions_cost_the_generic_mp_cost() {
        let none = Cooling::default();
        let mut priest = ready_priest();
        priest.mp = 49.0;
        assert!(matches!(
            check(&priest, "attack", &none),
            Err(Unavailable::InsufficientMana { required, .. }) if required == 50.0
        ));
        priest.mp = 50.0;
        assert_eq!(check(&priest, "attack", &none), Ok(()));
    }

    #[test]
    fn shared_cooldown_reads_the_peer() {
        let priest = ready_priest();
        // heal never used itself, but attack is cooling down.
        let cooling = Cooling(HashSet::from(["attack"]));
        assert_eq!(
            check(&priest, "heal", &cooling),
            Err(Unavailable::OnCooldown {
                key: "attack".into()
            })
        );
        // Once the peer expires heal is available.
        assert_eq!(check(&priest, "heal", &Cooling::default()), Ok(()));
        // heal's own name is never consulted.
        assert_eq!(check(&priest, "heal", &Cooling(HashSet::from(["heal"]))), Ok(()));
    }

    #[test]
    fn unknown_skill_is_unavailable() {
        let result = check(&ready_priest(), "fireball", &Cooling::default());
        assert_eq!(
            result,
            Err(Unavailable::Oracle(OracleError::SkillNotFound("fireball".into())))
        );
        assert_eq!(result.unwrap_err().severity(), ErrorSeverity::Skipped);
    }

    #[test]
    fn cooldown_falls_back_to_attack_frequency() {
        let priest = ready_priest();
        let oracles = oracles();
        assert_eq!(
            cooldown_for(&oracles.skills["attack"], &priest),
            Duration::from_millis(500)
        );
        assert_eq!(
            cooldown_for(&oracles.skills["smash"], &priest),
            Duration::from_secs(1)
        );
    }
}
