#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use agent_runtime::{ActionExecutor, Result, RuntimeError};
use game_core::{
    CharacterClass, EntityId, EntitySnapshot, MapPosition, StatusFlags, TargetPriorityEntry,
    TargetPriorityTable, WorldSnapshot,
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Executor that records every call and optionally rejects them.
#[derive(Clone, Default)]
pub struct RecordingExecutor {
    calls: Arc<Mutex<Vec<(String, Option<EntityId>)>>>,
    reject: bool,
    delay: Option<Duration>,
}

impl RecordingExecutor {
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    /// Takes `delay` to answer each call.
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, Option<EntityId>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn skills(&self) -> Vec<String> {
        self.calls().into_iter().map(|(skill, _)| skill).collect()
    }
}

#[async_trait]
impl ActionExecutor for RecordingExecutor {
    async fn invoke(&self, skill: &str, target: Option<&EntityId>) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((skill.to_owned(), target.cloned()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.reject {
            return Err(RuntimeError::action_failed(skill, "rejected by server"));
        }
        Ok(())
    }
}

pub fn at(mut entity: EntitySnapshot, x: f64) -> EntitySnapshot {
    entity.position = MapPosition::new("main", x, 0.0);
    entity
}

pub fn priest() -> EntitySnapshot {
    EntitySnapshot {
        level: 80,
        hp: 3000.0,
        max_hp: 3000.0,
        mp: 5000.0,
        max_mp: 5000.0,
        attack: 200.0,
        frequency: 1.0,
        range: 200.0,
        ..at(EntitySnapshot::player("me", CharacterClass::Priest), 0.0)
    }
}

pub fn ally(id: &str, class: CharacterClass, hp: f64, x: f64) -> EntitySnapshot {
    EntitySnapshot {
        hp,
        max_hp: 1000.0,
        ..at(EntitySnapshot::player(id, class), x)
    }
}

pub fn goo(id: &str, x: f64) -> EntitySnapshot {
    EntitySnapshot {
        hp: 500.0,
        max_hp: 500.0,
        ..at(EntitySnapshot::monster(id, "goo"), x)
    }
}

pub fn targets() -> TargetPriorityTable {
    [("goo", TargetPriorityEntry::new(10)), ("bee", TargetPriorityEntry::new(20))]
        .into_iter()
        .collect()
}

/// A healthy party of three next to a goo.
pub fn quiet_world() -> WorldSnapshot {
    WorldSnapshot::new(priest())
        .with_entity(ally("war", CharacterClass::Warrior, 1000.0, 50.0))
        .with_entity(ally("mage", CharacterClass::Mage, 1000.0, 80.0))
        .with_entity(goo("goo1", 120.0))
        .with_party(["me", "war", "mage"])
}

pub fn in_town(mut world: WorldSnapshot) -> WorldSnapshot {
    world.character.status |= StatusFlags::IN_TOWN;
    world
}
