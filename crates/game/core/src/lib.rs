//! Pure decision logic for an autonomous combat agent.
//!
//! `game-core` owns the rules that decide what the character does next:
//! entity snapshots, the read-only knowledge base ([`env`]), geometry and the
//! spawn index, the [`combat`] damage model, skill [`availability`], and
//! [`targeting`]. Nothing in this crate performs I/O or awaits; the async
//! scheduler lives in `agent-runtime`.
pub mod availability;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod geometry;
pub mod spawn;
pub mod state;
pub mod targeting;

pub use availability::{
    CooldownGate, Unavailable, check_availability, cooldown_for, is_available, mana_cost,
};
pub use combat::{CurveError, CurvePoint, DamageModel, DamageRange, DamageType, MitigationCurve};
pub use config::{ConfigError, DecisionConfig};
pub use env::{
    BASE_ACTIONS, Env, ItemDescriptor, ItemOracle, MapOracle, MapTemplate, MonsterSpawn,
    OracleError, SkillDescriptor, SkillOracle, SpawnArea, SpawnBoundary,
};
pub use error::{ErrorSeverity, GameError};
pub use geometry::{Boundary, MapPosition, planar_distance};
pub use spawn::{
    MonsterSpawnPosition, closest_monster_spawn, monster_spawns, nearby_monster_spawns,
    random_monster_spawn,
};
pub use state::{
    CharacterClass, EntityId, EntityKind, EntitySnapshot, Equipment, Slot, StatusFlags,
    WorldSnapshot,
};
pub use targeting::{
    FarmingHints, HealCandidate, HealQueue, TargetChoice, TargetPriorityEntry,
    TargetPriorityTable, TargetSelector, priorities, urgency,
};
