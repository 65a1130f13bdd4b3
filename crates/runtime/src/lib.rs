//! Concurrent decision loops for a game-playing agent.
//!
//! This crate wires the pure decision logic of `game-core` to a live game
//! through two collaborators: a [`SnapshotFeed`] that supplies the latest
//! world observation and an [`ActionExecutor`] that performs actions.
//! Consumers embed [`Runtime`] to run role-specific loops, subscribe to
//! events, and query the same decisions through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the scheduler and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`cooldown`] and [`latency`] track shared timing state
//! - [`oracle`] adapts loaded content to the `game-core` oracle traits
//! - `workers` keeps the loop tasks internal to the crate
pub mod api;
pub mod config;
pub mod cooldown;
pub mod events;
pub mod latency;
pub mod oracle;
pub mod runtime;

mod workers;

pub use api::{
    ActionExecutor, Result, RuntimeError, RuntimeHandle, SnapshotFeed, SnapshotPublisher,
    WatchSnapshotFeed, snapshot_channel,
};
pub use config::RuntimeConfig;
pub use cooldown::{CooldownClock, Reservation};
pub use events::{EventBus, LoopEvent, Topic};
pub use latency::LatencyTracker;
pub use oracle::{ItemOracleImpl, MapOracleImpl, OracleManager, SkillOracleImpl};
pub use runtime::{Runtime, RuntimeBuilder};
pub use workers::{
    AttackLoop, Cycle, CycleOutcome, LoopBehavior, LoopMetrics, LoopMetricsSnapshot, LoopPhase,
    PartyHealLoop, RolePreset, SkipReason, SupportBuffLoop,
};
