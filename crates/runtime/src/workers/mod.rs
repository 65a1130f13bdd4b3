//! Recurring decision loops.
//!
//! Every [`LoopBehavior`] runs on its own task driven by a `LoopWorker`. The
//! loops share one snapshot feed, one executor and one cooldown clock through
//! `LoopContext`.

mod behavior;
mod behaviors;
mod context;
mod driver;
mod metrics;

pub use behavior::{CycleOutcome, LoopBehavior, SkipReason};
pub use behaviors::{AttackLoop, PartyHealLoop, RolePreset, SupportBuffLoop};
pub use context::Cycle;
pub use metrics::{LoopMetrics, LoopMetricsSnapshot, LoopPhase};

pub(crate) use behaviors::{choose_heal, choose_target};
pub(crate) use context::LoopContext;
pub(crate) use driver::LoopWorker;
