//! The contract every recurring decision loop implements.

use async_trait::async_trait;

use game_core::{EntityId, Unavailable};

use crate::api::Result;

use super::context::Cycle;

/// One role-specific decision loop (attack, party heal, support buff, ...).
///
/// The driver calls [`cycle`](LoopBehavior::cycle) once per tick with a fresh
/// snapshot. A cycle dispatches at most one action. The next tick is delayed
/// by the remaining cooldown of [`pacing_skill`](LoopBehavior::pacing_skill).
#[async_trait]
pub trait LoopBehavior: Send + Sync {
    /// Unique loop name, used in logs, metrics and events.
    fn name(&self) -> &str;

    fn pacing_skill(&self) -> &str;

    async fn cycle(&self, cycle: &Cycle<'_>) -> Result<CycleOutcome>;
}

/// How a cycle ended when it did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    Dispatched {
        skill: String,
        target: Option<EntityId>,
    },
    Skipped(SkipReason),
}

impl CycleOutcome {
    pub fn dispatched(skill: impl Into<String>, target: Option<EntityId>) -> Self {
        CycleOutcome::Dispatched {
            skill: skill.into(),
            target,
        }
    }

    pub fn skipped(reason: SkipReason) -> Self {
        CycleOutcome::Skipped(reason)
    }

    pub fn is_dispatched(&self) -> bool {
        matches!(self, CycleOutcome::Dispatched { .. })
    }
}

/// Why a cycle ended without an action.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The character is in town.
    SafeZone,
    Incapacitated,
    Unavailable(Unavailable),
    NoTarget,
    NoHealCandidate,
    NotEnoughAllies { found: usize, required: usize },
}

impl From<Unavailable> for SkipReason {
    fn from(reason: Unavailable) -> Self {
        SkipReason::Unavailable(reason)
    }
}
