//! Area heal for the whole party.

use async_trait::async_trait;

use game_core::{HealQueue, WorldSnapshot};

use crate::api::Result;
use crate::workers::behavior::{CycleOutcome, LoopBehavior, SkipReason};
use crate::workers::context::Cycle;

/// Casts the party heal when any other party member drops below
/// `party_heal_threshold`. Distance does not matter. The caster's own health
/// is left to the attack loop's self-heal.
#[derive(Debug, Clone)]
pub struct PartyHealLoop {
    skill: String,
}

impl PartyHealLoop {
    pub fn new() -> Self {
        Self::with_skill("partyheal")
    }

    pub fn with_skill(skill: impl Into<String>) -> Self {
        Self {
            skill: skill.into(),
        }
    }
}

impl Default for PartyHealLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LoopBehavior for PartyHealLoop {
    fn name(&self) -> &str {
        &self.skill
    }

    fn pacing_skill(&self) -> &str {
        &self.skill
    }

    async fn cycle(&self, cycle: &Cycle<'_>) -> Result<CycleOutcome> {
        if let Err(reason) = cycle.check(&self.skill) {
            return Ok(CycleOutcome::skipped(reason.into()));
        }
        if !needs_party_heal(cycle.world(), cycle.decision().party_heal_threshold) {
            return Ok(CycleOutcome::skipped(SkipReason::NoHealCandidate));
        }
        cycle.dispatch(&self.skill, None).await
    }
}

fn needs_party_heal(world: &WorldSnapshot, threshold: f64) -> bool {
    !HealQueue::build(world, None, threshold).is_empty()
}
