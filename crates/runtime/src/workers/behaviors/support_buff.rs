//! Party-wide buff cast once enough allies stand close.

use async_trait::async_trait;

use game_core::{CharacterClass, WorldSnapshot};

use crate::api::Result;
use crate::workers::behavior::{CycleOutcome, LoopBehavior, SkipReason};
use crate::workers::context::Cycle;

/// Casts `skill` when at least `min_allies` living, non-merchant party members
/// are strictly within the skill's range (or the character's range when the
/// skill declares none).
#[derive(Debug, Clone)]
pub struct SupportBuffLoop {
    skill: String,
    min_allies: Option<usize>,
}

impl SupportBuffLoop {
    pub fn new(skill: impl Into<String>) -> Self {
        Self {
            skill: skill.into(),
            min_allies: None,
        }
    }

    pub fn dark_blessing() -> Self {
        Self::new("darkblessing")
    }

    /// Overrides `support_min_allies` from the decision config.
    pub fn with_min_allies(mut self, min_allies: usize) -> Self {
        self.min_allies = Some(min_allies);
        self
    }
}

#[async_trait]
impl LoopBehavior for SupportBuffLoop {
    fn name(&self) -> &str {
        &self.skill
    }

    fn pacing_skill(&self) -> &str {
        &self.skill
    }

    async fn cycle(&self, cycle: &Cycle<'_>) -> Result<CycleOutcome> {
        let skill = match cycle.check(&self.skill) {
            Ok(skill) => skill,
            Err(reason) => return Ok(CycleOutcome::skipped(reason.into())),
        };

        let range = skill.range.unwrap_or(cycle.character().range);
        let required = self
            .min_allies
            .unwrap_or(cycle.decision().support_min_allies);
        let found = allies_in_range(cycle.world(), range);
        if found < required {
            return Ok(CycleOutcome::skipped(SkipReason::NotEnoughAllies {
                found,
                required,
            }));
        }
        cycle.dispatch(&self.skill, None).await
    }
}

fn allies_in_range(world: &WorldSnapshot, range: f64) -> usize {
    let me = &world.character;
    world
        .party_members()
        .filter(|ally| ally.class != Some(CharacterClass::Merchant))
        .filter(|ally| !ally.is_dead())
        .filter(|ally| me.distance_to(ally) < range)
        .count()
}
