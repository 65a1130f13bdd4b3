//! State shared by every loop and the per-cycle view handed to behaviors.

use std::sync::Arc;

use game_core::{
    DamageModel, DecisionConfig, EntityId, EntitySnapshot, Env, SkillDescriptor, TargetChoice,
    TargetSelector, Unavailable, WorldSnapshot, check_availability, cooldown_for,
};

use crate::api::{ActionExecutor, Result, SnapshotFeed};
use crate::config::RuntimeConfig;
use crate::cooldown::{CooldownClock, Reservation};
use crate::events::EventBus;
use crate::oracle::OracleManager;

use super::behavior::CycleOutcome;
use super::metrics::{LoopMetrics, LoopPhase};

/// Everything the loops share. Only the cooldown clock is mutable.
pub(crate) struct LoopContext {
    pub(crate) oracles: OracleManager,
    pub(crate) cooldowns: Arc<CooldownClock>,
    pub(crate) feed: Arc<dyn SnapshotFeed>,
    pub(crate) executor: Arc<dyn ActionExecutor>,
    pub(crate) selector: TargetSelector,
    pub(crate) damage: DamageModel,
    pub(crate) config: RuntimeConfig,
    pub(crate) events: EventBus,
}

/// One decision cycle: a fresh snapshot plus access to the shared services.
///
/// Every action goes through [`Cycle::dispatch`], [`Cycle::attack`] or
/// [`Cycle::heal`], which re-check availability, hold the cooldown key while
/// the executor runs, and record the cooldown only once it reports success.
pub struct Cycle<'a> {
    world: Arc<WorldSnapshot>,
    env: Env<'a>,
    context: &'a LoopContext,
    metrics: &'a LoopMetrics,
}

impl<'a> Cycle<'a> {
    pub(crate) fn new(
        world: Arc<WorldSnapshot>,
        context: &'a LoopContext,
        metrics: &'a LoopMetrics,
    ) -> Self {
        Self {
            world,
            env: context.oracles.as_env(),
            context,
            metrics,
        }
    }

    pub fn world(&self) -> &WorldSnapshot {
        &self.world
    }

    pub fn character(&self) -> &EntitySnapshot {
        &self.world.character
    }

    pub fn env(&self) -> &Env<'a> {
        &self.env
    }

    pub fn decision(&self) -> &DecisionConfig {
        &self.context.config.decision
    }

    pub fn selector(&self) -> &TargetSelector {
        &self.context.selector
    }

    pub fn damage(&self) -> &DamageModel {
        &self.context.damage
    }

    pub fn cooldowns(&self) -> &CooldownClock {
        &self.context.cooldowns
    }

    /// Availability of `skill` for the character right now.
    pub fn check(&self, skill: &str) -> std::result::Result<&'a SkillDescriptor, Unavailable> {
        check_availability(
            &self.world.character,
            skill,
            &self.env,
            self.context.cooldowns.as_ref(),
        )
    }

    /// Uses `skill`, optionally on `target`.
    pub async fn dispatch(&self, skill: &str, target: Option<&EntityId>) -> Result<CycleOutcome> {
        let (descriptor, _claim) = self.claim(skill)?;
        self.metrics.set_phase(LoopPhase::Acting);
        self.context.executor.invoke(skill, target).await?;
        self.commit(descriptor)?;
        Ok(CycleOutcome::dispatched(skill, target.cloned()))
    }

    pub async fn attack(&self, choice: &TargetChoice) -> Result<CycleOutcome> {
        let (descriptor, _claim) = self.claim("attack")?;
        self.metrics.set_phase(LoopPhase::Acting);
        self.context.executor.attack(choice).await?;
        self.commit(descriptor)?;
        Ok(CycleOutcome::dispatched("attack", Some(choice.id.clone())))
    }

    pub async fn heal(&self, target: &EntityId) -> Result<CycleOutcome> {
        let (descriptor, _claim) = self.claim("heal")?;
        self.metrics.set_phase(LoopPhase::Acting);
        self.context.executor.heal(target).await?;
        self.commit(descriptor)?;
        Ok(CycleOutcome::dispatched("heal", Some(target.clone())))
    }

    /// Checks `skill` and reserves its cooldown key for the rest of the action.
    fn claim(&self, skill: &str) -> Result<(&'a SkillDescriptor, Reservation<'a>)> {
        let descriptor = self.check(skill)?;
        let key = descriptor.cooldown_key();
        let reservation = self
            .context
            .cooldowns
            .reserve(key)
            .ok_or_else(|| Unavailable::OnCooldown {
                key: key.to_owned(),
            })?;
        Ok((descriptor, reservation))
    }

    /// Starts the cooldown of a confirmed action, then pulls it forward by the
    /// fastest observed ping since the server saw the action that much sooner.
    fn commit(&self, skill: &SkillDescriptor) -> Result<()> {
        let key = skill.cooldown_key();
        let cooldowns = &self.context.cooldowns;
        cooldowns.record_use(key, cooldown_for(skill, &self.world.character))?;
        cooldowns.reduce(key, cooldowns.latency().fastest());
        Ok(())
    }
}
