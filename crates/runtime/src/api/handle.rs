//! Cloneable façade over a built runtime.
//!
//! [`RuntimeHandle`] answers the same questions the loops ask (best target,
//! most urgent heal) against the current snapshot, exposes loop metrics, and
//! streams events from specific topics.
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;

use game_core::{HealCandidate, TargetChoice};

use super::errors::Result;
use crate::cooldown::CooldownClock;
use crate::events::{EventBus, LoopEvent, Topic};
use crate::latency::LatencyTracker;
use crate::workers::{LoopContext, LoopMetrics, LoopMetricsSnapshot, choose_heal, choose_target};

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    context: Arc<LoopContext>,
    metrics: Arc<BTreeMap<String, Arc<LoopMetrics>>>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        context: Arc<LoopContext>,
        metrics: Arc<BTreeMap<String, Arc<LoopMetrics>>>,
    ) -> Self {
        Self { context, metrics }
    }

    /// The monster the attack loop would pick right now.
    pub async fn best_target(&self) -> Result<Option<TargetChoice>> {
        let world = self.context.feed.snapshot().await?;
        let env = self.context.oracles.as_env();
        Ok(choose_target(
            &world,
            &self.context.selector,
            &self.context.damage,
            &self.context.config.decision,
            env.items()?,
        ))
    }

    /// Who the attack loop would heal right now, if anyone.
    pub async fn best_heal_candidate(&self) -> Result<Option<HealCandidate>> {
        let world = self.context.feed.snapshot().await?;
        Ok(choose_heal(&world, &self.context.config.decision))
    }

    /// Counters of the loop called `name`.
    pub fn metrics(&self, name: &str) -> Option<LoopMetricsSnapshot> {
        self.metrics.get(name).map(|metrics| metrics.snapshot())
    }

    /// Counters of every registered loop, ordered by loop name.
    pub fn all_metrics(&self) -> Vec<(String, LoopMetricsSnapshot)> {
        self.metrics
            .iter()
            .map(|(name, metrics)| (name.clone(), metrics.snapshot()))
            .collect()
    }

    /// Feeds one round-trip measurement into the latency estimate.
    pub fn record_ping(&self, sample: Duration) {
        self.context.cooldowns.latency().record(sample);
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Decision` - Dispatched actions
    /// - `Topic::Failure` - Failed cycles
    /// - `Topic::Lifecycle` - Loop start and stop
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use agent_runtime::Topic;
    ///
    /// let mut decisions = handle.subscribe(Topic::Decision);
    /// while let Ok(event) = decisions.recv().await {
    ///     // Handle dispatched actions
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<LoopEvent> {
        self.context.events.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<LoopEvent>> {
        self.context.events.subscribe_multiple(topics)
    }

    pub fn cooldowns(&self) -> &CooldownClock {
        &self.context.cooldowns
    }

    pub fn latency(&self) -> &LatencyTracker {
        self.context.cooldowns.latency()
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.context.events
    }
}
