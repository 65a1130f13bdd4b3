//! High-level runtime orchestrator.
//!
//! The runtime owns one task per decision loop, the shared cooldown clock and
//! the event bus, and exposes a builder-based API for wiring in the transport.
//! Dropping a running [`Runtime`] closes the shutdown channel, so every loop
//! exits at its next re-arm.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

use game_content::ContentBundle;
use game_core::{DamageModel, TargetPriorityTable, TargetSelector};

use crate::api::{ActionExecutor, Result, RuntimeError, RuntimeHandle, SnapshotFeed};
use crate::config::RuntimeConfig;
use crate::cooldown::CooldownClock;
use crate::events::EventBus;
use crate::latency::LatencyTracker;
use crate::oracle::OracleManager;
use crate::workers::{LoopBehavior, LoopContext, LoopMetrics, LoopWorker, RolePreset};

/// Scheduler running every registered loop concurrently.
///
/// Design: Runtime owns the loop tasks and their shutdown channel.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    context: Arc<LoopContext>,
    behaviors: Vec<Arc<dyn LoopBehavior>>,
    metrics: Arc<BTreeMap<String, Arc<LoopMetrics>>>,
    running: Option<Running>,
}

struct Running {
    shutdown: watch::Sender<bool>,
    workers: Vec<(String, JoinHandle<()>)>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn loop_names(&self) -> impl Iterator<Item = &str> {
        self.behaviors.iter().map(|behavior| behavior.name())
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Spawns one task per loop. Must be called inside a tokio runtime.
    pub fn start(&mut self) -> Result<()> {
        if self.running.is_some() {
            return Err(RuntimeError::AlreadyRunning);
        }

        let (shutdown, shutdown_rx) = watch::channel(false);
        let workers = self
            .behaviors
            .iter()
            .map(|behavior| {
                let name = behavior.name().to_owned();
                let metrics = self
                    .metrics
                    .get(&name)
                    .cloned()
                    .unwrap_or_default();
                let worker = LoopWorker::new(
                    Arc::clone(behavior),
                    Arc::clone(&self.context),
                    metrics,
                    shutdown_rx.clone(),
                );
                let handle = tokio::spawn(worker.run());
                (name, handle)
            })
            .collect();

        info!(target: "runtime", loops = self.behaviors.len(), "runtime started");
        self.running = Some(Running { shutdown, workers });
        Ok(())
    }

    /// Signals every loop to stop and waits for all of them.
    ///
    /// In-flight actions complete first. Returns the first join error of a
    /// loop task. Panics inside a cycle are already handled by the loop.
    pub async fn stop(&mut self) -> Result<()> {
        let Running { shutdown, workers } = self.running.take().ok_or(RuntimeError::NotRunning)?;
        // Receivers may already be gone if every loop task ended.
        let _ = shutdown.send(true);

        let mut first_error = None;
        for (name, handle) in workers {
            if let Err(err) = handle.await {
                error!(target: "runtime", loop_name = %name, error = %err, "loop task failed");
                first_error.get_or_insert(RuntimeError::WorkerJoin(err));
            }
        }

        info!(target: "runtime", "runtime stopped");
        first_error.map_or(Ok(()), Err)
    }

    /// Stops the loops if they are running and consumes the runtime.
    pub async fn shutdown(mut self) -> Result<()> {
        if self.running.is_some() {
            self.stop().await?;
        }
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    feed: Option<Arc<dyn SnapshotFeed>>,
    executor: Option<Arc<dyn ActionExecutor>>,
    targets: TargetPriorityTable,
    behaviors: Vec<Arc<dyn LoopBehavior>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            feed: None,
            executor: None,
            targets: TargetPriorityTable::default(),
            behaviors: Vec::new(),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Uses loaded content for the oracles, the target table and the
    /// decision config.
    pub fn content(mut self, bundle: ContentBundle) -> Self {
        self.oracles = Some(OracleManager::from_content(&bundle));
        self.config.decision = bundle.config;
        self.targets = bundle.targets;
        self
    }

    pub fn feed(mut self, feed: impl SnapshotFeed + 'static) -> Self {
        self.feed = Some(Arc::new(feed));
        self
    }

    pub fn executor(mut self, executor: impl ActionExecutor + 'static) -> Self {
        self.executor = Some(Arc::new(executor));
        self
    }

    /// Monster priorities used for target selection. Monsters missing from
    /// the table are never attacked.
    pub fn targets(mut self, targets: TargetPriorityTable) -> Self {
        self.targets = targets;
        self
    }

    /// Registers one loop.
    pub fn behavior(mut self, behavior: impl LoopBehavior + 'static) -> Self {
        self.behaviors.push(Arc::new(behavior));
        self
    }

    /// Registers every loop of a role preset.
    pub fn preset(mut self, preset: RolePreset) -> Self {
        self.behaviors.extend(preset.into_behaviors());
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        self.config.decision.validate()?;
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let feed = self.feed.ok_or(RuntimeError::MissingFeed)?;
        let executor = self.executor.ok_or(RuntimeError::MissingExecutor)?;

        let mut seen = HashSet::new();
        for behavior in &self.behaviors {
            if !seen.insert(behavior.name()) {
                return Err(RuntimeError::DuplicateLoop(behavior.name().to_owned()));
            }
        }

        let latency = Arc::new(LatencyTracker::new(
            self.config.ping_window,
            self.config.default_ping,
        ));
        let context = Arc::new(LoopContext {
            oracles,
            cooldowns: Arc::new(CooldownClock::new(latency)),
            feed,
            executor,
            selector: TargetSelector::new(self.targets),
            damage: DamageModel::new(self.config.decision.mitigation.clone()),
            events: EventBus::with_capacity(self.config.event_buffer_size),
            config: self.config,
        });

        let metrics: Arc<BTreeMap<_, _>> = Arc::new(
            self.behaviors
                .iter()
                .map(|behavior| (behavior.name().to_owned(), Arc::new(LoopMetrics::new())))
                .collect(),
        );

        Ok(Runtime {
            handle: RuntimeHandle::new(Arc::clone(&context), Arc::clone(&metrics)),
            context,
            behaviors: self.behaviors,
            metrics,
            running: None,
        })
    }
}
