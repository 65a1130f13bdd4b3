//! Task body that drives one [`LoopBehavior`] until shutdown.
//!
//! Each tick takes a fresh snapshot, runs one cycle and re-arms. After a
//! dispatch or a skip the loop sleeps for the pacing skill's remaining
//! cooldown. After a failure, including a panic inside the behavior, it
//! sleeps for the fixed failure backoff. Shutdown is only observed at the
//! re-arm point, so an in-flight action always completes.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::time::{self, Duration};
use tracing::{debug, error, info, warn};

use game_core::{ErrorSeverity, GameError};

use crate::api::{Result, RuntimeError};
use crate::events::LoopEvent;

use super::behavior::{CycleOutcome, LoopBehavior};
use super::context::{Cycle, LoopContext};
use super::metrics::{LoopMetrics, LoopPhase};

pub(crate) struct LoopWorker {
    behavior: Arc<dyn LoopBehavior>,
    context: Arc<LoopContext>,
    metrics: Arc<LoopMetrics>,
    shutdown: watch::Receiver<bool>,
}

impl LoopWorker {
    pub(crate) fn new(
        behavior: Arc<dyn LoopBehavior>,
        context: Arc<LoopContext>,
        metrics: Arc<LoopMetrics>,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            behavior,
            context,
            metrics,
            shutdown,
        }
    }

    pub(crate) async fn run(mut self) {
        let name = self.behavior.name().to_owned();
        info!(target: "runtime::loop", loop_name = %name, "loop started");
        self.context.events.publish(LoopEvent::Started {
            loop_name: name.clone(),
        });

        loop {
            let delay = self.tick(&name).await;
            if *self.shutdown.borrow() {
                break;
            }

            self.metrics.record_delay(delay);
            tokio::select! {
                _ = time::sleep(delay) => {}
                _ = self.shutdown.changed() => break,
            }
        }

        info!(target: "runtime::loop", loop_name = %name, "loop stopped");
        self.context.events.publish(LoopEvent::Stopped { loop_name: name });
    }

    /// Runs one cycle and returns how long to wait before the next.
    async fn tick(&self, name: &str) -> Duration {
        self.metrics.set_phase(LoopPhase::Deciding);

        match self.run_cycle().await {
            Ok(CycleOutcome::Dispatched { skill, target }) => {
                debug!(
                    target: "runtime::loop",
                    loop_name = name,
                    skill = %skill,
                    target = ?target,
                    "dispatched"
                );
                self.metrics.record_dispatch();
                self.context.events.publish(LoopEvent::Dispatched {
                    loop_name: name.to_owned(),
                    skill,
                    target,
                });
                self.rearm()
            }
            Ok(CycleOutcome::Skipped(reason)) => {
                debug!(target: "runtime::loop", loop_name = name, reason = ?reason, "skipped");
                self.metrics.record_skip();
                self.rearm()
            }
            Err(err) if err.severity() == ErrorSeverity::Skipped => {
                debug!(target: "runtime::loop", loop_name = name, error = %err, "skipped");
                self.metrics.record_skip();
                self.rearm()
            }
            Err(err) => self.fail(name, err),
        }
    }

    /// Runs the cycle on its own task so a panic fails this cycle only.
    async fn run_cycle(&self) -> Result<CycleOutcome> {
        let behavior = Arc::clone(&self.behavior);
        let context = Arc::clone(&self.context);
        let metrics = Arc::clone(&self.metrics);

        tokio::spawn(async move {
            let world = context.feed.snapshot().await?;
            let cycle = Cycle::new(world, &context, &metrics);
            behavior.cycle(&cycle).await
        })
        .await
        .map_err(|err| {
            if err.is_panic() {
                RuntimeError::CyclePanicked(err)
            } else {
                RuntimeError::WorkerJoin(err)
            }
        })?
    }

    fn rearm(&self) -> Duration {
        self.metrics.set_phase(LoopPhase::Rearming);
        let env = self.context.oracles.as_env();
        match env.skill(self.behavior.pacing_skill()) {
            Ok(skill) => self.context.cooldowns.remaining(skill.cooldown_key()),
            Err(_) => self.context.config.idle_poll_interval,
        }
    }

    fn fail(&self, name: &str, err: RuntimeError) -> Duration {
        self.metrics.set_phase(LoopPhase::Failed);
        self.metrics.record_failure();

        if err.severity() == ErrorSeverity::Fatal {
            error!(
                target: "runtime::loop",
                loop_name = name,
                code = err.error_code(),
                error = %err,
                "cycle failed"
            );
        } else {
            warn!(
                target: "runtime::loop",
                loop_name = name,
                code = err.error_code(),
                error = %err,
                "cycle failed"
            );
        }

        self.context.events.publish(LoopEvent::Failed {
            loop_name: name.to_owned(),
            error_code: err.error_code().to_owned(),
            message: err.to_string(),
        });
        self.context.config.failure_backoff
    }
}
