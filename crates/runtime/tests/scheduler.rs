//! Scheduler lifecycle and fault isolation.

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use agent_runtime::{
    AttackLoop, Cycle, CycleOutcome, LoopBehavior, LoopEvent, OracleManager, Result, RolePreset,
    Runtime, RuntimeConfig, RuntimeError, SkipReason, Topic, snapshot_channel,
};
use game_core::{DecisionConfig, GameError};

use common::{RecordingExecutor, init_tracing, quiet_world, targets};

struct FailingLoop;

#[async_trait]
impl LoopBehavior for FailingLoop {
    fn name(&self) -> &str {
        "failing"
    }

    fn pacing_skill(&self) -> &str {
        "attack"
    }

    async fn cycle(&self, _cycle: &Cycle<'_>) -> Result<CycleOutcome> {
        Err(RuntimeError::action_failed("attack", "connection reset"))
    }
}

#[derive(Clone, Default)]
struct CountingLoop(Arc<AtomicUsize>);

#[async_trait]
impl LoopBehavior for CountingLoop {
    fn name(&self) -> &str {
        "counting"
    }

    fn pacing_skill(&self) -> &str {
        "not-in-catalog"
    }

    async fn cycle(&self, _cycle: &Cycle<'_>) -> Result<CycleOutcome> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(CycleOutcome::skipped(SkipReason::NoTarget))
    }
}

struct PanickingLoop;

#[async_trait]
impl LoopBehavior for PanickingLoop {
    fn name(&self) -> &str {
        "panicking"
    }

    fn pacing_skill(&self) -> &str {
        "attack"
    }

    async fn cycle(&self, _cycle: &Cycle<'_>) -> Result<CycleOutcome> {
        panic!("behavior bug");
    }
}

#[tokio::test(start_paused = true)]
async fn failing_loop_does_not_stop_its_neighbours() {
    init_tracing();
    let (publisher, feed) = snapshot_channel();
    publisher.publish(quiet_world());
    let counter = CountingLoop::default();

    let mut runtime = Runtime::builder()
        .oracles(OracleManager::test_oracles())
        .feed(feed)
        .executor(RecordingExecutor::default())
        .behavior(FailingLoop)
        .behavior(counter.clone())
        .build()
        .unwrap();
    let handle = runtime.handle();
    let mut failures = handle.subscribe(Topic::Failure);

    runtime.start().unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;

    // Idle poll is 500ms: cycles at 0, 500, 1000, 1500 and 2000ms at most.
    assert!(counter.0.load(Ordering::SeqCst) >= 4);

    let failing = handle.metrics("failing").unwrap();
    // Backoff is 250ms, so the failing loop keeps retrying.
    assert!(failing.failed >= 4);
    assert_eq!(failing.dispatched, 0);

    match failures.recv().await.unwrap() {
        LoopEvent::Failed {
            loop_name,
            error_code,
            ..
        } => {
            assert_eq!(loop_name, "failing");
            assert_eq!(error_code, "RUNTIME_ACTION_FAILED");
        }
        other => panic!("unexpected event {other:?}"),
    }

    runtime.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn start_and_stop_are_guarded() {
    init_tracing();
    let (publisher, feed) = snapshot_channel();
    publisher.publish(quiet_world());

    let mut runtime = Runtime::builder()
        .oracles(OracleManager::test_oracles())
        .feed(feed)
        .executor(RecordingExecutor::default())
        .targets(targets())
        .preset(RolePreset::fighter())
        .build()
        .unwrap();
    let mut lifecycle = runtime.handle().subscribe(Topic::Lifecycle);

    assert!(matches!(runtime.stop().await, Err(RuntimeError::NotRunning)));
    runtime.start().unwrap();
    assert!(runtime.is_running());
    assert!(matches!(runtime.start(), Err(RuntimeError::AlreadyRunning)));

    tokio::time::sleep(Duration::from_millis(10)).await;
    runtime.stop().await.unwrap();
    assert!(!runtime.is_running());

    assert_eq!(
        lifecycle.recv().await.unwrap(),
        LoopEvent::Started {
            loop_name: "attack".into()
        }
    );
    assert_eq!(
        lifecycle.recv().await.unwrap(),
        LoopEvent::Stopped {
            loop_name: "attack".into()
        }
    );

    // A stopped runtime can be started again.
    runtime.start().unwrap();
    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn panicking_cycle_backs_off_and_retries() {
    init_tracing();
    let (publisher, feed) = snapshot_channel();
    publisher.publish(quiet_world());
    let counter = CountingLoop::default();

    let mut runtime = Runtime::builder()
        .oracles(OracleManager::test_oracles())
        .feed(feed)
        .executor(RecordingExecutor::default())
        .behavior(PanickingLoop)
        .behavior(counter.clone())
        .build()
        .unwrap();
    let handle = runtime.handle();
    let mut failures = handle.subscribe(Topic::Failure);

    runtime.start().unwrap();
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(counter.0.load(Ordering::SeqCst) >= 2);

    match failures.recv().await.unwrap() {
        LoopEvent::Failed {
            loop_name,
            error_code,
            ..
        } => {
            assert_eq!(loop_name, "panicking");
            assert_eq!(error_code, "RUNTIME_CYCLE_PANICKED");
        }
        other => panic!("unexpected event {other:?}"),
    }
    // Backoff is 250ms, so the loop survives and keeps retrying.
    let panicking = handle.metrics("panicking").unwrap();
    assert!(panicking.failed >= 3);
    assert_eq!(panicking.dispatched, 0);

    runtime.stop().await.unwrap();
}

/// Uses `skill` with no target on every cycle.
struct CastLoop {
    name: &'static str,
    skill: &'static str,
}

#[async_trait]
impl LoopBehavior for CastLoop {
    fn name(&self) -> &str {
        self.name
    }

    fn pacing_skill(&self) -> &str {
        self.skill
    }

    async fn cycle(&self, cycle: &Cycle<'_>) -> Result<CycleOutcome> {
        cycle.dispatch(self.skill, None).await
    }
}

#[tokio::test(start_paused = true)]
async fn loops_sharing_a_timer_never_act_together() {
    init_tracing();
    let (publisher, feed) = snapshot_channel();
    publisher.publish(quiet_world());
    let executor = RecordingExecutor::slow(Duration::from_millis(50));

    // heal shares the attack timer.
    let mut runtime = Runtime::builder()
        .oracles(OracleManager::test_oracles())
        .feed(feed)
        .executor(executor.clone())
        .behavior(CastLoop {
            name: "first",
            skill: "attack",
        })
        .behavior(CastLoop {
            name: "second",
            skill: "heal",
        })
        .build()
        .unwrap();
    let handle = runtime.handle();

    runtime.start().unwrap();
    tokio::time::sleep(Duration::from_millis(500)).await;
    runtime.stop().await.unwrap();

    assert_eq!(executor.calls().len(), 1);
    let dispatched: u64 = ["first", "second"]
        .iter()
        .map(|name| handle.metrics(name).unwrap().dispatched)
        .sum();
    assert_eq!(dispatched, 1);
}

#[tokio::test]
async fn build_rejects_incomplete_or_invalid_setups() {
    let (_publisher, feed) = snapshot_channel();
    let missing_feed = Runtime::builder()
        .oracles(OracleManager::test_oracles())
        .executor(RecordingExecutor::default())
        .build();
    assert!(matches!(missing_feed, Err(RuntimeError::MissingFeed)));

    let duplicate = Runtime::builder()
        .oracles(OracleManager::test_oracles())
        .feed(feed.clone())
        .executor(RecordingExecutor::default())
        .behavior(AttackLoop::new())
        .preset(RolePreset::fighter())
        .build();
    match duplicate {
        Err(RuntimeError::DuplicateLoop(name)) => assert_eq!(name, "attack"),
        _ => panic!("duplicate loop accepted"),
    }

    let config = RuntimeConfig::default().with_decision(DecisionConfig {
        ally_heal_threshold: 1.5,
        ..DecisionConfig::default()
    });
    let invalid = Runtime::builder()
        .config(config)
        .oracles(OracleManager::test_oracles())
        .feed(feed)
        .executor(RecordingExecutor::default())
        .build();
    match invalid {
        Err(err @ RuntimeError::Config(_)) => assert_eq!(err.error_code(), "RUNTIME_CONFIG"),
        _ => panic!("invalid config accepted"),
    }
}

#[tokio::test(start_paused = true)]
async fn empty_feed_backs_off_without_dispatching() {
    init_tracing();
    let (_publisher, feed) = snapshot_channel();
    let executor = RecordingExecutor::default();

    let mut runtime = Runtime::builder()
        .oracles(OracleManager::test_oracles())
        .feed(feed)
        .executor(executor.clone())
        .targets(targets())
        .preset(RolePreset::fighter())
        .build()
        .unwrap();
    let handle = runtime.handle();

    runtime.start().unwrap();
    tokio::time::sleep(Duration::from_secs(1)).await;
    runtime.stop().await.unwrap();

    assert!(executor.calls().is_empty());
    assert!(handle.metrics("attack").unwrap().failed >= 2);
}
