//! Per-loop counters.
//!
//! Tracks how each loop's cycles end and the delay it last re-armed with.

use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};
use std::time::Duration;

/// Where a loop currently is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LoopPhase {
    /// Gathering the snapshot and choosing an action.
    Deciding = 0,
    /// Waiting on the action executor.
    Acting = 1,
    /// Sleeping until the next cycle.
    Rearming = 2,
    /// The last cycle failed; sleeping for the failure backoff.
    Failed = 3,
}

impl LoopPhase {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => LoopPhase::Acting,
            2 => LoopPhase::Rearming,
            3 => LoopPhase::Failed,
            _ => LoopPhase::Deciding,
        }
    }
}

/// Loop metrics tracked by the loop driver.
///
/// Uses atomics for lock-free access across threads.
#[derive(Debug, Default)]
pub struct LoopMetrics {
    /// Cycles whose action was executed
    dispatched: AtomicU64,

    /// Cycles that ended without an action
    skipped: AtomicU64,

    /// Cycles that returned an error
    failed: AtomicU64,

    /// Delay chosen at the last re-arm, in nanoseconds
    last_delay_nanos: AtomicU64,

    phase: AtomicU8,
}

impl LoopMetrics {
    /// Creates a new empty metrics tracker.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_dispatch(&self) {
        self.dispatched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_skip(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_delay(&self, delay: Duration) {
        let nanos = u64::try_from(delay.as_nanos()).unwrap_or(u64::MAX);
        self.last_delay_nanos.store(nanos, Ordering::Relaxed);
    }

    pub fn set_phase(&self, phase: LoopPhase) {
        self.phase.store(phase as u8, Ordering::Relaxed);
    }

    pub fn phase(&self) -> LoopPhase {
        LoopPhase::from_u8(self.phase.load(Ordering::Relaxed))
    }

    pub fn dispatched(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    pub fn skipped(&self) -> u64 {
        self.skipped.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Total cycles run (dispatched + skipped + failed).
    pub fn cycles(&self) -> u64 {
        self.dispatched() + self.skipped() + self.failed()
    }

    pub fn last_delay(&self) -> Duration {
        Duration::from_nanos(self.last_delay_nanos.load(Ordering::Relaxed))
    }

    /// Creates a snapshot of all metrics for display/logging.
    ///
    /// Individual fields are read atomically; the snapshot as a whole may
    /// straddle a concurrent update.
    pub fn snapshot(&self) -> LoopMetricsSnapshot {
        LoopMetricsSnapshot {
            cycles: self.cycles(),
            dispatched: self.dispatched(),
            skipped: self.skipped(),
            failed: self.failed(),
            last_delay: self.last_delay(),
            phase: self.phase(),
        }
    }
}

/// Snapshot of metrics at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopMetricsSnapshot {
    pub cycles: u64,
    pub dispatched: u64,
    pub skipped: u64,
    pub failed: u64,
    pub last_delay: Duration,
    pub phase: LoopPhase,
}
