//! Per-skill cooldown thresholds shared by every loop.
//!
//! Each key maps to the earliest instant the timer is free again. Keys are
//! cooldown keys, so skills that share a timer read and write the same entry.
//! Writes take the map's write lock, which makes every update atomic per key.
//! A key can also be reserved while its action is in flight, so two loops
//! sharing a timer cannot both act before either commits.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Duration;

use game_core::CooldownGate;
use tokio::time::Instant;

use crate::api::{Result, RuntimeError};
use crate::latency::LatencyTracker;

#[derive(Debug)]
pub struct CooldownClock {
    thresholds: RwLock<HashMap<String, Instant>>,
    in_flight: Mutex<HashSet<String>>,
    latency: Arc<LatencyTracker>,
}

/// Exclusive claim on a cooldown key, released on drop.
#[derive(Debug)]
pub struct Reservation<'a> {
    clock: &'a CooldownClock,
    key: String,
}

impl Reservation<'_> {
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for Reservation<'_> {
    fn drop(&mut self) {
        self.clock
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}

impl CooldownClock {
    pub fn new(latency: Arc<LatencyTracker>) -> Self {
        Self {
            thresholds: RwLock::new(HashMap::new()),
            in_flight: Mutex::new(HashSet::new()),
            latency,
        }
    }

    /// Time until `key` is free, never less than the current ping estimate.
    pub fn remaining(&self, key: &str) -> Duration {
        let floor = self.latency.estimate();
        match self.threshold(key) {
            Some(threshold) => threshold
                .saturating_duration_since(Instant::now())
                .max(floor),
            None => floor,
        }
    }

    /// Starts `cooldown` on `key` from now.
    ///
    /// An existing later threshold is kept, so thresholds only move forward
    /// through this call.
    pub fn record_use(&self, key: &str, cooldown: Duration) -> Result<()> {
        let next = Instant::now().checked_add(cooldown).ok_or_else(|| {
            RuntimeError::InvariantViolation(format!("cooldown {cooldown:?} on '{key}' overflows"))
        })?;

        let mut thresholds = self
            .thresholds
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let entry = thresholds.entry(key.to_owned()).or_insert(next);
        if next > *entry {
            *entry = next;
        }
        Ok(())
    }

    /// Pulls the threshold of `key` earlier by `amount`. Unset keys stay unset.
    pub fn reduce(&self, key: &str, amount: Duration) {
        let mut thresholds = self
            .thresholds
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(threshold) = thresholds.get_mut(key) {
            // Instants before the clock's origin are unrepresentable; clamp to now.
            *threshold = threshold
                .checked_sub(amount)
                .unwrap_or_else(Instant::now)
                .min(*threshold);
        }
    }

    /// Claims `key` for one in-flight action. `None` if another holder has it.
    pub fn reserve(&self, key: &str) -> Option<Reservation<'_>> {
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        in_flight.insert(key.to_owned()).then(|| Reservation {
            clock: self,
            key: key.to_owned(),
        })
    }

    pub fn is_reserved(&self, key: &str) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key)
    }

    pub fn threshold(&self, key: &str) -> Option<Instant> {
        self.thresholds
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .copied()
    }

    pub fn latency(&self) -> &LatencyTracker {
        &self.latency
    }
}

impl CooldownGate for CooldownClock {
    fn is_ready(&self, key: &str) -> bool {
        !self.is_reserved(key)
            && self
                .threshold(key)
                .is_none_or(|threshold| threshold <= Instant::now())
    }
}
