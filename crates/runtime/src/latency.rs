//! Rolling network latency estimate.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Keeps the most recent ping samples reported by the transport.
///
/// The mean of the window floors every cooldown wait; the fastest sample is
/// used to pull a cooldown forward after a confirmed action.
#[derive(Debug)]
pub struct LatencyTracker {
    samples: Mutex<VecDeque<Duration>>,
    window: usize,
    default: Duration,
}

impl LatencyTracker {
    pub fn new(window: usize, default: Duration) -> Self {
        let window = window.max(1);
        Self {
            samples: Mutex::new(VecDeque::with_capacity(window)),
            window,
            default,
        }
    }

    pub fn record(&self, sample: Duration) {
        let mut samples = self.samples.lock().unwrap_or_else(PoisonError::into_inner);
        if samples.len() == self.window {
            samples.pop_front();
        }
        samples.push_back(sample);
    }

    /// Mean of the window, or the default before any sample.
    pub fn estimate(&self) -> Duration {
        let samples = self.samples.lock().unwrap_or_else(PoisonError::into_inner);
        if samples.is_empty() {
            return self.default;
        }
        let total: Duration = samples.iter().sum();
        total / samples.len() as u32
    }

    /// Smallest sample in the window, or the default before any sample.
    pub fn fastest(&self) -> Duration {
        let samples = self.samples.lock().unwrap_or_else(PoisonError::into_inner);
        samples.iter().min().copied().unwrap_or(self.default)
    }

    pub fn len(&self) -> usize {
        self.samples
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn defaults_until_sampled() {
        let tracker = LatencyTracker::new(3, ms(100));
        assert_eq!(tracker.estimate(), ms(100));
        assert_eq!(tracker.fastest(), ms(100));
        assert!(tracker.is_empty());
    }

    #[test]
    fn window_drops_oldest_samples() {
        let tracker = LatencyTracker::new(3, ms(100));
        for sample in [10, 50, 60, 70] {
            tracker.record(ms(sample));
        }
        assert_eq!(tracker.len(), 3);
        assert_eq!(tracker.estimate(), ms(60));
        assert_eq!(tracker.fastest(), ms(50));
    }
}
