//! Runtime configuration.

use std::env;
use std::time::Duration;

use game_core::DecisionConfig;

/// Runtime configuration shared across the scheduler and its loops.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub decision: DecisionConfig,
    /// Fixed delay before a loop runs again after a failed cycle.
    pub failure_backoff: Duration,
    /// Latency estimate used until the first ping sample arrives.
    pub default_ping: Duration,
    /// Number of ping samples kept for the rolling estimate.
    pub ping_window: usize,
    pub event_buffer_size: usize,
    /// Re-arm delay for loops whose pacing skill is not in the catalog.
    pub idle_poll_interval: Duration,
}

impl RuntimeConfig {
    pub const DEFAULT_FAILURE_BACKOFF: Duration = Duration::from_millis(250);
    pub const DEFAULT_PING: Duration = Duration::from_millis(100);
    pub const DEFAULT_PING_WINDOW: usize = 20;
    pub const DEFAULT_EVENT_BUFFER: usize = 100;
    pub const DEFAULT_IDLE_POLL: Duration = Duration::from_millis(500);

    /// Defaults overridden by `AGENT_*` environment variables.
    ///
    /// - `AGENT_FAILURE_BACKOFF_MS`
    /// - `AGENT_DEFAULT_PING_MS`
    /// - `AGENT_PING_WINDOW`
    /// - `AGENT_EVENT_BUFFER`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("AGENT_FAILURE_BACKOFF_MS") {
            config.failure_backoff = Duration::from_millis(ms);
        }
        if let Some(ms) = read_env::<u64>("AGENT_DEFAULT_PING_MS") {
            config.default_ping = Duration::from_millis(ms);
        }
        if let Some(window) = read_env::<usize>("AGENT_PING_WINDOW") {
            config.ping_window = window.max(1);
        }
        if let Some(capacity) = read_env::<usize>("AGENT_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }

        config
    }

    pub fn with_decision(mut self, decision: DecisionConfig) -> Self {
        self.decision = decision;
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            decision: DecisionConfig::default(),
            failure_backoff: Self::DEFAULT_FAILURE_BACKOFF,
            default_ping: Self::DEFAULT_PING,
            ping_window: Self::DEFAULT_PING_WINDOW,
            event_buffer_size: Self::DEFAULT_EVENT_BUFFER,
            idle_poll_interval: Self::DEFAULT_IDLE_POLL,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = RuntimeConfig::default();
        assert_eq!(config.failure_backoff, Duration::from_millis(250));
        assert_eq!(config.default_ping, Duration::from_millis(100));
        assert!(config.decision.validate().is_ok());
    }

    #[test]
    fn unset_variables_are_ignored() {
        assert_eq!(read_env::<u64>("AGENT_NOT_A_REAL_SETTING"), None);
    }
}
