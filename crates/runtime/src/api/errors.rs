//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from action dispatch, the knowledge base, and scheduler
//! coordination so loops can classify them by [`ErrorSeverity`].
use thiserror::Error;

use game_core::{ConfigError, ErrorSeverity, GameError, OracleError, Unavailable};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("action '{skill}' failed: {reason}")]
    ActionFailed { skill: String, reason: String },

    #[error("no world snapshot has been published yet")]
    SnapshotUnavailable,

    #[error("snapshot feed closed")]
    SnapshotFeedClosed,

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Unavailable(#[from] Unavailable),

    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error("runtime requires a snapshot feed before building")]
    MissingFeed,

    #[error("runtime requires an action executor before building")]
    MissingExecutor,

    #[error("loop '{0}' registered twice")]
    DuplicateLoop(String),

    #[error("invalid decision config")]
    Config(#[from] ConfigError),

    #[error("scheduler is already running")]
    AlreadyRunning,

    #[error("scheduler is not running")]
    NotRunning,

    #[error("loop worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("loop cycle panicked")]
    CyclePanicked(#[source] tokio::task::JoinError),
}

impl RuntimeError {
    pub fn action_failed(skill: impl Into<String>, reason: impl ToString) -> Self {
        RuntimeError::ActionFailed {
            skill: skill.into(),
            reason: reason.to_string(),
        }
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        use RuntimeError::*;
        match self {
            ActionFailed { .. } | SnapshotUnavailable => ErrorSeverity::Transient,
            Oracle(err) => err.severity(),
            Unavailable(err) => err.severity(),
            InvariantViolation(_) | AlreadyRunning | NotRunning | WorkerJoin(_)
            | CyclePanicked(_) => ErrorSeverity::Internal,
            SnapshotFeedClosed | MissingOracles | MissingFeed | MissingExecutor
            | DuplicateLoop(_) | Config(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use RuntimeError::*;
        match self {
            ActionFailed { .. } => "RUNTIME_ACTION_FAILED",
            SnapshotUnavailable => "RUNTIME_SNAPSHOT_UNAVAILABLE",
            SnapshotFeedClosed => "RUNTIME_SNAPSHOT_FEED_CLOSED",
            Oracle(err) => err.error_code(),
            Unavailable(err) => err.error_code(),
            InvariantViolation(_) => "RUNTIME_INVARIANT_VIOLATION",
            MissingOracles => "RUNTIME_MISSING_ORACLES",
            MissingFeed => "RUNTIME_MISSING_FEED",
            MissingExecutor => "RUNTIME_MISSING_EXECUTOR",
            DuplicateLoop(_) => "RUNTIME_DUPLICATE_LOOP",
            Config(_) => "RUNTIME_CONFIG",
            AlreadyRunning => "RUNTIME_ALREADY_RUNNING",
            NotRunning => "RUNTIME_NOT_RUNNING",
            WorkerJoin(_) => "RUNTIME_WORKER_JOIN",
            CyclePanicked(_) => "RUNTIME_CYCLE_PANICKED",
        }
    }
}
