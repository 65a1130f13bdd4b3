//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g., [`crate::CurveError`], [`crate::Unavailable`])
//! are defined next to the logic that produces them. This module provides the
//! shared severity classification the runtime uses to decide how a failed
//! decision cycle is reported.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Transient**: the game server or network rejected an action; the owning
///   loop simply runs again after its backoff
/// - **Skipped**: a knowledge-base entry is missing or a precondition does not
///   hold; the decision is treated as "no candidate" for this cycle
/// - **Internal**: an invariant was violated; reported, then the loop backs off
/// - **Fatal**: the runtime itself is misconfigured and cannot start
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Transient,
    Skipped,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorSeverity::Transient => "transient",
            ErrorSeverity::Skipped => "skipped",
            ErrorSeverity::Internal => "internal",
            ErrorSeverity::Fatal => "fatal",
        }
    }

    /// Returns true if the error should never stop a running loop.
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, ErrorSeverity::Fatal)
    }
}

/// Shared behavior for errors raised by the decision core and its runtime.
pub trait GameError: core::fmt::Display {
    fn severity(&self) -> ErrorSeverity;

    /// Stable machine-readable code, e.g. `"AVAILABILITY_ON_COOLDOWN"`.
    fn error_code(&self) -> &'static str;
}
