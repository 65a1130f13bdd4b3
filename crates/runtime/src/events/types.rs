//! Event payloads published by loop workers.

use serde::{Deserialize, Serialize};

use game_core::EntityId;

use super::bus::Topic;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LoopEvent {
    /// A loop task started.
    Started { loop_name: String },

    /// A loop task exited after shutdown.
    Stopped { loop_name: String },

    /// An action was executed and its cooldown recorded.
    Dispatched {
        loop_name: String,
        skill: String,
        target: Option<EntityId>,
    },

    /// A cycle failed; the loop backs off and continues.
    Failed {
        loop_name: String,
        error_code: String,
        message: String,
    },
}

impl LoopEvent {
    pub fn topic(&self) -> Topic {
        match self {
            LoopEvent::Started { .. } | LoopEvent::Stopped { .. } => Topic::Lifecycle,
            LoopEvent::Dispatched { .. } => Topic::Decision,
            LoopEvent::Failed { .. } => Topic::Failure,
        }
    }

    pub fn loop_name(&self) -> &str {
        match self {
            LoopEvent::Started { loop_name }
            | LoopEvent::Stopped { loop_name }
            | LoopEvent::Dispatched { loop_name, .. }
            | LoopEvent::Failed { loop_name, .. } => loop_name,
        }
    }
}
