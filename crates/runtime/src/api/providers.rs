//! Asynchronous abstractions over the collaborators the scheduler drives.
//!
//! The transport to the game server plugs in through two traits:
//! [`SnapshotFeed`] supplies the latest observation and [`ActionExecutor`]
//! performs the chosen action. Both may suspend the calling loop.
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use game_core::{EntityId, TargetChoice, WorldSnapshot};

use super::errors::{Result, RuntimeError};

/// Source of the live world observation.
#[async_trait]
pub trait SnapshotFeed: Send + Sync {
    /// The most recent snapshot. Called once at the start of every cycle.
    async fn snapshot(&self) -> Result<Arc<WorldSnapshot>>;
}

/// Executes actions against the game server.
///
/// A returned error marks the action as not performed; the cooldown is left
/// untouched and the loop backs off.
#[async_trait]
pub trait ActionExecutor: Send + Sync {
    /// Uses `skill`, optionally on `target`.
    async fn invoke(&self, skill: &str, target: Option<&EntityId>) -> Result<()>;

    /// Basic attack on a selected monster. The choice carries the advisory
    /// farming hints for executors that handle movement.
    async fn attack(&self, target: &TargetChoice) -> Result<()> {
        self.invoke("attack", Some(&target.id)).await
    }

    async fn heal(&self, target: &EntityId) -> Result<()> {
        self.invoke("heal", Some(target)).await
    }
}

/// Creates a connected publisher and feed backed by a watch channel.
pub fn snapshot_channel() -> (SnapshotPublisher, WatchSnapshotFeed) {
    let (tx, rx) = watch::channel(None);
    (SnapshotPublisher { tx }, WatchSnapshotFeed { rx })
}

/// Write side of [`snapshot_channel`], held by the transport.
#[derive(Debug)]
pub struct SnapshotPublisher {
    tx: watch::Sender<Option<Arc<WorldSnapshot>>>,
}

impl SnapshotPublisher {
    /// Replaces the current snapshot wholesale.
    pub fn publish(&self, world: WorldSnapshot) {
        self.tx.send_replace(Some(Arc::new(world)));
    }

    /// Edits a copy of the current snapshot and publishes it.
    ///
    /// Returns false when nothing has been published yet.
    pub fn update(&self, edit: impl FnOnce(&mut WorldSnapshot)) -> bool {
        self.tx.send_if_modified(|current| match current {
            Some(world) => {
                let mut next = WorldSnapshot::clone(world);
                edit(&mut next);
                *current = Some(Arc::new(next));
                true
            }
            None => false,
        })
    }
}

/// [`SnapshotFeed`] reading the latest value of a watch channel.
#[derive(Debug, Clone)]
pub struct WatchSnapshotFeed {
    rx: watch::Receiver<Option<Arc<WorldSnapshot>>>,
}

#[async_trait]
impl SnapshotFeed for WatchSnapshotFeed {
    async fn snapshot(&self) -> Result<Arc<WorldSnapshot>> {
        if self.rx.has_changed().is_err() && self.rx.borrow().is_none() {
            return Err(RuntimeError::SnapshotFeedClosed);
        }
        self.rx
            .borrow()
            .clone()
            .ok_or(RuntimeError::SnapshotUnavailable)
    }
}
