//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate:
//! the collaborator traits the transport implements, the error type, and the
//! cloneable [`RuntimeHandle`].

pub mod errors;
pub mod handle;
pub mod providers;

pub use errors::{Result, RuntimeError};
pub use handle::RuntimeHandle;
pub use providers::{
    ActionExecutor, SnapshotFeed, SnapshotPublisher, WatchSnapshotFeed, snapshot_channel,
};
