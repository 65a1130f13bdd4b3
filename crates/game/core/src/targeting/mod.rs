//! Target and heal selection.
//!
//! - [`priority`]: the immutable per-monster-type priority table
//! - [`selector`]: picks the highest-priority monster target
//! - [`heal`]: ranks allies by urgency for heal decisions

pub mod heal;
pub mod priority;
pub mod selector;

pub use heal::{HealCandidate, HealQueue, urgency};
pub use priority::{FarmingHints, TargetPriorityEntry, TargetPriorityTable, priorities};
pub use selector::{TargetChoice, TargetSelector};
