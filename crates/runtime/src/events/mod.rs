//! Topic-based event distribution for loop activity.
//!
//! Loops publish [`LoopEvent`]s; subscribers pick the [`Topic`]s they need.

mod bus;
mod types;

pub use bus::{EventBus, Topic};
pub use types::LoopEvent;
