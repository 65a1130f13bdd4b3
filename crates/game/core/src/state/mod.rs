//! Observed entity state.
//!
//! Snapshots are immutable per observation. The live feed replaces them
//! wholesale each tick and the decision core only ever reads them.
mod entity;
mod world;

pub use entity::{
    CharacterClass, EntityId, EntityKind, EntitySnapshot, Equipment, Slot, StatusFlags,
};
pub use world::WorldSnapshot;
