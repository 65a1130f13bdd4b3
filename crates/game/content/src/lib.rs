//! Knowledge-base content and loaders.
//!
//! This crate ships the static data the decision core consults and the loaders
//! that read it:
//! - Skill catalog (RON)
//! - Item catalog (RON)
//! - Map spawn tables (RON)
//! - Target priority tables (RON)
//! - Decision configuration (TOML)
//!
//! Content is consumed by runtime oracles and is never mutated after load.

use std::path::PathBuf;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentBundle, ContentFactory, ItemLoader, LoadResult, MapLoader,
    PriorityLoader, SkillLoader,
};

/// Directory holding the bundled content files.
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}
