//! Content loaders for reading knowledge-base files.
//!
//! Each loader turns one RON or TOML file into game-core types that the
//! runtime wraps in oracle implementations.

pub mod config;
pub mod factory;
pub mod items;
pub mod maps;
pub mod priorities;
pub mod skills;

pub use config::ConfigLoader;
pub use factory::{ContentBundle, ContentFactory};
pub use items::ItemLoader;
pub use maps::MapLoader;
pub use priorities::PriorityLoader;
pub use skills::SkillLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
