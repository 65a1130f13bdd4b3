//! Runtime wrappers around static knowledge-base oracles.
//!
//! These implementations expose `game-core` oracle traits and bundle them into
//! an [`OracleManager`] so loops can build [`game_core::Env`] views on demand.
//! The data is immutable once the runtime is built.
mod items;
mod map;
mod skills;

use std::sync::Arc;

use game_content::ContentBundle;
use game_core::Env;

pub use items::ItemOracleImpl;
pub use map::MapOracleImpl;
pub use skills::SkillOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) skills: Arc<SkillOracleImpl>,
    pub(crate) items: Arc<ItemOracleImpl>,
    pub(crate) maps: Arc<MapOracleImpl>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        skills: Arc<SkillOracleImpl>,
        items: Arc<ItemOracleImpl>,
        maps: Arc<MapOracleImpl>,
    ) -> Self {
        Self {
            skills,
            items,
            maps,
        }
    }

    /// Builds oracles from loaded content.
    pub fn from_content(bundle: &ContentBundle) -> Self {
        Self::new(
            Arc::new(bundle.skills.iter().cloned().collect()),
            Arc::new(bundle.items.iter().cloned().collect()),
            Arc::new(MapOracleImpl::new(bundle.maps.clone())),
        )
    }

    /// Small in-memory fixtures for tests and examples.
    pub fn test_oracles() -> Self {
        Self::new(
            Arc::new(SkillOracleImpl::test_skills()),
            Arc::new(ItemOracleImpl::test_items()),
            Arc::new(MapOracleImpl::test_maps()),
        )
    }

    /// Borrowed view handed to game-core.
    pub fn as_env(&self) -> Env<'_> {
        Env::with_all(
            self.skills.as_ref(),
            self.items.as_ref(),
            self.maps.as_ref(),
        )
    }

    pub fn skills(&self) -> &SkillOracleImpl {
        &self.skills
    }

    pub fn items(&self) -> &ItemOracleImpl {
        &self.items
    }

    pub fn maps(&self) -> &MapOracleImpl {
        &self.maps
    }
}
