//! Content factory for loading the knowledge base from a data directory.

use std::path::{Path, PathBuf};

use game_core::{DecisionConfig, ItemDescriptor, MapTemplate, SkillDescriptor, TargetPriorityTable};

use crate::loaders::{
    ConfigLoader, ItemLoader, LoadResult, MapLoader, PriorityLoader, SkillLoader,
};

/// Content factory that loads all knowledge-base files from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── decision.toml
/// ├── skills.ron
/// ├── items.ron
/// ├── maps.ron
/// └── {role}_targets.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

/// Everything a role needs, loaded in one pass.
#[derive(Debug, Clone)]
pub struct ContentBundle {
    pub config: DecisionConfig,
    pub skills: Vec<SkillDescriptor>,
    pub items: Vec<ItemDescriptor>,
    pub maps: Vec<MapTemplate>,
    pub targets: TargetPriorityTable,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the content shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(crate::data_dir())
    }

    /// Load decision configuration from `decision.toml`.
    pub fn load_config(&self) -> LoadResult<DecisionConfig> {
        ConfigLoader::load(&self.data_dir.join("decision.toml"))
    }

    /// Load the skill catalog from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<Vec<SkillDescriptor>> {
        SkillLoader::load(&self.data_dir.join("skills.ron"))
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDescriptor>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load map spawn tables from `maps.ron`.
    pub fn load_maps(&self) -> LoadResult<Vec<MapTemplate>> {
        MapLoader::load(&self.data_dir.join("maps.ron"))
    }

    /// Load the priority table for `role` from `{role}_targets.ron`.
    pub fn load_targets(&self, role: &str) -> LoadResult<TargetPriorityTable> {
        PriorityLoader::load(&self.data_dir.join(format!("{}_targets.ron", role)))
    }

    /// Load every file for `role`.
    pub fn load_bundle(&self, role: &str) -> LoadResult<ContentBundle> {
        Ok(ContentBundle {
            config: self.load_config()?,
            skills: self.load_skills()?,
            items: self.load_items()?,
            maps: self.load_maps()?,
            targets: self.load_targets(role)?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
