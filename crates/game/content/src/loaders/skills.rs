//! Skill catalog loader.

use std::collections::HashSet;
use std::path::Path;

use game_core::SkillDescriptor;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Skill catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCatalog {
    pub skills: Vec<SkillDescriptor>,
}

/// Loader for the skill catalog from RON files.
pub struct SkillLoader;

impl SkillLoader {
    /// Load the skill catalog from a RON file.
    ///
    /// Every `shares_cooldown_with` reference must name another skill in the
    /// same catalog.
    pub fn load(path: &Path) -> LoadResult<Vec<SkillDescriptor>> {
        let content = read_file(path)?;
        let catalog: SkillCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill catalog RON: {}", e))?;

        let mut names = HashSet::new();
        for skill in &catalog.skills {
            if !names.insert(skill.name.as_str()) {
                anyhow::bail!("Duplicate skill '{}' in {}", skill.name, path.display());
            }
        }
        for skill in &catalog.skills {
            if let Some(peer) = &skill.shares_cooldown_with
                && (peer == &skill.name || !names.contains(peer.as_str()))
            {
                anyhow::bail!(
                    "Skill '{}' shares cooldown with unknown skill '{}'",
                    skill.name,
                    peer
                );
            }
        }

        Ok(catalog.skills)
    }
}
