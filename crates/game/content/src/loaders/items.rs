//! Item catalog loader.

use std::path::Path;

use game_core::ItemDescriptor;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDescriptor>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Errors
    ///
    /// Fails when the file is unreadable, malformed, or names an item twice.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDescriptor>> {
        let content = read_file(path)?;
        let catalog: ItemCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = std::collections::HashSet::new();
        for item in &catalog.items {
            if !seen.insert(item.name.as_str()) {
                anyhow::bail!("Duplicate item '{}' in {}", item.name, path.display());
            }
        }

        Ok(catalog.items)
    }
}
