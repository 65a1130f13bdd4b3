//! Map spawn table loader.

use std::path::Path;

use game_core::MapTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Map table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapCatalog {
    maps: Vec<MapTemplate>,
}

/// Loader for map spawn tables from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load every map template from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<MapTemplate>> {
        let content = read_file(path)?;
        let catalog: MapCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        Ok(catalog.maps)
    }
}
