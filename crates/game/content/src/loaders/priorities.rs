//! Target priority table loader.

use std::path::Path;

use game_core::TargetPriorityTable;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Priority table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PriorityCatalog {
    targets: TargetPriorityTable,
}

/// Loader for per-role target priority tables.
pub struct PriorityLoader;

impl PriorityLoader {
    /// Load a target priority table from a RON file.
    pub fn load(path: &Path) -> LoadResult<TargetPriorityTable> {
        let content = read_file(path)?;
        let catalog: PriorityCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse priority table RON: {}", e))?;

        Ok(catalog.targets)
    }
}
