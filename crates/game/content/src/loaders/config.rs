//! Decision configuration loader.

use std::path::Path;

use game_core::DecisionConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for decision configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their defaults. The result is validated before it is
    /// returned.
    pub fn load(path: &Path) -> LoadResult<DecisionConfig> {
        let content = read_file(path)?;
        let config: DecisionConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;

        Ok(config)
    }
}
