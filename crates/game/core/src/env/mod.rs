//! Traits describing the read-only knowledge base.
//!
//! Oracles expose skill descriptors, item properties, and map spawn tables.
//! The [`Env`] aggregate bundles them so decision logic can reach everything
//! it needs without coupling to concrete implementations.
mod error;
mod items;
mod map;
mod skills;

pub use error::OracleError;
pub use items::{ItemDescriptor, ItemOracle};
pub use map::{MapOracle, MapTemplate, MonsterSpawn, SpawnArea, SpawnBoundary};
pub use skills::{BASE_ACTIONS, SkillDescriptor, SkillOracle};

/// Aggregates read-only oracles required by the decision core.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    skills: Option<&'a dyn SkillOracle>,
    items: Option<&'a dyn ItemOracle>,
    maps: Option<&'a dyn MapOracle>,
}

impl<'a> Env<'a> {
    pub fn new(
        skills: Option<&'a dyn SkillOracle>,
        items: Option<&'a dyn ItemOracle>,
        maps: Option<&'a dyn MapOracle>,
    ) -> Self {
        Self {
            skills,
            items,
            maps,
        }
    }

    pub fn with_all(
        skills: &'a dyn SkillOracle,
        items: &'a dyn ItemOracle,
        maps: &'a dyn MapOracle,
    ) -> Self {
        Self::new(Some(skills), Some(items), Some(maps))
    }

    pub fn empty() -> Self {
        Self::new(None, None, None)
    }

    /// Returns the SkillOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SkillsNotAvailable` if no skill oracle was provided.
    pub fn skills(&self) -> Result<&'a dyn SkillOracle, OracleError> {
        self.skills.ok_or(OracleError::SkillsNotAvailable)
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no item oracle was provided.
    pub fn items(&self) -> Result<&'a dyn ItemOracle, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the MapOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MapsNotAvailable` if no map oracle was provided.
    pub fn maps(&self) -> Result<&'a dyn MapOracle, OracleError> {
        self.maps.ok_or(OracleError::MapsNotAvailable)
    }

    /// Looks up a skill descriptor by name.
    pub fn skill(&self, name: &str) -> Result<&'a SkillDescriptor, OracleError> {
        self.skills()?
            .skill(name)
            .ok_or_else(|| OracleError::SkillNotFound(name.to_owned()))
    }
}

impl core::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Env")
            .field("skills", &self.skills.is_some())
            .field("items", &self.items.is_some())
            .field("maps", &self.maps.is_some())
            .finish()
    }
}
