use crate::geometry::Boundary;

/// Static map table used to resolve monster spawn locations.
pub trait MapOracle: Send + Sync {
    fn maps(&self) -> &[MapTemplate];

    fn map(&self, name: &str) -> Option<&MapTemplate> {
        self.maps().iter().find(|map| map.name == name)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MapTemplate {
    pub name: String,
    /// Instanced maps are private copies and never used for spawn lookups.
    pub instance: bool,
    pub monsters: Vec<MonsterSpawn>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterSpawn {
    pub monster_type: String,
    pub area: SpawnArea,
}

/// Where a monster spawns: one rectangle on the owning map, or a list of
/// rectangles that may each name a different map.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpawnArea {
    Boundary(Boundary),
    Boundaries(Vec<SpawnBoundary>),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnBoundary {
    pub map: String,
    pub boundary: Boundary,
}
