//! Static spawn tables served through [`game_core::MapOracle`].
use game_core::{Boundary, MapOracle, MapTemplate, MonsterSpawn, SpawnArea};

/// MapOracle implementation with static map data
#[derive(Debug, Default)]
pub struct MapOracleImpl {
    maps: Vec<MapTemplate>,
}

impl MapOracleImpl {
    pub fn new(maps: Vec<MapTemplate>) -> Self {
        Self { maps }
    }

    /// A single open map with goo and bee spawns.
    pub fn test_maps() -> Self {
        Self::new(vec![MapTemplate {
            name: "main".into(),
            instance: false,
            monsters: vec![
                MonsterSpawn {
                    monster_type: "goo".into(),
                    area: SpawnArea::Boundary(Boundary::new(-100.0, -100.0, 100.0, 100.0)),
                },
                MonsterSpawn {
                    monster_type: "bee".into(),
                    area: SpawnArea::Boundary(Boundary::new(400.0, 400.0, 600.0, 600.0)),
                },
            ],
        }])
    }
}

impl MapOracle for MapOracleImpl {
    fn maps(&self) -> &[MapTemplate] {
        &self.maps
    }
}
