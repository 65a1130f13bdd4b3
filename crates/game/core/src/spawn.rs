//! Monster spawn index.
//!
//! Resolves a monster type to candidate locations from the static map table.
//! A spawn location is the center of its boundary rectangle; instanced maps
//! are never considered.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::env::{MapOracle, MapTemplate, SpawnArea};
use crate::geometry::MapPosition;

/// A spawn location together with the monster type found there.
#[derive(Clone, Debug, PartialEq)]
pub struct MonsterSpawnPosition {
    pub position: MapPosition,
    pub monster_type: String,
}

/// Every spawn location of `monster_type` across all non-instanced maps.
pub fn monster_spawns(maps: &(impl MapOracle + ?Sized), monster_type: &str) -> Vec<MapPosition> {
    let mut spawns = Vec::new();
    for map in maps.maps().iter().filter(|map| !map.instance) {
        for spawn in map.monsters.iter().filter(|s| s.monster_type == monster_type) {
            match &spawn.area {
                SpawnArea::Boundary(boundary) => {
                    let (x, y) = boundary.center();
                    spawns.push(MapPosition::new(map.name.clone(), x, y));
                }
                SpawnArea::Boundaries(list) => {
                    spawns.extend(list.iter().map(|entry| {
                        let (x, y) = entry.boundary.center();
                        MapPosition::new(entry.map.clone(), x, y)
                    }));
                }
            }
        }
    }
    spawns
}

pub fn random_monster_spawn(
    maps: &(impl MapOracle + ?Sized),
    monster_type: &str,
    rng: &mut impl Rng,
) -> Option<MapPosition> {
    monster_spawns(maps, monster_type).choose(rng).cloned()
}

/// The spawn of `monster_type` nearest to `from`. Spawns on other maps are
/// infinitely far and are only returned when nothing else exists.
pub fn closest_monster_spawn(
    maps: &(impl MapOracle + ?Sized),
    monster_type: &str,
    from: &MapPosition,
) -> Option<MapPosition> {
    monster_spawns(maps, monster_type)
        .into_iter()
        .min_by(|a, b| from.distance(a).total_cmp(&from.distance(b)))
}

/// Spawns on the map of `position` that are within `radius` of it, or whose
/// boundary contains it, sorted nearest first.
pub fn nearby_monster_spawns(
    maps: &(impl MapOracle + ?Sized),
    position: &MapPosition,
    radius: f64,
) -> Vec<MonsterSpawnPosition> {
    let Some(map) = maps.map(&position.map).filter(|map| !map.instance) else {
        return Vec::new();
    };

    let mut nearby = collect_nearby(map, position, radius);
    nearby.sort_by(|a, b| {
        position
            .distance(&a.position)
            .total_cmp(&position.distance(&b.position))
    });
    nearby
}

fn collect_nearby(
    map: &MapTemplate,
    position: &MapPosition,
    radius: f64,
) -> Vec<MonsterSpawnPosition> {
    let mut nearby = Vec::new();
    for spawn in &map.monsters {
        let boundaries: Vec<_> = match &spawn.area {
            SpawnArea::Boundary(boundary) => vec![*boundary],
            SpawnArea::Boundaries(list) => list
                .iter()
                .filter(|entry| entry.map == position.map)
                .map(|entry| entry.boundary)
                .collect(),
        };

        for boundary in boundaries {
            let (x, y) = boundary.center();
            let location = MapPosition::new(position.map.clone(), x, y);
            if position.distance(&location) < radius || boundary.contains(position.x, position.y)
            {
                nearby.push(MonsterSpawnPosition {
                    position: location,
                    monster_type: spawn.monster_type.clone(),
                });
            }
        }
    }
    nearby
}
