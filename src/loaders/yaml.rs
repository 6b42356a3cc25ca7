//! YAML map format: a glyph legend plus one string per tile row.
//!
//! ```yaml
//! tile_edge: 8.0
//! legend:
//!   "#": wall
//!   ".": empty
//!   "@": player_spawn
//!   "e": actor_spawn
//! rows:
//!   - "####"
//!   - "#@.#"
//!   - "#.e#"
//!   - "####"
//! ```
//!
//! `tile_edge` and `legend` may be omitted; the defaults above apply. Spawn
//! markers are consumed while parsing: they become empty tiles in the map and
//! come back as world positions at the marked tile's center.

use std::collections::HashMap;
use std::path::Path;

use glam::Vec2;
use serde::Deserialize;

use crate::grid::TileMap;
use crate::types::{CasterError, DEFAULT_TILE_EDGE, EMPTY, MapInfo, WALL};

#[derive(Debug, Deserialize)]
struct MapFile {
    #[serde(
        default = "default_tile_edge",
        deserialize_with = "deserialize_tile_edge"
    )]
    tile_edge: f32,
    #[serde(default = "default_legend")]
    legend: HashMap<char, TileKind>,
    rows: Vec<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum TileKind {
    Empty,
    Wall,
    PlayerSpawn,
    ActorSpawn,
}

fn default_tile_edge() -> f32 {
    DEFAULT_TILE_EDGE
}

fn default_legend() -> HashMap<char, TileKind> {
    HashMap::from([
        ('.', TileKind::Empty),
        (' ', TileKind::Empty),
        ('#', TileKind::Wall),
        ('@', TileKind::PlayerSpawn),
        ('e', TileKind::ActorSpawn),
    ])
}

fn deserialize_tile_edge<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = f32::deserialize(deserializer)?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(serde::de::Error::custom(
            "tile_edge must be a positive, finite number",
        ))
    }
}

/// A parsed map together with the spawn points its markers described.
#[derive(Debug, Clone)]
pub struct MapBundle {
    pub map: TileMap,
    pub player_spawn: Option<Vec2>,
    pub actor_spawns: Vec<Vec2>,
}

/// Parse a map from YAML text.
pub fn parse_map(yaml: &str) -> Result<MapBundle, CasterError> {
    let file: MapFile = serde_yaml::from_str(yaml)?;

    let rows = file.rows.len() as u32;
    if rows == 0 {
        return Err(CasterError::InvalidMap("map has no rows".to_string()));
    }
    let cols = file.rows[0].chars().count() as u32;
    if cols == 0 {
        return Err(CasterError::InvalidMap("first row is empty".to_string()));
    }

    let info = MapInfo {
        cols,
        rows,
        tile_edge: file.tile_edge,
    };
    let mut data = Vec::with_capacity((cols * rows) as usize);
    let mut player_spawn = None;
    let mut actor_spawns = Vec::new();

    for (row, line) in file.rows.iter().enumerate() {
        let width = line.chars().count() as u32;
        if width != cols {
            return Err(CasterError::InvalidMap(format!(
                "row {row} is {width} tiles wide, expected {cols}"
            )));
        }
        for (col, glyph) in line.chars().enumerate() {
            let kind = file.legend.get(&glyph).copied().ok_or_else(|| {
                CasterError::InvalidMap(format!(
                    "unknown glyph {glyph:?} at row {row}, column {col}"
                ))
            })?;
            let center = info.tile_center(col as u32, row as u32);
            data.push(match kind {
                TileKind::Empty => EMPTY,
                TileKind::Wall => WALL,
                TileKind::PlayerSpawn => {
                    if player_spawn.replace(center).is_some() {
                        return Err(CasterError::InvalidMap(
                            "more than one player spawn marker".to_string(),
                        ));
                    }
                    EMPTY
                }
                TileKind::ActorSpawn => {
                    actor_spawns.push(center);
                    EMPTY
                }
            });
        }
    }

    let map = TileMap::new(info, data)?;
    Ok(MapBundle {
        map,
        player_spawn,
        actor_spawns,
    })
}

/// Read and parse a map file.
pub fn load_map(path: impl AsRef<Path>) -> Result<MapBundle, CasterError> {
    let yaml = std::fs::read_to_string(path)?;
    parse_map(&yaml)
}
