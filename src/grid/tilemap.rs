use glam::{IVec2, Vec2};

use crate::types::{CasterError, EMPTY, MapInfo, TileId, WALL};

/// Read-only tile grid queried by the caster and the collision resolver.
///
/// Cell values are fixed once play starts; mutation is only expected while a
/// world is being built or loaded.
#[derive(Debug, Clone)]
pub struct TileMap {
    info: MapInfo,
    data: Vec<TileId>,
}

impl TileMap {
    pub fn new(info: MapInfo, data: Vec<TileId>) -> Result<Self, CasterError> {
        info.validate()?;
        let expected_len = (info.cols as usize) * (info.rows as usize);
        if data.len() != expected_len {
            return Err(CasterError::InvalidMap(format!(
                "data length {} does not match map size {}",
                data.len(),
                expected_len
            )));
        }

        Ok(Self { info, data })
    }

    /// All-empty interior enclosed by a one-tile solid border.
    pub fn bordered(info: MapInfo) -> Result<Self, CasterError> {
        info.validate()?;
        let cols = info.cols as usize;
        let rows = info.rows as usize;
        let mut data = vec![EMPTY; cols * rows];
        for (i, cell) in data.iter_mut().enumerate() {
            let col = i % cols;
            let row = i / cols;
            if col == 0 || row == 0 || col == cols - 1 || row == rows - 1 {
                *cell = WALL;
            }
        }
        Self::new(info, data)
    }

    pub fn info(&self) -> &MapInfo {
        &self.info
    }

    pub fn cols(&self) -> u32 {
        self.info.cols
    }

    pub fn rows(&self) -> u32 {
        self.info.rows
    }

    pub fn tile_edge(&self) -> f32 {
        self.info.tile_edge
    }

    /// Get the tile at a cell index with bounds checking.
    pub fn tile(&self, col: u32, row: u32) -> Option<TileId> {
        if col >= self.info.cols || row >= self.info.rows {
            return None;
        }
        Some(self.data[self.index(col, row)])
    }

    pub fn set_tile(&mut self, col: u32, row: u32, value: TileId) -> Result<(), CasterError> {
        if col >= self.info.cols || row >= self.info.rows {
            return Err(CasterError::OutOfBounds(format!(
                "tile ({}, {}) out of bounds for map {}x{}",
                col, row, self.info.cols, self.info.rows
            )));
        }
        let idx = self.index(col, row);
        self.data[idx] = value;
        Ok(())
    }

    fn index(&self, col: u32, row: u32) -> usize {
        (row as usize) * (self.info.cols as usize) + (col as usize)
    }

    /// Cell index containing a world coordinate, unclamped.
    #[inline]
    pub fn world_to_tile(&self, world: Vec2) -> IVec2 {
        IVec2::new(
            (world.x / self.info.tile_edge).floor() as i32,
            (world.y / self.info.tile_edge).floor() as i32,
        )
    }

    /// Tile occupying a world coordinate.
    ///
    /// Coordinates outside the map clamp to the nearest border cell; this is
    /// the fixed out-of-bounds policy for world-space queries. Callers that
    /// need to distinguish out-of-map coordinates should use [`tile`](Self::tile)
    /// with an explicit index instead.
    pub fn tile_at(&self, world: Vec2) -> TileId {
        let cell = self.world_to_tile(world);
        let col = cell.x.clamp(0, self.info.cols as i32 - 1) as u32;
        let row = cell.y.clamp(0, self.info.rows as i32 - 1) as u32;
        self.data[self.index(col, row)]
    }

    /// Whether the tile occupying a world coordinate is solid.
    #[inline]
    pub fn is_solid_at(&self, world: Vec2) -> bool {
        self.tile_at(world) == WALL
    }

    /// Whether a cell index holds a solid tile. Out-of-range indices read as
    /// not solid so a ray leaving the map keeps flying to its max distance.
    #[inline]
    pub fn solid_tile(&self, col: i32, row: i32) -> bool {
        if col < 0 || row < 0 || col >= self.info.cols as i32 || row >= self.info.rows as i32 {
            return false;
        }
        self.data[self.index(col as u32, row as u32)] == WALL
    }

    pub fn data(&self) -> &[TileId] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_3x3_center_wall() -> TileMap {
        let info = MapInfo::square(3, 8.0);
        let mut map = TileMap::new(info, vec![EMPTY; 9]).unwrap();
        map.set_tile(1, 1, WALL).unwrap();
        map
    }

    #[test]
    fn rejects_mismatched_data_length() {
        let info = MapInfo::square(3, 8.0);
        assert!(TileMap::new(info, vec![EMPTY; 8]).is_err());
    }

    #[test]
    fn rejects_zero_tile_edge() {
        let info = MapInfo {
            cols: 3,
            rows: 3,
            tile_edge: 0.0,
        };
        assert!(TileMap::new(info, vec![EMPTY; 9]).is_err());
    }

    #[test]
    fn rejects_non_finite_tile_edge() {
        let info = MapInfo {
            cols: 3,
            rows: 3,
            tile_edge: f32::INFINITY,
        };
        assert!(TileMap::new(info, vec![EMPTY; 9]).is_err());
    }

    #[test]
    fn world_queries_floor_divide() {
        let map = map_3x3_center_wall();
        assert_eq!(map.tile_at(Vec2::new(8.0, 8.0)), WALL);
        assert_eq!(map.tile_at(Vec2::new(15.9, 15.9)), WALL);
        assert_eq!(map.tile_at(Vec2::new(16.0, 8.0)), EMPTY);
        assert_eq!(map.tile_at(Vec2::new(7.9, 7.9)), EMPTY);
        assert!(map.is_solid_at(Vec2::new(12.0, 12.0)));
        assert!(!map.is_solid_at(Vec2::new(4.0, 4.0)));
    }

    #[test]
    fn out_of_bounds_world_queries_clamp_to_border() {
        let map = map_3x3_center_wall();
        assert_eq!(map.tile_at(Vec2::new(-5.0, -5.0)), map.tile(0, 0).unwrap());
        assert_eq!(
            map.tile_at(Vec2::new(1000.0, 12.0)),
            map.tile(2, 1).unwrap()
        );
    }

    #[test]
    fn repeated_queries_are_identical() {
        let map = map_3x3_center_wall();
        let p = Vec2::new(9.5, 13.25);
        assert_eq!(map.tile_at(p), map.tile_at(p));
    }

    #[test]
    fn index_queries_check_bounds() {
        let mut map = map_3x3_center_wall();
        assert_eq!(map.tile(2, 2), Some(EMPTY));
        assert_eq!(map.tile(3, 0), None);
        assert!(map.set_tile(0, 3, WALL).is_err());
        assert!(!map.solid_tile(-1, 0));
        assert!(!map.solid_tile(0, 3));
        assert!(map.solid_tile(1, 1));
    }

    #[test]
    fn bordered_map_walls_the_perimeter() {
        let map = TileMap::bordered(MapInfo::square(4, 8.0)).unwrap();
        for i in 0..4 {
            assert!(map.solid_tile(i, 0));
            assert!(map.solid_tile(i, 3));
            assert!(map.solid_tile(0, i));
            assert!(map.solid_tile(3, i));
        }
        assert!(!map.solid_tile(1, 1));
        assert!(!map.solid_tile(2, 2));
    }
}
