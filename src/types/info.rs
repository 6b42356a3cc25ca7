//! Map metadata.

use glam::Vec2;

use crate::types::{CasterError, DEFAULT_TILE_EDGE};

#[derive(Debug, Clone, PartialEq)]
pub struct MapInfo {
    pub cols: u32,
    pub rows: u32,
    /// Edge length of one tile in world units. World units and screen pixels
    /// share the same scale.
    pub tile_edge: f32,
}

impl Default for MapInfo {
    fn default() -> Self {
        Self {
            cols: 16,
            rows: 16,
            tile_edge: DEFAULT_TILE_EDGE,
        }
    }
}

impl MapInfo {
    pub fn square(cols: u32, tile_edge: f32) -> Self {
        Self {
            cols,
            rows: cols,
            tile_edge,
        }
    }

    /// Width of the map in world units.
    #[inline]
    pub fn world_width(&self) -> f32 {
        self.cols as f32 * self.tile_edge
    }

    /// Height of the map in world units.
    #[inline]
    pub fn world_height(&self) -> f32 {
        self.rows as f32 * self.tile_edge
    }

    /// Center of the map in world coordinates.
    #[inline]
    pub fn world_center(&self) -> Vec2 {
        Vec2::new(0.5 * self.world_width(), 0.5 * self.world_height())
    }

    /// World coordinate of the center of tile `(col, row)`.
    #[inline]
    pub fn tile_center(&self, col: u32, row: u32) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.tile_edge,
            (row as f32 + 0.5) * self.tile_edge,
        )
    }

    pub(crate) fn validate(&self) -> Result<(), CasterError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(CasterError::InvalidConfig(format!(
                "map must have at least one tile, got {}x{}",
                self.cols, self.rows
            )));
        }
        if !(self.tile_edge.is_finite() && self.tile_edge > 0.0) {
            return Err(CasterError::InvalidConfig(format!(
                "tile edge must be a positive, finite number, got {}",
                self.tile_edge
            )));
        }
        Ok(())
    }
}
