//! Grid ray casting.
//!
//! Each cast reads only the [`TileMap`](crate::TileMap) and writes its own
//! [`RayHit`], so independent columns may be cast concurrently if a renderer
//! chooses to; nothing here shares mutable state between rays.

use glam::Vec2;

pub mod dda;

pub use dda::{cast_ray, cast_ray_dir};

/// Orientation of the grid line a ray terminated on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    /// A vertical grid line (constant x); the ray entered the tile moving
    /// east or west.
    X,
    /// A horizontal grid line (constant y); the ray entered the tile moving
    /// north or south.
    Y,
}

/// Result of a single cast.
///
/// A ray that exhausts its range still yields a fully populated
/// value: the point at maximum distance, `side` = [`Side::X`] and `tex_u` = 0.
/// Callers branch on `hit`, never on sentinel field values.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RayHit {
    /// False when the ray travelled `max_distance` without striking a wall.
    pub hit: bool,
    /// World-space point where the cast ended.
    pub point: Vec2,
    /// Straight-line distance from the origin to `point` (world units).
    pub distance: f32,
    /// Which grid face orientation was struck.
    pub side: Side,
    /// Offset along the struck face in `[0, tile_edge)`, used as the texture
    /// u-coordinate.
    pub tex_u: u32,
}
