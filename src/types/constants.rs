/// Tile identifier stored in a [`TileMap`](crate::TileMap) cell.
pub type TileId = u8;

pub const EMPTY: TileId = 0;
pub const WALL: TileId = 1;

/// Player linear speed in world units per frame.
pub const DEFAULT_MOVE_SPEED: f32 = 2.0;
/// Player angular speed in degrees per frame.
pub const DEFAULT_TURN_SPEED: f32 = 4.0;
/// Starting hit points for a damageable actor.
pub const DEFAULT_HIT_POINTS: i32 = 100;

/// Edge length of one grid tile in world units.
pub const DEFAULT_TILE_EDGE: f32 = 8.0;

/// Furthest a ray travels before it is reported as a miss (world units).
pub const DEFAULT_MAX_CAST_DISTANCE: f32 = 256.0;

/// Rotation added to a direction marker's heading when drawing it, in degrees.
///
/// Marker artwork is authored facing up (-y); heading 0° points along +x, so
/// sprites rotate by `heading + SPRITE_FACING_OFFSET_DEG` to face the right
/// way. Rendering collaborators that draw their own sprites should apply the
/// same offset.
pub const SPRITE_FACING_OFFSET_DEG: f32 = 90.0;
