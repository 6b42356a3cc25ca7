pub mod tilemap;

pub use tilemap::TileMap;
