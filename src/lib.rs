pub mod grid;
pub mod input;
pub mod iterators;
pub mod loaders;
pub mod motion;
pub mod raycast;
pub mod render;
pub mod types;
pub mod visualization;

pub use grid::TileMap;
pub use loaders::yaml::{load_map, parse_map};
pub use types::{CasterError, MapInfo, Pose2, ViewConfig};
