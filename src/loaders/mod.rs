pub mod yaml;

pub use yaml::{MapBundle, load_map, parse_map};
