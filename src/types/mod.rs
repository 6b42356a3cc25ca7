pub mod constants;
pub mod error;
pub mod geometry;
pub mod info;
pub mod view;

pub use constants::*;
pub use error::CasterError;
pub use geometry::{Pose2, heading_vector, wrap_degrees};
pub use info::MapInfo;
pub use view::ViewConfig;
