//! Actor motion: point-mass bodies with a square footprint, single-step
//! impulses, and wall pushback against a [`TileMap`](crate::grid::TileMap).

pub mod body;
pub mod collision;
pub mod mover;

pub use body::{Health, MovingBody};
pub use collision::resolve;
pub use mover::{Drive, Mover, Turn};
