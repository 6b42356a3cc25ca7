//! First-person column rendering and the top-down debug overlay.
//!
//! Output goes through the [`PixelSink`] trait so the same renderer can fill
//! a [`Frame`] in memory, a window surface, or a test buffer.

pub mod frame;
pub mod overlay;
pub mod projector;
pub mod textures;

pub use frame::Frame;
pub use overlay::draw_overhead;
pub use projector::{column_height, corrected_distance, render_view};
pub use textures::WallTextures;

use glam::UVec2;

/// Destination for rendered pixels.
pub trait PixelSink {
    /// Pixel dimensions of the sink.
    fn size(&self) -> UVec2;

    /// Write one RGBA pixel. Writes outside [`size`](Self::size) are ignored.
    fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]);
}

/// Which of the two wall faces a texel is read for.
///
/// Vertical grid faces use the lit texture and horizontal faces the shaded
/// one, a cheap directional-lighting proxy that keeps adjoining walls
/// visually separable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallShade {
    Lit,
    Shaded,
}

/// Source of wall texels.
pub trait TextureSource {
    /// Pixel dimensions of the textures. Must be nonzero on both axes.
    fn size(&self) -> UVec2;

    /// Color at `(u, v)` for the given face. Coordinates outside
    /// [`size`](Self::size) read the nearest edge texel.
    fn texel(&self, shade: WallShade, u: u32, v: u32) -> [u8; 4];
}
