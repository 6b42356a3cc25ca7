use glam::UVec2;

use crate::render::PixelSink;

/// An owned RGBA8 pixel buffer matching the layout surface buffers expect,
/// so a finished frame can be copied out with a single slice copy.
#[derive(Debug, Clone)]
pub struct Frame {
    size: UVec2,
    data: Vec<u8>,
}

impl Frame {
    /// Opaque black frame of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        let mut frame = Self {
            size: UVec2::new(width, height),
            data: vec![0; (width as usize) * (height as usize) * 4],
        };
        frame.clear([0, 0, 0, 255]);
        frame
    }

    /// Fill the whole frame with one color.
    pub fn clear(&mut self, rgba: [u8; 4]) {
        for pixel in self.data.chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }

    /// Color at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.x || y >= self.size.y {
            return None;
        }
        let idx = (y as usize * self.size.x as usize + x as usize) * 4;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.data[idx..idx + 4]);
        Some(rgba)
    }

    /// Raw RGBA8 bytes in row-major order.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl PixelSink for Frame {
    fn size(&self) -> UVec2 {
        self.size
    }

    fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.size.x || y >= self.size.y {
            return;
        }
        let idx = (y as usize * self.size.x as usize + x as usize) * 4;
        self.data[idx..idx + 4].copy_from_slice(&rgba);
    }
}
