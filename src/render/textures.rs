use std::path::Path;

use glam::UVec2;
use image::{Rgba, RgbaImage};

use crate::render::{TextureSource, WallShade};
use crate::types::CasterError;

const BRICK: Rgba<u8> = Rgba([158, 66, 52, 255]);
const MORTAR: Rgba<u8> = Rgba([186, 177, 162, 255]);
const COURSES: u32 = 8;
const BRICKS_PER_COURSE: u32 = 4;

/// The lit/shaded wall texture pair sampled by the column renderer.
///
/// The strip renderer mirrors each column about the screen midline, so the
/// textures read as vertically symmetric regardless of their actual content.
#[derive(Debug, Clone)]
pub struct WallTextures {
    lit: RgbaImage,
    shaded: RgbaImage,
}

impl WallTextures {
    /// Built-in running-bond brick pattern, `size` pixels square.
    pub fn procedural(size: u32) -> Self {
        let lit = brick(size.max(1));
        let shaded = darken(&lit);
        Self { lit, shaded }
    }

    /// Texture pair from two images of equal, nonzero dimensions.
    pub fn from_images(lit: RgbaImage, shaded: RgbaImage) -> Result<Self, CasterError> {
        if lit.width() == 0 || lit.height() == 0 {
            return Err(CasterError::InvalidConfig(
                "wall texture has a zero dimension".to_string(),
            ));
        }
        if lit.dimensions() != shaded.dimensions() {
            return Err(CasterError::InvalidConfig(format!(
                "wall texture dimensions differ: {:?} vs {:?}",
                lit.dimensions(),
                shaded.dimensions()
            )));
        }
        Ok(Self { lit, shaded })
    }

    /// Load the pair from image files.
    pub fn from_files<P: AsRef<Path>>(lit: P, shaded: P) -> Result<Self, CasterError> {
        let lit = image::open(lit)?.to_rgba8();
        let shaded = image::open(shaded)?.to_rgba8();
        Self::from_images(lit, shaded)
    }
}

impl Default for WallTextures {
    fn default() -> Self {
        Self::procedural(64)
    }
}

impl TextureSource for WallTextures {
    fn size(&self) -> UVec2 {
        UVec2::new(self.lit.width(), self.lit.height())
    }

    fn texel(&self, shade: WallShade, u: u32, v: u32) -> [u8; 4] {
        let image = match shade {
            WallShade::Lit => &self.lit,
            WallShade::Shaded => &self.shaded,
        };
        let u = u.min(image.width() - 1);
        let v = v.min(image.height() - 1);
        image.get_pixel(u, v).0
    }
}

fn brick(size: u32) -> RgbaImage {
    let course_height = (size / COURSES).max(1);
    let brick_width = (size / BRICKS_PER_COURSE).max(1);

    RgbaImage::from_fn(size, size, |x, y| {
        let course = y / course_height;
        // Odd courses shift by half a brick for a running bond.
        let shift = (course % 2) * brick_width / 2;
        let on_bed_joint = y % course_height == 0;
        let on_head_joint = (x + shift) % brick_width == 0;
        if on_bed_joint || on_head_joint {
            MORTAR
        } else {
            BRICK
        }
    })
}

fn darken(image: &RgbaImage) -> RgbaImage {
    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let p = image.get_pixel(x, y);
        Rgba([p[0] / 2, p[1] / 2, p[2] / 2, p[3]])
    })
}
