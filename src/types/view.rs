//! First-person view configuration.

use crate::types::{CasterError, DEFAULT_MAX_CAST_DISTANCE};

/// Projection settings for one rendered view.
///
/// `height_scale` and `distance_scale` are tuned display constants with no
/// geometric derivation; override them rather than computing "corrected"
/// values from screen dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Field-of-view arc in degrees.
    pub fov: f32,
    /// Number of rays cast per frame, conventionally one per pixel column.
    pub rays: u32,
    /// Furthest a ray travels before reporting a miss (world units).
    pub max_cast_distance: f32,
    /// Multiplier applied to `screen_height / corrected_distance`.
    pub height_scale: f32,
    /// Multiplier applied to the fisheye-corrected distance.
    pub distance_scale: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::for_screen(256, 240)
    }
}

impl ViewConfig {
    /// Config for a screen size, casting one ray per pixel column.
    pub fn for_screen(width: u32, height: u32) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            fov: 90.0,
            rays: width,
            max_cast_distance: DEFAULT_MAX_CAST_DISTANCE,
            height_scale: 4.0,
            distance_scale: 0.5,
        }
    }

    /// Angular spacing between adjacent rays in degrees.
    #[inline]
    pub fn ray_step(&self) -> f32 {
        self.fov / self.rays as f32
    }

    /// Fail fast on configurations the frame loop cannot run with.
    pub fn validate(&self) -> Result<(), CasterError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(CasterError::InvalidConfig(format!(
                "screen must be at least 1x1, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.rays == 0 {
            return Err(CasterError::InvalidConfig(
                "ray count must be at least 1".to_string(),
            ));
        }
        if !(self.fov > 0.0 && self.fov <= 360.0) {
            return Err(CasterError::InvalidConfig(format!(
                "fov must be in (0, 360], got {}",
                self.fov
            )));
        }
        if !(self.max_cast_distance.is_finite() && self.max_cast_distance > 0.0) {
            return Err(CasterError::InvalidConfig(format!(
                "max cast distance must be a positive, finite number, got {}",
                self.max_cast_distance
            )));
        }
        Ok(())
    }
}
