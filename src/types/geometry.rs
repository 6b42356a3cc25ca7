//! Spatial types shared by the motion and rendering APIs.

use glam::Vec2;

/// Wrap an angle in degrees to the canonical `[0, 360)` range.
#[inline]
pub fn wrap_degrees(deg: f32) -> f32 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 when deg is a tiny negative value.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit direction vector for a heading in degrees.
///
/// Heading 0° points along +x (east). 90° points along +y, which is south on
/// screen because y grows downward.
#[inline]
pub fn heading_vector(heading_deg: f32) -> Vec2 {
    let rad = heading_deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Viewer/actor pose in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose2 {
    pub position: Vec2,
    /// Heading in degrees, wrapped to `[0, 360)` after every mutation.
    pub heading: f32,
}

impl Pose2 {
    pub fn new(position: Vec2, heading_deg: f32) -> Self {
        Self {
            position,
            heading: wrap_degrees(heading_deg),
        }
    }

    /// Unit vector the pose is facing along.
    #[inline]
    pub fn forward(&self) -> Vec2 {
        heading_vector(self.heading)
    }
}

impl Default for Pose2 {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn wrap_covers_the_seam() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(725.0), 5.0);
        let wrapped = wrap_degrees(-1e-6);
        assert!((0.0..360.0).contains(&wrapped));
    }

    #[test]
    fn heading_axes() {
        assert_relative_eq!(heading_vector(0.0).x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(heading_vector(0.0).y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(heading_vector(90.0).y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(heading_vector(180.0).x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(heading_vector(270.0).y, -1.0, epsilon = 1e-6);
    }
}
