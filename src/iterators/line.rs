use glam::{IVec2, UVec2, Vec2};

/// Walks every pixel a line segment crosses, in order from `from` to `to`.
///
/// Uses the same boundary-crossing scheme as the ray caster, run in pixel
/// space with unit cells, so the walk covers each crossed pixel instead of
/// skipping corners. The walk ends early once it steps outside `bounds`.
pub struct PixelLine {
    max_t: f32,
    /// Normalised step direction along each axis.
    step: IVec2,
    t_max: Vec2,
    /// Distance to the next pixel boundary along each axis.
    t_delta: Vec2,
    cell: IVec2,
    emit_start: bool,
    bounds: UVec2,
}

impl PixelLine {
    pub fn new(from: Vec2, to: Vec2, bounds: UVec2) -> Self {
        let delta = to - from;
        let max_t = delta.length();
        let dir = if max_t == 0.0 { Vec2::ZERO } else { delta / max_t };

        // We use ivecs internally as the steps can be negative.
        let cell = from.floor().as_ivec2();
        let step = IVec2::new(dir.x.signum() as i32, dir.y.signum() as i32);
        let (t_delta_x, t_max_x) = axis_params(from.x, dir.x);
        let (t_delta_y, t_max_y) = axis_params(from.y, dir.y);

        Self {
            max_t,
            step,
            t_max: Vec2::new(t_max_x, t_max_y),
            t_delta: Vec2::new(t_delta_x, t_delta_y),
            cell,
            emit_start: true,
            bounds,
        }
    }
}

impl Iterator for PixelLine {
    type Item = UVec2;

    fn next(&mut self) -> Option<UVec2> {
        if self.emit_start {
            self.emit_start = false;
            return Some(self.cell.as_uvec2());
        }

        let t;
        if self.t_max.x < self.t_max.y {
            t = self.t_max.x;
            self.t_max.x += self.t_delta.x;
            self.cell.x += self.step.x;
        } else {
            t = self.t_max.y;
            self.t_max.y += self.t_delta.y;
            self.cell.y += self.step.y;
        }

        if t > self.max_t {
            return None;
        }

        // equivalent to (x >= 0 && x < width) for signed x
        if (self.cell.x as u32) >= self.bounds.x || (self.cell.y as u32) >= self.bounds.y {
            return None;
        }

        Some(self.cell.as_uvec2())
    }
}

fn axis_params(start: f32, dir: f32) -> (f32, f32) {
    if dir == 0.0 {
        return (f32::INFINITY, f32::INFINITY);
    }

    let offset = start.rem_euclid(1.0);
    let dist_to_boundary = if dir > 0.0 { 1.0 - offset } else { offset };

    let t_delta = (1.0 / dir).abs();
    let t_max = dist_to_boundary * t_delta;
    (t_delta, t_max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: UVec2 = UVec2::new(8, 8);

    #[test]
    fn horizontal_run_emits_each_pixel_once() {
        let pixels: Vec<UVec2> =
            PixelLine::new(Vec2::new(0.5, 0.5), Vec2::new(4.5, 0.5), BOUNDS).collect();
        let expected: Vec<UVec2> = (0..5).map(|x| UVec2::new(x, 0)).collect();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn reversed_run_walks_backwards() {
        let pixels: Vec<UVec2> =
            PixelLine::new(Vec2::new(3.5, 0.5), Vec2::new(0.5, 0.5), BOUNDS).collect();
        let expected: Vec<UVec2> = (0..4).rev().map(|x| UVec2::new(x, 0)).collect();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn diagonal_walk_is_four_connected() {
        let pixels: Vec<UVec2> =
            PixelLine::new(Vec2::new(0.5, 0.5), Vec2::new(2.5, 2.5), BOUNDS).collect();
        assert_eq!(pixels.first(), Some(&UVec2::new(0, 0)));
        assert_eq!(pixels.last(), Some(&UVec2::new(2, 2)));
        for pair in pixels.windows(2) {
            let d = pair[1].as_ivec2() - pair[0].as_ivec2();
            assert_eq!(d.x.abs() + d.y.abs(), 1, "jumped from {} to {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn walk_stops_at_the_bounds() {
        let pixels: Vec<UVec2> =
            PixelLine::new(Vec2::new(6.5, 0.5), Vec2::new(12.5, 0.5), BOUNDS).collect();
        assert_eq!(pixels, vec![UVec2::new(6, 0), UVec2::new(7, 0)]);
    }

    #[test]
    fn degenerate_segment_is_a_single_pixel() {
        let pixels: Vec<UVec2> =
            PixelLine::new(Vec2::new(2.5, 2.5), Vec2::new(2.5, 2.5), BOUNDS).collect();
        assert_eq!(pixels, vec![UVec2::new(2, 2)]);
    }
}
