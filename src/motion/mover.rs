use glam::Vec2;

use crate::grid::TileMap;
use crate::motion::MovingBody;
use crate::motion::collision::resolve;
use crate::types::{DEFAULT_MOVE_SPEED, DEFAULT_TURN_SPEED, wrap_degrees};

/// Direction of a turn command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Counter-clockwise on screen (decreasing heading).
    Left,
    /// Clockwise on screen (increasing heading).
    Right,
}

/// Direction of a drive command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drive {
    Forward,
    Reverse,
}

/// Converts commands into per-step impulses and integrates them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mover {
    /// World units travelled per drive step.
    pub speed: f32,
    /// Degrees turned per turn step.
    pub turn_speed: f32,
}

impl Mover {
    pub fn new(speed: f32, turn_speed: f32) -> Self {
        Self { speed, turn_speed }
    }

    /// Queue a heading change for the next [`integrate`](Self::integrate).
    pub fn turn(&self, body: &mut MovingBody, direction: Turn) {
        body.angular = match direction {
            Turn::Left => -self.turn_speed,
            Turn::Right => self.turn_speed,
        };
    }

    /// Queue a displacement along the body's current heading.
    pub fn drive(&self, body: &mut MovingBody, direction: Drive) {
        let sign = match direction {
            Drive::Forward => 1.0,
            Drive::Reverse => -1.0,
        };
        body.velocity = body.pose.forward() * (self.speed * sign);
    }

    /// Apply the pending impulses and reset them.
    ///
    /// With a map the displacement first runs through wall pushback; without
    /// one it is applied verbatim. The heading is wrapped back into
    /// `[0, 360)` after the angular impulse.
    pub fn integrate(&self, body: &mut MovingBody, map: Option<&TileMap>) {
        let delta = body.velocity;
        body.pose.position = match map {
            Some(map) => resolve(map, body.pose.position, body.half_extent, delta).0,
            None => body.pose.position + delta,
        };
        body.pose.heading = wrap_degrees(body.pose.heading + body.angular);
        body.velocity = Vec2::ZERO;
        body.angular = 0.0;
    }
}

impl Default for Mover {
    fn default() -> Self {
        Self::new(DEFAULT_MOVE_SPEED, DEFAULT_TURN_SPEED)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::types::{MapInfo, Pose2};

    fn body_at(x: f32, y: f32, heading: f32) -> MovingBody {
        MovingBody::new(Pose2::new(Vec2::new(x, y), heading), Vec2::splat(2.0))
    }

    #[test]
    fn forward_drive_moves_along_the_heading() {
        let mover = Mover::new(2.0, 4.0);
        let mut body = body_at(16.0, 16.0, 0.0);
        mover.drive(&mut body, Drive::Forward);
        mover.integrate(&mut body, None);
        assert_relative_eq!(body.pose.position.x, 18.0, epsilon = 1e-5);
        assert_relative_eq!(body.pose.position.y, 16.0, epsilon = 1e-5);
    }

    #[test]
    fn reverse_drive_backs_away_from_the_heading() {
        let mover = Mover::default();
        let mut body = body_at(16.0, 16.0, 90.0);
        mover.drive(&mut body, Drive::Reverse);
        mover.integrate(&mut body, None);
        assert_relative_eq!(body.pose.position.y, 16.0 - mover.speed, epsilon = 1e-5);
        assert_relative_eq!(body.pose.position.x, 16.0, epsilon = 1e-5);
    }

    #[test]
    fn turning_wraps_across_the_seam() {
        let mover = Mover::new(2.0, 4.0);
        let mut body = body_at(16.0, 16.0, 358.0);
        mover.turn(&mut body, Turn::Right);
        mover.integrate(&mut body, None);
        assert_relative_eq!(body.pose.heading, 2.0, epsilon = 1e-4);

        mover.turn(&mut body, Turn::Left);
        mover.integrate(&mut body, None);
        assert_relative_eq!(body.pose.heading, 358.0, epsilon = 1e-4);
    }

    #[test]
    fn impulses_only_last_one_step() {
        let mover = Mover::default();
        let mut body = body_at(16.0, 16.0, 0.0);
        mover.drive(&mut body, Drive::Forward);
        mover.turn(&mut body, Turn::Right);
        mover.integrate(&mut body, None);
        let after_first = body.pose;

        // No new commands: a second integrate must not move the body.
        mover.integrate(&mut body, None);
        assert_eq!(body.pose, after_first);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.angular, 0.0);
    }

    #[test]
    fn integrate_with_a_map_stops_at_walls() {
        let map = TileMap::bordered(MapInfo::square(4, 8.0)).unwrap();
        let mover = Mover::new(12.0, 4.0);
        let mut body = body_at(12.0, 12.0, 0.0);
        mover.drive(&mut body, Drive::Forward);
        mover.integrate(&mut body, Some(&map));
        assert_relative_eq!(body.pose.position.x, 12.0, epsilon = 1e-5);
        assert_relative_eq!(body.pose.position.y, 12.0, epsilon = 1e-5);
    }
}
