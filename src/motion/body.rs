use glam::Vec2;

use crate::types::{DEFAULT_HIT_POINTS, Pose2};

/// A movable actor with a square world-space footprint.
///
/// `velocity` and `angular` are single-step impulses. Controllers write them,
/// [`Mover::integrate`](crate::motion::Mover::integrate) consumes them and
/// resets both to zero, so an actor only moves on steps where a command was
/// issued.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingBody {
    pub pose: Pose2,
    /// Half the footprint edge along each axis, in world units.
    pub half_extent: Vec2,
    /// Pending displacement for the current step, in world units.
    pub velocity: Vec2,
    /// Pending heading change for the current step, in degrees.
    pub angular: f32,
}

impl MovingBody {
    pub fn new(pose: Pose2, half_extent: Vec2) -> Self {
        Self {
            pose,
            half_extent,
            velocity: Vec2::ZERO,
            angular: 0.0,
        }
    }
}

/// Hit-point pool for a damageable actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    hit_points: i32,
}

impl Health {
    pub fn new(hit_points: i32) -> Self {
        Self { hit_points }
    }

    pub fn hit_points(&self) -> i32 {
        self.hit_points
    }

    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    /// Subtract `amount` hit points. Returns `true` on the blow that kills,
    /// and `false` both before and after it, so a caller can react to the
    /// death exactly once.
    pub fn apply_damage(&mut self, amount: i32) -> bool {
        let was_alive = self.is_alive();
        self.hit_points -= amount;
        was_alive && !self.is_alive()
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(DEFAULT_HIT_POINTS)
    }
}
