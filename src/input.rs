//! Input surface: the core polls boolean "is held" queries once per frame
//! and never talks to a windowing layer directly.

use crate::motion::{Drive, Mover, MovingBody, Turn};

/// Player actions a frontend can report as held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    ToggleOverlay,
}

/// Held-key queries, polled once per frame.
pub trait InputState {
    fn held(&self, action: Action) -> bool;
}

/// Convert the held movement actions into this step's impulses.
///
/// Impulses are single-step, so holding a key keeps the body moving only
/// because this runs every frame. When opposing actions are held together
/// the later one wins (right over left, backward over forward).
pub fn apply_input<I: InputState>(input: &I, mover: &Mover, body: &mut MovingBody) {
    if input.held(Action::TurnLeft) {
        mover.turn(body, Turn::Left);
    }
    if input.held(Action::TurnRight) {
        mover.turn(body, Turn::Right);
    }
    if input.held(Action::Forward) {
        mover.drive(body, Drive::Forward);
    }
    if input.held(Action::Backward) {
        mover.drive(body, Drive::Reverse);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use glam::Vec2;

    use super::*;
    use crate::types::Pose2;

    struct Held(HashSet<Action>);

    impl Held {
        fn of(actions: &[Action]) -> Self {
            Self(actions.iter().copied().collect())
        }
    }

    impl InputState for Held {
        fn held(&self, action: Action) -> bool {
            self.0.contains(&action)
        }
    }

    fn test_body() -> MovingBody {
        MovingBody::new(Pose2::new(Vec2::new(16.0, 16.0), 0.0), Vec2::splat(2.0))
    }

    #[test]
    fn held_forward_queues_a_drive_impulse() {
        let mover = Mover::default();
        let mut body = test_body();
        apply_input(&Held::of(&[Action::Forward]), &mover, &mut body);
        assert!(body.velocity.length() > 0.0);
        assert_eq!(body.angular, 0.0);
    }

    #[test]
    fn nothing_held_leaves_the_body_idle() {
        let mover = Mover::default();
        let mut body = test_body();
        apply_input(&Held::of(&[]), &mover, &mut body);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.angular, 0.0);
    }

    #[test]
    fn conflicting_turns_resolve_to_the_right() {
        let mover = Mover::default();
        let mut body = test_body();
        apply_input(
            &Held::of(&[Action::TurnLeft, Action::TurnRight]),
            &mover,
            &mut body,
        );
        assert_eq!(body.angular, mover.turn_speed);
    }

    #[test]
    fn overlay_toggle_is_not_a_movement() {
        let mover = Mover::default();
        let mut body = test_body();
        apply_input(&Held::of(&[Action::ToggleOverlay]), &mover, &mut body);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.angular, 0.0);
    }
}
