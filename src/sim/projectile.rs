//! Snowball trajectory
//!
//! The snowball is either docked at the slingshot (following drag input) or
//! flying under a constant per-frame gravity. The launch preview runs the
//! exact same integration step as real flight.

use glam::Vec2;

use super::entity::{Entity, Rect};
use crate::platform::TextureId;

/// Flight constants shared by real flight and the preview
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ballistics {
    /// Added to vertical velocity every frame
    pub gravity: f32,
    /// Launch velocity = pullback / divisor
    pub launch_divisor: f32,
    /// Maximum pullback distance from the anchor
    pub max_drag: f32,
}

impl Ballistics {
    /// One frame of flight: move, then accelerate
    #[inline]
    pub fn step(&self, pos: Vec2, vel: Vec2) -> (Vec2, Vec2) {
        (pos + vel, vel + Vec2::new(0.0, self.gravity))
    }

    /// Velocity for a release at `center`
    #[inline]
    pub fn launch_velocity(&self, anchor: Vec2, center: Vec2) -> Vec2 {
        (anchor - center) / self.launch_divisor
    }

    /// Docked center for a pointer at `mouse`, at most `max_drag` from the anchor
    pub fn drag_target(&self, anchor: Vec2, mouse: Vec2) -> Vec2 {
        let drag = mouse - anchor;
        let len = drag.length();
        if len > self.max_drag {
            anchor + drag * (self.max_drag / len)
        } else {
            anchor + drag
        }
    }

    /// Predicted centers for the next `steps` frames after a release at `center`
    pub fn preview(&self, anchor: Vec2, center: Vec2, steps: usize) -> Vec<Vec2> {
        let mut pos = center;
        let mut vel = self.launch_velocity(anchor, center);
        let mut path = Vec::with_capacity(steps);
        for _ in 0..steps {
            (pos, vel) = self.step(pos, vel);
            path.push(pos);
        }
        path
    }
}

/// Result of checking a flying snowball against the play area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsCheck {
    Inside,
    /// Left through a side or the bottom
    Exited,
    /// Crossed the top edge and was reflected
    Bounced,
}

/// The projectile
#[derive(Debug, Clone)]
pub struct Snowball {
    pub entity: Entity,
    pub vel: Vec2,
    /// Docked at the slingshot
    pub frozen: bool,
    /// Reflected off the top wall during the current flight
    pub bounced: bool,
}

impl Snowball {
    /// A docked snowball centered on `anchor`
    pub fn docked(texture: TextureId, size: Vec2, anchor: Vec2) -> Self {
        Self {
            entity: Entity::centered(texture, size, anchor),
            vel: Vec2::ZERO,
            frozen: true,
            bounced: false,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.entity.center()
    }

    pub fn rect(&self) -> Rect {
        self.entity.rect()
    }

    pub fn is_flying(&self) -> bool {
        !self.frozen
    }

    /// Follow the drag pointer while docked
    pub fn drag_to(&mut self, ballistics: &Ballistics, anchor: Vec2, mouse: Vec2) {
        debug_assert!(self.frozen);
        self.entity.set_center(ballistics.drag_target(anchor, mouse));
    }

    /// Leave the slingshot; returns the launch velocity
    pub fn launch(&mut self, ballistics: &Ballistics, anchor: Vec2) -> Vec2 {
        self.vel = ballistics.launch_velocity(anchor, self.center());
        self.frozen = false;
        self.bounced = false;
        self.vel
    }

    /// Return to the slingshot
    pub fn dock(&mut self, anchor: Vec2) {
        self.entity.set_center(anchor);
        self.vel = Vec2::ZERO;
        self.frozen = true;
    }

    /// Advance one frame of flight (no-op while docked)
    pub fn update(&mut self, ballistics: &Ballistics) {
        if self.frozen {
            return;
        }
        let (center, vel) = ballistics.step(self.center(), self.vel);
        self.entity.set_center(center);
        self.vel = vel;
    }

    /// Apply the play-area boundary policy after a flight step
    pub fn check_bounds(&mut self, area: &Rect) -> BoundsCheck {
        if self.frozen {
            return BoundsCheck::Inside;
        }
        let rect = self.rect();
        if rect.right() < area.left() || rect.left() > area.right() || rect.top() > area.bottom() {
            BoundsCheck::Exited
        } else if rect.top() < area.top() {
            self.entity.set_pos(Vec2::new(rect.left(), area.top()));
            self.vel.y = -self.vel.y;
            self.bounced = true;
            BoundsCheck::Bounced
        } else {
            BoundsCheck::Inside
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ANCHOR: Vec2 = Vec2::new(219.0, 364.0);

    fn ballistics() -> Ballistics {
        Ballistics {
            gravity: 0.15,
            launch_divisor: 5.0,
            max_drag: 100.0,
        }
    }

    fn snowball() -> Snowball {
        Snowball::docked(TextureId(1), Vec2::splat(28.0), ANCHOR)
    }

    fn area() -> Rect {
        Rect::from_size(Vec2::new(1280.0, 720.0))
    }

    #[test]
    fn test_drag_at_clamp_then_release() {
        let b = ballistics();
        let mut ball = snowball();
        ball.drag_to(&b, ANCHOR, Vec2::new(219.0, 464.0));
        assert_eq!(ball.center(), Vec2::new(219.0, 464.0));

        let vel = ball.launch(&b, ANCHOR);
        assert_eq!(vel, Vec2::new(0.0, -20.0));
        assert!(ball.is_flying());
        assert!(!ball.bounced);
    }

    #[test]
    fn test_drag_beyond_radius_is_clamped() {
        let b = ballistics();
        let mut ball = snowball();
        ball.drag_to(&b, ANCHOR, ANCHOR + Vec2::new(300.0, 400.0));
        let drag = ball.center() - ANCHOR;
        assert!((drag.length() - 100.0).abs() < 1e-3);
        assert!((drag.normalize() - Vec2::new(0.6, 0.8)).length() < 1e-5);
    }

    #[test]
    fn test_drag_onto_anchor() {
        let b = ballistics();
        let mut ball = snowball();
        ball.drag_to(&b, ANCHOR, ANCHOR);
        assert_eq!(ball.center(), ANCHOR);
        assert_eq!(ball.launch(&b, ANCHOR), Vec2::ZERO);
    }

    #[test]
    fn test_flight_step_moves_then_accelerates() {
        let b = ballistics();
        let mut ball = snowball();
        ball.frozen = false;
        ball.vel = Vec2::new(3.0, -2.0);
        ball.update(&b);
        assert_eq!(ball.center(), ANCHOR + Vec2::new(3.0, -2.0));
        assert_eq!(ball.vel, Vec2::new(3.0, -2.0 + 0.15));
    }

    #[test]
    fn test_docked_does_not_fall() {
        let b = ballistics();
        let mut ball = snowball();
        ball.update(&b);
        assert_eq!(ball.center(), ANCHOR);
    }

    #[test]
    fn test_preview_matches_real_flight() {
        let b = ballistics();
        let mut ball = snowball();
        ball.drag_to(&b, ANCHOR, ANCHOR + Vec2::new(-70.0, 50.0));
        let path = b.preview(ANCHOR, ball.center(), 15);
        assert_eq!(path.len(), 15);

        ball.launch(&b, ANCHOR);
        for predicted in path {
            ball.update(&b);
            assert_eq!(ball.center(), predicted);
        }
    }

    #[test]
    fn test_bounce_off_top() {
        let mut ball = snowball();
        ball.frozen = false;
        ball.entity.set_pos(Vec2::new(100.0, -5.0));
        ball.vel = Vec2::new(4.0, -3.0);

        assert_eq!(ball.check_bounds(&area()), BoundsCheck::Bounced);
        assert_eq!(ball.vel, Vec2::new(4.0, 3.0));
        assert_eq!(ball.rect().top(), 0.0);
        assert_eq!(ball.rect().left(), 100.0);
        assert!(ball.bounced);
        assert!(ball.is_flying());
    }

    #[test]
    fn test_exit_sides_and_bottom() {
        let area = area();
        for pos in [
            Vec2::new(-29.0, 300.0),
            Vec2::new(1281.0, 300.0),
            Vec2::new(500.0, 721.0),
        ] {
            let mut ball = snowball();
            ball.frozen = false;
            ball.entity.set_pos(pos);
            assert_eq!(ball.check_bounds(&area), BoundsCheck::Exited, "{pos}");
        }
    }

    #[test]
    fn test_partially_visible_is_inside() {
        let mut ball = snowball();
        ball.frozen = false;
        ball.entity.set_pos(Vec2::new(-20.0, 700.0));
        assert_eq!(ball.check_bounds(&area()), BoundsCheck::Inside);
    }

    #[test]
    fn test_dock_resets() {
        let mut ball = snowball();
        ball.frozen = false;
        ball.vel = Vec2::new(1.0, 1.0);
        ball.entity.set_center(Vec2::new(900.0, 100.0));
        ball.dock(ANCHOR);
        assert!(ball.frozen);
        assert_eq!(ball.center(), ANCHOR);
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_drag_never_exceeds_radius(mx in -2000.0f32..2000.0, my in -2000.0f32..2000.0) {
            let b = ballistics();
            let target = b.drag_target(ANCHOR, Vec2::new(mx, my));
            prop_assert!((target - ANCHOR).length() <= 100.0 + 1e-3);
        }

        #[test]
        fn prop_launch_velocity_law(cx in 0.0f32..1280.0, cy in 0.0f32..720.0) {
            let b = ballistics();
            let mut ball = snowball();
            let c = Vec2::new(cx, cy);
            ball.entity.set_center(c);
            prop_assert_eq!(ball.launch(&b, ANCHOR), (ANCHOR - c) / 5.0);
        }

        #[test]
        fn prop_bounce_flips_only_vertical(vx in -30.0f32..30.0, vy in -30.0f32..-0.1, x in 0.0f32..1200.0) {
            let mut ball = snowball();
            ball.frozen = false;
            ball.entity.set_pos(Vec2::new(x, -1.0));
            ball.vel = Vec2::new(vx, vy);
            prop_assert_eq!(ball.check_bounds(&area()), BoundsCheck::Bounced);
            prop_assert_eq!(ball.vel, Vec2::new(vx, -vy));
            prop_assert!(ball.bounced);
        }
    }
}
