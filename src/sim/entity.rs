//! Movable entity geometry
//!
//! Positioned, sized, optionally rotated objects. Geometry is stored
//! center-anchored so that `set_center` is exact; the top-left position is
//! derived from it.

use glam::Vec2;

use crate::platform::TextureId;
use crate::{rotated_bounds, wrap_degrees};

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Rectangle covering the origin to `size`
    pub fn from_size(size: Vec2) -> Self {
        Self::new(Vec2::ZERO, size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Base visual object shared by the snowball and enemies
#[derive(Debug, Clone)]
pub struct Entity {
    pub texture: TextureId,
    center: Vec2,
    /// Unrotated size
    base_size: Vec2,
    /// Bounding size after rotation
    size: Vec2,
    angle: f32,
    pub visible: bool,
    removal_requested: bool,
}

impl Entity {
    /// Create an entity whose top-left corner sits at `pos`
    pub fn new(texture: TextureId, size: Vec2, pos: Vec2) -> Self {
        Self {
            texture,
            center: pos + size / 2.0,
            base_size: size,
            size,
            angle: 0.0,
            visible: true,
            removal_requested: false,
        }
    }

    /// Create an entity centered on `center`
    pub fn centered(texture: TextureId, size: Vec2, center: Vec2) -> Self {
        let mut entity = Self::new(texture, size, Vec2::ZERO);
        entity.set_center(center);
        entity
    }

    /// Top-left position
    pub fn pos(&self) -> Vec2 {
        self.center - self.size / 2.0
    }

    pub fn set_pos(&mut self, pos: Vec2) {
        self.center = pos + self.size / 2.0;
    }

    /// Move by `delta` without touching size or angle
    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn base_size(&self) -> Vec2 {
        self.base_size
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos(), self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
        debug_assert_eq!(self.center(), center);
    }

    /// Rotation in degrees, [0, 360)
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Rotate to an absolute angle, keeping the center fixed
    pub fn set_angle(&mut self, degrees: f32) {
        self.angle = wrap_degrees(degrees);
        self.size = rotated_bounds(self.base_size, self.angle);
    }

    /// Point the entity's +y axis at `point`
    pub fn angle_towards(&mut self, point: Vec2) {
        let dir = point - self.center;
        if dir == Vec2::ZERO {
            return;
        }
        // Signed angle from `dir` to +y, counter-clockwise on screen
        let degrees = dir.angle_to(Vec2::Y).to_degrees();
        self.set_angle(degrees);
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Ask the owning collection to drop this entity.
    ///
    /// Returns `true` only for the first request.
    pub fn request_removal(&mut self) -> bool {
        !std::mem::replace(&mut self.removal_requested, true)
    }

    pub fn removal_requested(&self) -> bool {
        self.removal_requested
    }
}
