//! Snowball Sling - a slingshot arcade game
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (input edges, trajectory, enemies, session)
//! - `renderer`: Draw-order contract for the external renderer
//! - `audio`: Frame events mapped to sound handles
//! - `platform`: Input events, asset handles, frame pacing
//! - `settings`: Data-driven game tuning

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{EnemyConfig, Settings};
pub use sim::{FrameOutcome, Session};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Target frame rate. Every physics constant below is a per-frame delta.
    pub const FPS: u32 = 60;

    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 1280.0;
    pub const WINDOW_HEIGHT: f32 = 720.0;

    /// Slingshot geometry
    pub const SLINGSHOT_ANCHOR: Vec2 = Vec2::new(219.0, 364.0);
    pub const SLINGSHOT_ARM_OFFSET: f32 = 24.0;
    pub const BAND_WIDTH: f32 = 4.0;

    /// Snowball defaults
    pub const SNOWBALL_SIZE: f32 = 28.0;
    /// Downward acceleration (pixels/frame²)
    pub const GRAVITY: f32 = 0.15;
    /// Launch velocity = pullback / LAUNCH_DIVISOR
    pub const LAUNCH_DIVISOR: f32 = 5.0;
    /// Maximum pullback distance from the anchor
    pub const MAX_DRAG: f32 = 100.0;
    /// Frames simulated for the trajectory preview
    pub const PREVIEW_STEPS: usize = 15;

    /// Session rules
    pub const START_HEALTH: i32 = 5;
    pub const SPAWN_ONE_IN: u32 = 101;
    pub const SCORE_SPEED_DIVISOR: f32 = 100.0;
    pub const POINTS_DIRECT: u32 = 1;
    pub const POINTS_BOUNCED: u32 = 2;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Axis-aligned bounding size of a `size` box rotated by `degrees`
#[inline]
pub fn rotated_bounds(size: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    Vec2::new(size.x * cos + size.y * sin, size.x * sin + size.y * cos)
}
