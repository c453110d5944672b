//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `update` per frame, per-frame constants only (no wall-clock time)
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies beyond opaque handles

pub mod enemy;
pub mod entity;
pub mod input;
pub mod projectile;
pub mod state;
pub mod tick;

pub use enemy::{Enemy, EnemyDescriptor, EnemyKind, EnemyRoster, Motion};
pub use entity::{Entity, Rect};
pub use input::{ButtonMap, InputTracker};
pub use projectile::{Ballistics, BoundsCheck, Snowball};
pub use state::{GameEvent, GamePhase, Rules, Session, SessionTextures};
pub use tick::{FrameOutcome, tick};
