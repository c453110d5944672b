//! Session state
//!
//! Everything a running game owns. Geometry and the enemy roster are fixed at
//! construction; the rest resets on restart.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::enemy::{Enemy, EnemyKind, EnemyRoster};
use super::entity::Rect;
use super::input::InputTracker;
use super::projectile::{Ballistics, Snowball};
use crate::platform::{AssetProvider, Key, TextureId};
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    /// Waiting for the confirm key
    GameOver,
}

/// Something that happened during the last frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Launched { velocity: Vec2 },
    Bounced,
    EnemySpawned { id: u32, kind: EnemyKind },
    EnemyHit { id: u32, kind: EnemyKind, points: u32 },
    EnemyEscaped { id: u32, kind: EnemyKind },
    /// `frames` counts the frames played this round
    GameOver { score: u32, frames: u64 },
    Restarted,
}

/// Static textures resolved at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionTextures {
    pub background: TextureId,
    pub snowball: TextureId,
    pub health: TextureId,
}

/// Session rules that do not change between restarts
#[derive(Debug, Clone, PartialEq)]
pub struct Rules {
    pub start_health: i32,
    /// One in N frames spawns an enemy (0 disables spawning)
    pub spawn_one_in: u32,
    pub score_speed_divisor: f32,
    pub preview_steps: usize,
    pub confirm_key: Key,
}

/// A complete game session
#[derive(Debug, Clone)]
pub struct Session {
    // === Fixed geometry ===
    /// Play area (window bounds)
    pub area: Rect,
    /// Slingshot center
    pub anchor: Vec2,
    /// Left and right slingshot arm tips
    pub arms: [Vec2; 2],
    pub ballistics: Ballistics,
    pub rules: Rules,
    pub roster: EnemyRoster,
    pub textures: SessionTextures,
    snowball_size: Vec2,

    // === Per-session state ===
    pub input: InputTracker,
    pub snowball: Snowball,
    /// Active enemies (order irrelevant)
    pub enemies: Vec<Enemy>,
    /// Predicted snowball centers while dragging
    pub preview: Vec<Vec2>,
    pub health: i32,
    pub score: u32,
    pub phase: GamePhase,
    /// Frames simulated while playing
    pub frame: u64,
    /// Events from the last `update`
    pub events: Vec<GameEvent>,
    pub rng: Pcg32,
    next_id: u32,
}

impl Session {
    pub fn new(settings: &Settings, assets: &impl AssetProvider) -> Self {
        debug_assert!(
            settings.window_size.x > 0.0 && settings.window_size.y > 0.0,
            "degenerate window"
        );
        debug_assert!(!settings.enemies.is_empty(), "empty enemy roster");
        debug_assert!(
            settings.enemies.iter().all(|e| e.spawn_variance >= 0.0),
            "negative spawn variance"
        );

        let textures = SessionTextures {
            background: assets.texture(&settings.background_texture),
            snowball: assets.texture(&settings.snowball_texture),
            health: assets.texture(&settings.health_texture),
        };
        let anchor = settings.anchor;
        let arm = Vec2::new(settings.arm_offset, 0.0);

        log::info!("New session (seed {})", settings.seed);

        Self {
            area: Rect::from_size(settings.window_size),
            anchor,
            arms: [anchor - arm, anchor + arm],
            ballistics: Ballistics {
                gravity: settings.gravity,
                launch_divisor: settings.launch_divisor,
                max_drag: settings.max_drag,
            },
            rules: Rules {
                start_health: settings.start_health,
                spawn_one_in: settings.spawn_one_in,
                score_speed_divisor: settings.score_speed_divisor,
                preview_steps: settings.preview_steps,
                confirm_key: settings.confirm_key,
            },
            roster: EnemyRoster::from_configs(&settings.enemies, assets),
            textures,
            snowball_size: settings.snowball_size,

            input: InputTracker::new(),
            snowball: Snowball::docked(textures.snowball, settings.snowball_size, anchor),
            enemies: Vec::new(),
            preview: Vec::new(),
            health: settings.start_health,
            score: 0,
            phase: GamePhase::Playing,
            frame: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(settings.seed),
            next_id: 1,
        }
    }

    /// Reset to a fresh session, keeping geometry, roster and the RNG stream
    pub fn restart(&mut self) {
        self.input = InputTracker::new();
        self.snowball = Snowball::docked(self.textures.snowball, self.snowball_size, self.anchor);
        self.enemies.clear();
        self.preview.clear();
        self.health = self.rules.start_health;
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.frame = 0;
        self.events.clear();
        self.next_id = 1;
        log::info!("Session restarted");
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Speed multiplier for an enemy spawned now
    pub fn spawn_multiplier(&self) -> f32 {
        1.0 + self.score as f32 / self.rules.score_speed_divisor
    }

    /// End of each slingshot band: the snowball while docked, else the anchor
    pub fn band_target(&self) -> Vec2 {
        if self.snowball.frozen {
            self.snowball.center()
        } else {
            self.anchor
        }
    }
}
