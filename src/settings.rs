//! Game settings and tuning
//!
//! Loaded once at startup; every session built from the same settings plays
//! identically for the same seed and input.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::platform::Key;
use crate::sim::enemy::{EnemyKind, Motion};

/// Per-subtype enemy configuration record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyConfig {
    pub kind: EnemyKind,
    /// Texture key handed to the asset provider
    pub texture: String,
    pub size: Vec2,
    /// Base scroll speed (pixels/frame, before the score multiplier)
    pub speed: f32,
    /// Base top-edge y of the spawn band
    pub spawn_y: f32,
    /// Spawn y is drawn from `spawn_y ± spawn_variance`
    pub spawn_variance: f32,
    pub motion: Motion,
    /// Relative pick weight
    #[serde(default = "default_weight")]
    pub weight: u32,
}

fn default_weight() -> u32 {
    1
}

impl EnemyConfig {
    /// Default roster
    pub fn defaults() -> Vec<Self> {
        vec![
            Self {
                kind: EnemyKind::Snowman,
                texture: "snowman.png".to_string(),
                size: Vec2::new(60.0, 80.0),
                speed: 2.0,
                spawn_y: 560.0,
                spawn_variance: 40.0,
                motion: Motion::Plain,
                weight: 1,
            },
            Self {
                kind: EnemyKind::Boulder,
                texture: "boulder.png".to_string(),
                size: Vec2::new(50.0, 50.0),
                speed: 3.0,
                spawn_y: 600.0,
                spawn_variance: 20.0,
                motion: Motion::Spin { rate: 1.5 },
                weight: 1,
            },
            Self {
                kind: EnemyKind::Bird,
                texture: "bird.png".to_string(),
                size: Vec2::new(56.0, 40.0),
                speed: 2.5,
                spawn_y: 200.0,
                spawn_variance: 100.0,
                motion: Motion::Bob {
                    frequency: 0.05,
                    amplitude: 2.0,
                },
                weight: 1,
            },
        ]
    }
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Geometry ===
    pub window_size: Vec2,
    /// Slingshot center
    pub anchor: Vec2,
    /// Horizontal distance from the anchor to each slingshot arm
    pub arm_offset: f32,
    pub snowball_size: Vec2,

    // === Physics (per-frame deltas) ===
    pub gravity: f32,
    pub launch_divisor: f32,
    pub max_drag: f32,
    pub preview_steps: usize,

    // === Rules ===
    pub start_health: i32,
    /// One spawn roll in N succeeds each frame
    pub spawn_one_in: u32,
    /// Score needed for each +1.0 of enemy speed multiplier
    pub score_speed_divisor: f32,
    pub confirm_key: Key,

    // === Process loop ===
    pub fps: u32,
    pub seed: u64,

    // === Assets ===
    pub background_texture: String,
    pub snowball_texture: String,
    pub health_texture: String,
    pub enemies: Vec<EnemyConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_size: Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            anchor: SLINGSHOT_ANCHOR,
            arm_offset: SLINGSHOT_ARM_OFFSET,
            snowball_size: Vec2::splat(SNOWBALL_SIZE),

            gravity: GRAVITY,
            launch_divisor: LAUNCH_DIVISOR,
            max_drag: MAX_DRAG,
            preview_steps: PREVIEW_STEPS,

            start_health: START_HEALTH,
            spawn_one_in: SPAWN_ONE_IN,
            score_speed_divisor: SCORE_SPEED_DIVISOR,
            confirm_key: Key::Enter,

            fps: FPS,
            seed: 0x5EED,

            background_texture: "background.png".to_string(),
            snowball_texture: "snowball.png".to_string(),
            health_texture: "heart.png".to_string(),
            enemies: EnemyConfig::defaults(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Bad settings file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Every texture key the session will ask the asset provider for
    pub fn texture_keys(&self) -> impl Iterator<Item = &str> {
        [
            self.background_texture.as_str(),
            self.snowball_texture.as_str(),
            self.health_texture.as_str(),
        ]
        .into_iter()
        .chain(self.enemies.iter().map(|e| e.texture.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_game_tuning() {
        let s = Settings::default();
        assert_eq!(s.anchor, Vec2::new(219.0, 364.0));
        assert_eq!(s.start_health, 5);
        assert_eq!(s.spawn_one_in, 101);
        assert_eq!(s.preview_steps, 15);
        assert_eq!(s.enemies.len(), 3);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{ "start_health": 3, "confirm_key": "Space" }"#).unwrap();
        assert_eq!(s.start_health, 3);
        assert_eq!(s.confirm_key, Key::Space);
        assert_eq!(s.gravity, GRAVITY);
        assert_eq!(s.enemies, EnemyConfig::defaults());
    }

    #[test]
    fn test_json_round_trip() {
        let s = Settings::default();
        let json = s.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let s = Settings::load(Path::new("/definitely/not/here.json"));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_texture_keys_cover_roster() {
        let s = Settings::default();
        let keys: Vec<_> = s.texture_keys().collect();
        assert!(keys.contains(&"snowball.png"));
        assert!(keys.contains(&"bird.png"));
        assert_eq!(keys.len(), 6);
    }
}
