//! Enemy subtypes and per-frame motion
//!
//! Subtypes are plain data: an immutable descriptor table built at session
//! construction, indexed by `EnemyKind`. Extra motion is a tagged variant
//! applied after the shared horizontal scroll.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::platform::{AssetProvider, TextureId};
use crate::settings::EnemyConfig;

/// Enemy subtype tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Snowman,
    Boulder,
    Bird,
}

/// Extra motion applied after the base scroll
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Motion {
    #[default]
    Plain,
    /// Absolute angle = (-x * rate) mod 360
    Spin { rate: f32 },
    /// y += sin(frequency * x) * amplitude, every frame
    Bob { frequency: f32, amplitude: f32 },
}

impl Motion {
    pub fn apply(&self, entity: &mut Entity) {
        match *self {
            Motion::Plain => {}
            Motion::Spin { rate } => {
                entity.set_angle(-entity.pos().x * rate);
            }
            Motion::Bob {
                frequency,
                amplitude,
            } => {
                let dy = (frequency * entity.pos().x).sin() * amplitude;
                entity.translate(Vec2::new(0.0, dy));
            }
        }
    }
}

/// Immutable subtype description
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyDescriptor {
    pub kind: EnemyKind,
    pub texture: TextureId,
    pub size: Vec2,
    pub speed: f32,
    pub spawn_y: f32,
    pub spawn_variance: f32,
    pub motion: Motion,
    pub weight: u32,
}

impl EnemyDescriptor {
    pub fn from_config(config: &EnemyConfig, assets: &impl AssetProvider) -> Self {
        Self {
            kind: config.kind,
            texture: assets.texture(&config.texture),
            size: config.size,
            speed: config.speed,
            spawn_y: config.spawn_y,
            spawn_variance: config.spawn_variance,
            motion: config.motion,
            weight: config.weight,
        }
    }
}

/// Registered subtypes available for spawning
#[derive(Debug, Clone, Default)]
pub struct EnemyRoster {
    descriptors: Vec<EnemyDescriptor>,
    total_weight: u32,
}

impl EnemyRoster {
    pub fn new(descriptors: Vec<EnemyDescriptor>) -> Self {
        let total_weight = descriptors.iter().map(|d| d.weight).sum();
        Self {
            descriptors,
            total_weight,
        }
    }

    pub fn from_configs(configs: &[EnemyConfig], assets: &impl AssetProvider) -> Self {
        Self::new(
            configs
                .iter()
                .map(|c| EnemyDescriptor::from_config(c, assets))
                .collect(),
        )
    }

    pub fn get(&self, kind: EnemyKind) -> Option<&EnemyDescriptor> {
        self.descriptors.iter().find(|d| d.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnemyDescriptor> {
        self.descriptors.iter()
    }

    /// Weighted pick; equal weights give a uniform choice
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<&EnemyDescriptor> {
        if self.total_weight == 0 {
            return None;
        }
        let mut roll = rng.random_range(0..self.total_weight);
        for descriptor in &self.descriptors {
            if roll < descriptor.weight {
                return Some(descriptor);
            }
            roll -= descriptor.weight;
        }
        None
    }
}

/// An active enemy
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub entity: Entity,
    /// Base speed from the descriptor
    pub speed: f32,
    /// Difficulty multiplier, fixed at spawn
    pub multiplier: f32,
    pub motion: Motion,
}

impl Enemy {
    /// Place a new enemy with its left edge on `spawn_x`
    pub fn spawn(
        id: u32,
        descriptor: &EnemyDescriptor,
        spawn_x: f32,
        y: f32,
        multiplier: f32,
    ) -> Self {
        Self {
            id,
            kind: descriptor.kind,
            entity: Entity::new(descriptor.texture, descriptor.size, Vec2::new(spawn_x, y)),
            speed: descriptor.speed,
            multiplier,
            motion: descriptor.motion,
        }
    }

    /// Horizontal distance moved each frame
    pub fn step(&self) -> f32 {
        self.speed * self.multiplier
    }

    /// Advance one frame: scroll left, then subtype motion
    pub fn update(&mut self) {
        self.entity.translate(Vec2::new(-self.step(), 0.0));
        self.motion.apply(&mut self.entity);
    }

    /// Right edge has passed the left boundary at `left`
    pub fn is_past(&self, left: f32) -> bool {
        self.entity.rect().right() < left
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn descriptor(kind: EnemyKind, motion: Motion, weight: u32) -> EnemyDescriptor {
        EnemyDescriptor {
            kind,
            texture: TextureId(7),
            size: Vec2::new(40.0, 40.0),
            speed: 2.0,
            spawn_y: 300.0,
            spawn_variance: 10.0,
            motion,
            weight,
        }
    }

    #[test]
    fn test_plain_scroll() {
        let d = descriptor(EnemyKind::Snowman, Motion::Plain, 1);
        let mut enemy = Enemy::spawn(1, &d, 1280.0, 300.0, 1.5);
        enemy.update();
        assert_eq!(enemy.entity.pos(), Vec2::new(1277.0, 300.0));
        assert_eq!(enemy.entity.angle(), 0.0);
    }

    #[test]
    fn test_spin_sets_absolute_angle() {
        let d = descriptor(EnemyKind::Boulder, Motion::Spin { rate: 1.0 }, 1);
        let mut enemy = Enemy::spawn(1, &d, 100.0, 0.0, 1.0);
        enemy.update();
        // Angle derives from the pre-rotation position after the scroll
        let expected = crate::wrap_degrees(-98.0);
        assert!((enemy.entity.angle() - expected).abs() < 1e-3);
        assert_eq!(enemy.entity.center().x, 118.0);
    }

    #[test]
    fn test_bob_offsets_y() {
        let d = descriptor(
            EnemyKind::Bird,
            Motion::Bob {
                frequency: 0.5,
                amplitude: 3.0,
            },
            1,
        );
        let mut enemy = Enemy::spawn(1, &d, 10.0, 100.0, 1.0);
        enemy.update();
        let x = enemy.entity.pos().x;
        assert_eq!(x, 8.0);
        let expected = 100.0 + (0.5f32 * 8.0).sin() * 3.0;
        assert!((enemy.entity.pos().y - expected).abs() < 1e-4);
    }

    #[test]
    fn test_is_past_uses_right_edge() {
        let d = descriptor(EnemyKind::Snowman, Motion::Plain, 1);
        let enemy = Enemy::spawn(1, &d, -40.0, 0.0, 1.0);
        // Right edge exactly on the boundary is still on screen
        assert!(!enemy.is_past(0.0));
        let enemy = Enemy::spawn(1, &d, -40.5, 0.0, 1.0);
        assert!(enemy.is_past(0.0));
    }

    #[test]
    fn test_roster_pick_respects_weights() {
        let roster = EnemyRoster::new(vec![
            descriptor(EnemyKind::Snowman, Motion::Plain, 0),
            descriptor(EnemyKind::Bird, Motion::Plain, 3),
        ]);
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..50 {
            assert_eq!(roster.pick(&mut rng).map(|d| d.kind), Some(EnemyKind::Bird));
        }
    }

    #[test]
    fn test_roster_uniform_pick_reaches_every_kind() {
        let roster = EnemyRoster::new(vec![
            descriptor(EnemyKind::Snowman, Motion::Plain, 1),
            descriptor(EnemyKind::Boulder, Motion::Plain, 1),
            descriptor(EnemyKind::Bird, Motion::Plain, 1),
        ]);
        let mut rng = Pcg32::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            if let Some(d) = roster.pick(&mut rng) {
                seen.insert(d.kind);
            }
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_empty_roster_picks_nothing() {
        let roster = EnemyRoster::default();
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(roster.pick(&mut rng).is_none());
        assert!(roster.is_empty());
    }
}
