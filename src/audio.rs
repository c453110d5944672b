//! Sound effects
//!
//! Maps each frame's game events to sound handles. Playback itself belongs
//! to whatever implements `AudioSink`.

use crate::platform::{AssetProvider, SoundId};
use crate::sim::{GameEvent, Session};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Snowball leaves the slingshot
    Launch,
    /// Snowball bounces off the top wall
    WallHit,
    /// Snowball hits an enemy
    EnemyHit,
    /// Enemy got past the left edge
    LifeLost,
    GameOver,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 5] = [
        SoundEffect::Launch,
        SoundEffect::WallHit,
        SoundEffect::EnemyHit,
        SoundEffect::LifeLost,
        SoundEffect::GameOver,
    ];

    /// Asset key handed to the provider
    pub fn asset_key(&self) -> &'static str {
        match self {
            SoundEffect::Launch => "launch.wav",
            SoundEffect::WallHit => "bounce.wav",
            SoundEffect::EnemyHit => "hit.wav",
            SoundEffect::LifeLost => "life_lost.wav",
            SoundEffect::GameOver => "game_over.wav",
        }
    }

    /// Sound for an event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Launched { .. } => Some(SoundEffect::Launch),
            GameEvent::Bounced => Some(SoundEffect::WallHit),
            GameEvent::EnemyHit { .. } => Some(SoundEffect::EnemyHit),
            GameEvent::EnemyEscaped { .. } => Some(SoundEffect::LifeLost),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            GameEvent::EnemySpawned { .. } | GameEvent::Restarted => None,
        }
    }
}

/// Something that can play a sound handle
pub trait AudioSink {
    fn play(&mut self, sound: SoundId, volume: f32);
}

/// Resolved sound handles plus volume settings
#[derive(Debug, Clone)]
pub struct SoundBoard {
    sounds: [SoundId; SoundEffect::ALL.len()],
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl SoundBoard {
    pub fn new(assets: &impl AssetProvider) -> Self {
        Self {
            sounds: SoundEffect::ALL.map(|effect| assets.sound(effect.asset_key())),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    pub fn sound(&self, effect: SoundEffect) -> SoundId {
        let idx = SoundEffect::ALL
            .iter()
            .position(|e| *e == effect)
            .unwrap_or_default();
        self.sounds[idx]
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play the sounds for everything that happened last frame
    pub fn play_frame(&self, session: &Session, sink: &mut impl AudioSink) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        for effect in session.events.iter().filter_map(SoundEffect::for_event) {
            sink.play(self.sound(effect), vol);
        }
    }
}
