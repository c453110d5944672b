//! Platform abstraction layer
//!
//! Everything the simulation needs from the outside world:
//! - Input events (delivered once per frame, in order)
//! - Asset handles (textures/sounds, opaque to the core)
//! - Frame pacing for the process loop

use std::collections::HashMap;
use std::time::{Duration, Instant};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Logical keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Char(char),
    /// Platform scancode with no logical mapping
    Other(u32),
}

/// Logical mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u8),
}

/// Raw input event as delivered by the event source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    MouseDown(MouseButton),
    MouseUp(MouseButton),
    /// Pointer moved to screen coordinates
    MouseMove(Vec2),
}

/// Opaque texture handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub u32);

/// Opaque sound handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SoundId(pub u32);

/// Source of named asset handles.
///
/// The core only stores and forwards the handles it gets here; decoding and
/// playback belong to the provider.
pub trait AssetProvider {
    fn texture(&self, key: &str) -> TextureId;
    fn sound(&self, key: &str) -> SoundId;
}

/// In-memory provider that interns keys into sequential handles
#[derive(Debug, Default)]
pub struct AssetRegistry {
    textures: HashMap<String, TextureId>,
    sounds: HashMap<String, SoundId>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture key, returning its handle (idempotent)
    pub fn add_texture(&mut self, key: &str) -> TextureId {
        let next = TextureId(self.textures.len() as u32 + 1);
        *self.textures.entry(key.to_string()).or_insert(next)
    }

    /// Register a sound key, returning its handle (idempotent)
    pub fn add_sound(&mut self, key: &str) -> SoundId {
        let next = SoundId(self.sounds.len() as u32 + 1);
        *self.sounds.entry(key.to_string()).or_insert(next)
    }

    pub fn texture_key(&self, id: TextureId) -> Option<&str> {
        self.textures
            .iter()
            .find(|(_, v)| **v == id)
            .map(|(k, _)| k.as_str())
    }

    pub fn sound_key(&self, id: SoundId) -> Option<&str> {
        self.sounds
            .iter()
            .find(|(_, v)| **v == id)
            .map(|(k, _)| k.as_str())
    }
}

impl AssetProvider for AssetRegistry {
    /// Unknown keys resolve to the null handle
    fn texture(&self, key: &str) -> TextureId {
        self.textures.get(key).copied().unwrap_or_else(|| {
            log::warn!("Unknown texture '{}'", key);
            TextureId::default()
        })
    }

    fn sound(&self, key: &str) -> SoundId {
        self.sounds.get(key).copied().unwrap_or_else(|| {
            log::warn!("Unknown sound '{}'", key);
            SoundId::default()
        })
    }
}

/// Fixed-rate frame pacer for the process loop.
///
/// Sleeps out whatever is left of the frame budget; never scales simulation.
pub struct FramePacer {
    frame: Duration,
    last: Instant,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            last: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Block until the current frame's budget is used up
    pub fn wait(&mut self) {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame {
            std::thread::sleep(self.frame - elapsed);
        }
        self.last = Instant::now();
    }
}
