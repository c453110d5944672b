//! Per-frame input tracking
//!
//! Turns each frame's raw event batch into held state plus one-frame
//! pressed/released edges. Edges are never latched: they describe the
//! difference between the previous frame's held state and this one.

use std::collections::HashMap;
use std::hash::Hash;

use glam::Vec2;

use crate::platform::{InputEvent, Key, MouseButton};

/// Held state and derived edges for one family of buttons
#[derive(Debug, Clone)]
pub struct ButtonMap<K> {
    held: HashMap<K, bool>,
    pressed: HashMap<K, bool>,
    released: HashMap<K, bool>,
}

impl<K> Default for ButtonMap<K> {
    fn default() -> Self {
        Self {
            held: HashMap::new(),
            pressed: HashMap::new(),
            released: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> ButtonMap<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a down/up transition from the event stream
    pub fn set(&mut self, id: K, down: bool) {
        self.held.insert(id, down);
    }

    pub fn snapshot(&self) -> HashMap<K, bool> {
        self.held.clone()
    }

    /// Recompute edges for every button ever seen against `prev`.
    ///
    /// Returns the buttons that were pressed this frame.
    pub fn derive_edges(&mut self, prev: &HashMap<K, bool>) -> Vec<K> {
        let mut newly_pressed = Vec::new();
        for (&id, &now) in &self.held {
            let was = prev.get(&id).copied().unwrap_or(false);
            let pressed = !was && now;
            if pressed {
                newly_pressed.push(id);
            }
            self.pressed.insert(id, pressed);
            self.released.insert(id, was && !now);
        }
        newly_pressed
    }

    pub fn held(&self, id: K) -> bool {
        self.held.get(&id).copied().unwrap_or(false)
    }

    pub fn pressed(&self, id: K) -> bool {
        self.pressed.get(&id).copied().unwrap_or(false)
    }

    pub fn released(&self, id: K) -> bool {
        self.released.get(&id).copied().unwrap_or(false)
    }

    /// Every button id seen so far
    pub fn known(&self) -> impl Iterator<Item = K> + '_ {
        self.held.keys().copied()
    }
}

/// Keyboard and mouse state for the current frame
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    keys: ButtonMap<Key>,
    mouse: ButtonMap<MouseButton>,
    mouse_pos: Vec2,
    pressed_at: HashMap<MouseButton, Vec2>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one frame's event batch, in delivery order
    pub fn process(&mut self, events: &[InputEvent]) {
        let keys_prev = self.keys.snapshot();
        let mouse_prev = self.mouse.snapshot();

        for event in events {
            match *event {
                InputEvent::KeyDown(key) => self.keys.set(key, true),
                InputEvent::KeyUp(key) => self.keys.set(key, false),
                InputEvent::MouseDown(btn) => self.mouse.set(btn, true),
                InputEvent::MouseUp(btn) => self.mouse.set(btn, false),
                InputEvent::MouseMove(pos) => self.mouse_pos = pos,
            }
        }

        // Press origin uses the pointer position after the whole batch
        for btn in self.mouse.derive_edges(&mouse_prev) {
            self.pressed_at.insert(btn, self.mouse_pos);
        }
        self.keys.derive_edges(&keys_prev);
    }

    pub fn key_held(&self, key: Key) -> bool {
        self.keys.held(key)
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys.pressed(key)
    }

    pub fn key_released(&self, key: Key) -> bool {
        self.keys.released(key)
    }

    pub fn mouse_held(&self, btn: MouseButton) -> bool {
        self.mouse.held(btn)
    }

    pub fn mouse_pressed(&self, btn: MouseButton) -> bool {
        self.mouse.pressed(btn)
    }

    pub fn mouse_released(&self, btn: MouseButton) -> bool {
        self.mouse.released(btn)
    }

    /// Last known pointer position
    pub fn mouse_pos(&self) -> Vec2 {
        self.mouse_pos
    }

    /// Pointer position when `btn` was last pressed
    pub fn pressed_at(&self, btn: MouseButton) -> Option<Vec2> {
        self.pressed_at.get(&btn).copied()
    }

    pub fn keys(&self) -> &ButtonMap<Key> {
        &self.keys
    }

    pub fn mouse(&self) -> &ButtonMap<MouseButton> {
        &self.mouse
    }
}
