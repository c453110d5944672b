//! Snowball Sling entry point
//!
//! Headless process loop: paces frames, feeds scripted input to the session
//! and logs what happens. A windowed front end plugs a real event source,
//! renderer and audio sink into the same loop.

use std::path::Path;

use glam::Vec2;

use snowball_sling::audio::{AudioSink, SoundBoard, SoundEffect};
use snowball_sling::platform::{AssetRegistry, FramePacer, InputEvent, MouseButton, SoundId};
use snowball_sling::renderer::{Renderer, Sprite, draw_frame};
use snowball_sling::sim::GameEvent;
use snowball_sling::{FrameOutcome, Session, Settings};

/// Frames to run before exiting
const MAX_FRAMES: u64 = 60 * 60;
/// Frames between scripted shots
const SHOT_PERIOD: u64 = 90;

/// Renderer that only counts draw calls
#[derive(Default)]
struct NullRenderer {
    calls: usize,
}

impl Renderer for NullRenderer {
    fn fill(&mut self, _rgb: [u8; 3]) {
        self.calls += 1;
    }
    fn draw_sprite(&mut self, _sprite: &Sprite) {
        self.calls += 1;
    }
    fn draw_marker(&mut self, _at: Vec2) {
        self.calls += 1;
    }
    fn draw_line(&mut self, _from: Vec2, _to: Vec2, _width: f32) {
        self.calls += 1;
    }
    fn draw_text(&mut self, _text: &str, _anchor: Vec2) {
        self.calls += 1;
    }
}

/// Audio sink that logs instead of playing
struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, sound: SoundId, volume: f32) {
        log::trace!("play sound {} at {:.2}", sound.0, volume);
    }
}

/// Scripted pointer input: pull back and release on a fixed period
fn scripted_events(frame: u64, anchor: Vec2) -> Vec<InputEvent> {
    let phase = frame % SHOT_PERIOD;
    // Sweep the aim so shots cover different heights
    let aim = (frame / SHOT_PERIOD) as f32 * 0.7;
    let pull = anchor + Vec2::new(-80.0, 30.0 + 40.0 * aim.sin());
    match phase {
        0 => vec![InputEvent::MouseMove(anchor), InputEvent::MouseDown(MouseButton::Left)],
        1..=20 => vec![InputEvent::MouseMove(anchor.lerp(pull, phase as f32 / 20.0))],
        21 => vec![InputEvent::MouseUp(MouseButton::Left)],
        _ => Vec::new(),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Snowball Sling (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };

    let mut assets = AssetRegistry::new();
    for key in settings.texture_keys() {
        assets.add_texture(key);
    }
    for effect in SoundEffect::ALL {
        assets.add_sound(effect.asset_key());
    }

    let mut session = Session::new(&settings, &assets);
    let sounds = SoundBoard::new(&assets);
    let mut renderer = NullRenderer::default();
    let mut sink = LogSink;
    let mut pacer = FramePacer::new(settings.fps);

    for frame in 0..MAX_FRAMES {
        let events = if session.is_game_over() {
            vec![InputEvent::KeyDown(settings.confirm_key)]
        } else {
            scripted_events(frame, session.anchor)
        };

        let outcome = session.update(&events);
        sounds.play_frame(&session, &mut sink);

        for event in &session.events {
            if let GameEvent::GameOver { score, frames } = event {
                log::info!(
                    "Game over at frame {} with score {} after {} frames of play",
                    frame,
                    score,
                    frames
                );
            }
        }

        if outcome == FrameOutcome::Restart {
            continue;
        }
        draw_frame(&session, &mut renderer);
        pacer.wait();
    }

    log::info!(
        "Finished: score {}, health {}, {} enemies on screen, {} draw calls",
        session.score,
        session.health,
        session.enemies.len(),
        renderer.calls
    );
}
