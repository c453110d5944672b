//! Rendering contract
//!
//! The session never draws itself. `draw_frame` reads a finished frame and
//! issues draw calls to a `Renderer` in fixed layer order:
//! background, preview, slingshot bands, HUD, enemies, snowball, game over.

use glam::Vec2;

use crate::consts::BAND_WIDTH;
use crate::platform::TextureId;
use crate::sim::{Entity, Session};

/// HUD layout
pub const SCORE_ANCHOR: Vec2 = Vec2::new(20.0, 20.0);
pub const HEALTH_ANCHOR: Vec2 = Vec2::new(20.0, 60.0);
pub const HEALTH_ICON_SIZE: Vec2 = Vec2::new(32.0, 32.0);
pub const HEALTH_ICON_SPACING: f32 = 36.0;
pub const GAME_OVER_TEXT: &str = "GAME OVER";

/// A textured quad ready to blit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub texture: TextureId,
    /// Top-left corner
    pub pos: Vec2,
    /// Bounding size (after rotation)
    pub size: Vec2,
    /// Degrees
    pub angle: f32,
}

impl Sprite {
    /// Sprite for a visible entity
    pub fn of(entity: &Entity) -> Option<Self> {
        entity.visible.then(|| Self {
            texture: entity.texture,
            pos: entity.pos(),
            size: entity.size(),
            angle: entity.angle(),
        })
    }
}

/// Draw backend implemented outside the core
pub trait Renderer {
    /// Clear the frame
    fn fill(&mut self, rgb: [u8; 3]);
    fn draw_sprite(&mut self, sprite: &Sprite);
    /// Marker for one predicted trajectory point
    fn draw_marker(&mut self, at: Vec2);
    fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32);
    fn draw_text(&mut self, text: &str, anchor: Vec2);
}

/// Draw the session as it stands after `update`
pub fn draw_frame(session: &Session, renderer: &mut impl Renderer) {
    renderer.fill([0, 0, 0]);
    renderer.draw_sprite(&Sprite {
        texture: session.textures.background,
        pos: session.area.pos,
        size: session.area.size,
        angle: 0.0,
    });

    for point in &session.preview {
        renderer.draw_marker(*point);
    }

    let band_end = session.band_target();
    for arm in session.arms {
        renderer.draw_line(arm, band_end, BAND_WIDTH);
    }

    draw_hud(session, renderer);

    for enemy in &session.enemies {
        if let Some(sprite) = Sprite::of(&enemy.entity) {
            renderer.draw_sprite(&sprite);
        }
    }

    if let Some(sprite) = Sprite::of(&session.snowball.entity) {
        renderer.draw_sprite(&sprite);
    }

    if session.is_game_over() {
        let center = session.area.center();
        renderer.draw_text(GAME_OVER_TEXT, center);
        renderer.draw_text(
            &format!(
                "Score {} - press {:?} to play again",
                session.score, session.rules.confirm_key
            ),
            center + Vec2::new(0.0, 40.0),
        );
    }
}

/// Score text and one icon per remaining life
fn draw_hud(session: &Session, renderer: &mut impl Renderer) {
    renderer.draw_text(&format!("Score: {}", session.score), SCORE_ANCHOR);
    for i in 0..session.health.max(0) {
        renderer.draw_sprite(&Sprite {
            texture: session.textures.health,
            pos: HEALTH_ANCHOR + Vec2::new(i as f32 * HEALTH_ICON_SPACING, 0.0),
            size: HEALTH_ICON_SIZE,
            angle: 0.0,
        });
    }
}
