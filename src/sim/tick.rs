//! Per-frame session update
//!
//! One call per frame, one full pass in a fixed order:
//! input -> snowball -> enemies -> spawning.
//! All constants are per-frame deltas; nothing here looks at wall-clock time.

use rand::Rng;

use super::enemy::Enemy;
use super::projectile::BoundsCheck;
use super::state::{GameEvent, GamePhase, Session};
use crate::consts::{POINTS_BOUNCED, POINTS_DIRECT};
use crate::platform::{InputEvent, MouseButton};

/// What the process loop should do after `update`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Draw this frame
    Continue,
    /// The session was reset; skip drawing this frame
    Restart,
}

/// Advance the session by one frame
pub fn tick(state: &mut Session, events: &[InputEvent]) -> FrameOutcome {
    state.events.clear();
    state.input.process(events);

    if state.phase == GamePhase::GameOver {
        if state.input.key_pressed(state.rules.confirm_key) {
            state.restart();
            state.events.push(GameEvent::Restarted);
            return FrameOutcome::Restart;
        }
        return FrameOutcome::Continue;
    }

    state.frame += 1;

    update_snowball(state);
    update_enemies(state);
    if state.phase == GamePhase::Playing {
        spawn_enemies(state);
    }

    FrameOutcome::Continue
}

/// Drag, launch, fly and boundary policy
fn update_snowball(state: &mut Session) {
    let drag_button = MouseButton::Left;

    if state.snowball.frozen && state.input.mouse_held(drag_button) {
        let mouse = state.input.mouse_pos();
        state.snowball.drag_to(&state.ballistics, state.anchor, mouse);
        state.preview = state.ballistics.preview(
            state.anchor,
            state.snowball.center(),
            state.rules.preview_steps,
        );
    } else {
        state.preview.clear();
    }

    if state.snowball.frozen && state.input.mouse_released(drag_button) {
        let velocity = state.snowball.launch(&state.ballistics, state.anchor);
        log::debug!("Launched at {}", velocity);
        state.events.push(GameEvent::Launched { velocity });
    }

    state.snowball.update(&state.ballistics);

    match state.snowball.check_bounds(&state.area) {
        BoundsCheck::Exited => state.snowball.dock(state.anchor),
        BoundsCheck::Bounced => state.events.push(GameEvent::Bounced),
        BoundsCheck::Inside => {}
    }
}

/// Scroll, collide and retire enemies
fn update_enemies(state: &mut Session) {
    let left = state.area.left();

    for enemy in state.enemies.iter_mut() {
        enemy.update();

        if state.snowball.is_flying() && state.snowball.rect().intersects(&enemy.entity.rect()) {
            if enemy.entity.request_removal() {
                let points = if state.snowball.bounced {
                    POINTS_BOUNCED
                } else {
                    POINTS_DIRECT
                };
                state.score += points;
                log::debug!(
                    "Hit {:?} #{} for {} (score {})",
                    enemy.kind,
                    enemy.id,
                    points,
                    state.score
                );
                state.events.push(GameEvent::EnemyHit {
                    id: enemy.id,
                    kind: enemy.kind,
                    points,
                });
            }
            state.snowball.dock(state.anchor);
        } else if enemy.is_past(left) {
            if enemy.entity.request_removal() {
                state.health -= 1;
                log::debug!("{:?} #{} escaped (health {})", enemy.kind, enemy.id, state.health);
                state.events.push(GameEvent::EnemyEscaped {
                    id: enemy.id,
                    kind: enemy.kind,
                });
            }
            if state.health <= 0 {
                state.phase = GamePhase::GameOver;
                log::info!(
                    "Game over - final score {} after {} frames",
                    state.score,
                    state.frame
                );
                state.events.push(GameEvent::GameOver {
                    score: state.score,
                    frames: state.frame,
                });
                break;
            }
        }
    }

    state.enemies.retain(|e| !e.entity.removal_requested());
}

/// Maybe spawn one enemy at the right edge
fn spawn_enemies(state: &mut Session) {
    if state.rules.spawn_one_in == 0 || state.rng.random_range(0..state.rules.spawn_one_in) != 0 {
        return;
    }
    let Some(descriptor) = state.roster.pick(&mut state.rng).cloned() else {
        return;
    };

    let variance = descriptor.spawn_variance;
    let offset = if variance > 0.0 {
        state.rng.random_range(-variance..=variance)
    } else {
        0.0
    };
    let multiplier = state.spawn_multiplier();
    let id = state.next_entity_id();
    let enemy = Enemy::spawn(
        id,
        &descriptor,
        state.area.right(),
        descriptor.spawn_y + offset,
        multiplier,
    );

    log::debug!("Spawned {:?} #{} (x{:.2})", enemy.kind, id, multiplier);
    state.events.push(GameEvent::EnemySpawned {
        id,
        kind: enemy.kind,
    });
    state.enemies.push(enemy);
}

impl Session {
    /// Per-frame entry point: consume this frame's events and advance
    pub fn update(&mut self, events: &[InputEvent]) -> FrameOutcome {
        tick(self, events)
    }
}
