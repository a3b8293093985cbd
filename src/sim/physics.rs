//! Per-tick motion integration
//!
//! Moves the three entities for one tick. Which entities move is a function
//! of the current phase: the player only steers during `Rebuild`, the
//! projectile only flies during `Flight`, the opponent pursues whenever the
//! round is live. Phase consequences of the motion (impact, stop, tag) are
//! not decided here; the collision pass reads the [`StepOutcome`] afterwards.

use glam::Vec2;

use super::state::{GameState, Phase};
use super::tick::TickInput;
use crate::consts::*;

/// Motion facts the collision pass needs from this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct StepOutcome {
    /// Projectile previous -> current position (Flight only)
    pub projectile_path: Option<(Vec2, Vec2)>,
    /// Projectile fell below stop speed or left the field this tick
    pub projectile_stopped: bool,
}

/// Integrate one tick of motion.
///
/// `dt` is elapsed real time in seconds, clamped to 50 ms so a frame hitch
/// (or the first frame after a pause) cannot produce one oversized step.
pub fn step(state: &mut GameState, input: &TickInput, dt: f32) -> StepOutcome {
    let dt = dt.clamp(0.0, MAX_TICK_DT);

    // Player steering, rebuild phase only
    if state.phase == Phase::Rebuild {
        let dir = input.move_dir();
        if dir != Vec2::ZERO {
            let next = state.player.body.pos + dir * state.player.speed * dt;
            state.player.body.pos = clamp_to_field(next);
        }
    }

    // Opponent: pure pursuit toward the player's current position,
    // recomputed every tick, never past the target
    if state.phase != Phase::Intro {
        let offset = state.player.body.pos - state.opponent.body.pos;
        let dist = offset.length();
        if dist > f32::EPSILON {
            let step = (state.opponent.speed * dt).min(dist);
            state.opponent.body.pos += offset / dist * step;
        }
    }

    // Projectile flight
    let mut outcome = StepOutcome::default();
    if state.phase == Phase::Flight {
        let prev = state.projectile.body.pos;
        state.projectile.body.pos += state.projectile.vel * dt;
        // Per-tick damping: exponential speed decay, not linear
        state.projectile.vel *= PROJECTILE_FRICTION;

        outcome.projectile_path = Some((prev, state.projectile.body.pos));
        outcome.projectile_stopped = state.projectile.vel.length() < PROJECTILE_STOP_SPEED
            || outside_field(state.projectile.body.pos, EXIT_MARGIN);
    }

    outcome
}

/// Clamp a position to the play field minus the movement margin
fn clamp_to_field(pos: Vec2) -> Vec2 {
    Vec2::new(
        pos.x.clamp(FIELD_MARGIN, FIELD_WIDTH - FIELD_MARGIN),
        pos.y.clamp(FIELD_MARGIN, FIELD_HEIGHT - FIELD_MARGIN),
    )
}

/// Whether a position is more than `margin` outside the field bounds
fn outside_field(pos: Vec2, margin: f32) -> bool {
    pos.x < -margin || pos.x > FIELD_WIDTH + margin || pos.y < -margin || pos.y > FIELD_HEIGHT + margin
}
