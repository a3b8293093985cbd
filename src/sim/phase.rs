//! Phase state machine
//!
//! The transition table as a pure function over `(Phase, PhaseEvent)` with
//! the metric/pile side effects applied in place. No entity movement happens
//! here; the tick driver performs whatever the returned [`Transition`] asks
//! for (launching the projectile, respawning the opponent).

use glam::Vec2;

use super::state::{Phase, PileState, RoundMetrics};
use crate::consts::*;

/// A qualitative event for the current tick, derived from input commands and
/// collision results
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhaseEvent {
    /// Start command (from `Intro`)
    Start,
    /// Pointer drag began
    DragBegin,
    /// Pointer drag released with this accumulated drag vector
    DragEnd { drag: Vec2 },
    /// Projectile motion segment crossed the standing pile
    PileImpact,
    /// Projectile speed fell below the stop threshold or it left the field
    ProjectileStopped,
    /// Place action issued while within place-range of the pile
    PlaceStone,
    /// Opponent reached the player
    Tagged,
}

/// What the tick driver must do after a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub phase: Phase,
    /// Set the projectile in motion with this velocity
    pub launch: Option<Vec2>,
    /// Move the opponent to a fresh random edge point
    pub respawn_opponent: bool,
}

impl Transition {
    fn stay(phase: Phase) -> Self {
        Self { phase, launch: None, respawn_opponent: false }
    }

    fn to(phase: Phase) -> Self {
        Self::stay(phase)
    }
}

/// Throw velocity for a released drag: direction of the drag vector, speed
/// `|drag| * 3.0` capped at 600 units/s. A zero-length drag throws at zero
/// speed, which satisfies the stop condition on the next tick and costs the
/// usual attempt.
pub fn throw_velocity(drag: Vec2) -> Vec2 {
    let speed = (drag.length() * THROW_POWER_SCALE).min(MAX_THROW_SPEED);
    drag.normalize_or_zero() * speed
}

/// Apply one event to the state machine.
///
/// Events that are not meaningful in the current phase are silent no-ops:
/// the phase is returned unchanged and nothing is mutated.
pub fn apply(
    phase: Phase,
    event: PhaseEvent,
    metrics: &mut RoundMetrics,
    pile: &mut PileState,
) -> Transition {
    match (phase, event) {
        (Phase::Intro, PhaseEvent::Start) => Transition::to(Phase::Aim),

        (Phase::Aim, PhaseEvent::DragBegin) => Transition::to(Phase::Dragging),

        (Phase::Dragging, PhaseEvent::DragEnd { drag }) => Transition {
            phase: Phase::Flight,
            launch: Some(throw_velocity(drag)),
            respawn_opponent: false,
        },

        (Phase::Flight, PhaseEvent::PileImpact) => {
            pile.collapsed = true;
            metrics.score += COLLAPSE_SCORE;
            Transition {
                phase: Phase::Rebuild,
                launch: None,
                respawn_opponent: true,
            }
        }

        (Phase::Flight, PhaseEvent::ProjectileStopped) => {
            if pile.collapsed {
                // Throw after the collapse: nothing to score, go restack
                return Transition::to(Phase::Rebuild);
            }
            metrics.attempts_left = metrics.attempts_left.saturating_sub(1);
            if metrics.attempts_left > 0 {
                Transition::to(Phase::Aim)
            } else {
                Transition::to(Phase::Lose)
            }
        }

        (Phase::Rebuild, PhaseEvent::PlaceStone) => {
            if metrics.stones_placed >= metrics.stones_total {
                // Already complete; silent no-op
                return Transition::stay(Phase::Rebuild);
            }
            metrics.stones_placed += 1;
            if metrics.stones_placed == metrics.stones_total {
                metrics.score += REBUILD_SCORE;
                Transition::to(Phase::Win)
            } else {
                Transition::stay(Phase::Rebuild)
            }
        }

        (Phase::Rebuild, PhaseEvent::Tagged) => Transition::to(Phase::Lose),

        // Anything else is not meaningful in this phase
        _ => Transition::stay(phase),
    }
}
