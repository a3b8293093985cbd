//! Per-tick collision resolution
//!
//! Runs strictly after the physics step and strictly before the phase
//! machine, turning the tick's geometry into boolean events. The pile impact
//! uses the projectile's full motion segment so a fast throw cannot tunnel
//! through the pile within one tick; the tag and place tests are plain
//! instantaneous distance checks, which is enough at runner speeds.

use super::geom::segment_circle_intersect;
use super::physics::StepOutcome;
use super::state::{GameState, Phase};
use crate::consts::*;

/// Geometric events observed this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Projectile motion segment crossed the standing pile
    pub pile_impact: bool,
    /// Projectile satisfied the stop condition (impact takes precedence)
    pub projectile_stopped: bool,
    /// Opponent within tag-range of the player
    pub tagged: bool,
    /// Player within place-range of the pile center
    pub place_eligible: bool,
}

/// Inspect entity positions (and this tick's projectile path) for events
pub fn resolve(state: &GameState, motion: &StepOutcome) -> TickEvents {
    let mut events = TickEvents::default();

    if state.phase == Phase::Flight {
        if !state.pile.collapsed {
            // Swept test against the pile circle inflated by the projectile
            // radius, so a grazing hit counts
            events.pile_impact = motion.projectile_path.is_some_and(|(prev, curr)| {
                segment_circle_intersect(
                    prev,
                    curr,
                    state.pile.center,
                    state.pile.radius + state.projectile.body.radius,
                )
            });
        }
        events.projectile_stopped = motion.projectile_stopped;
    }

    if state.phase == Phase::Rebuild {
        events.tagged =
            state.player.body.pos.distance(state.opponent.body.pos) <= TAG_RANGE;
        events.place_eligible =
            state.player.body.pos.distance(state.pile.center) <= PLACE_RANGE;
    }

    events
}
