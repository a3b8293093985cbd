//! Per-frame simulation tick
//!
//! One tick runs to completion per animation frame: physics moves entities,
//! collision derives the tick's geometric events, then the phase machine
//! consumes them together with the input snapshot. The input collaborator
//! only ever writes the latest [`TickInput`]; a dropped intermediate
//! snapshot has no gameplay impact at tick durations this short.

use glam::Vec2;

use super::collision;
use super::phase::{self, PhaseEvent};
use super::physics;
use super::state::{GameState, Phase};

/// A held movement direction, in canvas coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The set of directional keys currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionSet {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionSet {
    pub fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    /// Sum of the held directions as a unit vector (zero if nothing held or
    /// opposite keys cancel)
    pub fn as_vector(self) -> Vec2 {
        let x = (self.right as i8 - self.left as i8) as f32;
        let y = (self.down as i8 - self.up as i8) as f32;
        Vec2::new(x, y).normalize_or_zero()
    }
}

/// Pointer drag in progress, in world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragInput {
    pub start: Vec2,
    pub current: Vec2,
}

impl DragInput {
    pub fn vector(self) -> Vec2 {
        self.current - self.start
    }
}

/// Input snapshot for a single tick.
///
/// Captured asynchronously by the input collaborator, read synchronously
/// here; latest wins. `start` and `place` are one-shot commands the driver
/// clears after each processed tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Directional keys currently held
    pub held_keys: DirectionSet,
    /// On-screen directional button currently held, if any
    pub held_button: Option<Direction>,
    /// Pointer drag state (`None` once released)
    pub drag: Option<DragInput>,
    /// Place-stone command
    pub place: bool,
    /// Start/next-round command
    pub start: bool,
    /// Cooperative pause flag; physics and collision sit the frame out
    pub pause: bool,
}

impl TickInput {
    /// Combined movement direction from keys and on-screen buttons
    pub fn move_dir(&self) -> Vec2 {
        let mut keys = self.held_keys;
        if let Some(dir) = self.held_button {
            keys.set(dir, true);
        }
        keys.as_vector()
    }
}

/// Advance the game by one tick of `dt` seconds (clamped to 50 ms).
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.pause {
        return;
    }

    if state.phase == Phase::Intro {
        if input.start {
            state.start_game();
        }
        return;
    }
    if state.phase.is_terminal() {
        // Win/Lose exit only via an explicit external reset
        return;
    }

    state.time_ticks += 1;

    let motion = physics::step(state, input, dt);
    let events = collision::resolve(state, &motion);

    match state.phase {
        Phase::Aim => {
            if let Some(drag) = input.drag {
                let t = phase::apply(
                    Phase::Aim,
                    PhaseEvent::DragBegin,
                    &mut state.metrics,
                    &mut state.pile,
                );
                state.drag_anchor = Some(state.player.body.pos);
                state.drag_vector = drag.vector();
                state.phase = t.phase;
            }
        }

        Phase::Dragging => match input.drag {
            Some(drag) => state.drag_vector = drag.vector(),
            None => {
                // Drag released: launch with whatever vector was last seen
                let t = phase::apply(
                    Phase::Dragging,
                    PhaseEvent::DragEnd { drag: state.drag_vector },
                    &mut state.metrics,
                    &mut state.pile,
                );
                if let Some(vel) = t.launch {
                    // The throw leaves from where the drag was anchored
                    let anchor = state.drag_anchor.take().unwrap_or(state.player.body.pos);
                    state.projectile.body.pos = anchor;
                    state.projectile.vel = vel;
                }
                state.drag_anchor = None;
                state.drag_vector = Vec2::ZERO;
                state.phase = t.phase;
            }
        },

        Phase::Flight => {
            // Impact takes precedence if both fire on the same tick
            let event = if events.pile_impact {
                Some(PhaseEvent::PileImpact)
            } else if events.projectile_stopped {
                Some(PhaseEvent::ProjectileStopped)
            } else {
                None
            };
            if let Some(event) = event {
                let t = phase::apply(Phase::Flight, event, &mut state.metrics, &mut state.pile);
                if t.respawn_opponent {
                    state.respawn_opponent();
                }
                state.phase = t.phase;
            }
        }

        Phase::Rebuild => {
            // Getting caught preempts a place request from the same frame
            if events.tagged {
                let t =
                    phase::apply(Phase::Rebuild, PhaseEvent::Tagged, &mut state.metrics, &mut state.pile);
                state.phase = t.phase;
            } else if input.place && events.place_eligible {
                let t = phase::apply(
                    Phase::Rebuild,
                    PhaseEvent::PlaceStone,
                    &mut state.metrics,
                    &mut state.pile,
                );
                state.phase = t.phase;
            }
            // A place request out of range (or past the cap) is a silent no-op
        }

        Phase::Intro | Phase::Win | Phase::Lose => {}
    }
}


#[cfg(test)]
mod invariant_tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::level::Level;
    use proptest::prelude::*;

    /// Compressed per-tick input commands for random play
    fn arb_input() -> impl Strategy<Value = TickInput> {
        (0u8..6, any::<bool>(), -300.0f32..300.0, -300.0f32..300.0).prop_map(
            |(cmd, place, dx, dy)| {
                let mut input = TickInput { place, ..TickInput::default() };
                match cmd {
                    0 => input.held_keys.set(Direction::Up, true),
                    1 => input.held_keys.set(Direction::Down, true),
                    2 => input.held_keys.set(Direction::Left, true),
                    3 => input.held_keys.set(Direction::Right, true),
                    4 => {
                        input.drag = Some(DragInput {
                            start: Vec2::new(100.0, 100.0),
                            current: Vec2::new(100.0 + dx, 100.0 + dy),
                        });
                    }
                    _ => {}
                }
                input
            },
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_counters_stay_within_bounds(
            seed in any::<u64>(),
            inputs in proptest::collection::vec(arb_input(), 1..400),
        ) {
            let mut state = GameState::new(seed, Level::Intermediate);
            state.start_game();
            let budget = state.config.attempt_budget;
            let total = state.config.stone_count;

            let mut prev_attempts = budget;
            let mut prev_placed = 0;
            let mut prev_score = 0;
            let mut collapses = 0;

            for input in &inputs {
                let collapsed_before = state.pile.collapsed;
                tick(&mut state, input, SIM_DT);
                let m = state.metrics;

                // Attempts only ever decrease, stones only ever increase
                prop_assert!(m.attempts_left <= prev_attempts);
                prop_assert!(m.stones_placed >= prev_placed);
                prop_assert!(m.stones_placed <= total);
                prop_assert!(m.score >= prev_score);

                if !collapsed_before && state.pile.collapsed {
                    collapses += 1;
                    prop_assert_eq!(m.score, prev_score + 10);
                }
                if state.phase == Phase::Win {
                    prop_assert_eq!(m.stones_placed, total);
                }

                prev_attempts = m.attempts_left;
                prev_placed = m.stones_placed;
                prev_score = m.score;
            }

            // At most one collapse per round
            prop_assert!(collapses <= 1);
        }
    }
}
