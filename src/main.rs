//! Seven Stones headless demo driver
//!
//! Plays one scripted round against the pursuing opponent and logs phase
//! transitions. Stands in for the render/input collaborators: it feeds
//! `TickInput` snapshots into the sim and reads `FrameSnapshot`s back,
//! exactly the way an interactive shell would.

use glam::Vec2;

use seven_stones::consts::*;
use seven_stones::sim::{Direction, DragInput, GameState, Level, Phase, TickInput, tick};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(7);
    let level = Level::Beginner;
    log::info!("Seven Stones demo round: level={} seed={}", level.as_str(), seed);

    let mut state = GameState::new(seed, level);
    let mut last_phase = state.phase;

    // Start command
    tick(&mut state, &TickInput { start: true, ..TickInput::default() }, SIM_DT);

    for _ in 0..20_000u32 {
        let input = script_input(&state);
        tick(&mut state, &input, SIM_DT);

        if state.phase != last_phase {
            let m = state.metrics;
            log::info!(
                "{} -> {} (score={} attempts={} stones={}/{})",
                last_phase.as_str(),
                state.phase.as_str(),
                m.score,
                m.attempts_left,
                m.stones_placed,
                m.stones_total,
            );
            last_phase = state.phase;
        }
        if state.phase.is_terminal() {
            break;
        }
    }

    let snapshot = state.snapshot();
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}

/// A simple scripted player: throw at the pile, then run for it and restack.
fn script_input(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    match state.phase {
        Phase::Aim | Phase::Dragging => {
            // Drag far enough toward the pile for a full-power throw
            let aim = (PILE_CENTER - state.player.body.pos).normalize_or_zero();
            input.drag = Some(DragInput {
                start: state.player.body.pos,
                current: state.player.body.pos + aim * (MAX_THROW_SPEED / THROW_POWER_SCALE),
            });
            // Release once the drag has been held for a tick
            if state.phase == Phase::Dragging {
                input.drag = None;
            }
        }
        Phase::Rebuild => {
            let to_pile = PILE_CENTER - state.player.body.pos;
            if to_pile.length() <= PLACE_RANGE {
                input.place = true;
            } else {
                input.held_keys.set(step_toward(to_pile), true);
            }
        }
        _ => {}
    }
    input
}

/// Dominant-axis direction toward a target offset (canvas coordinates)
fn step_toward(offset: Vec2) -> Direction {
    if offset.x.abs() >= offset.y.abs() {
        if offset.x >= 0.0 { Direction::Right } else { Direction::Left }
    } else if offset.y >= 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}
