//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only; elapsed time is an explicit parameter
//! - Seeded RNG only (opponent spawn points)
//! - No rendering, input-device or platform dependencies
//!
//! Tick order is fixed: physics moves entities, collision derives this
//! tick's geometric events, then the phase machine consumes them.

pub mod collision;
pub mod geom;
pub mod level;
pub mod phase;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::TickEvents;
pub use geom::segment_circle_intersect;
pub use level::{Level, LevelConfig};
pub use phase::{PhaseEvent, Transition, throw_velocity};
pub use physics::StepOutcome;
pub use state::{
    CircleEntity, FrameSnapshot, GameState, Phase, PileState, Projectile, RoundMetrics, Runner,
};
pub use tick::{Direction, DirectionSet, DragInput, TickInput, tick};
