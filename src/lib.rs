//! Seven Stones - a throw-and-rebuild arcade chase game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, phases, scoring)
//!
//! Rendering, menus and raw input devices live in the embedding shell; the
//! sim only ever sees a per-tick [`sim::TickInput`] snapshot and publishes a
//! read-only [`sim::FrameSnapshot`] back.

pub mod sim;

pub use sim::{FrameSnapshot, GameState, Level, LevelConfig, Phase, TickInput, tick};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Nominal fixed simulation timestep (animation-frame cadence)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum elapsed time consumed by a single tick; bounds simulation
    /// error across frame hitches and long pauses
    pub const MAX_TICK_DT: f32 = 0.05;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 900.0;
    pub const FIELD_HEIGHT: f32 = 540.0;
    /// Player movement is clamped this far inside the field edges
    pub const FIELD_MARGIN: f32 = 10.0;
    /// Projectile counts as gone once this far outside the field
    pub const EXIT_MARGIN: f32 = 50.0;

    /// Stone pile at field center
    pub const PILE_CENTER: Vec2 = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);
    pub const PILE_RADIUS: f32 = 28.0;

    /// Player spawns bottom-left; opponent spawns on a random edge point
    pub const PLAYER_SPAWN: Vec2 = Vec2::new(70.0, 470.0);

    /// Entity radii
    pub const PLAYER_RADIUS: f32 = 14.0;
    pub const OPPONENT_RADIUS: f32 = 14.0;
    pub const PROJECTILE_RADIUS: f32 = 6.0;

    /// Player must be within this distance of the pile center to place a stone
    pub const PLACE_RANGE: f32 = 46.0;
    /// Opponent within this distance of the player ends the round
    pub const TAG_RANGE: f32 = 22.0;

    /// Drag distance to throw speed conversion
    pub const THROW_POWER_SCALE: f32 = 3.0;
    /// Throw speed ceiling (units/s)
    pub const MAX_THROW_SPEED: f32 = 600.0;
    /// Per-tick projectile velocity damping (exponential decay)
    pub const PROJECTILE_FRICTION: f32 = 0.985;
    /// Projectile speed below which the throw is over (units/s)
    pub const PROJECTILE_STOP_SPEED: f32 = 20.0;

    /// Scoring
    pub const COLLAPSE_SCORE: u32 = 10;
    pub const REBUILD_SCORE: u32 = 50;
}
