//! Game state and core simulation types
//!
//! Everything a round owns lives here: entities, counters, pile, phase.
//! All of it is replaced wholesale at round reset, never patched up.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::{Level, LevelConfig};
use crate::consts::*;

/// Current phase of gameplay
///
/// Exactly one phase is active at any instant; qualitative progress only
/// happens through phase transitions (see [`super::phase`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the start command
    Intro,
    /// Between throws, waiting for a drag to begin
    Aim,
    /// Pointer drag in progress, setting throw power
    Dragging,
    /// Projectile in motion toward the pile
    Flight,
    /// Pile collapsed; restack stones while evading the opponent
    Rebuild,
    /// Round won (stack completed)
    Win,
    /// Round lost (attempts exhausted or tagged)
    Lose,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Win | Phase::Lose)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Intro => "intro",
            Phase::Aim => "aim",
            Phase::Dragging => "dragging",
            Phase::Flight => "flight",
            Phase::Rebuild => "rebuild",
            Phase::Win => "win",
            Phase::Lose => "lose",
        }
    }
}

/// Position and size of a circular entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleEntity {
    pub pos: Vec2,
    pub radius: f32,
}

/// A moving character (player or opponent); speed comes from the level preset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Runner {
    pub body: CircleEntity,
    /// Movement speed (units/s)
    pub speed: f32,
}

/// The thrown stone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub body: CircleEntity,
    pub vel: Vec2,
}

/// The stone pile at field center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PileState {
    pub center: Vec2,
    pub radius: f32,
    /// One-way false -> true per round
    pub collapsed: bool,
}

/// Per-round score and attempt bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundMetrics {
    pub score: u32,
    /// Remaining throws; decremented exactly once per failed throw
    pub attempts_left: u32,
    /// Stones restacked so far; never exceeds `stones_total`
    pub stones_placed: u32,
    pub stones_total: u32,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Round seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only randomness source (opponent edge spawns)
    pub rng: Pcg32,
    pub level: Level,
    pub config: LevelConfig,
    pub phase: Phase,
    pub player: Runner,
    pub opponent: Runner,
    pub projectile: Projectile,
    pub pile: PileState,
    pub metrics: RoundMetrics,
    /// Player position captured at drag-begin
    pub drag_anchor: Option<Vec2>,
    /// Latest drag vector while in `Dragging`
    pub drag_vector: Vec2,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh game in `Intro` for the given seed and level
    pub fn new(seed: u64, level: Level) -> Self {
        let config = level.config();
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            level,
            config,
            phase: Phase::Intro,
            player: Runner {
                body: CircleEntity { pos: PLAYER_SPAWN, radius: PLAYER_RADIUS },
                speed: config.player_speed,
            },
            opponent: Runner {
                body: CircleEntity { pos: Vec2::ZERO, radius: OPPONENT_RADIUS },
                speed: config.opponent_speed,
            },
            projectile: Projectile {
                body: CircleEntity { pos: PLAYER_SPAWN, radius: PROJECTILE_RADIUS },
                vel: Vec2::ZERO,
            },
            pile: PileState { center: PILE_CENTER, radius: PILE_RADIUS, collapsed: false },
            metrics: RoundMetrics {
                score: 0,
                attempts_left: config.attempt_budget,
                stones_placed: 0,
                stones_total: config.stone_count,
            },
            drag_anchor: None,
            drag_vector: Vec2::ZERO,
            time_ticks: 0,
        };
        state.opponent.body.pos = random_edge_point(&mut state.rng);
        state
    }

    /// Reinitialize everything for a new round and enter `Aim`.
    ///
    /// Valid from any phase at any time; whatever the interrupted tick had
    /// computed is simply discarded with the old state.
    pub fn reset_round(&mut self, keep_score: bool) {
        let score = if keep_score { self.metrics.score } else { 0 };
        self.metrics = RoundMetrics {
            score,
            attempts_left: self.config.attempt_budget,
            stones_placed: 0,
            stones_total: self.config.stone_count,
        };
        self.player.body.pos = PLAYER_SPAWN;
        self.opponent.body.pos = random_edge_point(&mut self.rng);
        self.projectile.body.pos = PLAYER_SPAWN;
        self.projectile.vel = Vec2::ZERO;
        self.pile.collapsed = false;
        self.drag_anchor = None;
        self.drag_vector = Vec2::ZERO;
        self.phase = Phase::Aim;
    }

    /// Start a fresh scoring run: `resetRound(false)` plus `Intro` -> `Aim`
    pub fn start_game(&mut self) {
        self.reset_round(false);
    }

    /// Move the opponent to a fresh random edge point (on pile collapse)
    pub fn respawn_opponent(&mut self) {
        self.opponent.body.pos = random_edge_point(&mut self.rng);
    }

    /// Read-only frame state for the render collaborator
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            phase: self.phase,
            player_pos: self.player.body.pos,
            opponent_pos: self.opponent.body.pos,
            projectile_pos: self.projectile.body.pos,
            projectile_active: self.phase == Phase::Flight,
            pile_collapsed: self.pile.collapsed,
            score: self.metrics.score,
            attempts_left: self.metrics.attempts_left,
            stones_placed: self.metrics.stones_placed,
            stones_total: self.metrics.stones_total,
        }
    }
}

/// Per-tick read-only state published outward for rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub phase: Phase,
    pub player_pos: Vec2,
    pub opponent_pos: Vec2,
    pub projectile_pos: Vec2,
    pub projectile_active: bool,
    pub pile_collapsed: bool,
    pub score: u32,
    pub attempts_left: u32,
    pub stones_placed: u32,
    pub stones_total: u32,
}

/// Uniformly distributed point on the field border
fn random_edge_point(rng: &mut Pcg32) -> Vec2 {
    let t: f32 = rng.random_range(0.0..1.0);
    match rng.random_range(0..4u8) {
        0 => Vec2::new(t * FIELD_WIDTH, 0.0),
        1 => Vec2::new(t * FIELD_WIDTH, FIELD_HEIGHT),
        2 => Vec2::new(0.0, t * FIELD_HEIGHT),
        _ => Vec2::new(FIELD_WIDTH, t * FIELD_HEIGHT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_edge(p: Vec2) -> bool {
        p.x == 0.0 || p.x == FIELD_WIDTH || p.y == 0.0 || p.y == FIELD_HEIGHT
    }

    #[test]
    fn test_new_state_invariants() {
        let state = GameState::new(7, Level::Beginner);
        assert_eq!(state.phase, Phase::Intro);
        assert_eq!(state.metrics.attempts_left, 3);
        assert_eq!(state.metrics.stones_total, 5);
        assert_eq!(state.metrics.stones_placed, 0);
        assert_eq!(state.metrics.score, 0);
        assert!(!state.pile.collapsed);
        assert_eq!(state.player.body.pos, PLAYER_SPAWN);
        assert_eq!(state.projectile.body.pos, PLAYER_SPAWN);
        assert!(on_edge(state.opponent.body.pos));
    }

    #[test]
    fn test_same_seed_same_spawn() {
        let a = GameState::new(42, Level::Advanced);
        let b = GameState::new(42, Level::Advanced);
        assert_eq!(a.opponent.body.pos, b.opponent.body.pos);
    }

    #[test]
    fn test_reset_round_idempotent_modulo_spawn() {
        let mut state = GameState::new(9, Level::Intermediate);
        state.metrics.score = 60;
        state.phase = Phase::Win;

        state.reset_round(true);
        let first = state.clone();
        state.reset_round(true);

        // Identical both times, except the random opponent edge point
        assert_eq!(state.phase, first.phase);
        assert_eq!(state.metrics, first.metrics);
        assert_eq!(state.player, first.player);
        assert_eq!(state.projectile, first.projectile);
        assert_eq!(state.pile, first.pile);
        assert!(on_edge(state.opponent.body.pos));
        assert!(on_edge(first.opponent.body.pos));
    }

    #[test]
    fn test_reset_round_score_handling() {
        let mut state = GameState::new(3, Level::Beginner);
        state.metrics.score = 60;

        state.reset_round(true);
        assert_eq!(state.metrics.score, 60);
        assert_eq!(state.phase, Phase::Aim);
        assert_eq!(state.metrics.attempts_left, 3);

        state.metrics.stones_placed = 2;
        state.pile.collapsed = true;
        state.reset_round(false);
        assert_eq!(state.metrics.score, 0);
        assert_eq!(state.metrics.stones_placed, 0);
        assert!(!state.pile.collapsed);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(5, Level::Beginner);
        state.start_game();
        let snap = state.snapshot();
        assert_eq!(snap.phase, Phase::Aim);
        assert!(!snap.projectile_active);
        assert_eq!(snap.player_pos, state.player.body.pos);
        assert_eq!(snap.attempts_left, 3);
        assert_eq!(snap.stones_total, 5);
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let state = GameState::new(11, Level::Advanced);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, state.phase);
        assert_eq!(back.opponent.body.pos, state.opponent.body.pos);
        assert_eq!(back.metrics, state.metrics);
    }
}
