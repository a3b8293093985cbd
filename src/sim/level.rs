//! Difficulty presets
//!
//! One immutable [`LevelConfig`] per round, chosen by the level-select UI
//! before the round starts. The sim never mutates it.

use serde::{Deserialize, Serialize};

/// Named difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// Tuning preset for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Stones to restack after the pile collapses
    pub stone_count: u32,
    /// Throws allowed before the round is lost
    pub attempt_budget: u32,
    /// Opponent pursuit speed (units/s)
    pub opponent_speed: f32,
    /// Player movement speed in the rebuild phase (units/s)
    pub player_speed: f32,
}

impl Level {
    /// The preset for this level
    pub fn config(self) -> LevelConfig {
        match self {
            Level::Beginner => LevelConfig {
                stone_count: 5,
                attempt_budget: 3,
                opponent_speed: 110.0,
                player_speed: 180.0,
            },
            Level::Intermediate => LevelConfig {
                stone_count: 6,
                attempt_budget: 3,
                opponent_speed: 140.0,
                player_speed: 180.0,
            },
            Level::Advanced => LevelConfig {
                stone_count: 7,
                attempt_budget: 2,
                opponent_speed: 170.0,
                player_speed: 180.0,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}
