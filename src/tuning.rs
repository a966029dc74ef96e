//! Game balance tuning
//!
//! Every number the simulation needs that a designer might want to tweak.
//! Loaded from JSON; any missing field falls back to the built-in default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Data-driven balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play area ===
    pub play_width: f32,
    pub play_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_bottom_margin: f32,
    pub paddle_speed: f32,
    pub speed_buff_multiplier: f32,
    /// Radians from vertical
    pub max_bounce_angle: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_growth_per_tier: f32,
    pub max_ball_tier: u32,
    pub max_balls: usize,
    pub ball_base_speed: f32,
    pub ball_speed_per_level: f32,
    pub split_jitter: f32,

    // === Bricks ===
    pub brick_columns: u32,
    pub brick_base_rows: u32,
    pub brick_max_rows: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_points: u64,
    pub max_score_multiplier: u32,

    // === Power-ups ===
    pub powerup_size: f32,
    pub powerup_fall_speed: f32,

    // === Progression ===
    pub max_level: u32,
    pub grid_follow_level: u32,

    // === Debug ===
    pub cheat_pulses: u32,
    pub cheat_window_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            play_width: PLAY_WIDTH,
            play_height: PLAY_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_margin: PADDLE_BOTTOM_MARGIN,
            paddle_speed: PADDLE_SPEED,
            speed_buff_multiplier: SPEED_BUFF_MULTIPLIER,
            max_bounce_angle: MAX_BOUNCE_ANGLE,

            ball_radius: BALL_RADIUS,
            ball_growth_per_tier: BALL_GROWTH_PER_TIER,
            max_ball_tier: MAX_BALL_TIER,
            max_balls: MAX_BALLS,
            ball_base_speed: BALL_BASE_SPEED,
            ball_speed_per_level: BALL_SPEED_PER_LEVEL,
            split_jitter: SPLIT_JITTER,

            brick_columns: BRICK_COLUMNS,
            brick_base_rows: BRICK_BASE_ROWS,
            brick_max_rows: BRICK_MAX_ROWS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_points: BRICK_POINTS,
            max_score_multiplier: MAX_SCORE_MULTIPLIER,

            powerup_size: POWERUP_SIZE,
            powerup_fall_speed: POWERUP_FALL_SPEED,

            max_level: MAX_LEVEL,
            grid_follow_level: GRID_FOLLOW_LEVEL,

            cheat_pulses: CHEAT_PULSES,
            cheat_window_ms: CHEAT_WINDOW_MS,
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read tuning {}: {}, using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Paddle top edge (constant for the whole run)
    pub fn paddle_y(&self) -> f32 {
        self.play_height - self.paddle_height - self.paddle_bottom_margin
    }

    /// Per-axis ball launch speed for a level
    pub fn launch_speed(&self, level: u32) -> f32 {
        self.ball_base_speed + level.saturating_sub(1) as f32 * self.ball_speed_per_level
    }
}
