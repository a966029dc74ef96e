//! Ice Breaker - a multi-ball brick breaker
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (physics, collisions, power-ups, game state)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Best-effort persisted high score

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions
    pub const PLAY_WIDTH: f32 = 480.0;
    pub const PLAY_HEIGHT: f32 = 320.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Gap between paddle bottom and play area bottom
    pub const PADDLE_BOTTOM_MARGIN: f32 = 5.0;
    /// Pixels per frame
    pub const PADDLE_SPEED: f32 = 5.0;
    /// Paddle speed after a speed pickup (not stackable)
    pub const SPEED_BUFF_MULTIPLIER: f32 = 1.7;
    /// Max deflection from vertical on a paddle bounce (75 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = 75.0 * std::f32::consts::PI / 180.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Radius growth per big-ball tier (+30%)
    pub const BALL_GROWTH_PER_TIER: f32 = 0.3;
    pub const MAX_BALL_TIER: u32 = 4;
    pub const MAX_BALLS: usize = 4;
    /// Per-axis launch speed at level 1
    pub const BALL_BASE_SPEED: f32 = 3.0;
    /// Extra per-axis launch speed for each level past the first
    pub const BALL_SPEED_PER_LEVEL: f32 = 0.5;
    /// Used when a zero-velocity ball hits the paddle
    pub const BOUNCE_FALLBACK_SPEED: f32 = 4.0;
    /// Used when multi-ball clones a zero-velocity ball
    pub const SPLIT_FALLBACK_SPEED: f32 = 3.0;
    /// Half-width of the uniform direction jitter for split balls (radians)
    pub const SPLIT_JITTER: f32 = 0.2;

    /// Brick grid layout (level-independent)
    pub const BRICK_COLUMNS: u32 = 7;
    pub const BRICK_BASE_ROWS: u32 = 4;
    pub const BRICK_MAX_ROWS: u32 = 8;
    pub const BRICK_WIDTH: f32 = 50.0;
    pub const BRICK_HEIGHT: f32 = 15.0;
    pub const BRICK_PADDING: f32 = 5.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    /// Points for a destroyed brick before the multiplier
    pub const BRICK_POINTS: u64 = 10;
    pub const MAX_SCORE_MULTIPLIER: u32 = 2;

    /// Falling power-up box edge and speed
    pub const POWERUP_SIZE: f32 = 14.0;
    pub const POWERUP_FALL_SPEED: f32 = 2.5;

    /// Progression
    pub const MAX_LEVEL: u32 = 5;
    /// First level where the brick grid mirrors paddle movement
    pub const GRID_FOLLOW_LEVEL: u32 = 3;

    /// Skip-level cheat: pulses needed, and max gap between consecutive pulses
    pub const CHEAT_PULSES: u32 = 3;
    pub const CHEAT_WINDOW_MS: u64 = 700;
}

/// Ball radius for a big-ball tier
#[inline]
pub fn ball_radius_for_tier(base_radius: f32, growth: f32, tier: u32) -> f32 {
    base_radius * (1.0 + growth * tier as f32)
}

/// Rows in the brick grid for a level (one extra row per level, capped)
#[inline]
pub fn rows_for_level(level: u32, base_rows: u32, max_rows: u32) -> u32 {
    (base_rows + level.saturating_sub(1)).min(max_rows)
}

#[cfg(test)]
mod tests {
    use super::consts::*;
    use super::*;

    #[test]
    fn test_ball_radius_grows_linearly() {
        assert_eq!(ball_radius_for_tier(BALL_RADIUS, BALL_GROWTH_PER_TIER, 0), 8.0);
        assert!((ball_radius_for_tier(BALL_RADIUS, BALL_GROWTH_PER_TIER, 4) - 17.6).abs() < 1e-4);
    }

    #[test]
    fn test_rows_for_level() {
        assert_eq!(rows_for_level(1, BRICK_BASE_ROWS, BRICK_MAX_ROWS), 4);
        assert_eq!(rows_for_level(3, BRICK_BASE_ROWS, BRICK_MAX_ROWS), 6);
        assert_eq!(rows_for_level(5, BRICK_BASE_ROWS, BRICK_MAX_ROWS), 8);
        assert_eq!(rows_for_level(9, BRICK_BASE_ROWS, BRICK_MAX_ROWS), 8);
    }
}
