//! Game state and core simulation types
//!
//! `GameState` owns everything the frame loop mutates. Components in the
//! sibling modules receive slices of it; the methods here glue their results
//! back together (scoring, power-up effects, level transitions).

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::balls::{self, Ball};
use super::grid::{self, BrickGrid, CollisionOutcome};
use super::input::CheatCombo;
use super::paddle::Paddle;
use super::powerups::{PowerUp, PowerUpKind};
use crate::ball_radius_for_tier;
use crate::tuning::Tuning;

/// Top-level game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    /// Balls resting on the paddle, waiting for launch
    Idle,
    /// Full simulation active
    Running,
    /// All balls lost; confirm restarts the run
    GameOver,
    /// Final level cleared; confirm restarts the run
    Win,
    /// A level below the last was cleared; confirm starts the next one
    LevelComplete { level: u32 },
}

impl Mode {
    /// Simulation frozen, waiting for confirm
    pub fn is_overlay(&self) -> bool {
        matches!(self, Mode::GameOver | Mode::Win | Mode::LevelComplete { .. })
    }
}

/// Events for external collaborators (audio cues, high-score storage)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    WallHit,
    PaddleHit,
    BrickHit,
    BuffPickup(PowerUpKind),
    LevelComplete(u32),
    GameOver,
    Win,
    NewHighScore(u64),
}

/// Score and run progression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    pub score: u64,
    pub high_score: u64,
    /// 1-based
    pub level: u32,
    /// Number of big-ball pickups applied, 0..=max tier
    pub ball_tier: u32,
    /// 1, or the max multiplier once big-ball maxes out
    pub multiplier: u32,
    /// Speed pickup collected this run
    pub paddle_boost: bool,
}

impl Progress {
    pub fn new(high_score: u64) -> Self {
        Self {
            score: 0,
            high_score,
            level: 1,
            ball_tier: 0,
            multiplier: 1,
            paddle_boost: false,
        }
    }

    /// Add points; returns the new high score if this award set one
    pub fn award(&mut self, points: u64) -> Option<u64> {
        self.score += points;
        if self.score > self.high_score {
            self.high_score = self.score;
            return Some(self.high_score);
        }
        None
    }

    pub fn ball_radius(&self, tuning: &Tuning) -> f32 {
        ball_radius_for_tier(tuning.ball_radius, tuning.ball_growth_per_tier, self.ball_tier)
    }

    pub fn paddle_speed(&self, tuning: &Tuning) -> f32 {
        if self.paddle_boost {
            tuning.paddle_speed * tuning.speed_buff_multiplier
        } else {
            tuning.paddle_speed
        }
    }

    /// Points for one destroyed brick at the current multiplier
    pub fn brick_points(&self, tuning: &Tuning) -> u64 {
        tuning.brick_points * self.multiplier as u64
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub mode: Mode,
    pub progress: Progress,
    pub paddle: Paddle,
    pub balls: Vec<Ball>,
    pub grid: BrickGrid,
    pub powerups: Vec<PowerUp>,
    pub cheat: CheatCombo,
    /// Frames simulated since startup
    pub frame: u64,
}

impl GameState {
    /// Fresh run at level 1, Idle, with a known high score
    pub fn new(tuning: Tuning, seed: u64, high_score: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let grid = BrickGrid::new(&tuning, 1, &mut rng);
        let paddle = Paddle::new(&tuning);

        let mut state = Self {
            tuning,
            seed,
            rng,
            mode: Mode::Idle,
            progress: Progress::new(high_score),
            paddle,
            balls: Vec::new(),
            grid,
            powerups: Vec::new(),
            cheat: CheatCombo::default(),
            frame: 0,
        };
        state.serve();
        state
    }

    /// Center the paddle and put one ball on it, Idle
    fn serve(&mut self) {
        self.paddle = Paddle::new(&self.tuning);

        let radius = self.progress.ball_radius(&self.tuning);
        let speed = self.tuning.launch_speed(self.progress.level);
        self.balls.clear();
        self.balls
            .push(balls::serve_ball(&self.paddle, radius, speed, &mut self.rng));

        self.mode = Mode::Idle;
    }

    /// Start over from level 1 (keeps only the high score)
    pub fn reset_full(&mut self) {
        log::info!("Full reset (score was {})", self.progress.score);
        self.progress = Progress::new(self.progress.high_score);
        self.grid = BrickGrid::new(&self.tuning, 1, &mut self.rng);
        self.powerups.clear();
        self.cheat.reset();
        self.serve();
    }

    /// Move on to the next level; score, tier, multiplier and paddle boost carry over
    pub fn advance_level(&mut self) {
        debug_assert!(self.progress.level < self.tuning.max_level, "advance past the last level");
        self.progress.level += 1;
        log::info!("Starting level {}", self.progress.level);

        self.grid = BrickGrid::new(&self.tuning, self.progress.level, &mut self.rng);
        self.powerups.clear();
        self.serve();
    }

    /// Launch the resting balls
    pub fn launch(&mut self) {
        debug_assert_eq!(self.mode, Mode::Idle);
        log::info!("Launch (level {})", self.progress.level);
        self.mode = Mode::Running;
    }

    /// Credit points, reporting a new high score
    pub fn award(&mut self, points: u64, events: &mut Vec<GameEvent>) {
        if let Some(high) = self.progress.award(points) {
            events.push(GameEvent::NewHighScore(high));
        }
    }

    /// Enter the overlay for a cleared level (win on the last one)
    pub fn complete_level(&mut self, events: &mut Vec<GameEvent>) {
        debug_assert!(!self.mode.is_overlay(), "level completed from an overlay");
        let level = self.progress.level;

        if level >= self.tuning.max_level {
            log::info!("Final level {} cleared, score {}", level, self.progress.score);
            self.mode = Mode::Win;
            events.push(GameEvent::Win);
        } else {
            log::info!("Level {} complete, score {}", level, self.progress.score);
            self.mode = Mode::LevelComplete { level };
            events.push(GameEvent::LevelComplete(level));
        }
    }

    /// Enter the game-over overlay
    pub fn game_over(&mut self, events: &mut Vec<GameEvent>) {
        debug_assert_eq!(self.mode, Mode::Running);
        log::info!("Game over at level {}, score {}", self.progress.level, self.progress.score);
        self.mode = Mode::GameOver;
        events.push(GameEvent::GameOver);
    }

    /// Skip-level cheat: wipe the grid and complete the level, no score
    pub fn force_complete_level(&mut self, events: &mut Vec<GameEvent>) {
        log::info!("Cheat: level {} skipped", self.progress.level);
        self.grid.force_clear();
        self.complete_level(events);
    }

    /// One brick collision pass; scores, spawns and may complete the level
    pub fn collide_bricks(&mut self, events: &mut Vec<GameEvent>) -> CollisionOutcome {
        let points = self.progress.brick_points(&self.tuning);
        let outcome = grid::resolve_collisions(&mut self.grid, &mut self.balls, points, events);

        if outcome.score_delta > 0 {
            self.award(outcome.score_delta, events);
        }
        if let Some((kind, pos)) = outcome.released {
            log::debug!("{:?} power-up released at ({}, {})", kind, pos.x, pos.y);
            self.powerups
                .push(PowerUp::new(kind, pos, self.tuning.powerup_fall_speed));
        }
        if outcome.level_cleared {
            self.complete_level(events);
        }
        outcome
    }

    /// Apply a collected power-up
    pub fn apply_power_up(&mut self, kind: PowerUpKind, events: &mut Vec<GameEvent>) {
        log::debug!("{:?} power-up collected", kind);
        events.push(GameEvent::BuffPickup(kind));

        match kind {
            PowerUpKind::Multi => {
                balls::split(
                    &mut self.balls,
                    self.tuning.max_balls,
                    self.tuning.split_jitter,
                    &mut self.rng,
                );
            }
            PowerUpKind::Big => {
                if self.progress.ball_tier < self.tuning.max_ball_tier {
                    self.progress.ball_tier += 1;
                    let radius = self.progress.ball_radius(&self.tuning);
                    balls::resize(&mut self.balls, radius);
                } else if self.progress.multiplier < self.tuning.max_score_multiplier {
                    self.progress.multiplier = self.tuning.max_score_multiplier;
                    log::info!("Score multiplier now x{}", self.progress.multiplier);
                }
            }
            PowerUpKind::Clear => {
                let destroyed = self.grid.clear_all() as u64;
                if destroyed > 0 {
                    self.award(destroyed * self.progress.brick_points(&self.tuning), events);
                }
                if !self.mode.is_overlay() {
                    self.complete_level(events);
                }
            }
            PowerUpKind::Speed => {
                self.progress.paddle_boost = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(Tuning::default(), 12345, 0)
    }

    #[test]
    fn test_new_state_is_idle_level_one() {
        let state = state();
        assert_eq!(state.mode, Mode::Idle);
        assert_eq!(state.progress.level, 1);
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.grid.remaining(), 28);
        assert!(state.powerups.is_empty());
    }

    #[test]
    fn test_award_reports_new_high_score() {
        let mut state = GameState::new(Tuning::default(), 1, 15);
        let mut events = Vec::new();

        state.award(10, &mut events);
        assert!(events.is_empty());

        state.award(10, &mut events);
        assert_eq!(events, vec![GameEvent::NewHighScore(20)]);
        assert_eq!(state.progress.high_score, 20);
    }

    #[test]
    fn test_big_grows_then_doubles_score() {
        let mut state = state();
        let mut events = Vec::new();

        for tier in 1..=4 {
            state.apply_power_up(PowerUpKind::Big, &mut events);
            assert_eq!(state.progress.ball_tier, tier);
            assert_eq!(state.progress.multiplier, 1);
        }
        let radius = state.balls[0].radius;
        assert!((radius - 17.6).abs() < 1e-4);

        state.apply_power_up(PowerUpKind::Big, &mut events);
        assert_eq!(state.progress.ball_tier, 4);
        assert_eq!(state.progress.multiplier, 2);
        assert_eq!(state.balls[0].radius, radius);

        state.apply_power_up(PowerUpKind::Big, &mut events);
        assert_eq!(state.progress.multiplier, 2);
        assert_eq!(state.progress.brick_points(&state.tuning), 20);
    }

    #[test]
    fn test_speed_boost_does_not_stack() {
        let mut state = state();
        let mut events = Vec::new();
        state.apply_power_up(PowerUpKind::Speed, &mut events);
        state.apply_power_up(PowerUpKind::Speed, &mut events);
        assert!((state.progress.paddle_speed(&state.tuning) - 8.5).abs() < 1e-5);
    }

    #[test]
    fn test_multi_never_exceeds_cap() {
        let mut state = state();
        let mut events = Vec::new();
        for _ in 0..5 {
            state.apply_power_up(PowerUpKind::Multi, &mut events);
            assert!(state.balls.len() <= 4);
        }
        assert_eq!(state.balls.len(), 4);
        assert_eq!(events.len(), 5);
    }

    #[test]
    fn test_multi_with_no_balls_is_noop() {
        let mut state = state();
        state.balls.clear();
        state.apply_power_up(PowerUpKind::Multi, &mut Vec::new());
        assert!(state.balls.is_empty());
    }

    #[test]
    fn test_clear_scores_remaining_and_completes() {
        let mut state = state();
        state.mode = Mode::Running;
        let mut events = Vec::new();

        state.apply_power_up(PowerUpKind::Clear, &mut events);

        assert_eq!(state.progress.score, 280);
        assert_eq!(state.grid.remaining(), 0);
        assert_eq!(state.mode, Mode::LevelComplete { level: 1 });
        assert_eq!(
            events,
            vec![
                GameEvent::BuffPickup(PowerUpKind::Clear),
                GameEvent::NewHighScore(280),
                GameEvent::LevelComplete(1),
            ]
        );
    }

    #[test]
    fn test_advance_keeps_run_progress() {
        let mut state = state();
        let mut events = Vec::new();
        state.mode = Mode::Running;
        state.apply_power_up(PowerUpKind::Big, &mut events);
        state.apply_power_up(PowerUpKind::Speed, &mut events);
        state.award(120, &mut events);
        state.powerups.push(PowerUp::new(PowerUpKind::Multi, glam::Vec2::new(10.0, 10.0), 2.5));
        state.complete_level(&mut events);

        state.advance_level();

        assert_eq!(state.mode, Mode::Idle);
        assert_eq!(state.progress.level, 2);
        assert_eq!(state.progress.score, 120);
        assert_eq!(state.progress.ball_tier, 1);
        assert!(state.progress.paddle_boost);
        assert_eq!(state.grid.rows, 5);
        assert!(state.powerups.is_empty());
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.balls[0].vel.y, -3.5);
        assert!((state.balls[0].radius - 10.4).abs() < 1e-4);
    }

    #[test]
    fn test_last_level_clear_wins() {
        let mut state = state();
        state.progress.level = 5;
        state.mode = Mode::Running;
        let mut events = Vec::new();
        state.complete_level(&mut events);
        assert_eq!(state.mode, Mode::Win);
        assert_eq!(events, vec![GameEvent::Win]);
    }
}
