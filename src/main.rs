//! Ice Breaker headless runner
//!
//! Plays the game with a simple autopilot and logs what happens. Rendering,
//! audio and real input belong to a front end; this drives the core alone.
//!
//! Usage: ice-breaker [--seed N] [--frames N] [--tuning PATH] [--scores PATH]

use std::path::PathBuf;

use clap::Parser;
use ice_breaker::HighScore;
use ice_breaker::Tuning;
use ice_breaker::sim::{GameEvent, GameState, Mode, TickInput, tick};

/// Nominal display refresh (ms per frame) for the cheat clock
const FRAME_MS: u64 = 16;

#[derive(Parser, Debug)]
#[command(name = "ice-breaker")]
#[command(about = "Play Ice Breaker headless with an autopilot paddle")]
struct Args {
    /// RNG seed for the run
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Frames to simulate (default is five minutes at 60 fps)
    #[arg(long, default_value_t = 18_000)]
    frames: u64,
    /// JSON file overriding gameplay tuning
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// High score file
    #[arg(long, default_value = "ice_breaker_highscore.json")]
    scores: PathBuf,
}

/// Chase the lowest descending ball; confirm whenever the game waits for it
fn autopilot(state: &GameState, frame: u64) -> TickInput {
    let mut input = TickInput {
        now_ms: frame * FRAME_MS,
        ..Default::default()
    };

    if state.mode != Mode::Running {
        // Give the paddle a moment before serving or dismissing overlays
        input.confirm = frame.is_multiple_of(30);
        return input;
    }

    let target = state
        .balls
        .iter()
        .filter(|b| b.vel.y > 0.0)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|b| b.pos.x)
        .or_else(|| state.powerups.first().map(|p| p.pos.x));

    if let Some(x) = target {
        let center = state.paddle.center_x();
        let dead_zone = state.paddle.width / 6.0;
        input.move_left = x < center - dead_zone;
        input.move_right = x > center + dead_zone;
    }
    input
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Ice Breaker (headless) starting...");

    let args = Args::parse();
    let tuning = args.tuning.as_deref().map(Tuning::load).unwrap_or_default();
    let mut high = HighScore::load(&args.scores);
    let mut state = GameState::new(tuning, args.seed, high.score);

    let mut dirty = false;
    let mut wins = 0u32;

    for frame in 0..args.frames {
        let input = autopilot(&state, frame);
        for event in tick(&mut state, &input) {
            match event {
                GameEvent::NewHighScore(score) => dirty |= high.record(score),
                GameEvent::Win => wins += 1,
                GameEvent::WallHit | GameEvent::PaddleHit | GameEvent::BrickHit => {
                    log::trace!("{:?}", event)
                }
                other => log::debug!("frame {}: {:?}", frame, other),
            }
        }
    }

    let snap = state.snapshot();
    log::info!(
        "Stopped after {} frames: level {}, score {}, high {}, wins {}",
        args.frames,
        snap.level,
        snap.score,
        snap.high_score,
        wins
    );

    if dirty {
        if let Err(e) = high.save(&args.scores) {
            log::warn!("Could not save high score: {}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The core is a library on the web; a front end drives `tick` itself
}
