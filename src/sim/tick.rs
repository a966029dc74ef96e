//! Per-frame simulation tick
//!
//! Consumes one frame of input, advances the state machine, and runs the
//! physics passes in a fixed order: balls, paddle, power-ups, bricks.

use super::balls;
use super::input::TickInput;
use super::powerups;
use super::state::{GameEvent, GameState, Mode};

/// Advance the game by one frame, returning the events it produced
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.frame += 1;

    if input.confirm {
        handle_confirm(state);
    }

    if input.cheat {
        let fired = state.cheat.pulse(
            input.now_ms,
            state.tuning.cheat_pulses,
            state.tuning.cheat_window_ms,
        );
        if fired && !state.mode.is_overlay() {
            state.force_complete_level(&mut events);
        }
    }

    match state.mode {
        Mode::Idle => {
            steer_paddle(state, input);
            for ball in &mut state.balls {
                ball.rest_on(&state.paddle);
            }
        }
        Mode::Running => run_frame(state, input, &mut events),
        Mode::GameOver | Mode::Win | Mode::LevelComplete { .. } => {}
    }

    events
}

/// Confirm pulse: launch from Idle, or leave an overlay
fn handle_confirm(state: &mut GameState) {
    match state.mode {
        Mode::Idle => state.launch(),
        Mode::GameOver | Mode::Win => state.reset_full(),
        Mode::LevelComplete { .. } => state.advance_level(),
        Mode::Running => {}
    }
}

/// Move the paddle and, from the follow level on, drag the grid with it
fn steer_paddle(state: &mut GameState, input: &TickInput) {
    let speed = state.progress.paddle_speed(&state.tuning);
    let dx = state.paddle.steer(
        input.move_left,
        input.move_right,
        speed,
        state.tuning.play_width,
    );

    if state.progress.level >= state.tuning.grid_follow_level {
        state.grid.follow_paddle(dx, state.tuning.play_width);
    }
}

fn run_frame(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    balls::integrate(&mut state.balls, &state.paddle, &state.tuning, events);
    if state.balls.is_empty() {
        state.game_over(events);
        return;
    }

    steer_paddle(state, input);

    let collected = powerups::update(
        &mut state.powerups,
        &state.paddle.rect(),
        state.tuning.powerup_size,
        state.tuning.play_height,
    );
    for kind in collected {
        state.apply_power_up(kind, events);
    }
    if state.mode != Mode::Running {
        return;
    }

    state.collide_bricks(events);
}
